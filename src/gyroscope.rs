//! Gyroscope types and configuration
//!
//! Provides the range and filter settings for the ITG-3200's 3-axis gyroscope,
//! the raw sample type, and the sample decoder.
//!
//! Setting types enumerate the codes the datasheet defines and carry any other
//! code in a `Reserved` variant. Reserved codes are forwarded to the hardware
//! unchanged; the driver never rejects them.

/// Decode a big-endian register pair as a two's-complement sample
///
/// `(0x7F, 0xFF)` is 32767, `(0x80, 0x00)` is -32768 and `(0xFF, 0xFF)` is -1.
/// No scaling is applied; the result is in raw LSB counts.
#[must_use]
pub const fn decode_sample(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

/// Gyroscope full-scale range (`FS_SEL`)
///
/// The datasheet only defines `0b11`; the power-on value `0b00` must be changed
/// for proper operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    /// ±2000°/s range
    Dps2000,
    /// Undefined code, forwarded as-is
    Reserved(u8),
}

impl FullScale {
    /// Get the maximum value in °/s, if the code is defined
    #[must_use]
    pub const fn max_value(self) -> Option<u16> {
        match self {
            Self::Dps2000 => Some(2000),
            Self::Reserved(_) => None,
        }
    }
}

impl From<u8> for FullScale {
    fn from(code: u8) -> Self {
        match code & 0b11 {
            0b11 => Self::Dps2000,
            other => Self::Reserved(other),
        }
    }
}

impl From<FullScale> for u8 {
    fn from(range: FullScale) -> Self {
        match range {
            FullScale::Dps2000 => 0b11,
            FullScale::Reserved(code) => code,
        }
    }
}

/// Digital low-pass filter configuration (`DLPF_CFG`)
///
/// | Code | Bandwidth | Internal sample rate |
/// |------|-----------|----------------------|
/// | 0    | 256 Hz    | 8 kHz                |
/// | 1    | 188 Hz    | 1 kHz                |
/// | 2    | 98 Hz     | 1 kHz                |
/// | 3    | 42 Hz     | 1 kHz                |
/// | 4    | 20 Hz     | 1 kHz                |
/// | 5    | 10 Hz     | 1 kHz                |
/// | 6    | 5 Hz      | 1 kHz                |
/// | 7    | reserved  | reserved             |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DlpfBandwidth {
    /// 256 Hz bandwidth, 8 kHz internal rate
    Hz256,
    /// 188 Hz bandwidth
    Hz188,
    /// 98 Hz bandwidth
    Hz98,
    /// 42 Hz bandwidth
    Hz42,
    /// 20 Hz bandwidth
    Hz20,
    /// 10 Hz bandwidth
    Hz10,
    /// 5 Hz bandwidth
    Hz5,
    /// Undefined code, forwarded as-is
    Reserved(u8),
}

impl DlpfBandwidth {
    /// Get the 3dB bandwidth in Hz
    #[must_use]
    pub const fn bandwidth_hz(self) -> Option<u16> {
        match self {
            Self::Hz256 => Some(256),
            Self::Hz188 => Some(188),
            Self::Hz98 => Some(98),
            Self::Hz42 => Some(42),
            Self::Hz20 => Some(20),
            Self::Hz10 => Some(10),
            Self::Hz5 => Some(5),
            Self::Reserved(_) => None,
        }
    }

    /// Get the internal sample rate the divider applies to, in Hz
    #[must_use]
    pub const fn internal_sample_rate_hz(self) -> Option<u32> {
        match self {
            Self::Hz256 => Some(8000),
            Self::Reserved(_) => None,
            _ => Some(1000),
        }
    }
}

impl From<u8> for DlpfBandwidth {
    fn from(code: u8) -> Self {
        match code & 0b111 {
            0 => Self::Hz256,
            1 => Self::Hz188,
            2 => Self::Hz98,
            3 => Self::Hz42,
            4 => Self::Hz20,
            5 => Self::Hz10,
            6 => Self::Hz5,
            other => Self::Reserved(other),
        }
    }
}

impl From<DlpfBandwidth> for u8 {
    fn from(bandwidth: DlpfBandwidth) -> Self {
        match bandwidth {
            DlpfBandwidth::Hz256 => 0,
            DlpfBandwidth::Hz188 => 1,
            DlpfBandwidth::Hz98 => 2,
            DlpfBandwidth::Hz42 => 3,
            DlpfBandwidth::Hz20 => 4,
            DlpfBandwidth::Hz10 => 5,
            DlpfBandwidth::Hz5 => 6,
            DlpfBandwidth::Reserved(code) => code,
        }
    }
}

/// Gyroscope configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Full-scale range
    pub full_scale: FullScale,
    /// Digital low-pass filter configuration
    pub dlpf: DlpfBandwidth,
    /// Sample rate divider (0-255)
    /// Sample rate = internal rate / (1 + `sample_rate_divider`)
    pub sample_rate_divider: u8,
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self {
            full_scale: FullScale::Dps2000,
            dlpf: DlpfBandwidth::Hz256,
            sample_rate_divider: 0,
        }
    }
}

impl GyroConfig {
    /// Calculate the effective sample rate in Hz
    ///
    /// Returns `None` when the filter code is reserved, since the internal
    /// rate is then undefined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_rate_hz(&self) -> Option<f32> {
        let internal = self.dlpf.internal_sample_rate_hz()?;
        Some(internal as f32 / (1.0 + f32::from(self.sample_rate_divider)))
    }
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

impl GyroData {
    /// Decode the six bytes `GYRO_XOUT_H..=GYRO_ZOUT_L`
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: decode_sample(bytes[0], bytes[1]),
            y: decode_sample(bytes[2], bytes[3]),
            z: decode_sample(bytes[4], bytes[5]),
        }
    }
}

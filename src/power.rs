//! Power management and clock selection
//!
//! `PWR_MGM` holds the reset strobe, sleep mode, per-axis standby and the
//! clock source. The power-on clock is the internal oscillator; one of the PLL
//! sources is recommended for stability, which is what
//! [`Itg3200Driver::init`](crate::Itg3200Driver::init) selects.

/// Clock source selection (`CLK_SEL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal oscillator (power-on default)
    Internal,
    /// PLL with X gyro reference
    PllXGyro,
    /// PLL with Y gyro reference
    PllYGyro,
    /// PLL with Z gyro reference
    PllZGyro,
    /// PLL with external 32.768 kHz reference
    PllExternal32k,
    /// PLL with external 19.2 MHz reference
    PllExternal19M,
    /// Undefined code (6 or 7), forwarded as-is
    Reserved(u8),
}

impl ClockSource {
    /// Whether the source is one of the PLL modes
    #[must_use]
    pub const fn is_pll(self) -> bool {
        !matches!(self, Self::Internal | Self::Reserved(_))
    }
}

impl From<u8> for ClockSource {
    fn from(code: u8) -> Self {
        match code & 0b111 {
            0 => Self::Internal,
            1 => Self::PllXGyro,
            2 => Self::PllYGyro,
            3 => Self::PllZGyro,
            4 => Self::PllExternal32k,
            5 => Self::PllExternal19M,
            other => Self::Reserved(other),
        }
    }
}

impl From<ClockSource> for u8 {
    fn from(source: ClockSource) -> Self {
        match source {
            ClockSource::Internal => 0,
            ClockSource::PllXGyro => 1,
            ClockSource::PllYGyro => 2,
            ClockSource::PllZGyro => 3,
            ClockSource::PllExternal32k => 4,
            ClockSource::PllExternal19M => 5,
            ClockSource::Reserved(code) => code,
        }
    }
}

/// Per-axis standby configuration
///
/// An axis in standby stops sampling; its output registers hold the last value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StandbyConfig {
    /// X gyro in standby
    pub x: bool,
    /// Y gyro in standby
    pub y: bool,
    /// Z gyro in standby
    pub z: bool,
}

impl StandbyConfig {
    /// All axes active
    pub const fn all_active() -> Self {
        Self {
            x: false,
            y: false,
            z: false,
        }
    }

    /// All axes in standby
    pub const fn all_standby() -> Self {
        Self {
            x: true,
            y: true,
            z: true,
        }
    }

    /// Check if every axis is sampling
    pub const fn is_fully_active(&self) -> bool {
        !self.x && !self.y && !self.z
    }
}

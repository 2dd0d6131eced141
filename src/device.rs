//! High-level driver API for the ITG-3200
//!
//! Every operation is a thin mapping onto [`RegisterAccess`] against the named
//! fields in [`crate::registers`]. The driver keeps no copy of device state;
//! each getter reads the hardware and each setter is a read-modify-write of
//! only the bits it owns.
//!
//! # Sample consistency
//!
//! [`read_rotation`](Itg3200Driver::read_rotation) fetches all three axes in
//! one 6-byte burst, so they come from the same conversion.
//! [`read_rotation_x`](Itg3200Driver::read_rotation_x) and friends each issue
//! their own 2-byte burst; values from separate calls may belong to different
//! conversions if the device updates in between.

use crate::access::RegisterAccess;
use crate::gyroscope::{DlpfBandwidth, FullScale, GyroConfig, GyroData, decode_sample};
use crate::interrupt::{
    InterruptClear, InterruptConfig, InterruptDrive, InterruptLatch, InterruptLevel,
    InterruptPinConfig, InterruptStatus,
};
use crate::power::{ClockSource, StandbyConfig};
use crate::registers::{self, Register};
use crate::{DEVICE_ID, Error};

#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Main driver for the ITG-3200
#[derive(Debug)]
pub struct Itg3200Driver<I> {
    access: RegisterAccess<I>,
}

impl<I> Itg3200Driver<I> {
    /// Create a new ITG-3200 driver instance
    ///
    /// No bus traffic happens here. Call [`init`](Self::init) before relying
    /// on readings, and [`test_connection`](Self::test_connection) to check
    /// the device identity.
    pub const fn new(interface: I) -> Self {
        Self {
            access: RegisterAccess::new(interface),
        }
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.access.release()
    }

    /// Get a mutable reference to the register accessor (for advanced usage)
    pub const fn access(&mut self) -> &mut RegisterAccess<I> {
        &mut self.access
    }
}

#[cfg(not(feature = "async"))]
impl<I> Itg3200Driver<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Bring the device out of its power-on defaults
    ///
    /// Sets the full-scale range to ±2000°/s (the only defined setting) and
    /// then selects the X gyro PLL as clock source. Each step is a
    /// read-modify-write, so other bits in `DLPF_FS` and `PWR_MGM` are kept.
    ///
    /// No delay is inserted. Readings taken within roughly 50 ms of this call
    /// may carry larger offsets while the PLL settles; wait before relying on
    /// them if that matters.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. If the first
    /// step fails the clock source is not touched.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut gyro = Itg3200Driver::new(I2cInterface::default(i2c));
    /// gyro.init()?;
    /// delay.delay_ms(50);
    /// let rotation = gyro.read_rotation()?;
    /// ```
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ITG-3200 init: FS_SEL=2000dps, CLK_SEL=PLL X gyro");

        self.set_full_scale(FullScale::Dps2000)?;
        self.set_clock_source(ClockSource::PllXGyro)
    }

    // ==================== IDENTITY ====================

    /// Read the 6-bit device ID from `WHO_AM_I`
    ///
    /// Should return 0x34 for a genuine ITG-3200.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_device_id(&mut self) -> Result<u8, Error<I::Error>> {
        self.access.read_field(registers::DEVID)
    }

    /// Overwrite the 6-bit device ID in `WHO_AM_I`
    ///
    /// Diagnostic only; `value` is masked to 6 bits.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_device_id(&mut self, value: u8) -> Result<(), Error<I::Error>> {
        self.access.write_field(registers::DEVID, value)
    }

    /// Check that the device answers with the expected ID
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn test_connection(&mut self) -> Result<bool, Error<I::Error>> {
        let id = self.read_device_id()?;

        #[cfg(feature = "defmt")]
        if id != DEVICE_ID {
            defmt::warn!("Unexpected device ID {=u8:#x}", id);
        }

        Ok(id == DEVICE_ID)
    }

    // ==================== SAMPLE RATE / FILTER / RANGE ====================

    /// Read the sample rate divider
    ///
    /// Sample rate = internal rate / (divider + 1), where the internal rate
    /// (1 kHz or 8 kHz) follows the DLPF setting.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_sample_rate_divider(&mut self) -> Result<u8, Error<I::Error>> {
        self.access.read_byte(Register::SmplrtDiv)
    }

    /// Set the sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.access.write_byte(Register::SmplrtDiv, divider)
    }

    /// Read the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_full_scale(&mut self) -> Result<FullScale, Error<I::Error>> {
        Ok(self.access.read_field(registers::FS_SEL)?.into())
    }

    /// Set the full-scale range
    ///
    /// Reserved codes are written as given.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_full_scale(&mut self, range: FullScale) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        if let FullScale::Reserved(code) = range {
            defmt::warn!("Writing reserved FS_SEL code {=u8}", code);
        }

        self.access.write_field(registers::FS_SEL, range.into())
    }

    /// Read the digital low-pass filter setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_dlpf_bandwidth(&mut self) -> Result<DlpfBandwidth, Error<I::Error>> {
        Ok(self.access.read_field(registers::DLPF_CFG)?.into())
    }

    /// Set the digital low-pass filter bandwidth
    ///
    /// This also selects the internal sample rate the divider applies to.
    /// Reserved codes are written as given.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_dlpf_bandwidth(&mut self, bandwidth: DlpfBandwidth) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        if let DlpfBandwidth::Reserved(code) = bandwidth {
            defmt::warn!("Writing reserved DLPF_CFG code {=u8}", code);
        }

        self.access.write_field(registers::DLPF_CFG, bandwidth.into())
    }

    /// Configure range, filter and sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Settings
    /// applied before the failing step stay applied.
    pub fn configure_gyroscope(&mut self, config: &GyroConfig) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Configuring gyroscope: {}", config);

        self.set_full_scale(config.full_scale)?;
        self.set_dlpf_bandwidth(config.dlpf)?;
        self.set_sample_rate_divider(config.sample_rate_divider)
    }

    /// Read back range, filter and sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyroscope_config(&mut self) -> Result<GyroConfig, Error<I::Error>> {
        let dlpf_fs = self.access.read_byte(Register::DlpfFs)?;
        let sample_rate_divider = self.read_sample_rate_divider()?;

        Ok(GyroConfig {
            full_scale: registers::FS_SEL.extract(dlpf_fs).into(),
            dlpf: registers::DLPF_CFG.extract(dlpf_fs).into(),
            sample_rate_divider,
        })
    }

    // ==================== INTERRUPTS ====================

    /// Read the interrupt pin logic level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_level(&mut self) -> Result<InterruptLevel, Error<I::Error>> {
        Ok(self.access.read_flag(registers::INTCFG_ACTL)?.into())
    }

    /// Set the interrupt pin logic level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_level(&mut self, level: InterruptLevel) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::INTCFG_ACTL, level.into())
    }

    /// Read the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_drive(&mut self) -> Result<InterruptDrive, Error<I::Error>> {
        Ok(self.access.read_flag(registers::INTCFG_OPEN)?.into())
    }

    /// Set the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_drive(&mut self, drive: InterruptDrive) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::INTCFG_OPEN, drive.into())
    }

    /// Read whether the interrupt pin pulses or latches
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_latch(&mut self) -> Result<InterruptLatch, Error<I::Error>> {
        Ok(self.access.read_flag(registers::INTCFG_LATCH_INT_EN)?.into())
    }

    /// Set whether the interrupt pin pulses or latches
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_latch(&mut self, latch: InterruptLatch) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_LATCH_INT_EN, latch.into())
    }

    /// Read how a latched interrupt is cleared
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_clear(&mut self) -> Result<InterruptClear, Error<I::Error>> {
        Ok(self
            .access
            .read_flag(registers::INTCFG_INT_ANYRD_2CLEAR)?
            .into())
    }

    /// Set how a latched interrupt is cleared
    ///
    /// With [`InterruptClear::AnyRead`] every later register read, including
    /// the ones other getters perform, clears the status flags.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_interrupt_clear(&mut self, clear: InterruptClear) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_INT_ANYRD_2CLEAR, clear.into())
    }

    /// Check if the device-ready interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_device_ready_interrupt_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTCFG_ITG_RDY_EN)
    }

    /// Enable/disable the device-ready interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_device_ready_interrupt_enable(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::INTCFG_ITG_RDY_EN, enable)
    }

    /// Check if the data-ready interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_data_ready_interrupt_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTCFG_RAW_RDY_EN)
    }

    /// Enable/disable the data-ready interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_data_ready_interrupt_enable(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::INTCFG_RAW_RDY_EN, enable)
    }

    /// Configure interrupt pin electrical properties
    ///
    /// Each setting is written by its own read-modify-write; the enable bits
    /// sharing `INT_CFG` are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupt_pin(
        &mut self,
        config: &InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.set_interrupt_level(config.level)?;
        self.set_interrupt_drive(config.drive)?;
        self.set_interrupt_latch(config.latch)?;
        self.set_interrupt_clear(config.clear)
    }

    /// Read interrupt pin electrical properties
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_pin_config(&mut self) -> Result<InterruptPinConfig, Error<I::Error>> {
        let int_cfg = self.access.read_byte(Register::IntCfg)?;

        Ok(InterruptPinConfig {
            level: registers::INTCFG_ACTL.is_set(int_cfg).into(),
            drive: registers::INTCFG_OPEN.is_set(int_cfg).into(),
            latch: registers::INTCFG_LATCH_INT_EN.is_set(int_cfg).into(),
            clear: registers::INTCFG_INT_ANYRD_2CLEAR.is_set(int_cfg).into(),
        })
    }

    /// Configure interrupt sources
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupts(&mut self, config: &InterruptConfig) -> Result<(), Error<I::Error>> {
        self.set_device_ready_interrupt_enable(config.device_ready)?;
        self.set_data_ready_interrupt_enable(config.data_ready)
    }

    /// Read which interrupt sources are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_config(&mut self) -> Result<InterruptConfig, Error<I::Error>> {
        let int_cfg = self.access.read_byte(Register::IntCfg)?;

        Ok(InterruptConfig {
            device_ready: registers::INTCFG_ITG_RDY_EN.is_set(int_cfg),
            data_ready: registers::INTCFG_RAW_RDY_EN.is_set(int_cfg),
        })
    }

    /// Check the device-ready (PLL locked) status flag
    ///
    /// Whether this read clears the flag depends on the latch clear mode; see
    /// [`crate::interrupt`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_device_ready(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTSTAT_ITG_RDY)
    }

    /// Check the data-ready status flag
    ///
    /// Whether this read clears the flag depends on the latch clear mode; see
    /// [`crate::interrupt`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTSTAT_RAW_DATA_RDY)
    }

    /// Read both interrupt status flags from a single `INT_STATUS` read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let status = self.access.read_byte(Register::IntStatus)?;

        Ok(InterruptStatus {
            device_ready: registers::INTSTAT_ITG_RDY.is_set(status),
            data_ready: registers::INTSTAT_RAW_DATA_RDY.is_set(status),
        })
    }

    // ==================== POWER MANAGEMENT ====================

    /// Trigger a device reset
    ///
    /// Sets `H_RESET`; the hardware clears it when the reset completes, so
    /// there is nothing to read back. All registers return to their power-on
    /// values.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ITG-3200 reset");

        self.access.write_flag(registers::PWR_H_RESET, true)
    }

    /// Check if sleep mode is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_sleeping(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_SLEEP)
    }

    /// Set sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_sleep(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_SLEEP, enable)
    }

    /// Check if the X gyro is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_standby_x(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_STBY_XG)
    }

    /// Put the X gyro in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_standby_x(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_STBY_XG, enable)
    }

    /// Check if the Y gyro is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_standby_y(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_STBY_YG)
    }

    /// Put the Y gyro in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_standby_y(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_STBY_YG, enable)
    }

    /// Check if the Z gyro is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_standby_z(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_STBY_ZG)
    }

    /// Put the Z gyro in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_standby_z(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_STBY_ZG, enable)
    }

    /// Apply a per-axis standby configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_standby(&mut self, config: &StandbyConfig) -> Result<(), Error<I::Error>> {
        self.set_standby_x(config.x)?;
        self.set_standby_y(config.y)?;
        self.set_standby_z(config.z)
    }

    /// Read the per-axis standby configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_standby(&mut self) -> Result<StandbyConfig, Error<I::Error>> {
        let pwr_mgm = self.access.read_byte(Register::PwrMgm)?;

        Ok(StandbyConfig {
            x: registers::PWR_STBY_XG.is_set(pwr_mgm),
            y: registers::PWR_STBY_YG.is_set(pwr_mgm),
            z: registers::PWR_STBY_ZG.is_set(pwr_mgm),
        })
    }

    /// Read the clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_clock_source(&mut self) -> Result<ClockSource, Error<I::Error>> {
        Ok(self.access.read_field(registers::PWR_CLK_SEL)?.into())
    }

    /// Set clock source
    ///
    /// Reserved codes are written as given.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        if let ClockSource::Reserved(code) = source {
            defmt::warn!("Writing reserved CLK_SEL code {=u8}", code);
        }

        self.access.write_field(registers::PWR_CLK_SEL, source.into())
    }

    // ==================== SENSOR DATA ====================

    /// Read temperature sensor
    ///
    /// Returns the raw signed 16-bit value from `TEMP_OUT_H`/`TEMP_OUT_L`,
    /// read in one burst.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::TempOutH)?;
        Ok(decode_sample(high, low))
    }

    /// Read all three axes from one conversion
    ///
    /// Issues a single 6-byte burst starting at `GYRO_XOUT_H`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_rotation(&mut self) -> Result<GyroData, Error<I::Error>> {
        let buffer = self.access.read_bytes(Register::GyroXoutH)?;
        Ok(GyroData::from_be_bytes(buffer))
    }

    /// Read the X axis on its own
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_rotation_x(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::GyroXoutH)?;
        Ok(decode_sample(high, low))
    }

    /// Read the Y axis on its own
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_rotation_y(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::GyroYoutH)?;
        Ok(decode_sample(high, low))
    }

    /// Read the Z axis on its own
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_rotation_z(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::GyroZoutH)?;
        Ok(decode_sample(high, low))
    }
}

#[cfg(feature = "async")]
impl<I> Itg3200Driver<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Bring the device out of its power-on defaults
    ///
    /// Sets the full-scale range to ±2000°/s and then selects the X gyro PLL
    /// as clock source. No delay is inserted; allow about 50 ms before relying
    /// on readings.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn init(&mut self) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ITG-3200 init: FS_SEL=2000dps, CLK_SEL=PLL X gyro");

        self.set_full_scale(FullScale::Dps2000).await?;
        self.set_clock_source(ClockSource::PllXGyro).await
    }

    /// Read the 6-bit device ID from `WHO_AM_I`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_device_id(&mut self) -> Result<u8, Error<I::Error>> {
        self.access.read_field(registers::DEVID).await
    }

    /// Overwrite the 6-bit device ID in `WHO_AM_I`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_device_id(&mut self, value: u8) -> Result<(), Error<I::Error>> {
        self.access.write_field(registers::DEVID, value).await
    }

    /// Check that the device answers with the expected ID
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn test_connection(&mut self) -> Result<bool, Error<I::Error>> {
        let id = self.read_device_id().await?;

        #[cfg(feature = "defmt")]
        if id != DEVICE_ID {
            defmt::warn!("Unexpected device ID {=u8:#x}", id);
        }

        Ok(id == DEVICE_ID)
    }

    /// Read the sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_sample_rate_divider(&mut self) -> Result<u8, Error<I::Error>> {
        self.access.read_byte(Register::SmplrtDiv).await
    }

    /// Set the sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.access.write_byte(Register::SmplrtDiv, divider).await
    }

    /// Read the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_full_scale(&mut self) -> Result<FullScale, Error<I::Error>> {
        Ok(self.access.read_field(registers::FS_SEL).await?.into())
    }

    /// Set the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_full_scale(&mut self, range: FullScale) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        if let FullScale::Reserved(code) = range {
            defmt::warn!("Writing reserved FS_SEL code {=u8}", code);
        }

        self.access
            .write_field(registers::FS_SEL, range.into())
            .await
    }

    /// Read the digital low-pass filter setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_dlpf_bandwidth(&mut self) -> Result<DlpfBandwidth, Error<I::Error>> {
        Ok(self.access.read_field(registers::DLPF_CFG).await?.into())
    }

    /// Set the digital low-pass filter bandwidth
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_dlpf_bandwidth(
        &mut self,
        bandwidth: DlpfBandwidth,
    ) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        if let DlpfBandwidth::Reserved(code) = bandwidth {
            defmt::warn!("Writing reserved DLPF_CFG code {=u8}", code);
        }

        self.access
            .write_field(registers::DLPF_CFG, bandwidth.into())
            .await
    }

    /// Configure range, filter and sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_gyroscope(&mut self, config: &GyroConfig) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Configuring gyroscope: {}", config);

        self.set_full_scale(config.full_scale).await?;
        self.set_dlpf_bandwidth(config.dlpf).await?;
        self.set_sample_rate_divider(config.sample_rate_divider)
            .await
    }

    /// Read back range, filter and sample rate divider
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_gyroscope_config(&mut self) -> Result<GyroConfig, Error<I::Error>> {
        let dlpf_fs = self.access.read_byte(Register::DlpfFs).await?;
        let sample_rate_divider = self.read_sample_rate_divider().await?;

        Ok(GyroConfig {
            full_scale: registers::FS_SEL.extract(dlpf_fs).into(),
            dlpf: registers::DLPF_CFG.extract(dlpf_fs).into(),
            sample_rate_divider,
        })
    }

    /// Read the interrupt pin logic level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_level(&mut self) -> Result<InterruptLevel, Error<I::Error>> {
        Ok(self.access.read_flag(registers::INTCFG_ACTL).await?.into())
    }

    /// Set the interrupt pin logic level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_level(
        &mut self,
        level: InterruptLevel,
    ) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_ACTL, level.into())
            .await
    }

    /// Read the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_drive(&mut self) -> Result<InterruptDrive, Error<I::Error>> {
        Ok(self.access.read_flag(registers::INTCFG_OPEN).await?.into())
    }

    /// Set the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_drive(
        &mut self,
        drive: InterruptDrive,
    ) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_OPEN, drive.into())
            .await
    }

    /// Read whether the interrupt pin pulses or latches
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_latch(&mut self) -> Result<InterruptLatch, Error<I::Error>> {
        Ok(self
            .access
            .read_flag(registers::INTCFG_LATCH_INT_EN)
            .await?
            .into())
    }

    /// Set whether the interrupt pin pulses or latches
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_latch(
        &mut self,
        latch: InterruptLatch,
    ) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_LATCH_INT_EN, latch.into())
            .await
    }

    /// Read how a latched interrupt is cleared
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_clear(&mut self) -> Result<InterruptClear, Error<I::Error>> {
        Ok(self
            .access
            .read_flag(registers::INTCFG_INT_ANYRD_2CLEAR)
            .await?
            .into())
    }

    /// Set how a latched interrupt is cleared
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_interrupt_clear(
        &mut self,
        clear: InterruptClear,
    ) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_INT_ANYRD_2CLEAR, clear.into())
            .await
    }

    /// Check if the device-ready interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_device_ready_interrupt_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTCFG_ITG_RDY_EN).await
    }

    /// Enable/disable the device-ready interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_device_ready_interrupt_enable(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_ITG_RDY_EN, enable)
            .await
    }

    /// Check if the data-ready interrupt is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_data_ready_interrupt_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTCFG_RAW_RDY_EN).await
    }

    /// Enable/disable the data-ready interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_data_ready_interrupt_enable(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<I::Error>> {
        self.access
            .write_flag(registers::INTCFG_RAW_RDY_EN, enable)
            .await
    }

    /// Configure interrupt pin electrical properties
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_interrupt_pin(
        &mut self,
        config: &InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.set_interrupt_level(config.level).await?;
        self.set_interrupt_drive(config.drive).await?;
        self.set_interrupt_latch(config.latch).await?;
        self.set_interrupt_clear(config.clear).await
    }

    /// Read interrupt pin electrical properties
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_pin_config(
        &mut self,
    ) -> Result<InterruptPinConfig, Error<I::Error>> {
        let int_cfg = self.access.read_byte(Register::IntCfg).await?;

        Ok(InterruptPinConfig {
            level: registers::INTCFG_ACTL.is_set(int_cfg).into(),
            drive: registers::INTCFG_OPEN.is_set(int_cfg).into(),
            latch: registers::INTCFG_LATCH_INT_EN.is_set(int_cfg).into(),
            clear: registers::INTCFG_INT_ANYRD_2CLEAR.is_set(int_cfg).into(),
        })
    }

    /// Configure interrupt sources
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn configure_interrupts(
        &mut self,
        config: &InterruptConfig,
    ) -> Result<(), Error<I::Error>> {
        self.set_device_ready_interrupt_enable(config.device_ready)
            .await?;
        self.set_data_ready_interrupt_enable(config.data_ready)
            .await
    }

    /// Read which interrupt sources are enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_config(&mut self) -> Result<InterruptConfig, Error<I::Error>> {
        let int_cfg = self.access.read_byte(Register::IntCfg).await?;

        Ok(InterruptConfig {
            device_ready: registers::INTCFG_ITG_RDY_EN.is_set(int_cfg),
            data_ready: registers::INTCFG_RAW_RDY_EN.is_set(int_cfg),
        })
    }

    /// Check the device-ready (PLL locked) status flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_device_ready(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTSTAT_ITG_RDY).await
    }

    /// Check the data-ready status flag
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::INTSTAT_RAW_DATA_RDY).await
    }

    /// Read both interrupt status flags from a single `INT_STATUS` read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<I::Error>> {
        let status = self.access.read_byte(Register::IntStatus).await?;

        Ok(InterruptStatus {
            device_ready: registers::INTSTAT_ITG_RDY.is_set(status),
            data_ready: registers::INTSTAT_RAW_DATA_RDY.is_set(status),
        })
    }

    /// Trigger a device reset
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn reset(&mut self) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ITG-3200 reset");

        self.access.write_flag(registers::PWR_H_RESET, true).await
    }

    /// Check if sleep mode is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_sleeping(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_SLEEP).await
    }

    /// Set sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_sleep(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_SLEEP, enable).await
    }

    /// Check if the X gyro is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_standby_x(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_STBY_XG).await
    }

    /// Put the X gyro in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_standby_x(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_STBY_XG, enable).await
    }

    /// Check if the Y gyro is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_standby_y(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_STBY_YG).await
    }

    /// Put the Y gyro in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_standby_y(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_STBY_YG, enable).await
    }

    /// Check if the Z gyro is in standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn is_standby_z(&mut self) -> Result<bool, Error<I::Error>> {
        self.access.read_flag(registers::PWR_STBY_ZG).await
    }

    /// Put the Z gyro in or out of standby
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_standby_z(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.access.write_flag(registers::PWR_STBY_ZG, enable).await
    }

    /// Apply a per-axis standby configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_standby(&mut self, config: &StandbyConfig) -> Result<(), Error<I::Error>> {
        self.set_standby_x(config.x).await?;
        self.set_standby_y(config.y).await?;
        self.set_standby_z(config.z).await
    }

    /// Read the per-axis standby configuration
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_standby(&mut self) -> Result<StandbyConfig, Error<I::Error>> {
        let pwr_mgm = self.access.read_byte(Register::PwrMgm).await?;

        Ok(StandbyConfig {
            x: registers::PWR_STBY_XG.is_set(pwr_mgm),
            y: registers::PWR_STBY_YG.is_set(pwr_mgm),
            z: registers::PWR_STBY_ZG.is_set(pwr_mgm),
        })
    }

    /// Read the clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_clock_source(&mut self) -> Result<ClockSource, Error<I::Error>> {
        Ok(self.access.read_field(registers::PWR_CLK_SEL).await?.into())
    }

    /// Set clock source
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        if let ClockSource::Reserved(code) = source {
            defmt::warn!("Writing reserved CLK_SEL code {=u8}", code);
        }

        self.access
            .write_field(registers::PWR_CLK_SEL, source.into())
            .await
    }

    /// Read temperature sensor (raw)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_temperature(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::TempOutH).await?;
        Ok(decode_sample(high, low))
    }

    /// Read all three axes from one conversion
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_rotation(&mut self) -> Result<GyroData, Error<I::Error>> {
        let buffer = self.access.read_bytes(Register::GyroXoutH).await?;
        Ok(GyroData::from_be_bytes(buffer))
    }

    /// Read the X axis on its own
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_rotation_x(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::GyroXoutH).await?;
        Ok(decode_sample(high, low))
    }

    /// Read the Y axis on its own
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_rotation_y(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::GyroYoutH).await?;
        Ok(decode_sample(high, low))
    }

    /// Read the Z axis on its own
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub async fn read_rotation_z(&mut self) -> Result<i16, Error<I::Error>> {
        let [high, low] = self.access.read_bytes(Register::GyroZoutH).await?;
        Ok(decode_sample(high, low))
    }
}

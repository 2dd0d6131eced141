//! Interrupt configuration and status
//!
//! The ITG-3200 has a single INT pin that can signal two events:
//! - Device ready (the PLL has locked after a clock source change)
//! - Raw data ready (a new sample is in the output registers)
//!
//! The driver only configures the pin; watching it is up to the caller.
//!
//! # Clearing a latched interrupt
//!
//! When the pin is latched ([`InterruptLatch::LatchUntilCleared`]) the status
//! bits stay set until cleared, and **what clears them depends on
//! [`InterruptClear`]**. With [`InterruptClear::StatusRead`] only a read of
//! `INT_STATUS` clears them; with [`InterruptClear::AnyRead`] any register read
//! does, including the field reads the driver performs for unrelated getters
//! and the sample burst reads. Reading the status is therefore not a pure
//! observation in either mode.
//!
//! # Example
//!
//! ```ignore
//! # use itg3200::{Itg3200Driver, InterruptPinConfig, InterruptConfig};
//! # let mut gyro: Itg3200Driver<_> = todo!();
//! gyro.configure_interrupt_pin(&InterruptPinConfig::open_drain_latched())?;
//! gyro.configure_interrupts(&InterruptConfig::data_ready_only())?;
//!
//! if gyro.read_interrupt_status()?.data_ready {
//!     let rotation = gyro.read_rotation()?;
//! }
//! # Ok::<(), itg3200::Error<()>>(())
//! ```

/// Interrupt pin logic level (`ACTL`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLevel {
    /// Pin is driven high when asserted
    #[default]
    ActiveHigh,
    /// Pin is driven low when asserted
    ActiveLow,
}

/// Interrupt pin output stage (`OPEN`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptDrive {
    /// Push-pull output
    #[default]
    PushPull,
    /// Open-drain output
    OpenDrain,
}

/// Interrupt pin latching (`LATCH_INT_EN`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLatch {
    /// 50 µs pulse per event
    #[default]
    Pulse50us,
    /// Held until the interrupt is cleared
    LatchUntilCleared,
}

/// How a latched interrupt is cleared (`INT_ANYRD_2CLEAR`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptClear {
    /// Cleared by reading `INT_STATUS`
    #[default]
    StatusRead,
    /// Cleared by reading any register
    AnyRead,
}

macro_rules! bit_enum {
    ($ty:ident, $clear:ident, $set:ident) => {
        impl From<bool> for $ty {
            fn from(bit: bool) -> Self {
                if bit { Self::$set } else { Self::$clear }
            }
        }

        impl From<$ty> for bool {
            fn from(value: $ty) -> Self {
                matches!(value, $ty::$set)
            }
        }
    };
}

bit_enum!(InterruptLevel, ActiveHigh, ActiveLow);
bit_enum!(InterruptDrive, PushPull, OpenDrain);
bit_enum!(InterruptLatch, Pulse50us, LatchUntilCleared);
bit_enum!(InterruptClear, StatusRead, AnyRead);

/// Interrupt pin electrical configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptPinConfig {
    /// Logic level
    pub level: InterruptLevel,
    /// Output stage
    pub drive: InterruptDrive,
    /// Pulse or latch
    pub latch: InterruptLatch,
    /// Latch clear method
    pub clear: InterruptClear,
}

impl InterruptPinConfig {
    /// Active-low, open-drain, latched until `INT_STATUS` is read
    ///
    /// Suits a shared, pulled-up interrupt line.
    pub const fn open_drain_latched() -> Self {
        Self {
            level: InterruptLevel::ActiveLow,
            drive: InterruptDrive::OpenDrain,
            latch: InterruptLatch::LatchUntilCleared,
            clear: InterruptClear::StatusRead,
        }
    }
}

/// Interrupt source configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptConfig {
    /// Interrupt when the device is ready (PLL locked)
    pub device_ready: bool,
    /// Interrupt when new sample data is available
    pub data_ready: bool,
}

impl InterruptConfig {
    /// Create configuration with only data ready interrupt enabled
    pub const fn data_ready_only() -> Self {
        Self {
            device_ready: false,
            data_ready: true,
        }
    }
}

/// Interrupt status flags
///
/// See the module documentation for when reading these clears them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus {
    /// PLL ready
    pub device_ready: bool,
    /// Raw sample data ready
    pub data_ready: bool,
}

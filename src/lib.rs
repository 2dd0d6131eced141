#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod access;
pub mod bitfield;
pub mod device;
pub mod gyroscope;
pub mod interface;
pub mod interrupt;
pub mod power;
pub mod registers;

// Re-export main types
pub use access::RegisterAccess;
pub use bitfield::{Bit, BitField};
pub use device::Itg3200Driver;
pub use gyroscope::{DlpfBandwidth, FullScale, GyroConfig, GyroData, decode_sample};
pub use interface::I2cInterface;
pub use interrupt::{
    InterruptClear, InterruptConfig, InterruptDrive, InterruptLatch, InterruptLevel,
    InterruptPinConfig, InterruptStatus,
};
pub use power::{ClockSource, StandbyConfig};
pub use registers::Register;

/// ITG-3200 I2C address when AD0 pin is low (default: 0x68)
///
/// Most breakout boards tie AD0 low. Use [`I2cInterface::default()`] for this
/// configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// ITG-3200 I2C address when AD0 pin is high (alternative: 0x69)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// 8-bit write form of the default address (`0x68 << 1`)
pub const I2C_WRITE_ADDRESS: u8 = I2C_ADDRESS_AD0_LOW << 1;

/// 8-bit read form of the default address (`0x68 << 1 | 1`)
pub const I2C_READ_ADDRESS: u8 = (I2C_ADDRESS_AD0_LOW << 1) | 1;

/// Expected value of the 6-bit device ID field in `WHO_AM_I` (`0b110100`)
pub const DEVICE_ID: u8 = 0x34;

/// Driver errors
///
/// The driver performs no validation of its own, so the only failure is a bus
/// transaction reported by the transport (no device present, NACK, arbitration
/// loss, transport timeout). Nothing is retried.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}

//! Bus interface for the ITG-3200
//!
//! The driver talks to the device through `device-driver`'s
//! [`RegisterInterface`] trait. [`I2cInterface`] implements it on top of any
//! `embedded-hal` I2C bus, issuing one bus transaction per call:
//!
//! - a read of `N` bytes is a single `write_read` (register address, then a
//!   repeated-start burst of `N` bytes, auto-incrementing on the device)
//! - a write is a single `write` of the register address followed by the data
//!
//! Timeouts, clock stretching and arbitration are the bus implementation's
//! concern; whatever it reports is passed through unchanged.

use crate::{I2C_ADDRESS_AD0_HIGH, I2C_ADDRESS_AD0_LOW};

use device_driver::RegisterInterface;

/// Largest payload a single register write may carry
const MAX_WRITE_LEN: usize = 8;

/// I2C interface for the ITG-3200
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x68, AD0 pin LOW)
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut gyro = Itg3200Driver::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_AD0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom 7-bit device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit device address
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// The 8-bit address byte sent on the wire for writes (0xD0 by default)
    pub const fn write_address(&self) -> u8 {
        self.address << 1
    }

    /// The 8-bit address byte sent on the wire for reads (0xD1 by default)
    pub const fn read_address(&self) -> u8 {
        (self.address << 1) | 1
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Copy `address` and `data` into one write frame, returning the used length
fn write_frame(frame: &mut [u8; 1 + MAX_WRITE_LEN], address: u8, data: &[u8]) -> usize {
    let len = data.len().min(MAX_WRITE_LEN);
    frame[0] = address;
    frame[1..=len].copy_from_slice(&data[..len]);
    len + 1
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(self.address, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let mut frame = [0u8; 1 + MAX_WRITE_LEN];
        let len = write_frame(&mut frame, address, write_data);
        self.i2c.write(self.address, &frame[..len])
    }
}

#[cfg(feature = "async")]
impl<I2C, E> device_driver::AsyncRegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal_async::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        self.i2c
            .write_read(self.address, &[address], read_data)
            .await
    }

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits;
        let mut frame = [0u8; 1 + MAX_WRITE_LEN];
        let len = write_frame(&mut frame, address, write_data);
        self.i2c.write(self.address, &frame[..len]).await
    }
}

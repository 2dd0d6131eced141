//! Register and bit-field access
//!
//! [`RegisterAccess`] wraps a bus interface and provides the primitives every
//! driver operation is built from:
//!
//! - whole-byte reads and writes
//! - burst reads of consecutive registers in one transaction
//! - single-bit and multi-bit field reads
//! - single-bit and multi-bit field writes as **read-modify-write**
//!
//! A field write reads the register, replaces only the field's bits and writes
//! the byte back, so unrelated settings sharing the register survive. If the
//! read fails the write is never issued. The two transactions are not atomic
//! with respect to other bus masters touching the same register; callers that
//! share a device across threads must serialize access themselves.

use crate::Error;
use crate::bitfield::{Bit, BitField};
use crate::registers::Register;

#[cfg(not(feature = "async"))]
use device_driver::RegisterInterface;

/// Bit-field accessor over a register interface
#[derive(Debug)]
pub struct RegisterAccess<I> {
    interface: I,
}

impl<I> RegisterAccess<I> {
    /// Wrap a register interface
    pub const fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Consume the accessor and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Get a mutable reference to the underlying interface (for advanced usage)
    pub const fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn size_bits(len: usize) -> u32 {
    (len * 8) as u32
}

#[cfg(not(feature = "async"))]
impl<I> RegisterAccess<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Read one full register
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub fn read_byte(&mut self, register: Register) -> Result<u8, Error<I::Error>> {
        let mut buffer = [0u8; 1];
        self.interface
            .read_register(register.addr(), 8, &mut buffer)?;
        Ok(buffer[0])
    }

    /// Write one full register
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub fn write_byte(&mut self, register: Register, value: u8) -> Result<(), Error<I::Error>> {
        self.interface
            .write_register(register.addr(), 8, &[value])?;
        Ok(())
    }

    /// Burst-read `N` consecutive registers starting at `start`
    ///
    /// All bytes come from a single bus transaction, in register order. On
    /// failure no bytes are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub fn read_bytes<const N: usize>(
        &mut self,
        start: Register,
    ) -> Result<[u8; N], Error<I::Error>> {
        let mut buffer = [0u8; N];
        self.interface
            .read_register(start.addr(), size_bits(N), &mut buffer)?;
        Ok(buffer)
    }

    /// Read a single-bit flag
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub fn read_flag(&mut self, flag: Bit) -> Result<bool, Error<I::Error>> {
        let byte = self.read_byte(flag.register())?;
        Ok(flag.is_set(byte))
    }

    /// Read a multi-bit field, right-aligned
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub fn read_field(&mut self, field: BitField) -> Result<u8, Error<I::Error>> {
        let byte = self.read_byte(field.register())?;
        Ok(field.extract(byte))
    }

    /// Set or clear a single-bit flag, preserving the rest of the register
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails. If the read fails the
    /// register is left untouched.
    pub fn write_flag(&mut self, flag: Bit, value: bool) -> Result<(), Error<I::Error>> {
        self.write_field(flag.field(), u8::from(value))
    }

    /// Write a multi-bit field, preserving the rest of the register
    ///
    /// `value` is masked to the field width.
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails. If the read fails the
    /// register is left untouched.
    pub fn write_field(&mut self, field: BitField, value: u8) -> Result<(), Error<I::Error>> {
        let current = self.read_byte(field.register())?;
        let updated = field.insert(current, value);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "RMW {=u8:#x}: {=u8:#b} -> {=u8:#b}",
            field.register().addr(),
            current,
            updated
        );

        self.write_byte(field.register(), updated)
    }

    /// Read bit `bit` (0 = LSB) of `register`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if `bit > 7`.
    pub fn read_bit(&mut self, register: Register, bit: u8) -> Result<bool, Error<I::Error>> {
        self.read_flag(Bit::new(register, bit))
    }

    /// Read the `length`-bit field whose most significant bit is `start_bit`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if the span does not fit in one byte (see [`BitField::new`]).
    pub fn read_bits(
        &mut self,
        register: Register,
        start_bit: u8,
        length: u8,
    ) -> Result<u8, Error<I::Error>> {
        self.read_field(BitField::new(register, start_bit, length))
    }

    /// Set or clear bit `bit` (0 = LSB) of `register` by read-modify-write
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if `bit > 7`.
    pub fn write_bit(
        &mut self,
        register: Register,
        bit: u8,
        value: bool,
    ) -> Result<(), Error<I::Error>> {
        self.write_flag(Bit::new(register, bit), value)
    }

    /// Write the `length`-bit field whose most significant bit is `start_bit`
    /// by read-modify-write
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if the span does not fit in one byte (see [`BitField::new`]).
    pub fn write_bits(
        &mut self,
        register: Register,
        start_bit: u8,
        length: u8,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(BitField::new(register, start_bit, length), value)
    }
}

#[cfg(feature = "async")]
impl<I> RegisterAccess<I>
where
    I: device_driver::AsyncRegisterInterface<AddressType = u8>,
{
    /// Read one full register
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub async fn read_byte(&mut self, register: Register) -> Result<u8, Error<I::Error>> {
        let mut buffer = [0u8; 1];
        self.interface
            .read_register(register.addr(), 8, &mut buffer)
            .await?;
        Ok(buffer[0])
    }

    /// Write one full register
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub async fn write_byte(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        self.interface
            .write_register(register.addr(), 8, &[value])
            .await?;
        Ok(())
    }

    /// Burst-read `N` consecutive registers starting at `start`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub async fn read_bytes<const N: usize>(
        &mut self,
        start: Register,
    ) -> Result<[u8; N], Error<I::Error>> {
        let mut buffer = [0u8; N];
        self.interface
            .read_register(start.addr(), size_bits(N), &mut buffer)
            .await?;
        Ok(buffer)
    }

    /// Read a single-bit flag
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub async fn read_flag(&mut self, flag: Bit) -> Result<bool, Error<I::Error>> {
        let byte = self.read_byte(flag.register()).await?;
        Ok(flag.is_set(byte))
    }

    /// Read a multi-bit field, right-aligned
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    pub async fn read_field(&mut self, field: BitField) -> Result<u8, Error<I::Error>> {
        let byte = self.read_byte(field.register()).await?;
        Ok(field.extract(byte))
    }

    /// Set or clear a single-bit flag, preserving the rest of the register
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails.
    pub async fn write_flag(&mut self, flag: Bit, value: bool) -> Result<(), Error<I::Error>> {
        self.write_field(flag.field(), u8::from(value)).await
    }

    /// Write a multi-bit field, preserving the rest of the register
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails.
    pub async fn write_field(
        &mut self,
        field: BitField,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        let current = self.read_byte(field.register()).await?;
        let updated = field.insert(current, value);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "RMW {=u8:#x}: {=u8:#b} -> {=u8:#b}",
            field.register().addr(),
            current,
            updated
        );

        self.write_byte(field.register(), updated).await
    }

    /// Read bit `bit` (0 = LSB) of `register`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if `bit > 7`.
    pub async fn read_bit(&mut self, register: Register, bit: u8) -> Result<bool, Error<I::Error>> {
        self.read_flag(Bit::new(register, bit)).await
    }

    /// Read the `length`-bit field whose most significant bit is `start_bit`
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if the span does not fit in one byte.
    pub async fn read_bits(
        &mut self,
        register: Register,
        start_bit: u8,
        length: u8,
    ) -> Result<u8, Error<I::Error>> {
        self.read_field(BitField::new(register, start_bit, length))
            .await
    }

    /// Set or clear bit `bit` (0 = LSB) of `register` by read-modify-write
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if `bit > 7`.
    pub async fn write_bit(
        &mut self,
        register: Register,
        bit: u8,
        value: bool,
    ) -> Result<(), Error<I::Error>> {
        self.write_flag(Bit::new(register, bit), value).await
    }

    /// Write the `length`-bit field whose most significant bit is `start_bit`
    /// by read-modify-write
    ///
    /// # Errors
    ///
    /// Returns an error if either bus transaction fails.
    ///
    /// # Panics
    ///
    /// Panics if the span does not fit in one byte.
    pub async fn write_bits(
        &mut self,
        register: Register,
        start_bit: u8,
        length: u8,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write_field(BitField::new(register, start_bit, length), value)
            .await
    }
}

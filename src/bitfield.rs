//! Bit-field descriptors
//!
//! Every configuration value on the ITG-3200 lives in a sub-byte span of a
//! single register. A [`BitField`] names that span the way the datasheet does:
//! the register, the position of the field's **most significant** bit, and the
//! field width. Bits are counted from 0 (LSB) to 7 (MSB), so a field with
//! `start_bit = 4` and `length = 2` covers bits 4 and 3.
//!
//! ```text
//!   bit:   7   6   5   4   3   2   1   0
//!                     [ FS_SEL ][ DLPF_CFG  ]
//!                      4..3       2..0
//! ```
//!
//! The arithmetic here is pure; bus access lives in [`crate::access`].

use crate::registers::Register;

/// A contiguous multi-bit field inside one register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    register: Register,
    start_bit: u8,
    length: u8,
}

impl BitField {
    /// Describe a field of `length` bits whose most significant bit is `start_bit`
    ///
    /// # Panics
    ///
    /// Panics if `start_bit > 7`, `length == 0`, or the field would extend
    /// below bit 0 (`length > start_bit + 1`). In a `const` item this is a
    /// compile error.
    #[must_use]
    pub const fn new(register: Register, start_bit: u8, length: u8) -> Self {
        assert!(start_bit < 8, "bit position out of range");
        assert!(length > 0, "field must be at least one bit wide");
        assert!(length <= start_bit + 1, "field extends past bit 0");
        Self {
            register,
            start_bit,
            length,
        }
    }

    /// Register holding the field
    #[must_use]
    pub const fn register(self) -> Register {
        self.register
    }

    /// Position of the field's most significant bit
    #[must_use]
    pub const fn start_bit(self) -> u8 {
        self.start_bit
    }

    /// Width of the field in bits
    #[must_use]
    pub const fn length(self) -> u8 {
        self.length
    }

    /// Position of the field's least significant bit
    #[must_use]
    pub const fn shift(self) -> u8 {
        self.start_bit + 1 - self.length
    }

    /// Largest value the field can hold, right-aligned
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn max_value(self) -> u8 {
        ((1u16 << self.length) - 1) as u8
    }

    /// Mask of the field's bits within the register byte
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.max_value() << self.shift()
    }

    /// Isolate the field from a register byte, right-aligned
    #[must_use]
    pub const fn extract(self, byte: u8) -> u8 {
        (byte & self.mask()) >> self.shift()
    }

    /// Replace the field inside `byte` with `value`
    ///
    /// Bits of `value` above the field width are dropped, matching how the
    /// hardware ignores them. Bits outside the field are returned unchanged.
    #[must_use]
    pub const fn insert(self, byte: u8, value: u8) -> u8 {
        (byte & !self.mask()) | ((value & self.max_value()) << self.shift())
    }

    /// Whether two fields share any bit of the same register
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.register as u8 == other.register as u8 && self.mask() & other.mask() != 0
    }
}

/// A single-bit flag inside one register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bit {
    register: Register,
    bit: u8,
}

impl Bit {
    /// Describe bit `bit` (0 = LSB) of `register`
    ///
    /// # Panics
    ///
    /// Panics if `bit > 7`.
    #[must_use]
    pub const fn new(register: Register, bit: u8) -> Self {
        assert!(bit < 8, "bit position out of range");
        Self { register, bit }
    }

    /// Register holding the flag
    #[must_use]
    pub const fn register(self) -> Register {
        self.register
    }

    /// Bit position (0 = LSB)
    #[must_use]
    pub const fn bit(self) -> u8 {
        self.bit
    }

    /// The flag viewed as a one-bit field
    #[must_use]
    pub const fn field(self) -> BitField {
        BitField::new(self.register, self.bit, 1)
    }

    /// Whether the flag is set in `byte`
    #[must_use]
    pub const fn is_set(self, byte: u8) -> bool {
        byte & (1 << self.bit) != 0
    }
}

impl From<Bit> for BitField {
    fn from(bit: Bit) -> Self {
        bit.field()
    }
}

/// Check that no two fields in `fields` share a bit
///
/// Used in `const` assertions over the register map.
#[must_use]
pub const fn disjoint(fields: &[BitField]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        let mut j = i + 1;
        while j < fields.len() {
            if fields[i].overlaps(fields[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

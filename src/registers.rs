//! Register map for the ITG-3200
//!
//! The device exposes a flat 8-bit address space; only the registers below are
//! documented. Multi-bit settings are described by [`BitField`] constants and
//! single-bit flags by [`Bit`] constants, so the driver never carries its own
//! shift or mask literals.
//!
//! ## Layout
//!
//! | Register     | Addr | 7       | 6    | 5       | 4               | 3       | 2          | 1    | 0           |
//! |--------------|------|---------|------|---------|-----------------|---------|------------|------|-------------|
//! | `WHO_AM_I`   | 0x00 | -       | ID   | ID      | ID              | ID      | ID         | ID   | -           |
//! | `SMPLRT_DIV` | 0x15 | DIV     | DIV  | DIV     | DIV             | DIV     | DIV        | DIV  | DIV         |
//! | `DLPF_FS`    | 0x16 | -       | -    | -       | FS_SEL          | FS_SEL  | DLPF_CFG   | CFG  | CFG         |
//! | `INT_CFG`    | 0x17 | ACTL    | OPEN | LATCH   | ANYRD_2CLEAR    | -       | ITG_RDY_EN | -    | RAW_RDY_EN  |
//! | `INT_STATUS` | 0x1A | -       | -    | -       | -               | -       | ITG_RDY    | -    | RAW_RDY     |
//! | `PWR_MGM`    | 0x3E | H_RESET | SLEEP| STBY_XG | STBY_YG         | STBY_ZG | CLK_SEL    | SEL  | SEL         |

use crate::bitfield::{Bit, BitField, disjoint};

/// Register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Device identity (0x00)
    WhoAmI = 0x00,
    /// Sample rate divider (0x15)
    SmplrtDiv = 0x15,
    /// Digital low-pass filter and full-scale range (0x16)
    DlpfFs = 0x16,
    /// Interrupt configuration (0x17)
    IntCfg = 0x17,
    /// Interrupt status (0x1A)
    IntStatus = 0x1A,
    /// Temperature, high byte (0x1B)
    TempOutH = 0x1B,
    /// Temperature, low byte (0x1C)
    TempOutL = 0x1C,
    /// X-axis rotation, high byte (0x1D)
    GyroXoutH = 0x1D,
    /// X-axis rotation, low byte (0x1E)
    GyroXoutL = 0x1E,
    /// Y-axis rotation, high byte (0x1F)
    GyroYoutH = 0x1F,
    /// Y-axis rotation, low byte (0x20)
    GyroYoutL = 0x20,
    /// Z-axis rotation, high byte (0x21)
    GyroZoutH = 0x21,
    /// Z-axis rotation, low byte (0x22)
    GyroZoutL = 0x22,
    /// Power management (0x3E)
    PwrMgm = 0x3E,
}

impl Register {
    /// Bus address of the register
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}

// WHO_AM_I

/// Device ID, bits 6..1 of `WHO_AM_I`
pub const DEVID: BitField = BitField::new(Register::WhoAmI, 6, 6);

// DLPF_FS

/// Full-scale range select
pub const FS_SEL: BitField = BitField::new(Register::DlpfFs, 4, 2);
/// Low-pass filter bandwidth / internal sample rate
pub const DLPF_CFG: BitField = BitField::new(Register::DlpfFs, 2, 3);

// INT_CFG

/// Interrupt pin logic level (1 = active low)
pub const INTCFG_ACTL: Bit = Bit::new(Register::IntCfg, 7);
/// Interrupt pin drive (1 = open drain)
pub const INTCFG_OPEN: Bit = Bit::new(Register::IntCfg, 6);
/// Interrupt latch (1 = hold until cleared, 0 = 50 µs pulse)
pub const INTCFG_LATCH_INT_EN: Bit = Bit::new(Register::IntCfg, 5);
/// Latch clear method (1 = any register read, 0 = status register read)
pub const INTCFG_INT_ANYRD_2CLEAR: Bit = Bit::new(Register::IntCfg, 4);
/// Interrupt when the PLL is ready
pub const INTCFG_ITG_RDY_EN: Bit = Bit::new(Register::IntCfg, 2);
/// Interrupt when new sample data is available
pub const INTCFG_RAW_RDY_EN: Bit = Bit::new(Register::IntCfg, 0);

// INT_STATUS

/// PLL ready
pub const INTSTAT_ITG_RDY: Bit = Bit::new(Register::IntStatus, 2);
/// Raw sample data ready
pub const INTSTAT_RAW_DATA_RDY: Bit = Bit::new(Register::IntStatus, 0);

// PWR_MGM

/// Device reset strobe, cleared by hardware
pub const PWR_H_RESET: Bit = Bit::new(Register::PwrMgm, 7);
/// Low-power sleep mode
pub const PWR_SLEEP: Bit = Bit::new(Register::PwrMgm, 6);
/// X gyro standby
pub const PWR_STBY_XG: Bit = Bit::new(Register::PwrMgm, 5);
/// Y gyro standby
pub const PWR_STBY_YG: Bit = Bit::new(Register::PwrMgm, 4);
/// Z gyro standby
pub const PWR_STBY_ZG: Bit = Bit::new(Register::PwrMgm, 3);
/// Clock source select
pub const PWR_CLK_SEL: BitField = BitField::new(Register::PwrMgm, 2, 3);

/// Every named field in the map
pub const FIELDS: &[BitField] = &[
    DEVID,
    FS_SEL,
    DLPF_CFG,
    INTCFG_ACTL.field(),
    INTCFG_OPEN.field(),
    INTCFG_LATCH_INT_EN.field(),
    INTCFG_INT_ANYRD_2CLEAR.field(),
    INTCFG_ITG_RDY_EN.field(),
    INTCFG_RAW_RDY_EN.field(),
    INTSTAT_ITG_RDY.field(),
    INTSTAT_RAW_DATA_RDY.field(),
    PWR_H_RESET.field(),
    PWR_SLEEP.field(),
    PWR_STBY_XG.field(),
    PWR_STBY_YG.field(),
    PWR_STBY_ZG.field(),
    PWR_CLK_SEL,
];

const _: () = assert!(disjoint(FIELDS), "register map contains overlapping fields");

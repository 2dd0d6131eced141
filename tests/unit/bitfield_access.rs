//! Unit tests for bit-field reads and read-modify-write behavior

use crate::common::{Operation, create_mock_driver, create_mock_driver_with};
use itg3200::{BitField, DlpfBandwidth, Register, registers};

#[test]
fn test_field_write_preserves_neighbors() {
    // FS_SEL = 0b11, DLPF_CFG = 0b010
    let (mut driver, interface) = create_mock_driver_with(&[(0x16, 0b0001_1010)]);

    driver.set_dlpf_bandwidth(DlpfBandwidth::Hz5).unwrap();

    assert_eq!(interface.get_register(0x16), 0b0001_1110);
    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: 0x16,
                len: 1
            },
            Operation::Write {
                address: 0x16,
                value: 0b0001_1110
            },
        ]
    );
}

#[test]
fn test_flag_write_preserves_neighbors() {
    let (mut driver, interface) = create_mock_driver_with(&[(0x3E, 0b0000_0011)]);

    driver.set_sleep(true).unwrap();
    assert_eq!(interface.power_management(), 0b0100_0011);

    driver.set_sleep(false).unwrap();
    assert_eq!(interface.power_management(), 0b0000_0011);
}

#[test]
fn test_raw_bit_access() {
    let (mut driver, interface) = create_mock_driver_with(&[(0x17, 0x05)]);

    driver.access().write_bit(Register::IntCfg, 7, true).unwrap();
    assert_eq!(interface.get_register(0x17), 0x85);

    assert!(driver.access().read_bit(Register::IntCfg, 2).unwrap());
    assert!(!driver.access().read_bit(Register::IntCfg, 1).unwrap());
}

#[test]
fn test_raw_field_access() {
    let (mut driver, interface) = create_mock_driver();

    // Bits 6:1 of 0x68 hold the device ID
    assert_eq!(driver.access().read_bits(Register::WhoAmI, 6, 6).unwrap(), 0x34);

    // Bits 7 and 0 are not part of the field
    interface.set_register(0x00, 0xE9);
    assert_eq!(driver.access().read_bits(Register::WhoAmI, 6, 6).unwrap(), 0x34);

    // Oversized value is truncated to the field width
    interface.set_register(0x3E, 0x40);
    driver
        .access()
        .write_bits(Register::PwrMgm, 2, 3, 0xFF)
        .unwrap();
    assert_eq!(interface.power_management(), 0x47);
}

#[test]
fn test_masking_law_through_bus() {
    let field = registers::DLPF_CFG;

    for initial in [0x00u8, 0xFF, 0xA5, 0x5A, 0x38] {
        for value in 0..16u8 {
            let (mut driver, interface) = create_mock_driver_with(&[(0x16, initial)]);

            driver.access().write_field(field, value).unwrap();

            let expected = (initial & !field.mask()) | ((value << field.shift()) & field.mask());
            assert_eq!(
                interface.get_register(0x16),
                expected,
                "initial {initial:#04x}, value {value}"
            );
            assert_eq!(driver.access().read_field(field).unwrap(), value & 0b111);
        }
    }
}

#[test]
fn test_single_bit_field_matches_flag() {
    let field = BitField::new(Register::IntCfg, 0, 1);
    let (mut driver, interface) = create_mock_driver();

    driver.access().write_field(field, 1).unwrap();
    assert_eq!(interface.get_register(0x17), 0x01);
    assert!(driver.is_data_ready_interrupt_enabled().unwrap());
}

#[test]
fn test_whole_byte_access() {
    let (mut driver, interface) = create_mock_driver();

    driver.access().write_byte(Register::SmplrtDiv, 0xC3).unwrap();
    assert_eq!(interface.get_register(0x15), 0xC3);
    assert_eq!(driver.access().read_byte(Register::SmplrtDiv).unwrap(), 0xC3);

    // A whole-byte write is a single transaction with no read first
    interface.clear_operations();
    driver.access().write_byte(Register::SmplrtDiv, 0x01).unwrap();
    assert_eq!(interface.read_count(), 0);
    assert_eq!(interface.writes(), vec![(0x15, 0x01)]);
}

#[test]
fn test_every_bit_write_leaves_others_unchanged() {
    for pattern in [0x00u8, 0xFF, 0xAA, 0x55] {
        for bit in 0..8u8 {
            for value in [true, false] {
                let (mut driver, interface) = create_mock_driver_with(&[(0x15, pattern)]);

                driver
                    .access()
                    .write_bit(Register::SmplrtDiv, bit, value)
                    .unwrap();

                let after = interface.get_register(0x15);
                assert_eq!(after & !(1 << bit), pattern & !(1 << bit));
                assert_eq!(after & (1 << bit) != 0, value);
            }
        }
    }
}

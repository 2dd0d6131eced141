//! Unit tests for sample decoding and burst reads

use crate::common::{Operation, create_mock_driver};
use itg3200::GyroData;

#[test]
fn test_read_rotation_single_burst() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_gyro_data(100, -200, 300);

    let data = driver.read_rotation().unwrap();

    assert_eq!(
        data,
        GyroData {
            x: 100,
            y: -200,
            z: 300
        }
    );
    assert_eq!(
        interface.operations(),
        vec![Operation::Read {
            address: 0x1D,
            len: 6
        }]
    );
}

#[test]
fn test_read_rotation_extremes() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_gyro_data(i16::MAX, i16::MIN, -1);
    let data = driver.read_rotation().unwrap();
    assert_eq!(data.x, 32767);
    assert_eq!(data.y, -32768);
    assert_eq!(data.z, -1);

    // Raw register bytes, high byte first
    for (address, value) in [(0x1D, 0x80), (0x1E, 0x00), (0x1F, 0xFF), (0x20, 0xFF)] {
        interface.set_register(address, value);
    }
    let data = driver.read_rotation().unwrap();
    assert_eq!(data.x, -32768);
    assert_eq!(data.y, -1);
}

#[test]
fn test_single_axis_reads() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_gyro_data(-5, 6, -7);

    assert_eq!(driver.read_rotation_x().unwrap(), -5);
    assert_eq!(driver.read_rotation_y().unwrap(), 6);
    assert_eq!(driver.read_rotation_z().unwrap(), -7);

    // One 2-byte burst per axis
    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: 0x1D,
                len: 2
            },
            Operation::Read {
                address: 0x1F,
                len: 2
            },
            Operation::Read {
                address: 0x21,
                len: 2
            },
        ]
    );
}

#[test]
fn test_single_axis_reads_may_mix_conversions() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_gyro_data(1, 1, 1);
    let x = driver.read_rotation_x().unwrap();
    interface.set_gyro_data(2, 2, 2);
    let y = driver.read_rotation_y().unwrap();

    assert_eq!((x, y), (1, 2));
}

#[test]
fn test_read_temperature() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_temperature_data(-13200);
    assert_eq!(driver.read_temperature().unwrap(), -13200);

    interface.set_temperature_data(0x1234);
    assert_eq!(driver.read_temperature().unwrap(), 0x1234);

    let bursts: Vec<_> = interface.operations();
    assert!(bursts.iter().all(|op| *op
        == Operation::Read {
            address: 0x1B,
            len: 2
        }));
}

//! Integration tests for basic workflow scenarios

use crate::common::{Operation, create_mock_driver, create_mock_driver_with};
use itg3200::{
    ClockSource, DlpfBandwidth, FullScale, GyroConfig, InterruptConfig, InterruptPinConfig,
};

#[test]
fn test_init_sequence() {
    let (mut driver, interface) = create_mock_driver();

    driver.init().unwrap();

    // Exactly two read-modify-writes: range first, then clock source
    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: 0x16,
                len: 1
            },
            Operation::Write {
                address: 0x16,
                value: 0x18
            },
            Operation::Read {
                address: 0x3E,
                len: 1
            },
            Operation::Write {
                address: 0x3E,
                value: 0x01
            },
        ]
    );
    assert_eq!(driver.read_full_scale().unwrap(), FullScale::Dps2000);
    assert_eq!(driver.read_clock_source().unwrap(), ClockSource::PllXGyro);
}

#[test]
fn test_init_preserves_other_settings() {
    let (mut driver, interface) = create_mock_driver_with(&[(0x16, 0x03), (0x3E, 0x48)]);

    driver.init().unwrap();

    assert_eq!(interface.get_register(0x16), 0x1B);
    assert_eq!(interface.power_management(), 0x49);
    assert!(driver.is_sleeping().unwrap());
}

#[test]
fn test_complete_workflow() {
    let (mut driver, interface) = create_mock_driver();

    assert!(driver.test_connection().unwrap());
    driver.init().unwrap();

    let config = GyroConfig {
        dlpf: DlpfBandwidth::Hz42,
        sample_rate_divider: 7,
        ..Default::default()
    };
    driver.configure_gyroscope(&config).unwrap();
    driver
        .configure_interrupt_pin(&InterruptPinConfig::open_drain_latched())
        .unwrap();
    driver
        .configure_interrupts(&InterruptConfig::data_ready_only())
        .unwrap();

    assert_eq!(interface.get_register(0x16), 0x1B);
    assert_eq!(interface.get_register(0x15), 7);
    assert_eq!(interface.get_register(0x17), 0xE1);
    assert_eq!(interface.power_management(), 0x01);

    interface.set_gyro_data(10, -20, 30);
    interface.set_interrupt_status(0x01);

    if driver.read_interrupt_status().unwrap().data_ready {
        let data = driver.read_rotation().unwrap();
        assert_eq!((data.x, data.y, data.z), (10, -20, 30));
    } else {
        panic!("data ready flag not seen");
    }

    // Latched flag consumed by the status read
    assert!(!driver.is_data_ready().unwrap());
}

#[test]
fn test_release_returns_interface() {
    let (mut driver, _) = create_mock_driver();
    driver.set_sample_rate_divider(4).unwrap();

    let interface = driver.release();
    assert_eq!(interface.get_register(0x15), 4);
}

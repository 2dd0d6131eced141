//! Unit tests for interrupt pin, enable and status handling

use crate::common::{create_mock_driver, create_mock_driver_with};
use itg3200::{
    InterruptClear, InterruptConfig, InterruptDrive, InterruptLatch, InterruptLevel,
    InterruptPinConfig, InterruptStatus,
};

#[test]
fn test_pin_settings_use_their_own_bits() {
    let (mut driver, interface) = create_mock_driver_with(&[(0x17, 0x05)]);

    driver.set_interrupt_level(InterruptLevel::ActiveLow).unwrap();
    assert_eq!(interface.get_register(0x17), 0x85);

    driver.set_interrupt_drive(InterruptDrive::OpenDrain).unwrap();
    assert_eq!(interface.get_register(0x17), 0xC5);

    driver
        .set_interrupt_latch(InterruptLatch::LatchUntilCleared)
        .unwrap();
    assert_eq!(interface.get_register(0x17), 0xE5);

    driver.set_interrupt_clear(InterruptClear::AnyRead).unwrap();
    assert_eq!(interface.get_register(0x17), 0xF5);

    assert_eq!(driver.read_interrupt_level().unwrap(), InterruptLevel::ActiveLow);
    assert_eq!(driver.read_interrupt_drive().unwrap(), InterruptDrive::OpenDrain);
    assert_eq!(
        driver.read_interrupt_latch().unwrap(),
        InterruptLatch::LatchUntilCleared
    );
    assert_eq!(driver.read_interrupt_clear().unwrap(), InterruptClear::AnyRead);

    driver.set_interrupt_level(InterruptLevel::ActiveHigh).unwrap();
    assert_eq!(interface.get_register(0x17), 0x75);
}

#[test]
fn test_configure_interrupt_pin() {
    let (mut driver, interface) = create_mock_driver_with(&[(0x17, 0x01)]);

    driver
        .configure_interrupt_pin(&InterruptPinConfig::open_drain_latched())
        .unwrap();

    // Enable bit kept
    assert_eq!(interface.get_register(0x17), 0xE1);

    interface.clear_operations();
    let config = driver.read_interrupt_pin_config().unwrap();
    assert_eq!(config, InterruptPinConfig::open_drain_latched());
    assert_eq!(interface.read_count(), 1);
}

#[test]
fn test_interrupt_enables() {
    let (mut driver, interface) = create_mock_driver_with(&[(0x17, 0x80)]);

    driver.set_device_ready_interrupt_enable(true).unwrap();
    assert_eq!(interface.get_register(0x17), 0x84);
    assert!(driver.is_device_ready_interrupt_enabled().unwrap());
    assert!(!driver.is_data_ready_interrupt_enabled().unwrap());

    driver.set_data_ready_interrupt_enable(true).unwrap();
    assert_eq!(interface.get_register(0x17), 0x85);

    driver
        .configure_interrupts(&InterruptConfig::data_ready_only())
        .unwrap();
    assert_eq!(interface.get_register(0x17), 0x81);
    assert_eq!(
        driver.read_interrupt_config().unwrap(),
        InterruptConfig::data_ready_only()
    );
}

#[test]
fn test_interrupt_status_single_read() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_interrupt_status(0x05);

    let status = driver.read_interrupt_status().unwrap();
    assert_eq!(
        status,
        InterruptStatus {
            device_ready: true,
            data_ready: true
        }
    );
    assert_eq!(interface.read_count(), 1);

    interface.set_interrupt_status(0x01);
    assert!(!driver.is_device_ready().unwrap());
    assert!(driver.is_data_ready().unwrap());
}

#[test]
fn test_pulse_mode_status_is_not_cleared() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_interrupt_status(0x01);

    assert!(driver.is_data_ready().unwrap());
    assert!(driver.is_data_ready().unwrap());
}

#[test]
fn test_latched_status_cleared_by_status_read() {
    let (mut driver, interface) = create_mock_driver();
    driver
        .configure_interrupt_pin(&InterruptPinConfig {
            latch: InterruptLatch::LatchUntilCleared,
            ..Default::default()
        })
        .unwrap();
    interface.set_interrupt_status(0x05);

    // Unrelated reads leave the latch alone
    driver.read_rotation().unwrap();
    assert_eq!(interface.get_register(0x1A), 0x05);

    assert!(driver.is_device_ready().unwrap());
    // The first status read consumed both flags
    assert!(!driver.is_data_ready().unwrap());
}

#[test]
fn test_latched_status_cleared_by_any_read() {
    let (mut driver, interface) = create_mock_driver();
    driver
        .configure_interrupt_pin(&InterruptPinConfig {
            latch: InterruptLatch::LatchUntilCleared,
            clear: InterruptClear::AnyRead,
            ..Default::default()
        })
        .unwrap();
    interface.set_interrupt_status(0x01);

    driver.read_rotation().unwrap();

    assert_eq!(driver.read_interrupt_status().unwrap(), InterruptStatus::default());
}

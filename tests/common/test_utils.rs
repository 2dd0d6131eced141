//! Test utilities and helper functions

use crate::common::mock_interface::MockInterface;
use itg3200::Itg3200Driver;

/// Create a mock driver for testing
/// Returns (driver, interface) where interface is a clone that shares state with the driver
pub fn create_mock_driver() -> (Itg3200Driver<MockInterface>, MockInterface) {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    let driver = Itg3200Driver::new(interface);
    (driver, interface_clone)
}

/// Create a mock driver whose register file starts from the given values
pub fn create_mock_driver_with(
    registers: &[(u8, u8)],
) -> (Itg3200Driver<MockInterface>, MockInterface) {
    let (driver, interface) = create_mock_driver();
    for &(address, value) in registers {
        interface.set_register(address, value);
    }
    (driver, interface)
}

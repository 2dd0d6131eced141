//! Unit tests for the I2C transport framing

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use itg3200::{I2C_READ_ADDRESS, I2C_WRITE_ADDRESS, I2cInterface, Itg3200Driver};

/// One bus transaction as seen on the wire
#[derive(Debug, Clone, PartialEq)]
enum Transfer {
    Write(Vec<u8>),
    Read(usize),
}

// Mock I2C bus backed by a flat register file with address auto-increment
struct MockI2c {
    registers: [u8; 256],
    transactions: Vec<(u8, Vec<Transfer>)>,
    fail_next: bool,
}

impl MockI2c {
    fn new() -> Self {
        let mut registers = [0u8; 256];
        registers[0x00] = 0x68;
        Self {
            registers,
            transactions: Vec::new(),
            fail_next: false,
        }
    }
}

#[derive(Debug)]
struct MockError;

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err(MockError);
        }

        let mut pointer = 0u8;
        let mut transfers = Vec::new();
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    transfers.push(Transfer::Write(bytes.to_vec()));
                    if let Some((&register, data)) = bytes.split_first() {
                        pointer = register;
                        for &byte in data {
                            self.registers[usize::from(pointer)] = byte;
                            pointer = pointer.wrapping_add(1);
                        }
                    }
                }
                Operation::Read(buffer) => {
                    transfers.push(Transfer::Read(buffer.len()));
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[usize::from(pointer)];
                        pointer = pointer.wrapping_add(1);
                    }
                }
            }
        }
        self.transactions.push((address, transfers));

        Ok(())
    }
}

#[test]
fn test_wire_addresses() {
    assert_eq!(I2C_WRITE_ADDRESS, 0xD0);
    assert_eq!(I2C_READ_ADDRESS, 0xD1);

    let interface = I2cInterface::new(MockI2c::new(), 0x69);
    assert_eq!(interface.address(), 0x69);
    assert_eq!(interface.write_address(), 0xD2);
}

#[test]
fn test_read_is_one_write_read_transaction() {
    let mut driver = Itg3200Driver::new(I2cInterface::default(MockI2c::new()));

    assert!(driver.test_connection().unwrap());

    let bus = driver.release().release();
    assert_eq!(
        bus.transactions,
        vec![(0x68, vec![Transfer::Write(vec![0x00]), Transfer::Read(1)])]
    );
}

#[test]
fn test_burst_read_framing() {
    let mut bus = MockI2c::new();
    bus.registers[0x1D..0x23].copy_from_slice(&[0x00, 0x10, 0xFF, 0xF0, 0x7F, 0xFF]);
    let mut driver = Itg3200Driver::new(I2cInterface::default(bus));

    let data = driver.read_rotation().unwrap();
    assert_eq!((data.x, data.y, data.z), (16, -16, 32767));

    let bus = driver.release().release();
    assert_eq!(
        bus.transactions,
        vec![(0x68, vec![Transfer::Write(vec![0x1D]), Transfer::Read(6)])]
    );
}

#[test]
fn test_field_write_framing() {
    let mut bus = MockI2c::new();
    bus.registers[0x3E] = 0x40;
    let mut driver = Itg3200Driver::new(I2cInterface::alternative(bus));

    driver.set_clock_source(itg3200::ClockSource::PllXGyro).unwrap();

    let bus = driver.release().release();
    assert_eq!(bus.registers[0x3E], 0x41);
    assert_eq!(
        bus.transactions,
        vec![
            (0x69, vec![Transfer::Write(vec![0x3E]), Transfer::Read(1)]),
            (0x69, vec![Transfer::Write(vec![0x3E, 0x41])]),
        ]
    );
}

#[test]
fn test_bus_error_passes_through() {
    let mut bus = MockI2c::new();
    bus.fail_next = true;
    let mut driver = Itg3200Driver::new(I2cInterface::default(bus));

    assert!(matches!(
        driver.read_device_id(),
        Err(itg3200::Error::Bus(MockError))
    ));
    assert_eq!(driver.read_device_id().unwrap(), 0x34);
}

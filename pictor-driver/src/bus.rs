//! Display bus abstraction
//!
//! Defines the byte transport the flush engine writes through, plus the
//! stock I2C implementation. A bus carries two traffic kinds: command
//! bytes and framebuffer data; implementations add whatever framing the
//! physical link needs to tell them apart.

use embedded_hal::i2c::{ErrorKind, I2c};

use crate::cmd;

/// Common 7-bit I2C address for SSD1306 modules (some boards strap 0x3D).
pub const DEFAULT_I2C_ADDR: u8 = 0x3C;

/// Largest data payload per transaction. Longer bursts are split into
/// consecutive transactions, each with its own control byte.
const DATA_CHUNK: usize = 128;

/// Command bytes per transaction.
const CMD_CHUNK: usize = 7;

/// Transport errors, collapsed to what the caller can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Peripheral did not acknowledge
    Nack,
    /// Bus contention, lost arbitration, or peripheral busy
    Busy,
    /// Transfer did not complete in time
    Timeout,
}

/// Byte transport to a display controller.
pub trait DisplayBus {
    /// Send one or more command bytes.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), BusError>;

    /// Send a framebuffer data burst.
    fn send_data(&mut self, data: &[u8]) -> Result<(), BusError>;
}

/// I2C transport with SSD1306 control-byte framing: 0x00 prefixes
/// commands, 0x40 prefixes data.
pub struct I2cBus<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C: I2c> I2cBus<I2C> {
    /// Wrap an I2C peripheral at the default address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDR)
    }

    /// Wrap an I2C peripheral at a specific 7-bit address.
    pub fn with_address(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }
}

fn map_i2c_error(err: impl embedded_hal::i2c::Error) -> BusError {
    match err.kind() {
        ErrorKind::NoAcknowledge(_) => BusError::Nack,
        ErrorKind::ArbitrationLoss | ErrorKind::Bus | ErrorKind::Overrun => BusError::Busy,
        _ => BusError::Timeout,
    }
}

impl<I2C: I2c> DisplayBus for I2cBus<I2C> {
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), BusError> {
        for chunk in cmds.chunks(CMD_CHUNK) {
            let mut buf = [0u8; CMD_CHUNK + 1];
            buf[0] = cmd::CONTROL_COMMAND;
            buf[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.addr, &buf[..chunk.len() + 1])
                .map_err(map_i2c_error)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), BusError> {
        for chunk in data.chunks(DATA_CHUNK) {
            let mut buf = [0u8; DATA_CHUNK + 1];
            buf[0] = cmd::CONTROL_DATA;
            buf[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.addr, &buf[..chunk.len() + 1])
                .map_err(map_i2c_error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{NoAcknowledgeSource, Operation};
    use heapless::Vec;

    #[derive(Debug)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    #[derive(Default)]
    struct FakeI2c {
        writes: Vec<(u8, Vec<u8, 200>), 8>,
        fail_with: Option<ErrorKind>,
    }

    impl embedded_hal::i2c::ErrorType for FakeI2c {
        type Error = FakeError;
    }

    impl I2c for FakeI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), FakeError> {
            if let Some(kind) = self.fail_with {
                return Err(FakeError(kind));
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    let mut copy = Vec::new();
                    copy.extend_from_slice(bytes).unwrap();
                    self.writes.push((address, copy)).unwrap();
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_command_framing() {
        let mut bus = I2cBus::new(FakeI2c::default());
        bus.send_commands(&[0xAE]).unwrap();
        bus.send_commands(&[0x81, 0xFF]).unwrap();

        let writes = &bus.i2c.writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].0, DEFAULT_I2C_ADDR);
        assert_eq!(&writes[0].1[..], &[0x00, 0xAE]);
        assert_eq!(&writes[1].1[..], &[0x00, 0x81, 0xFF]);
    }

    #[test]
    fn test_data_framing_and_address_override() {
        let mut bus = I2cBus::with_address(FakeI2c::default(), 0x3D);
        bus.send_data(&[1, 2, 3]).unwrap();

        let writes = &bus.i2c.writes;
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, 0x3D);
        assert_eq!(&writes[0].1[..], &[0x40, 1, 2, 3]);
    }

    #[test]
    fn test_long_burst_splits_with_control_byte_each() {
        let mut bus = I2cBus::new(FakeI2c::default());
        let data = [0xAA; 150];
        bus.send_data(&data).unwrap();

        let writes = &bus.i2c.writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].1.len(), 129);
        assert_eq!(writes[1].1.len(), 23);
        assert_eq!(writes[0].1[0], 0x40);
        assert_eq!(writes[1].1[0], 0x40);
    }

    #[test]
    fn test_error_kind_mapping() {
        let cases = [
            (
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
                BusError::Nack,
            ),
            (ErrorKind::ArbitrationLoss, BusError::Busy),
            (ErrorKind::Bus, BusError::Busy),
            (ErrorKind::Overrun, BusError::Busy),
            (ErrorKind::Other, BusError::Timeout),
        ];
        for (kind, expected) in cases {
            let mut bus = I2cBus::new(FakeI2c {
                fail_with: Some(kind),
                ..FakeI2c::default()
            });
            assert_eq!(bus.send_commands(&[0xAE]), Err(expected), "{:?}", kind);
        }
    }
}

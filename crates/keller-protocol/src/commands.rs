//! Commands that can be sent to a transmitter.

use crate::constants::*;
use crate::error::ProtocolError;
use crate::frame;
use crate::types::Channel;

/// Commands understood by the transmitters, one per function code.
///
/// Each command knows its wire encoding and the fixed length of the
/// response it elicits. The response-length table below is the single
/// source of truth for the transaction layer; the protocol itself carries
/// no length field.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// F30: read a calibration coefficient.
    ReadCoefficient {
        /// Coefficient slot to read.
        slot: u8,
    },

    /// F31: write a calibration coefficient.
    WriteCoefficient {
        /// Coefficient slot to write.
        slot: u8,
        /// New coefficient value.
        value: f32,
    },

    /// F32: read a single configuration byte.
    ReadConfiguration {
        /// Configuration index to read.
        index: u8,
    },

    /// F33: write a single configuration byte.
    WriteConfiguration {
        /// Configuration index to write.
        index: u8,
        /// New value for the configuration byte.
        value: u8,
    },

    /// F48: initialize the device and read its firmware version.
    Initialize,

    /// F66: write a new bus address, or query the current one.
    SetAddress {
        /// Requested new address. [`QUERY_ADDRESS`] together with the
        /// transparent issue address queries without assigning.
        new_address: u8,
    },

    /// F69: read the factory serial number.
    ReadSerialNumber,

    /// F73: read a channel as floating point.
    ReadChannelFloat {
        /// Channel to read.
        channel: Channel,
    },

    /// F74: read a channel as a scaled 32-bit integer.
    ReadChannelInt {
        /// Channel to read.
        channel: Channel,
    },

    /// F95: zero-point command.
    ZeroSet {
        /// Zero-point command code (0 sets the zero of P1, 1 restores the
        /// factory zero).
        command: u8,
        /// Optional target value. `None` zeroes on the current reading;
        /// `Some(0.0)` is a legitimate explicit target, distinct from
        /// omitting it.
        target: Option<f32>,
    },

    /// F100: read a five-byte configuration block. Devices of class.group
    /// 5.20-5.24 and earlier only support the single-byte F32 read.
    ReadConfigurationBlock {
        /// Block index to read.
        index: u8,
    },
}

impl Command {
    /// The function code for this command.
    pub fn code(&self) -> u8 {
        match self {
            Command::ReadCoefficient { .. } => FN_READ_COEFFICIENT,
            Command::WriteCoefficient { .. } => FN_WRITE_COEFFICIENT,
            Command::ReadConfiguration { .. } => FN_READ_CONFIGURATION,
            Command::WriteConfiguration { .. } => FN_WRITE_CONFIGURATION,
            Command::Initialize => FN_INITIALIZE,
            Command::SetAddress { .. } => FN_SET_ADDRESS,
            Command::ReadSerialNumber => FN_READ_SERIAL_NUMBER,
            Command::ReadChannelFloat { .. } => FN_READ_CHANNEL_FLOAT,
            Command::ReadChannelInt { .. } => FN_READ_CHANNEL_INT,
            Command::ZeroSet { .. } => FN_ZERO_SET,
            Command::ReadConfigurationBlock { .. } => FN_READ_CONFIGURATION_BLOCK,
        }
    }

    /// Number of response bytes the device answers with, checksum included.
    pub fn response_len(&self) -> usize {
        match self {
            Command::ReadCoefficient { .. } => 8,
            Command::WriteCoefficient { .. } => 5,
            Command::ReadConfiguration { .. } => 5,
            Command::WriteConfiguration { .. } => 5,
            Command::Initialize => 10,
            Command::SetAddress { .. } => 5,
            Command::ReadSerialNumber => 8,
            Command::ReadChannelFloat { .. } => 9,
            Command::ReadChannelInt { .. } => 9,
            Command::ZeroSet { .. } => 5,
            Command::ReadConfigurationBlock { .. } => 9,
        }
    }

    /// Validate arguments against the rules the types cannot express.
    ///
    /// Runs before any bytes are written to the bus. `issue_address` is the
    /// address the command will be sent to; F66 needs it to tell an address
    /// assignment apart from a transparent-address query.
    pub fn validate(&self, issue_address: u8) -> Result<(), ProtocolError> {
        match self {
            Command::SetAddress { new_address } => {
                if *new_address == QUERY_ADDRESS && issue_address != TRANSPARENT_ADDRESS {
                    return Err(ProtocolError::InvalidArgument {
                        field: "new_address",
                        value: *new_address,
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Encode the command payload: the bytes between the function code and
    /// the checksum. Multi-byte values are big-endian.
    pub fn payload(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            Command::ReadCoefficient { slot } => buf.push(*slot),

            Command::WriteCoefficient { slot, value } => {
                buf.push(*slot);
                buf.extend_from_slice(&value.to_be_bytes());
            }

            Command::ReadConfiguration { index } => buf.push(*index),

            Command::WriteConfiguration { index, value } => {
                buf.push(*index);
                buf.push(*value);
            }

            Command::Initialize | Command::ReadSerialNumber => {}

            Command::SetAddress { new_address } => buf.push(*new_address),

            Command::ReadChannelFloat { channel } => buf.push(channel.id()),

            Command::ReadChannelInt { channel } => buf.push(channel.id()),

            Command::ZeroSet { command, target } => {
                buf.push(*command);
                if let Some(target) = target {
                    buf.extend_from_slice(&target.to_be_bytes());
                }
            }

            Command::ReadConfigurationBlock { index } => buf.push(*index),
        }

        buf
    }

    /// Validate the arguments and assemble the full command frame for
    /// `address`.
    pub fn encode(&self, address: u8) -> Result<Vec<u8>, ProtocolError> {
        self.validate(address)?;
        Ok(frame::encode(address, self.code(), &self.payload()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_coefficient_frame() {
        let frame = Command::ReadCoefficient { slot: 65 }
            .encode(2)
            .expect("should encode");
        assert_eq!(&frame[..3], &[2, 30, 65]);
        assert_eq!(frame.len(), 5);
    }

    #[test]
    fn test_write_coefficient_payload_is_big_endian() {
        let payload = Command::WriteCoefficient {
            slot: 65,
            value: 2.1,
        }
        .payload();
        assert_eq!(payload, vec![65, 0x40, 0x06, 0x66, 0x66]);
    }

    #[test]
    fn test_zero_set_optional_target() {
        let bare = Command::ZeroSet {
            command: 0,
            target: None,
        };
        assert_eq!(bare.payload(), vec![0]);

        // An explicit zero target is encoded, not treated as absent.
        let explicit = Command::ZeroSet {
            command: 0,
            target: Some(0.0),
        };
        assert_eq!(explicit.payload(), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_set_address_rejects_query_sentinel_off_transparent() {
        let cmd = Command::SetAddress { new_address: QUERY_ADDRESS };
        assert!(matches!(
            cmd.validate(2),
            Err(ProtocolError::InvalidArgument {
                field: "new_address",
                value: 0,
            })
        ));
        assert!(cmd.validate(TRANSPARENT_ADDRESS).is_ok());
    }

    #[test]
    fn test_response_lengths() {
        assert_eq!(Command::ReadCoefficient { slot: 0 }.response_len(), 8);
        assert_eq!(Command::Initialize.response_len(), 10);
        assert_eq!(
            Command::ReadChannelFloat {
                channel: Channel::P1
            }
            .response_len(),
            9
        );
        assert_eq!(Command::ReadSerialNumber.response_len(), 8);
        assert_eq!(
            Command::ReadConfigurationBlock { index: 0 }.response_len(),
            9
        );
    }
}

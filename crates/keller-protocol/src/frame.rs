//! Frame assembly and checksum validation.
//!
//! Both directions on the bus use the same envelope:
//!
//! ```text
//! +---------+----------+-------------+--------+--------+
//! | address | function | payload ... | crc_hi | crc_lo |
//! +---------+----------+-------------+--------+--------+
//! ```
//!
//! Responses carry a status byte where commands carry the function code.
//! There is no length field; the master knows each function's response
//! length in advance.

use bytes::{BufMut, BytesMut};
use log::trace;

use crate::constants::CRC_LEN;
use crate::crc::crc16;
use crate::error::ProtocolError;

/// Assemble a command frame: address, function code, payload, trailing CRC.
///
/// Payload length is not validated here; the command encoders own that.
pub fn encode(address: u8, function: u8, payload: &[u8]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(2 + payload.len() + CRC_LEN);
    buf.put_u8(address);
    buf.put_u8(function);
    buf.put_slice(payload);
    let crc = crc16(&buf);
    buf.put_slice(&crc);
    buf.to_vec()
}

/// Validate the trailing checksum of a received frame and return the body
/// (everything before the checksum).
///
/// The status byte is not inspected here; that interpretation is layered
/// above in [`crate::responses`].
pub fn check(frame: &[u8]) -> Result<&[u8], ProtocolError> {
    if frame.len() < CRC_LEN {
        return Err(ProtocolError::FrameTooShort {
            expected: CRC_LEN,
            actual: frame.len(),
        });
    }

    let (body, trailer) = frame.split_at(frame.len() - CRC_LEN);
    let expected = crc16(body);
    if expected != trailer {
        trace!(
            "frame CRC mismatch: computed {:02X?}, received {:02X?}",
            expected,
            trailer
        );
        return Err(ProtocolError::CrcMismatch {
            expected,
            actual: [trailer[0], trailer[1]],
        });
    }

    Ok(body)
}

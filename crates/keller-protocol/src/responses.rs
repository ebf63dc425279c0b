//! Typed decoding of response bodies.
//!
//! All decoders operate on a CRC-validated body as returned by
//! [`crate::frame::check`]: `[address, status, payload ...]`. Status
//! interpretation is a separate step ([`check_status`]) so the transaction
//! layer can reject device errors before any payload bytes are touched.

use crate::constants::{
    PAYLOAD_OFFSET, STATUS_ERROR_THRESHOLD, STATUS_OFFSET, TRANSPARENT_ADDRESS,
};
use crate::error::ProtocolError;
use crate::types::FirmwareVersion;

/// Inspect the status byte of a validated body.
///
/// Values above 127 carry a device error code; in that case the payload
/// bytes are meaningless and must not be interpreted.
pub fn check_status(body: &[u8]) -> Result<(), ProtocolError> {
    let status = *body
        .get(STATUS_OFFSET)
        .ok_or(ProtocolError::FrameTooShort {
            expected: STATUS_OFFSET + 1,
            actual: body.len(),
        })?;

    if status > STATUS_ERROR_THRESHOLD {
        return Err(ProtocolError::Device { code: status });
    }
    Ok(())
}

/// Slice `len` payload bytes out of a body, with a length guard.
fn payload(body: &[u8], len: usize) -> Result<&[u8], ProtocolError> {
    let end = PAYLOAD_OFFSET + len;
    if body.len() < end {
        return Err(ProtocolError::FrameTooShort {
            expected: end,
            actual: body.len(),
        });
    }
    Ok(&body[PAYLOAD_OFFSET..end])
}

/// Decode a big-endian IEEE754 float payload (F30, F73).
pub fn decode_float(body: &[u8]) -> Result<f32, ProtocolError> {
    let bytes = payload(body, 4)?;
    Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decode a big-endian unsigned 32-bit payload (F69).
pub fn decode_u32(body: &[u8]) -> Result<u32, ProtocolError> {
    let bytes = payload(body, 4)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decode a big-endian signed 32-bit payload (F74).
pub fn decode_i32(body: &[u8]) -> Result<i32, ProtocolError> {
    let bytes = payload(body, 4)?;
    Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Decode a single-byte payload (F32, F66).
pub fn decode_byte(body: &[u8]) -> Result<u8, ProtocolError> {
    Ok(payload(body, 1)?[0])
}

/// Decode the firmware version reported by F48.
pub fn decode_firmware_version(body: &[u8]) -> Result<FirmwareVersion, ProtocolError> {
    let bytes = payload(body, 4)?;
    Ok(FirmwareVersion::from_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3],
    ]))
}

/// Decode the five raw configuration bytes returned by F100.
pub fn decode_block(body: &[u8]) -> Result<[u8; 5], ProtocolError> {
    let bytes = payload(body, 5)?;
    Ok([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]])
}

/// Decode the confirmation byte of an F66 address write.
///
/// `requested` is the address that was asked for and `issue_address` the
/// address the command was sent to. A confirmation that differs from the
/// request means another device already owns that address — unless the
/// write was a query at the transparent address, where the echoed value
/// simply is the answer.
pub fn decode_address_ack(
    body: &[u8],
    requested: u8,
    issue_address: u8,
) -> Result<u8, ProtocolError> {
    let confirmed = decode_byte(body)?;

    if confirmed != requested && issue_address != TRANSPARENT_ADDRESS {
        return Err(ProtocolError::AddressConflict {
            requested,
            actual: confirmed,
        });
    }
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_ok() {
        assert!(check_status(&[2, 0, 1, 2, 3, 4]).is_ok());
        // 127 is the highest non-error status.
        assert!(check_status(&[2, 127]).is_ok());
    }

    #[test]
    fn test_check_status_device_error() {
        assert_eq!(
            check_status(&[2, 200, 0xDE, 0xAD, 0xBE, 0xEF]),
            Err(ProtocolError::Device { code: 200 })
        );
    }

    #[test]
    fn test_decode_float_vector() {
        // 0x40066666 is the IEEE754 encoding of 2.1.
        let body = [2, 0, 0x40, 0x06, 0x66, 0x66];
        let value = decode_float(&body).expect("should decode");
        assert!((value - 2.1).abs() < 1e-6);
    }

    #[test]
    fn test_coefficient_round_trip() {
        // A coefficient written through F31 comes back bit-identical
        // through an F30 read.
        let payload = crate::Command::WriteCoefficient {
            slot: 65,
            value: 1.25e-3,
        }
        .payload();
        let body = [&[2, 0][..], &payload[1..]].concat();
        let value = decode_float(&body).expect("should decode");
        assert!((value - 1.25e-3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_decode_u32() {
        let body = [2, 0, 0x00, 0x12, 0xD6, 0x87];
        assert_eq!(decode_u32(&body).expect("should decode"), 1_234_567);
    }

    #[test]
    fn test_decode_i32_negative() {
        let body = [2, 0, 0xFF, 0xFF, 0xFF, 0x9C];
        assert_eq!(decode_i32(&body).expect("should decode"), -100);
    }

    #[test]
    fn test_decode_firmware_version() {
        let body = [2, 0, 5, 20, 21, 14, 0, 0];
        let version = decode_firmware_version(&body).expect("should decode");
        assert_eq!(version.to_string(), "5.20-21.14");
    }

    #[test]
    fn test_decode_block_returns_raw_bytes() {
        let body = [2, 0, 9, 1, 0, 4, 17];
        assert_eq!(decode_block(&body).expect("should decode"), [9, 1, 0, 4, 17]);
    }

    #[test]
    fn test_decode_truncated_body() {
        assert!(matches!(
            decode_float(&[2, 0, 0x40]),
            Err(ProtocolError::FrameTooShort { .. })
        ));
    }

    #[test]
    fn test_address_ack_confirmed() {
        let body = [2, 0, 101];
        assert_eq!(decode_address_ack(&body, 101, 2).expect("confirmed"), 101);
    }

    #[test]
    fn test_address_ack_conflict() {
        let body = [2, 0, 5];
        assert_eq!(
            decode_address_ack(&body, 101, 2),
            Err(ProtocolError::AddressConflict {
                requested: 101,
                actual: 5,
            })
        );
    }

    #[test]
    fn test_address_ack_transparent_probe_never_conflicts() {
        let body = [2, 0, 101];
        assert_eq!(
            decode_address_ack(&body, 0, TRANSPARENT_ADDRESS).expect("probe"),
            101
        );
    }
}

//! Modbus-style CRC16 checksum.
//!
//! Every frame on the bus ends with a CRC16 computed over all preceding
//! bytes, transmitted high byte first.

use crate::constants::{CRC16_POLYNOMIAL, CRC16_SEED};

/// Compute the CRC16 of `data`, returned as `[high, low]` ready to append
/// to an outgoing frame.
pub fn crc16(data: &[u8]) -> [u8; 2] {
    let mut crc = CRC16_SEED;

    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            let carry = crc & 1 != 0;
            crc >>= 1;
            if carry {
                crc ^= CRC16_POLYNOMIAL;
            }
        }
    }

    [(crc >> 8) as u8, (crc & 0x00FF) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // The F48 initialize frame for address 2.
        assert_eq!(crc16(&[2, 48]), [0xC4, 0x00]);
    }

    #[test]
    fn test_deterministic() {
        let data = [250, 66, 0, 17, 93];
        assert_eq!(crc16(&data), crc16(&data));
    }

    #[test]
    fn test_empty_input_is_seed() {
        assert_eq!(crc16(&[]), [0xFF, 0xFF]);
    }

    #[test]
    fn test_single_bit_changes_checksum() {
        let base = crc16(&[2, 30, 65]);
        assert_ne!(base, crc16(&[2, 30, 64]));
        assert_ne!(base, crc16(&[3, 30, 65]));
    }
}

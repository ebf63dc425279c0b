//! Protocol error types.

use thiserror::Error;

/// Errors raised while encoding commands or interpreting responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Frame or response body is too short to interpret.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// The received checksum does not match the one recomputed over the
    /// frame body.
    #[error("CRC mismatch: computed {expected:02X?}, received {actual:02X?}")]
    CrcMismatch {
        /// Checksum computed over the received body.
        expected: [u8; 2],
        /// Checksum carried by the frame.
        actual: [u8; 2],
    },

    /// A command argument is outside the protocol-allowed range. Rejected
    /// before any bytes reach the bus.
    #[error("invalid {field}: {value}")]
    InvalidArgument {
        /// Name of the rejected argument.
        field: &'static str,
        /// The rejected value.
        value: u8,
    },

    /// The device answered with an error status instead of a payload.
    #[error("device error {code}")]
    Device {
        /// Raw status byte (always above 127).
        code: u8,
    },

    /// An address write was not confirmed: the device echoed a different
    /// address than the one requested, meaning the address is already in
    /// use on the bus.
    #[error("address conflict: requested {requested}, device answered {actual}")]
    AddressConflict {
        /// Address the caller asked for.
        requested: u8,
        /// Address the device reported instead.
        actual: u8,
    },
}

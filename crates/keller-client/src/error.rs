//! Client error types.

use thiserror::Error;

pub use keller_protocol::ProtocolError;

/// Errors produced by a bus transaction.
///
/// Protocol-level failures (checksum, device status, argument validation,
/// address confirmation) arrive wrapped in [`Error::Protocol`]; the
/// variants here cover the transport and sequencing stages around them.
/// Whatever the failure, the transport has already been released by the
/// time the error reaches the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport failed to open, write, or read.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The device sent nothing back before the read timeout. Distinct from
    /// a malformed answer: the bus stayed silent.
    #[error("device {address} did not respond")]
    NoResponse {
        /// Address the request was sent to.
        address: u8,
    },

    /// The bytes looped back on the half-duplex bus differ from the frame
    /// that was written: a wiring fault, a collision, or a second
    /// transmitter on the line.
    #[error("echo mismatch on the bus")]
    EchoMismatch,

    /// Protocol-level failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

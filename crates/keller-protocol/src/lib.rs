//! KELLER bus wire protocol.
//!
//! Types and codecs for the binary request/response protocol spoken by
//! KELLER pressure/temperature transmitters over a half-duplex serial bus.
//! The master addresses one device per exchange; both directions use the
//! same envelope with a trailing CRC16 (high byte first):
//!
//! ```text
//! command:  [address][function][payload ...][crc_hi][crc_lo]
//! response: [address][status  ][payload ...][crc_hi][crc_lo]
//! ```
//!
//! Responses carry no length field; the master knows the fixed response
//! length of each function code in advance (see [`Command::response_len`]).
//! A status byte above 127 signals a device-side error and voids the
//! payload.
//!
//! This crate is I/O-free. The `keller-client` crate layers the transaction
//! sequencing (echo verification, timeouts, port lifecycle) on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use keller_protocol::{frame, responses, Command};
//!
//! // Build the frame for "read coefficient 65 from device 2"
//! let request = Command::ReadCoefficient { slot: 65 }.encode(2)?;
//!
//! // ... exchange over the bus ...
//!
//! let body = frame::check(&reply)?;
//! responses::check_status(body)?;
//! let gain = responses::decode_float(body)?;
//! ```

mod commands;
mod constants;
mod error;
mod types;

pub mod crc;
pub mod frame;
pub mod responses;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use types::*;

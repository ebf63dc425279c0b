//! Transaction layer for the KELLER bus protocol.
//!
//! [`BusClient`] drives one request/response exchange at a time over a
//! byte-oriented [`Transport`]: open the port, flush stale input, write the
//! command frame, verify the half-duplex echo, read the fixed-length
//! response, validate checksum and status, decode the typed result — and
//! release the port on every exit path.
//!
//! The bus is strict half-duplex with no multiplexing or pipelining, so the
//! client takes `&mut self` per call; concurrent callers must serialize
//! whole transactions externally. No retries are performed internally —
//! reads are idempotent at the protocol level, so callers may safely retry
//! a failed read transaction from scratch.
//!
//! # Example
//!
//! ```rust,ignore
//! use keller_client::{BusClient, SerialTransport};
//! use keller_protocol::Channel;
//!
//! let mut bus = BusClient::new(SerialTransport::new("/dev/ttyUSB0", 115_200));
//! let firmware = bus.initialize(2)?;
//! let pressure = bus.read_channel_float(2, Channel::P1)?;
//! ```

mod client;
mod error;
mod transport;

#[cfg(feature = "serialport")]
mod serial;

pub use client::*;
pub use error::*;
pub use transport::*;

#[cfg(feature = "serialport")]
pub use serial::*;

//! Byte-transport abstraction.
//!
//! The protocol needs nothing more than open/close, a buffered-input
//! discard, a blocking write, and a timeout-bounded read. Anything with
//! those semantics — a USB serial converter, an RS-485 adapter, a test
//! double — can carry it.

use std::io;

/// A byte-oriented, half-duplex transport with timeout-bounded reads.
pub trait Transport {
    /// Open the underlying channel. Called at the start of every
    /// transaction; the channel stays closed between transactions so other
    /// masters can use the bus.
    fn open(&mut self) -> io::Result<()>;

    /// Close the underlying channel. Infallible: called on every
    /// transaction exit path, including failures.
    fn close(&mut self);

    /// Drop any bytes already buffered on the receive side, left over from
    /// a prior aborted exchange.
    fn discard_input(&mut self) -> io::Result<()>;

    /// Write the whole buffer.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Read up to `count` bytes, blocking until they all arrive or the
    /// configured timeout elapses. A short (possibly empty) buffer means
    /// the timeout hit first; that is not an `Err`.
    fn read_exact(&mut self, count: usize) -> io::Result<Vec<u8>>;
}

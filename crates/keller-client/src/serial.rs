//! Serial-port transport backed by the `serialport` crate.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{ClearBuffer, DataBits, Parity, SerialPort, StopBits};

use crate::transport::Transport;

/// Default read timeout, covering the transmitters' worst-case turnaround.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

/// A [`Transport`] over a local serial port.
///
/// The link is always 8 data bits, no parity, one stop bit; baud rate and
/// read timeout are configurable. The port is opened at transaction start
/// and dropped again on close, so the device stays reachable for other
/// masters between transactions.
pub struct SerialTransport {
    path: String,
    baud_rate: u32,
    timeout: Duration,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    /// Create a transport for the port at `path` with the default timeout.
    pub fn new(path: impl Into<String>, baud_rate: u32) -> Self {
        SerialTransport {
            path: path.into(),
            baud_rate,
            timeout: DEFAULT_TIMEOUT,
            port: None,
        }
    }

    /// Replace the read timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn port(&mut self) -> io::Result<&mut Box<dyn SerialPort>> {
        self.port
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "port not open"))
    }
}

impl Transport for SerialTransport {
    fn open(&mut self) -> io::Result<()> {
        let port = serialport::new(&self.path, self.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(self.timeout)
            .open()
            .map_err(io::Error::from)?;
        self.port = Some(port);
        Ok(())
    }

    fn close(&mut self) {
        // Dropping the handle releases the OS port.
        self.port = None;
    }

    fn discard_input(&mut self) -> io::Result<()> {
        self.port()?
            .clear(ClearBuffer::Input)
            .map_err(io::Error::from)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port()?.write_all(data)
    }

    fn read_exact(&mut self, count: usize) -> io::Result<Vec<u8>> {
        let port = self.port()?;
        let mut buf = vec![0u8; count];
        let mut filled = 0;

        while filled < count {
            match port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) => return Err(e),
            }
        }

        buf.truncate(filled);
        Ok(buf)
    }
}

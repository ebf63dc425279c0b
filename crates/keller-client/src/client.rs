//! The bus client: one request/response transaction per call.

use log::{debug, trace};

use keller_protocol::{
    frame, responses, Channel, Command, FirmwareVersion, QUERY_ADDRESS, TRANSPARENT_ADDRESS,
};

use crate::error::Error;
use crate::transport::Transport;

/// Master-side client for a bus of transmitters.
///
/// The client owns its transport and performs strictly one transaction at a
/// time (`&mut self` per call). The port is opened when a transaction
/// starts and released on every exit path, so the bus stays free for other
/// masters between calls.
pub struct BusClient<T: Transport> {
    transport: T,
    echo: bool,
}

impl<T: Transport> BusClient<T> {
    /// Create a client over `transport` with echo verification enabled.
    pub fn new(transport: T) -> Self {
        BusClient {
            transport,
            echo: true,
        }
    }

    /// Enable or disable echo verification.
    ///
    /// On a half-duplex bus the master's own transmission is looped back;
    /// comparing it byte-for-byte against the written frame catches wiring
    /// faults, collisions, and second transmitters before the response is
    /// trusted. Disable only for transports that do not loop back.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    // ------------------------------------------------------------------
    // Protocol functions
    // ------------------------------------------------------------------

    /// F30: read calibration coefficient `slot`.
    pub fn read_coefficient(&mut self, address: u8, slot: u8) -> Result<f32, Error> {
        let body = self.transact(address, &Command::ReadCoefficient { slot })?;
        Ok(responses::decode_float(&body)?)
    }

    /// F31: write `value` to calibration coefficient `slot`.
    pub fn write_coefficient(&mut self, address: u8, slot: u8, value: f32) -> Result<(), Error> {
        self.transact(address, &Command::WriteCoefficient { slot, value })?;
        Ok(())
    }

    /// F32: read configuration byte `index`.
    pub fn read_configuration(&mut self, address: u8, index: u8) -> Result<u8, Error> {
        let body = self.transact(address, &Command::ReadConfiguration { index })?;
        Ok(responses::decode_byte(&body)?)
    }

    /// F33: write `value` to configuration byte `index`.
    pub fn write_configuration(&mut self, address: u8, index: u8, value: u8) -> Result<(), Error> {
        self.transact(address, &Command::WriteConfiguration { index, value })?;
        Ok(())
    }

    /// F48: initialize the device and read its firmware version. This
    /// should be the first call after power-up.
    pub fn initialize(&mut self, address: u8) -> Result<FirmwareVersion, Error> {
        let body = self.transact(address, &Command::Initialize)?;
        Ok(responses::decode_firmware_version(&body)?)
    }

    /// F66: assign `new_address` to the device at `address`.
    ///
    /// The device confirms by echoing the new address back; a different
    /// echo means the address is already taken on the bus and the call
    /// fails with an address conflict.
    pub fn set_address(&mut self, address: u8, new_address: u8) -> Result<u8, Error> {
        let body = self.transact(address, &Command::SetAddress { new_address })?;
        Ok(responses::decode_address_ack(&body, new_address, address)?)
    }

    /// F66 probe: query the address of whatever device currently holds the
    /// bus, without assigning anything. Single-device buses only.
    pub fn query_address(&mut self) -> Result<u8, Error> {
        self.set_address(TRANSPARENT_ADDRESS, QUERY_ADDRESS)
    }

    /// F69: read the factory serial number.
    pub fn read_serial_number(&mut self, address: u8) -> Result<u32, Error> {
        let body = self.transact(address, &Command::ReadSerialNumber)?;
        Ok(responses::decode_u32(&body)?)
    }

    /// F73: read `channel` as a float in the channel's physical unit.
    pub fn read_channel_float(&mut self, address: u8, channel: Channel) -> Result<f32, Error> {
        let body = self.transact(address, &Command::ReadChannelFloat { channel })?;
        Ok(responses::decode_float(&body)?)
    }

    /// F74: read `channel` as a scaled 32-bit integer.
    pub fn read_channel_int(&mut self, address: u8, channel: Channel) -> Result<i32, Error> {
        let body = self.transact(address, &Command::ReadChannelInt { channel })?;
        Ok(responses::decode_i32(&body)?)
    }

    /// F95: zero-point command. With a `target` the zero is shifted so the
    /// current reading becomes `target`; without one the channel zeroes on
    /// the current reading.
    pub fn set_zero(&mut self, address: u8, command: u8, target: Option<f32>) -> Result<(), Error> {
        self.transact(address, &Command::ZeroSet { command, target })?;
        Ok(())
    }

    /// F100: read the five-byte configuration block at `index`.
    ///
    /// Devices of class.group 5.20-5.24 and earlier do not support this;
    /// use [`BusClient::read_configuration`] there instead.
    pub fn read_configuration_block(&mut self, address: u8, index: u8) -> Result<[u8; 5], Error> {
        let body = self.transact(address, &Command::ReadConfigurationBlock { index })?;
        Ok(responses::decode_block(&body)?)
    }

    // ------------------------------------------------------------------
    // Transaction sequencing
    // ------------------------------------------------------------------

    /// Run one full request/response transaction and return the validated
    /// response body `[address, status, payload ...]`.
    fn transact(&mut self, address: u8, command: &Command) -> Result<Vec<u8>, Error> {
        // Argument validation happens here, before the port is touched.
        let request = command.encode(address)?;
        debug!("F{} transaction with device {}", command.code(), address);

        let mut session = Session::open(&mut self.transport)?;
        session.discard_input()?;

        trace!("tx {}", hex::encode(&request));
        session.write_all(&request)?;

        if self.echo {
            let echo = session.read_exact(request.len())?;
            if echo != request {
                trace!("echo {}", hex::encode(&echo));
                return Err(Error::EchoMismatch);
            }
        }

        let reply = session.read_exact(command.response_len())?;
        trace!("rx {}", hex::encode(&reply));
        if reply.is_empty() {
            return Err(Error::NoResponse { address });
        }

        let body = frame::check(&reply)?;
        responses::check_status(body)?;
        Ok(body.to_vec())
    }
}

/// Scoped port session: the transport is open for exactly the lifetime of
/// this guard and closed again when it drops, whichever way the
/// transaction ends.
struct Session<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> Session<'a, T> {
    fn open(transport: &'a mut T) -> Result<Self, Error> {
        transport.open()?;
        Ok(Session { transport })
    }
}

impl<T: Transport> Drop for Session<'_, T> {
    fn drop(&mut self) {
        self.transport.close();
    }
}

impl<T: Transport> std::ops::Deref for Session<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.transport
    }
}

impl<T: Transport> std::ops::DerefMut for Session<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.transport
    }
}

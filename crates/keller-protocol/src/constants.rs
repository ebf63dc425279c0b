//! Protocol constants
//!
//! Function codes, reserved addresses, and frame-layout values for the
//! KELLER bus protocol. The function-code set is closed and fixed per
//! protocol version.

// ============================================================================
// Function Codes (master → device)
// ============================================================================

/// F30: read a calibration coefficient in IEEE754 format.
pub const FN_READ_COEFFICIENT: u8 = 30;
/// F31: write a calibration coefficient.
pub const FN_WRITE_COEFFICIENT: u8 = 31;
/// F32: read a single configuration byte.
pub const FN_READ_CONFIGURATION: u8 = 32;
/// F33: write a single configuration byte.
pub const FN_WRITE_CONFIGURATION: u8 = 33;
/// F48: initialize the device and report its firmware version.
pub const FN_INITIALIZE: u8 = 48;
/// F66: write a new bus address, or query the current one.
pub const FN_SET_ADDRESS: u8 = 66;
/// F69: read the factory serial number.
pub const FN_READ_SERIAL_NUMBER: u8 = 69;
/// F73: read a measurement channel as floating point.
pub const FN_READ_CHANNEL_FLOAT: u8 = 73;
/// F74: read a measurement channel as a scaled 32-bit integer.
pub const FN_READ_CHANNEL_INT: u8 = 74;
/// F95: zero-point commands.
pub const FN_ZERO_SET: u8 = 95;
/// F100: read a five-byte configuration block.
pub const FN_READ_CONFIGURATION_BLOCK: u8 = 100;

// ============================================================================
// Addresses
// ============================================================================

/// Transparent address: every device answers regardless of its configured
/// address. Only meaningful with a single device on the bus, since there is
/// no identity confirmation.
pub const TRANSPARENT_ADDRESS: u8 = 250;

/// Requested-address sentinel that turns an F66 write into a pure query.
/// Only valid when the command is issued at [`TRANSPARENT_ADDRESS`].
pub const QUERY_ADDRESS: u8 = 0;

// ============================================================================
// Frame Layout
// ============================================================================

/// Number of trailing checksum bytes on every frame.
pub const CRC_LEN: usize = 2;
/// Offset of the status byte within a response body.
pub const STATUS_OFFSET: usize = 1;
/// Offset of the first payload byte within a response body.
pub const PAYLOAD_OFFSET: usize = 2;
/// Status bytes above this value carry a device error code.
pub const STATUS_ERROR_THRESHOLD: u8 = 127;

// ============================================================================
// CRC16
// ============================================================================

/// CRC16 polynomial (reflected Modbus form).
pub const CRC16_POLYNOMIAL: u16 = 0xA001;
/// CRC16 accumulator seed.
pub const CRC16_SEED: u16 = 0xFFFF;

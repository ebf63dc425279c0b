//! Common types used in the protocol.

/// Measurement channel selectors for the channel-read functions.
///
/// The numeric ids are fixed by the device firmware. `Other` covers ids not
/// listed here; newer device classes keep adding channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// CH0: the raw measuring-cell signal.
    Raw,
    /// P1: process pressure value 1.
    P1,
    /// P2: process pressure value 2.
    P2,
    /// T: sensor temperature.
    T,
    /// TOB1: temperature of bridge 1.
    Tob1,
    /// TOB2: temperature of bridge 2.
    Tob2,
    /// ConTc: compensated temperature.
    ConTc,
    /// ConRaw: raw compensation value.
    ConRaw,
    /// Any other channel id the device understands.
    Other(u8),
}

impl Channel {
    /// The on-wire channel id.
    pub fn id(self) -> u8 {
        match self {
            Channel::Raw => 0,
            Channel::P1 => 1,
            Channel::P2 => 2,
            Channel::T => 3,
            Channel::Tob1 => 4,
            Channel::Tob2 => 5,
            Channel::ConTc => 10,
            Channel::ConRaw => 11,
            Channel::Other(id) => id,
        }
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> u8 {
        channel.id()
    }
}

impl From<u8> for Channel {
    fn from(id: u8) -> Channel {
        match id {
            0 => Channel::Raw,
            1 => Channel::P1,
            2 => Channel::P2,
            3 => Channel::T,
            4 => Channel::Tob1,
            5 => Channel::Tob2,
            10 => Channel::ConTc,
            11 => Channel::ConRaw,
            other => Channel::Other(other),
        }
    }
}

/// Firmware identification reported by the initialize function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// Device class.
    pub class: u8,
    /// Device group within the class.
    pub group: u8,
    /// Firmware release year.
    pub year: u8,
    /// Firmware release week.
    pub week: u8,
}

impl FirmwareVersion {
    /// Build a version from the four raw payload bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        FirmwareVersion {
            class: bytes[0],
            group: bytes[1],
            year: bytes[2],
            week: bytes[3],
        }
    }
}

impl std::fmt::Display for FirmwareVersion {
    /// Formats as `class.group-year.week`, the notation used in the device
    /// data sheets.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}-{}.{}",
            self.class, self.group, self.year, self.week
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_round_trip() {
        for id in 0..=255u8 {
            assert_eq!(Channel::from(id).id(), id);
        }
    }

    #[test]
    fn test_known_channel_ids() {
        assert_eq!(Channel::Raw.id(), 0);
        assert_eq!(Channel::P1.id(), 1);
        assert_eq!(Channel::Tob1.id(), 4);
        assert_eq!(Channel::ConTc.id(), 10);
        assert_eq!(Channel::ConRaw.id(), 11);
    }

    #[test]
    fn test_firmware_version_display() {
        let version = FirmwareVersion::from_bytes([5, 20, 21, 14]);
        assert_eq!(version.to_string(), "5.20-21.14");
    }
}

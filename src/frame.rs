//! Direction markers and validated frames.

use std::fmt::{Display, Formatter};

use crate::types::Payload;

/// Direction marker of an MSP frame, the third byte on the wire.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    /// A request sent towards the device (`<`).
    Request = b'<',
    /// A successful response sent by the device (`>`).
    Response = b'>',
    /// An error response sent by the device (`!`).
    Error = b'!',
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request => write!(f, "request"),
            Self::Response => write!(f, "response"),
            Self::Error => write!(f, "error response"),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as Self
    }
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, u8> {
        match byte {
            b'<' => Ok(Self::Request),
            b'>' => Ok(Self::Response),
            b'!' => Ok(Self::Error),
            byte => Err(byte),
        }
    }
}

/// A complete, checksum-validated MSP frame.
///
/// Only ever constructed by the receiver once the transmitted checksum has
/// matched the accumulated fold; the payload length is implicit in the
/// buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    command: u8,
    payload: Payload,
}

impl Frame {
    pub(crate) const fn new(command: u8, payload: Payload) -> Self {
        Self { command, payload }
    }

    /// Returns the command code.
    #[must_use]
    pub const fn command(&self) -> u8 {
        self.command
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consumes the frame, returning its payload buffer.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MSP({:#04X}, {} bytes)", self.command, self.payload.len())
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn test_direction_round_trip() {
        for direction in [Direction::Request, Direction::Response, Direction::Error] {
            assert_eq!(Direction::try_from(u8::from(direction)), Ok(direction));
        }
    }

    #[test]
    fn test_direction_wire_bytes() {
        assert_eq!(u8::from(Direction::Request), b'<');
        assert_eq!(u8::from(Direction::Response), b'>');
        assert_eq!(u8::from(Direction::Error), b'!');
    }

    #[test]
    fn test_direction_rejects_other_bytes() {
        assert_eq!(Direction::try_from(b'M'), Err(b'M'));
        assert_eq!(Direction::try_from(0x00), Err(0x00));
    }
}

//! Byte-driven receive state machine for inbound MSP frames.

use log::{debug, trace, warn};

use crate::frame::{Direction, Frame};
use crate::hex_slice::HexSlice;
use crate::protocol::{MAX_PAYLOAD_SIZE, SYNC, TAG};
use crate::types::Payload;

/// Parse state of the receiver.
///
/// Together with the frame-in-progress fields of [`FrameReceiver`], the
/// current state fully determines how the next byte is interpreted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum State {
    /// Scanning for the sync byte.
    #[default]
    Idle,
    /// Sync byte seen, expecting the protocol tag.
    SyncSeen,
    /// Protocol tag seen, expecting the direction marker.
    TagSeen,
    /// Direction marker seen, expecting the length byte.
    DirectionSeen,
    /// Length byte seen, expecting the command byte.
    SizeSeen,
    /// Command byte seen, reading payload bytes and finally the checksum.
    CommandSeen,
}

/// Byte-driven state machine that assembles validated MSP frames.
///
/// The receiver accepts frames carrying exactly one [`Direction`] marker.
/// Any unexpected byte in a header position is treated as line noise and the
/// machine falls back to scanning for the next sync byte, which makes it
/// self-resynchronizing on a link shared with garbage. Malformed or
/// checksum-invalid input is dropped without signal, so a caller cannot
/// distinguish "no frame yet" from "frame rejected".
///
/// The payload buffer is fixed capacity and reused across frames; nothing is
/// allocated per frame.
#[derive(Debug)]
pub struct FrameReceiver {
    direction: Direction,
    state: State,
    size: u8,
    command: u8,
    checksum: u8,
    payload: Payload,
}

impl FrameReceiver {
    /// Creates a receiver that accepts frames with the given direction marker.
    ///
    /// Devices pass [`Direction::Request`], hosts [`Direction::Response`].
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            state: State::Idle,
            size: 0,
            command: 0,
            checksum: 0,
            payload: Payload::new(),
        }
    }

    /// Advances the state machine by one byte.
    ///
    /// Returns a completed [`Frame`] once a byte finishes a frame whose
    /// transmitted checksum matches the accumulated fold; `None` for every
    /// other byte, including those that silently abort a frame in progress.
    pub fn receive(&mut self, byte: u8) -> Option<Frame> {
        match self.state {
            State::Idle => {
                if byte == SYNC {
                    self.state = State::SyncSeen;
                }

                None
            }
            State::SyncSeen => {
                self.state = if byte == TAG {
                    State::TagSeen
                } else {
                    State::Idle
                };

                None
            }
            State::TagSeen => {
                self.state = if byte == u8::from(self.direction) {
                    State::DirectionSeen
                } else {
                    State::Idle
                };

                None
            }
            State::DirectionSeen => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    warn!("Dropping frame declaring {byte} payload bytes.");
                    self.state = State::Idle;
                    return None;
                }

                self.size = byte;
                self.checksum = byte;
                self.payload.clear();
                self.state = State::SizeSeen;
                None
            }
            State::SizeSeen => {
                self.command = byte;
                self.checksum ^= byte;
                self.state = State::CommandSeen;
                None
            }
            State::CommandSeen => {
                if self.payload.len() < self.size as usize {
                    self.checksum ^= byte;

                    if self.payload.push(byte).is_err() {
                        // Unreachable: size never exceeds the buffer capacity.
                        self.state = State::Idle;
                    }

                    return None;
                }

                self.state = State::Idle;

                if self.checksum == byte {
                    debug!("Received frame for command {:#04X}.", self.command);
                    trace!("Payload: {:#04X}", HexSlice::new(&self.payload));
                    Some(Frame::new(self.command, self.payload.clone()))
                } else {
                    debug!(
                        "Dropping frame for command {:#04X}: checksum {byte:#04X} does not match {:#04X}.",
                        self.command, self.checksum
                    );
                    None
                }
            }
        }
    }

    /// Discards any frame in progress and returns to scanning for a sync byte.
    ///
    /// A peer that stalls mid-frame parks the machine in a non-idle state
    /// until more bytes arrive; callers managing long-lived links can use
    /// this as an idle-timeout reset.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.payload.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::FrameReceiver;
    use crate::checksum::checksum;
    use crate::frame::Direction;

    fn feed(receiver: &mut FrameReceiver, bytes: &[u8]) -> Vec<(u8, Vec<u8>)> {
        bytes
            .iter()
            .filter_map(|&byte| receiver.receive(byte))
            .map(|frame| (frame.command(), frame.payload().to_vec()))
            .collect()
    }

    fn request_frame(command: u8, payload: &[u8]) -> Vec<u8> {
        let size = payload.len() as u8;
        let mut bytes = vec![b'$', b'M', b'<', size, command];
        bytes.extend_from_slice(payload);
        bytes.push(checksum(size, command, payload));
        bytes
    }

    #[test]
    fn test_zero_payload_frame() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(
            feed(&mut receiver, &[b'$', b'M', b'<', 0x00, 0x01, 0x01]),
            vec![(0x01, vec![])]
        );
    }

    #[test]
    fn test_two_byte_payload_frame() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(
            feed(&mut receiver, &request_frame(0x05, &[0xAA, 0xBB])),
            vec![(0x05, vec![0xAA, 0xBB])]
        );
    }

    #[test]
    fn test_back_to_back_frames() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        let mut bytes = request_frame(0x01, &[]);
        bytes.extend_from_slice(&request_frame(0x02, &[0x42]));
        assert_eq!(
            feed(&mut receiver, &bytes),
            vec![(0x01, vec![]), (0x02, vec![0x42])]
        );
    }

    #[test]
    fn test_checksum_mismatch_drops_frame() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        let mut bytes = request_frame(0x05, &[0xAA, 0xBB]);
        *bytes.last_mut().unwrap() ^= 0xFF;
        assert_eq!(feed(&mut receiver, &bytes), vec![]);

        // The machine is back in idle and accepts the next frame.
        assert_eq!(
            feed(&mut receiver, &request_frame(0x01, &[])),
            vec![(0x01, vec![])]
        );
    }

    #[test]
    fn test_corrupted_size_byte_is_caught() {
        let mut bytes = request_frame(0x05, &[0xAA, 0xBB]);
        bytes[3] = 0x01;

        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(feed(&mut receiver, &bytes), vec![]);
    }

    #[test]
    fn test_corrupted_command_byte_is_caught() {
        let mut bytes = request_frame(0x05, &[0xAA, 0xBB]);
        bytes[4] = 0x06;

        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(feed(&mut receiver, &bytes), vec![]);
    }

    #[test]
    fn test_resynchronizes_after_garbage() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        let mut bytes = vec![0x00, 0xFF, b'$', b'X', b'$', b'M', 0x42];
        bytes.extend_from_slice(&request_frame(0x05, &[0xAA, 0xBB]));
        assert_eq!(feed(&mut receiver, &bytes), vec![(0x05, vec![0xAA, 0xBB])]);
    }

    #[test]
    fn test_garbage_without_header_never_completes() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(feed(&mut receiver, b"MMM<<<>>>no frames here"), vec![]);
    }

    #[test]
    fn test_wrong_direction_marker_is_noise() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(
            feed(&mut receiver, &[b'$', b'M', b'>', 0x00, 0x01, 0x01]),
            vec![]
        );
    }

    #[test]
    fn test_oversize_size_byte_aborts_before_payload() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        let mut bytes = vec![b'$', b'M', b'<', 0x21];
        // The very next bytes are a valid frame; none of them may be
        // consumed as payload of the aborted one.
        bytes.extend_from_slice(&request_frame(0x01, &[]));
        assert_eq!(feed(&mut receiver, &bytes), vec![(0x01, vec![])]);
    }

    #[test]
    fn test_maximum_size_frame() {
        let payload: Vec<u8> = (0..32).collect();
        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(
            feed(&mut receiver, &request_frame(0x64, &payload)),
            vec![(0x64, payload)]
        );
    }

    #[test]
    fn test_frame_split_across_calls() {
        let bytes = request_frame(0x05, &[0xAA, 0xBB]);
        let (head, tail) = bytes.split_at(4);

        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(feed(&mut receiver, head), vec![]);
        assert_eq!(feed(&mut receiver, tail), vec![(0x05, vec![0xAA, 0xBB])]);
    }

    #[test]
    fn test_reset_discards_partial_frame() {
        let mut receiver = FrameReceiver::new(Direction::Request);
        assert_eq!(feed(&mut receiver, &[b'$', b'M', b'<', 0x02, 0x05]), vec![]);
        receiver.reset();
        assert_eq!(
            feed(&mut receiver, &request_frame(0x01, &[])),
            vec![(0x01, vec![])]
        );
    }

    #[test]
    fn test_response_receiver_accepts_response_frames() {
        let mut receiver = FrameReceiver::new(Direction::Response);
        assert_eq!(
            feed(&mut receiver, &[b'$', b'M', b'>', 0x00, 0x01, 0x01]),
            vec![(0x01, vec![])]
        );
    }
}

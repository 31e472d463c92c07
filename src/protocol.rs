//! Framing constants of the MSP v1 wire format.

/// First byte of every frame; anchors resynchronization after line noise.
pub const SYNC: u8 = b'$';

/// Protocol tag identifying MSP v1, the second byte of every frame.
pub const TAG: u8 = b'M';

/// Maximum number of payload bytes a frame may declare.
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// Framing overhead: sync, tag, direction, length, command and checksum bytes.
pub const METADATA_SIZE: usize = 6;

/// Maximum size of a complete frame on the wire.
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + METADATA_SIZE;

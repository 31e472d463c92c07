//! Common buffer types used throughout the MSP v1 implementation.

use crate::protocol::{MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};

/// A stack-allocated buffer that can hold the payload of an MSP frame up to its maximum size.
pub type Payload = heapless::Vec<u8, MAX_PAYLOAD_SIZE>;

/// A stack-allocated buffer that can hold a complete MSP frame including framing overhead.
pub type RawFrame = heapless::Vec<u8, MAX_FRAME_SIZE>;

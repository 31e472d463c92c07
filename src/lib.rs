//! MultiWii Serial Protocol version 1 (`MSP` v1).
//!
//! This library implements the MSP v1 framing layer spoken by MultiWii-style
//! flight controllers and their accessories over a serial link: a byte-driven
//! receive state machine, the XOR-checksummed frame encoder, and thin device-
//! and host-side engines that glue both to a serial port.
//!
//! Command semantics are deliberately out of scope. Devices plug their
//! command logic in through the [`CommandHandler`] trait; hosts interpret
//! response payloads themselves, typically with [`PayloadReader`].

pub use baud_rate::BaudRate;
pub use channel::ByteChannel;
pub use checksum::checksum;
pub use frame::{Direction, Frame};
pub use handler::CommandHandler;
pub use host::{Host, DEFAULT_RESPONSE_TIMEOUT};
pub use payload::{AppendPayload, PayloadReader};
pub use protocol::{MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use receiver::FrameReceiver;
pub use responder::Responder;
pub use serial_port::open;
pub use types::{Payload, RawFrame};
pub use write_frame::WriteFrame;

mod baud_rate;
mod channel;
mod checksum;
mod frame;
mod handler;
mod hex_slice;
mod host;
mod payload;
mod protocol;
mod receiver;
mod responder;
mod serial_port;
mod types;
mod write_frame;

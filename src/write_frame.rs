//! Serialization of outbound MSP frames.

use std::io::{Error, ErrorKind, Write};

use log::{debug, trace};

use crate::checksum::checksum;
use crate::frame::Direction;
use crate::hex_slice::HexSlice;
use crate::protocol::{MAX_PAYLOAD_SIZE, SYNC, TAG};
use crate::types::RawFrame;

fn buffer_overflow() -> Error {
    Error::new(
        ErrorKind::OutOfMemory,
        "Could not append frame bytes to buffer.",
    )
}

/// Writes complete MSP frames to any byte sink.
pub trait WriteFrame: Write {
    /// Writes one complete frame: header, length, command, payload, checksum.
    ///
    /// The frame is assembled in a stack buffer and handed to the sink as a
    /// single write, so frames do not interleave on the wire unless the sink
    /// itself is shared.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidInput`] if the payload exceeds
    /// [`MAX_PAYLOAD_SIZE`], and any error of the underlying write otherwise.
    fn write_frame(
        &mut self,
        direction: Direction,
        command: u8,
        payload: &[u8],
    ) -> std::io::Result<()> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "Payload of {} bytes exceeds the maximum of {MAX_PAYLOAD_SIZE}.",
                    payload.len()
                ),
            ));
        }

        let size = payload.len() as u8;
        let mut frame = RawFrame::new();
        frame
            .extend_from_slice(&[SYNC, TAG, u8::from(direction), size, command])
            .map_err(|()| buffer_overflow())?;
        frame
            .extend_from_slice(payload)
            .map_err(|()| buffer_overflow())?;
        frame
            .push(checksum(size, command, payload))
            .map_err(|_| buffer_overflow())?;

        debug!("Writing {direction} frame for command {command:#04X}.");
        trace!("Frame bytes: {:#04X}", HexSlice::new(&frame));
        self.write_all(&frame)?;
        self.flush()
    }

    /// Writes a request frame (host to device).
    ///
    /// # Errors
    ///
    /// See [`write_frame`](Self::write_frame).
    fn write_request(&mut self, command: u8, payload: &[u8]) -> std::io::Result<()> {
        self.write_frame(Direction::Request, command, payload)
    }

    /// Writes a response frame (device to host).
    ///
    /// `ok` selects between the success and the error direction marker.
    ///
    /// # Errors
    ///
    /// See [`write_frame`](Self::write_frame).
    fn write_response(&mut self, ok: bool, command: u8, payload: &[u8]) -> std::io::Result<()> {
        self.write_frame(
            if ok { Direction::Response } else { Direction::Error },
            command,
            payload,
        )
    }
}

impl<T> WriteFrame for T where T: Write {}

//! Host-side protocol engine: issue requests and collect responses.

use std::io::{Error, ErrorKind};
use std::thread::sleep;
use std::time::{Duration, Instant};

use log::debug;

use crate::channel::ByteChannel;
use crate::frame::{Direction, Frame};
use crate::receiver::FrameReceiver;
use crate::types::Payload;
use crate::write_frame::WriteFrame;

/// Pause between polls while waiting for a response to arrive.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Default time to wait for a device to answer a request.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(3);

/// Host side of an MSP link.
///
/// Sends request frames to a device and parses the success responses coming
/// back. Error responses (`!`) and any noise on the line are skipped the
/// same way the device-side receiver skips unexpected header bytes.
#[derive(Debug)]
pub struct Host<C>
where
    C: ByteChannel,
{
    channel: C,
    receiver: FrameReceiver,
    timeout: Duration,
}

impl<C> Host<C>
where
    C: ByteChannel,
{
    /// Creates a host on the given channel with the default response timeout.
    #[must_use]
    pub const fn new(channel: C) -> Self {
        Self::with_timeout(channel, DEFAULT_RESPONSE_TIMEOUT)
    }

    /// Creates a host with a custom response timeout.
    #[must_use]
    pub const fn with_timeout(channel: C, timeout: Duration) -> Self {
        Self {
            channel,
            receiver: FrameReceiver::new(Direction::Response),
            timeout,
        }
    }

    /// Sends a request frame without waiting for the response.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the frame cannot be written.
    pub fn send_request(&mut self, command: u8, payload: &[u8]) -> std::io::Result<()> {
        self.channel.write_request(command, payload)
    }

    /// Drains pending bytes and returns the first completed response frame.
    ///
    /// Bytes left pending behind a completed frame stay on the channel for
    /// the next call.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the channel fails to read. Framing
    /// problems are never errors.
    pub fn poll_response(&mut self) -> std::io::Result<Option<Frame>> {
        for _ in 0..self.channel.bytes_available()? {
            let mut byte = [0];
            self.channel.read_exact(&mut byte)?;

            if let Some(frame) = self.receiver.receive(byte[0]) {
                return Ok(Some(frame));
            }
        }

        Ok(None)
    }

    /// Sends a request and waits for the device to answer it.
    ///
    /// Response frames for other commands arriving in between are discarded.
    /// The receiver is reset before sending so a stale partial frame from an
    /// earlier exchange cannot corrupt the reply.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TimedOut`] if no matching response arrives
    /// within the configured timeout, and any channel error as-is.
    pub fn request(&mut self, command: u8, payload: &[u8]) -> std::io::Result<Payload> {
        self.receiver.reset();
        self.send_request(command, payload)?;
        let deadline = Instant::now() + self.timeout;

        loop {
            if let Some(frame) = self.poll_response()? {
                if frame.command() == command {
                    return Ok(frame.into_payload());
                }

                debug!(
                    "Discarding response for unrequested command {:#04X}.",
                    frame.command()
                );
            } else if Instant::now() >= deadline {
                return Err(Error::new(
                    ErrorKind::TimedOut,
                    format!("No response for command {command:#04X}."),
                ));
            } else {
                sleep(POLL_INTERVAL);
            }
        }
    }

    /// Returns the underlying channel.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.channel
    }
}

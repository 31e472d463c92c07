//! Device-side protocol engine: receive requests, dispatch, respond.

use log::debug;

use crate::channel::ByteChannel;
use crate::frame::{Direction, Frame};
use crate::handler::CommandHandler;
use crate::receiver::FrameReceiver;
use crate::types::Payload;
use crate::write_frame::WriteFrame;

/// Device side of an MSP link.
///
/// Owns the byte channel, the inbound state machine and the command handler.
/// Drive it from a polling loop by calling [`poll`](Self::poll) repeatedly;
/// nothing happens between calls.
#[derive(Debug)]
pub struct Responder<C, H>
where
    C: ByteChannel,
    H: CommandHandler,
{
    channel: C,
    handler: H,
    receiver: FrameReceiver,
    response: Payload,
}

impl<C, H> Responder<C, H>
where
    C: ByteChannel,
    H: CommandHandler,
{
    /// Creates a responder serving the requests arriving on `channel`.
    #[must_use]
    pub const fn new(channel: C, handler: H) -> Self {
        Self {
            channel,
            handler,
            receiver: FrameReceiver::new(Direction::Request),
            response: Payload::new(),
        }
    }

    /// Consumes every byte currently pending on the channel.
    ///
    /// The pending count is sampled once at entry, so bytes arriving while
    /// the call runs are left for the next call and one call never does
    /// unbounded work. Each request completed by a byte is dispatched to the
    /// handler synchronously, and an accepted response is written back
    /// before the next byte is consumed.
    ///
    /// Returns the command code of the last request handled during this
    /// call, or `None` if no frame completed. Malformed input is dropped
    /// silently and also reported as `None`.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the channel fails to read or a
    /// response fails to write. Framing problems are never errors.
    pub fn poll(&mut self) -> std::io::Result<Option<u8>> {
        let mut handled = None;

        for _ in 0..self.channel.bytes_available()? {
            let mut byte = [0];
            self.channel.read_exact(&mut byte)?;

            if let Some(frame) = self.receiver.receive(byte[0]) {
                self.dispatch(&frame)?;
                handled = Some(frame.command());
            }
        }

        Ok(handled)
    }

    fn dispatch(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.response.clear();

        if self
            .handler
            .handle_command(frame.command(), frame.payload(), &mut self.response)
        {
            self.channel
                .write_response(true, frame.command(), &self.response)
        } else {
            debug!(
                "Handler produced no response for command {:#04X}.",
                frame.command()
            );
            Ok(())
        }
    }

    /// Gives up on any partially received frame.
    pub fn reset(&mut self) {
        self.receiver.reset();
    }

    /// Returns a mutable reference to the command handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Returns the underlying channel.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.channel
    }
}

//! Contract between the protocol engine and the command logic behind it.

use crate::types::Payload;

/// Command logic invoked for every validated request frame.
///
/// The engine owns framing and checksums only; what a command code means and
/// what its response payload looks like is entirely up to the implementation
/// of this trait.
pub trait CommandHandler {
    /// Handles one validated request.
    ///
    /// `response` arrives empty. Append the response payload to it and
    /// return `true` to have a success frame sent that echoes `command`; an
    /// empty response payload is valid. Return `false` to answer the
    /// request with silence, in which case no frame is sent at all.
    fn handle_command(&mut self, command: u8, payload: &[u8], response: &mut Payload) -> bool;
}

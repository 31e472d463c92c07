//! Platform-specific serial port access.

use crate::BaudRate;

#[cfg(windows)]
pub use serialport::COMPort as SerialPortImpl;

#[cfg(unix)]
pub use serialport::TTYPort as SerialPortImpl;

/// Opens the serial port type native to the local operating system.
///
/// The returned port implements [`ByteChannel`](crate::ByteChannel) and can
/// be handed directly to a [`Responder`](crate::Responder) or a
/// [`Host`](crate::Host).
///
/// # Errors
///
/// For errors please refer to [`serialport::new()`] and the platform port's
/// `open()`.
pub fn open<'a>(
    path: impl Into<std::borrow::Cow<'a, str>>,
    baud_rate: BaudRate,
) -> serialport::Result<SerialPortImpl> {
    SerialPortImpl::open(&serialport::new(path, baud_rate.into()))
}

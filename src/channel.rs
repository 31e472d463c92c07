//! The byte channel the protocol engines run on.

use std::io::{Read, Write};

/// An unreliable duplex byte stream, typically a serial link.
///
/// The engines never block on reads: they ask how many bytes are pending and
/// consume at most that many. Writes are handed to the channel as-is and are
/// assumed to eventually drain.
pub trait ByteChannel: Read + Write {
    /// Returns the number of bytes that can be read without blocking.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the channel cannot be queried.
    fn bytes_available(&mut self) -> std::io::Result<usize>;
}

#[cfg(unix)]
impl ByteChannel for serialport::TTYPort {
    fn bytes_available(&mut self) -> std::io::Result<usize> {
        serialport::SerialPort::bytes_to_read(self)
            .map(|count| count as usize)
            .map_err(Into::into)
    }
}

#[cfg(windows)]
impl ByteChannel for serialport::COMPort {
    fn bytes_available(&mut self) -> std::io::Result<usize> {
        serialport::SerialPort::bytes_to_read(self)
            .map(|count| count as usize)
            .map_err(Into::into)
    }
}

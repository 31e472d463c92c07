//! Little-endian scalar codec for MSP payloads.
//!
//! MSP packs multi-byte values little-endian. [`PayloadReader`] walks an
//! inbound payload; [`AppendPayload`] appends to an outbound one.

/// Cursor reading little-endian scalars out of a payload.
///
/// Every read returns `None` once the remaining bytes no longer cover the
/// requested width, leaving the cursor untouched.
#[derive(Clone, Debug)]
pub struct PayloadReader<'a> {
    bytes: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    /// Creates a reader over the given payload bytes.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the number of bytes not yet read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.bytes.len()
    }

    /// Reads the next byte.
    pub fn read_u8(&mut self) -> Option<u8> {
        self.read_array().map(u8::from_le_bytes)
    }

    /// Reads the next two bytes as an unsigned word.
    pub fn read_u16(&mut self) -> Option<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads the next two bytes as a signed word.
    pub fn read_i16(&mut self) -> Option<i16> {
        self.read_array().map(i16::from_le_bytes)
    }

    /// Reads the next four bytes as an unsigned double word.
    pub fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads the next four bytes as a signed double word.
    pub fn read_i32(&mut self) -> Option<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.bytes.len() < N {
            return None;
        }

        let (head, rest) = self.bytes.split_at(N);
        self.bytes = rest;
        head.try_into().ok()
    }
}

/// Appends little-endian scalars to a fixed-capacity payload buffer.
///
/// Every append fails without writing if the value does not fit.
pub trait AppendPayload {
    /// Appends a single byte.
    fn append_u8(&mut self, value: u8) -> Result<(), ()>;

    /// Appends an unsigned word.
    fn append_u16(&mut self, value: u16) -> Result<(), ()>;

    /// Appends a signed word.
    fn append_i16(&mut self, value: i16) -> Result<(), ()>;

    /// Appends an unsigned double word.
    fn append_u32(&mut self, value: u32) -> Result<(), ()>;

    /// Appends a signed double word.
    fn append_i32(&mut self, value: i32) -> Result<(), ()>;
}

impl<const N: usize> AppendPayload for heapless::Vec<u8, N> {
    fn append_u8(&mut self, value: u8) -> Result<(), ()> {
        self.push(value).map_err(|_| ())
    }

    fn append_u16(&mut self, value: u16) -> Result<(), ()> {
        self.extend_from_slice(&value.to_le_bytes())
    }

    fn append_i16(&mut self, value: i16) -> Result<(), ()> {
        self.extend_from_slice(&value.to_le_bytes())
    }

    fn append_u32(&mut self, value: u32) -> Result<(), ()> {
        self.extend_from_slice(&value.to_le_bytes())
    }

    fn append_i32(&mut self, value: i32) -> Result<(), ()> {
        self.extend_from_slice(&value.to_le_bytes())
    }
}

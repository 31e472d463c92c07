//! Hexadecimal formatting of byte buffers for trace logs.

use std::fmt::{Formatter, LowerHex, UpperHex};

/// A wrapper around a slice of bytes that formats them as hexadecimal.
pub struct HexSlice<'a>(&'a [u8]);

impl<'a> HexSlice<'a> {
    /// Creates a new `HexSlice`.
    pub const fn new(slice: &'a [u8]) -> Self {
        Self(slice)
    }
}

fn format(slice: &[u8], f: &mut Formatter<'_>, upper: bool) -> std::fmt::Result {
    write!(f, "[")?;

    for (index, byte) in slice.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }

        if upper {
            write!(f, "{byte:#04X}")?;
        } else {
            write!(f, "{byte:#04x}")?;
        }
    }

    write!(f, "]")
}

impl UpperHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format(self.0, f, true)
    }
}

impl LowerHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format(self.0, f, false)
    }
}

#[cfg(test)]
mod tests {
    use super::HexSlice;

    #[test]
    fn test_upper_hex() {
        let slice = HexSlice::new(&[0x01, 0xAB, 0x03]);
        assert_eq!(format!("{slice:X}"), "[0x01, 0xAB, 0x03]");
    }

    #[test]
    fn test_lower_hex() {
        let slice = HexSlice::new(&[0x01, 0xAB, 0x03]);
        assert_eq!(format!("{slice:x}"), "[0x01, 0xab, 0x03]");
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(format!("{:X}", HexSlice::new(&[])), "[]");
    }
}

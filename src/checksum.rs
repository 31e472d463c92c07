//! XOR checksum of the MSP v1 framing layer.

/// Folds the length byte, the command byte and every payload byte with XOR.
///
/// Both directions of the protocol use the same fold, so a frame encoded
/// with this function validates on any MSP v1 peer. This is a framing
/// integrity check only: it is trivially forgeable and compensating
/// corruptions (or a swap of two payload bytes) cancel out.
#[must_use]
pub fn checksum(size: u8, command: u8, payload: &[u8]) -> u8 {
    payload
        .iter()
        .fold(size ^ command, |checksum, byte| checksum ^ byte)
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn test_zero_payload() {
        assert_eq!(checksum(0, 0x01, &[]), 0x01);
    }

    #[test]
    fn test_folds_size_command_and_payload() {
        assert_eq!(checksum(0x02, 0x05, &[0xAA, 0xBB]), 0x02 ^ 0x05 ^ 0xAA ^ 0xBB);
    }

    #[test]
    fn test_detects_size_and_command_corruption() {
        let reference = checksum(0x02, 0x05, &[0xAA, 0xBB]);
        assert_ne!(checksum(0x03, 0x05, &[0xAA, 0xBB]), reference);
        assert_ne!(checksum(0x02, 0x06, &[0xAA, 0xBB]), reference);
    }

    #[test]
    fn test_payload_byte_swap_is_a_blind_spot() {
        // XOR is order-insensitive, so swapped payload bytes collide.
        assert_eq!(
            checksum(0x02, 0x05, &[0xAA, 0xBB]),
            checksum(0x02, 0x05, &[0xBB, 0xAA])
        );
    }
}

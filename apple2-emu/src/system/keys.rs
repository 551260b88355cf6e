//! Host-key to keyboard-latch translation.
//!
//! The Apple II keyboard produces 7-bit codes with bit 7 set as the
//! strobe. A terminal host delivers printable characters and control
//! bytes; this module turns them into latch values:
//!
//! - Line feed (0x0A) becomes carriage return (0x0D)
//! - Bell (0x07) becomes backspace (0x08)
//! - Lowercase letters are uppercased by clearing bit 5 (the machine has
//!   no lowercase character set)
//! - Bit 7 is set on the final value
//!
//! Arrow keys arrive as terminal events rather than bytes, so their
//! pre-translated latch values are exposed as constants.

/// Strobe bit: set on every latch value handed to the machine.
pub const STROBE: u8 = 0x80;

/// RETURN key latch value.
pub const RETURN: u8 = 0x8D;
/// Left arrow: the Apple II backspace code.
pub const LEFT_ARROW: u8 = 0x88;
/// Right arrow: the Apple II forward-space (NAK) code.
pub const RIGHT_ARROW: u8 = 0x95;
/// ESC key latch value.
pub const ESCAPE: u8 = 0x9B;

/// Translates a host byte into a keyboard latch value.
pub fn latch_byte(ch: u8) -> u8 {
    let mut key = match ch {
        0x0A => 0x0D, // LF to CR
        0x07 => 0x08, // BEL to BS
        other => other,
    };
    if key.is_ascii_lowercase() {
        key &= !0x20; // to upper case
    }
    key | STROBE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_characters_get_strobe() {
        assert_eq!(latch_byte(b'A'), 0xC1);
        assert_eq!(latch_byte(b'0'), 0xB0);
        assert_eq!(latch_byte(b' '), 0xA0);
    }

    #[test]
    fn test_lowercase_is_uppercased() {
        assert_eq!(latch_byte(b'a'), 0xC1);
        assert_eq!(latch_byte(b'z'), 0xDA);
        // Punctuation around the letter range is untouched
        assert_eq!(latch_byte(b'{'), 0x80 | b'{');
        assert_eq!(latch_byte(b'`'), 0x80 | b'`');
    }

    #[test]
    fn test_control_translations() {
        assert_eq!(latch_byte(0x0A), RETURN); // LF -> CR
        assert_eq!(latch_byte(0x0D), RETURN);
        assert_eq!(latch_byte(0x07), LEFT_ARROW); // BEL -> BS
        assert_eq!(latch_byte(0x08), LEFT_ARROW);
        assert_eq!(latch_byte(0x1B), ESCAPE);
    }

    #[test]
    fn test_arrow_constants_carry_strobe() {
        assert_eq!(LEFT_ARROW & STROBE, STROBE);
        assert_eq!(RIGHT_ARROW & STROBE, STROBE);
        assert_eq!(LEFT_ARROW & 0x7F, 0x08);
        assert_eq!(RIGHT_ARROW & 0x7F, 0x15);
    }
}

//! 6 bit ASCII
//!
//! AIS uses two different 6 bit encodings:
//!
//! - The *armor* that maps each 6 bit group of the binary payload to a
//!   printable character, so that it can be transported in a NMEA 0183
//!   sentence.
//! - The *text* character set (ITU-R M.1371 table 47) used for names, call
//!   signs and text messages inside the binary payload.

/// ITU-R M.1371 table 47
///
/// `@` is used as padding and terminates strings.
const TEXT_CHARSET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// Padding character for strings.
pub const TEXT_PADDING: char = '@';

/// Converts an armor character to its 6 bit value.
pub fn dearmor(character: char) -> Option<u8> {
    match character {
        '0'..='W' => Some(character as u8 - 48),
        '`'..='w' => Some(character as u8 - 56),
        _ => None,
    }
}

/// Converts a 6 bit value to its armor character.
///
/// # Panics
///
/// Panics if `value` doesn't fit into 6 bits.
pub fn armor(value: u8) -> char {
    assert!(value < 64, "not a 6 bit value: {value}");
    if value < 40 {
        (value + 48) as char
    }
    else {
        (value + 56) as char
    }
}

/// Decodes a 6 bit text character.
pub fn decode_text_char(value: u8) -> char {
    TEXT_CHARSET[usize::from(value & 0b111111)] as char
}

/// Encodes a text character.
///
/// Lower case letters are mapped to upper case. Returns `None` if the
/// character is not in the character set.
pub fn encode_text_char(character: char) -> Option<u8> {
    let character = character.to_ascii_uppercase();
    match character {
        '@'..='_' => Some(character as u8 - 64),
        ' '..='?' => Some(character as u8),
        _ => None,
    }
}

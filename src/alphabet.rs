/// The canonical Base32 alphabet used by ULIDs.
///
/// The letters `I`, `L`, `O` and `U` are left out to avoid visual ambiguity.
// cspell:disable-next-line
pub const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Marker in [`DECODE`] for bytes which are no Base32 symbol.
pub const INVALID: u8 = 0xFF;

/// Maps every byte to its 5-bit symbol value, or [`INVALID`].
///
/// Upper- and lowercase letters map to the same value.
#[rustfmt::skip]
pub const DECODE: [u8; 256] = {
    const X: u8 = INVALID;
    [
        /* 0x00 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0x10 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0x20 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0x30 */   0,  1,  2,  3,  4,  5,  6,  7,  8,  9,  X,  X,  X,  X,  X,  X,
        /* 0x40 */   X, 10, 11, 12, 13, 14, 15, 16, 17,  X, 18, 19,  X, 20, 21,  X,
        /* 0x50 */  22, 23, 24, 25, 26,  X, 27, 28, 29, 30, 31,  X,  X,  X,  X,  X,
        /* 0x60 */   X, 10, 11, 12, 13, 14, 15, 16, 17,  X, 18, 19,  X, 20, 21,  X,
        /* 0x70 */  22, 23, 24, 25, 26,  X, 27, 28, 29, 30, 31,  X,  X,  X,  X,  X,
        /* 0x80 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0x90 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0xA0 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0xB0 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0xC0 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0xD0 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0xE0 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
        /* 0xF0 */   X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,  X,
    ]
};

/// Looks up the symbol value of a byte, accepting both letter cases.
pub const fn symbol(byte: u8) -> Option<u8> {
    match DECODE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Looks up the symbol value of a byte, accepting only the canonical alphabet.
///
/// A byte is canonical if encoding its value gives back the very same byte,
/// which rules out lowercase letters.
pub const fn canonical_symbol(byte: u8) -> Option<u8> {
    match symbol(byte) {
        Some(value) if ALPHABET.as_bytes()[value as usize] == byte => Some(value),
        _ => None,
    }
}

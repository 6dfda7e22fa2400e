use crate::{alphabet, Error};

pub fn as_array<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], Error> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        expected: N,
        found: bytes.len(),
    })
}

/// Borrows a string as an array of exactly `N` ASCII bytes.
///
/// Lengths are counted in characters, not bytes. A string of `N` characters
/// with non-ASCII characters in it is reported as an invalid character.
pub fn as_ascii_array<const N: usize>(s: &str) -> Result<&[u8; N], Error> {
    let found = s.chars().count();

    if found != N {
        return Err(Error::InvalidLength { expected: N, found });
    }

    if !s.is_ascii() {
        let position = s
            .chars()
            .position(|c| !c.is_ascii() || alphabet::canonical_symbol(c as u8).is_none())
            .unwrap_or_default();
        return Err(Error::InvalidCharacter { position });
    }

    as_array(s.as_bytes())
}

use crate::{
    alphabet, Error, RANDOMNESS_BYTES, RANDOMNESS_LEN, TIMESTAMP_BYTES, TIMESTAMP_LEN, ULID_BYTES, ULID_LEN,
};

/// Converts ASCII bytes into their 5-bit symbol values.
///
/// Fails on the first byte outside the canonical alphabet.
pub fn symbols<const N: usize>(ascii: &[u8; N]) -> Result<[u8; N], Error> {
    let mut values = [0; N];

    for (position, (value, &byte)) in values.iter_mut().zip(ascii).enumerate() {
        *value = alphabet::canonical_symbol(byte).ok_or(Error::InvalidCharacter { position })?;
    }

    Ok(values)
}

pub fn decode(ascii: &[u8; ULID_LEN]) -> Result<[u8; ULID_BYTES], Error> {
    let values = symbols(ascii)?;
    let (timestamp, randomness) = values.split_at(TIMESTAMP_LEN);

    let mut bytes = [0; ULID_BYTES];
    bytes[..TIMESTAMP_BYTES].copy_from_slice(&pack_timestamp(timestamp)?);
    bytes[TIMESTAMP_BYTES..].copy_from_slice(&pack_randomness(randomness));

    Ok(bytes)
}

pub fn decode_timestamp(ascii: &[u8; TIMESTAMP_LEN]) -> Result<[u8; TIMESTAMP_BYTES], Error> {
    pack_timestamp(&symbols(ascii)?)
}

pub fn decode_randomness(ascii: &[u8; RANDOMNESS_LEN]) -> Result<[u8; RANDOMNESS_BYTES], Error> {
    Ok(pack_randomness(&symbols(ascii)?))
}

/// Packs 10 symbol values (50 bits) into 6 bytes.
///
/// The two most significant bits have to be zero, so the first symbol
/// may hold at most 3 bits.
fn pack_timestamp(values: &[u8]) -> Result<[u8; TIMESTAMP_BYTES], Error> {
    if values[0] > 7 {
        return Err(Error::TimestampOverflow);
    }

    let [b1, b2, b3, b4, b5] = pack_group(values, 2);

    Ok([(values[0] << 5) | values[1], b1, b2, b3, b4, b5])
}

/// Packs 16 symbol values (80 bits) into 10 bytes.
fn pack_randomness(values: &[u8]) -> [u8; RANDOMNESS_BYTES] {
    let [b0, b1, b2, b3, b4] = pack_group(values, 0);
    let [b5, b6, b7, b8, b9] = pack_group(values, 8);

    [b0, b1, b2, b3, b4, b5, b6, b7, b8, b9]
}

/// Packs the 8 symbol values starting at `i` (40 bits) into 5 bytes, MSB first.
///
/// Bits shifted beyond a byte belong to the previous byte and are dropped.
#[rustfmt::skip]
const fn pack_group(s: &[u8], i: usize) -> [u8; 5] {
    [
        (s[i] << 3)     | (s[i + 1] >> 2),
        (s[i + 1] << 6) | (s[i + 2] << 1) | (s[i + 3] >> 4),
        (s[i + 3] << 4) | (s[i + 4] >> 1),
        (s[i + 4] << 7) | (s[i + 5] << 2) | (s[i + 6] >> 3),
        (s[i + 6] << 5) | s[i + 7],
    ]
}

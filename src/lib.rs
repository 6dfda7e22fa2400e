//! # ULIDs as Binary Values
//!
//! This crate decodes ULIDs (Universally Unique Lexicographically Sortable Identifiers)
//! from their 26 character Base32 text into the canonical 16 byte binary form,
//! and renders those bytes as literals for databases storing ULIDs as binary values.
//!
//! ## Decoding ULIDs
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
// cspell:disable-next-line
//! let bytes = ulid_bindata::decode("01JCJHNXPXV7C75VMGG0B70JT1")?;
//!
//! assert_eq!(bytes, [1, 147, 37, 26, 246, 221, 217, 216, 114, 238, 144, 128, 22, 112, 75, 65]);
//! # Ok(()) }
//! ```
//!
//! The first 10 characters encode the 48 bit timestamp (6 bytes), the remaining
//! 16 characters the 80 bit randomness (10 bytes). Both parts can be decoded on
//! their own with [`decode_timestamp()`] and [`decode_randomness()`].
//!
//! Only the canonical alphabet `0123456789ABCDEFGHJKMNPQRSTVWXYZ` is accepted.
//! Lowercase letters are rejected, as are the ambiguous letters `I`, `L`, `O` and `U`.
//!
//! ## Rendering Binary Literals
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use ulid_bindata::BinaryUlid;
//!
// cspell:disable-next-line
//! let u: BinaryUlid = "01JCJHNXPXV7C75VMGG0B70JT1".parse()?;
//!
//! assert_eq!(u.to_bindata_literal(), r#"{"_id": BinData(0, 'AZMlGvbd2dhy7pCAFnBLQQ==')}"#);
//!
//! println!("{}", u.to_extended_json()?);
//! # Ok(()) }
//! ```
//!
//! ## Feature Flags
//!
//! - **`cli`**: Builds the `ulid-bindata` command line tool, enabled by default.
//!

mod alphabet;
mod base32;
mod binary;
mod error;
mod render;
mod serde;
mod util;

pub use alphabet::ALPHABET;
pub use binary::BinaryUlid;
pub use error::Error;
pub use render::{bindata_literal, extended_json, to_base64, ExtendedJsonBinary};

/// Number of characters of an encoded ULID.
pub const ULID_LEN: usize = TIMESTAMP_LEN + RANDOMNESS_LEN;
/// Number of characters of the encoded timestamp.
pub const TIMESTAMP_LEN: usize = 10;
/// Number of characters of the encoded randomness.
pub const RANDOMNESS_LEN: usize = 16;

/// Number of bytes of a decoded ULID.
pub const ULID_BYTES: usize = TIMESTAMP_BYTES + RANDOMNESS_BYTES;
/// Number of bytes of a decoded timestamp.
pub const TIMESTAMP_BYTES: usize = 6;
/// Number of bytes of a decoded randomness.
pub const RANDOMNESS_BYTES: usize = 10;

const RANDOM_BITS: u32 = 80;
const RANDOM_MASK: u128 = (1 << RANDOM_BITS) - 1;

/// Decodes a ULID string into its 16 bytes.
///
/// # Errors
///
/// The string must have exactly 26 characters out of [`ALPHABET`], and the timestamp
/// must fit into 48 bits (first character `0` to `7`). If not, an error is returned.
///
/// # Example
///
/// ```
/// use ulid_bindata::{decode, Error};
///
/// assert_eq!(decode("7ZZZZZZZZZZZZZZZZZZZZZZZZZ"), Ok([0xFF; 16]));
///
/// assert_eq!(decode("80000000000000000000000000"), Err(Error::TimestampOverflow));
/// assert_eq!(decode("0000000000000000000000000U"), Err(Error::InvalidCharacter { position: 25 }));
/// assert_eq!(decode("0000"), Err(Error::InvalidLength { expected: 26, found: 4 }));
/// ```
pub fn decode(ulid: &str) -> Result<[u8; ULID_BYTES], Error> {
    base32::decode(util::as_ascii_array(ulid)?)
}

/// Decodes the 10 character timestamp part of a ULID into 6 bytes.
///
/// # Errors
///
/// Fails if the string has not exactly 10 characters out of [`ALPHABET`],
/// or if the timestamp overflows 48 bits.
///
/// # Example
///
/// ```
// cspell:disable-next-line
/// assert_eq!(ulid_bindata::decode_timestamp("01JCJHNXPX"), Ok([1, 147, 37, 26, 246, 221]));
/// ```
pub fn decode_timestamp(timestamp: &str) -> Result<[u8; TIMESTAMP_BYTES], Error> {
    base32::decode_timestamp(util::as_ascii_array(timestamp)?)
}

/// Decodes the 16 character randomness part of a ULID into 10 bytes.
///
/// # Errors
///
/// Fails if the string has not exactly 16 characters out of [`ALPHABET`].
pub fn decode_randomness(randomness: &str) -> Result<[u8; RANDOMNESS_BYTES], Error> {
    base32::decode_randomness(util::as_ascii_array(randomness)?)
}

/// Checks a ULID string for validity.
///
/// To be valid, a ULID must have the correct length (26), contain only characters
/// out of [`ALPHABET`], and its timestamp must not overflow.
///
/// # Errors
///
/// If the ULID string is not valid, an appropriate error is returned.
///
/// # Example
///
/// ```
/// use ulid_bindata::{validate, Error};
///
/// assert!(validate("00000000000000000000000000").is_ok());
// cspell:disable-next-line
/// assert_eq!(validate("01jcjhnxpxv7c75vmgg0b70jt1"), Err(Error::InvalidCharacter { position: 2 }));
/// ```
pub fn validate(ulid: &str) -> Result<(), Error> {
    decode(ulid).map(|_| ())
}

#[cfg(test)]
mod tests;

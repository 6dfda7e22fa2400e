use std::{
    fmt,
    str::FromStr,
    time::{Duration, SystemTime},
};

use crate::{
    base32, render, util, Error, RANDOMNESS_BYTES, RANDOM_BITS, RANDOM_MASK, TIMESTAMP_BYTES, ULID_BYTES,
};

/// A decoded ULID in its 16-byte binary form.
///
/// The first 6 bytes hold the timestamp, the remaining 10 bytes the randomness,
/// both in network byte order (big endian).
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use ulid_bindata::BinaryUlid;
///
// cspell:disable-next-line
/// let u: BinaryUlid = "01JCJHNXPXV7C75VMGG0B70JT1".parse()?;
///
/// assert_eq!(u.timestamp(), 1731494344413);
/// assert_eq!(u.to_base64(), "AZMlGvbd2dhy7pCAFnBLQQ==");
/// # Ok(()) }
/// ```
#[derive(Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BinaryUlid([u8; ULID_BYTES]);

impl BinaryUlid {
    /// Creates a `BinaryUlid` from its binary bytes.
    ///
    /// The byte array must be in network byte order (big endian).
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ULID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the binary bytes of a `BinaryUlid`.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; ULID_BYTES] {
        self.0
    }

    /// Borrows the binary bytes of a `BinaryUlid`.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ULID_BYTES] {
        &self.0
    }

    /// Creates a `BinaryUlid` from a `u128` integer.
    ///
    /// # Example
    ///
    /// ```
    /// use ulid_bindata::BinaryUlid;
    ///
    /// let u = BinaryUlid::from_u128(1);
    ///
    /// assert_eq!(u.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    /// ```
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(n.to_be_bytes())
    }

    /// Converts a `BinaryUlid` into a `u128` integer.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns the timestamp part in milliseconds since the Unix epoch.
    ///
    /// ULID timestamps are limited to 48 bits.
    #[must_use]
    pub const fn timestamp(self) -> u64 {
        (self.to_u128() >> RANDOM_BITS) as u64
    }

    /// Returns the random part, limited to 80 bits.
    #[must_use]
    pub const fn randomness(self) -> u128 {
        self.to_u128() & RANDOM_MASK
    }

    /// Returns the timestamp and randomness parts as a pair.
    #[must_use]
    pub const fn to_parts(self) -> (u64, u128) {
        (self.timestamp(), self.randomness())
    }

    /// Returns the 6 bytes holding the timestamp.
    #[must_use]
    pub const fn timestamp_bytes(self) -> [u8; TIMESTAMP_BYTES] {
        let [b0, b1, b2, b3, b4, b5, ..] = self.0;
        [b0, b1, b2, b3, b4, b5]
    }

    /// Returns the 10 bytes holding the randomness.
    #[must_use]
    pub const fn randomness_bytes(self) -> [u8; RANDOMNESS_BYTES] {
        let [.., b6, b7, b8, b9, b10, b11, b12, b13, b14, b15] = self.0;
        [b6, b7, b8, b9, b10, b11, b12, b13, b14, b15]
    }

    /// Returns the timestamp part as a `SystemTime`.
    ///
    /// # Panics
    ///
    /// In Rust the allowed range for [`SystemTime`] is not defined.
    /// So this method may panic if the timestamp cannot be represented with [`SystemTime`].
    /// On most common systems that will not happen.
    ///
    /// For a variant which never panics, see [`BinaryUlid::try_datetime`].
    #[must_use]
    pub fn datetime(self) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(self.timestamp())
    }

    /// Returns the timestamp part as a [`SystemTime`] and never panics.
    ///
    /// Returns `None` if the timestamp cannot be represented with [`SystemTime`].
    #[must_use]
    pub fn try_datetime(self) -> Option<SystemTime> {
        SystemTime::UNIX_EPOCH.checked_add(Duration::from_millis(self.timestamp()))
    }

    /// Renders the bytes as standard Base64.
    #[must_use]
    pub fn to_base64(self) -> String {
        render::to_base64(&self.0)
    }

    /// Renders the bytes as `{"_id": BinData(0, '<base64>')}`.
    #[must_use]
    pub fn to_bindata_literal(self) -> String {
        render::bindata_literal(&self.0)
    }

    /// Renders the bytes as a pretty-printed extended JSON binary value.
    ///
    /// # Errors
    ///
    /// Fails only if `serde_json` fails to write the value.
    pub fn to_extended_json(self) -> serde_json::Result<String> {
        render::extended_json(&self.0)
    }
}

impl fmt::Debug for BinaryUlid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        struct Randomness(u128);
        impl fmt::Debug for Randomness {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
                write!(f, "\"{:020X}\"", self.0)
            }
        }

        f.debug_struct("BinaryUlid")
            .field("timestamp", &self.timestamp())
            .field("randomness", &Randomness(self.randomness()))
            .finish()
    }
}

impl FromStr for BinaryUlid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let buffer = util::as_ascii_array(s)?;
        Ok(Self(base32::decode(buffer)?))
    }
}

impl AsRef<[u8]> for BinaryUlid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<BinaryUlid> for [u8; ULID_BYTES] {
    fn from(ulid: BinaryUlid) -> Self {
        ulid.to_bytes()
    }
}

impl From<[u8; ULID_BYTES]> for BinaryUlid {
    fn from(bytes: [u8; ULID_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<BinaryUlid> for u128 {
    fn from(ulid: BinaryUlid) -> Self {
        ulid.to_u128()
    }
}

impl From<u128> for BinaryUlid {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl TryFrom<&[u8]> for BinaryUlid {
    type Error = Error;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self::from_bytes(*util::as_array(bytes)?))
    }
}

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Binary subtype of generic binary data in BSON.
const GENERIC_SUBTYPE: &str = "00";

/// Renders bytes as standard Base64 with padding.
///
/// # Example
///
/// ```
/// assert_eq!(ulid_bindata::to_base64(&[0xFF; 4]), "/////w==");
/// ```
#[must_use]
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Renders bytes as a `BinData` shell literal matching an `_id` field.
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
// cspell:disable-next-line
/// let bytes = ulid_bindata::decode("01JCJHNXPXV7C75VMGG0B70JT1")?;
///
/// assert_eq!(
///     ulid_bindata::bindata_literal(&bytes),
///     r#"{"_id": BinData(0, 'AZMlGvbd2dhy7pCAFnBLQQ==')}"#
/// );
/// # Ok(()) }
/// ```
#[must_use]
pub fn bindata_literal(bytes: &[u8]) -> String {
    format!(r#"{{"_id": BinData(0, '{}')}}"#, to_base64(bytes))
}

/// Renders bytes as a pretty-printed extended JSON binary value.
///
/// # Errors
///
/// Fails only if `serde_json` fails to write the value.
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let json = ulid_bindata::extended_json(&[0; 3])?;
///
/// assert_eq!(json, "{\n  \"$binary\": {\n    \"base64\": \"AAAA\",\n    \"subType\": \"00\"\n  }\n}");
/// # Ok(()) }
/// ```
pub fn extended_json(bytes: &[u8]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExtendedJsonBinary::new(bytes))
}

/// Extended JSON representation of generic binary data.
///
/// Serializes as `{"$binary": {"base64": "...", "subType": "00"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedJsonBinary<'a> {
    bytes: &'a [u8],
}

impl<'a> ExtendedJsonBinary<'a> {
    /// Wraps the bytes to be serialized.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the wrapped bytes.
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Serialize for ExtendedJsonBinary<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct Payload<'a>(&'a [u8]);

        impl Serialize for Payload<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut payload = serializer.serialize_struct("Payload", 2)?;
                payload.serialize_field("base64", &to_base64(self.0))?;
                payload.serialize_field("subType", GENERIC_SUBTYPE)?;
                payload.end()
            }
        }

        let mut binary = serializer.serialize_struct("ExtendedJsonBinary", 1)?;
        binary.serialize_field("$binary", &Payload(self.bytes))?;
        binary.end()
    }
}

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize, Serialize, Serializer,
};

use crate::{BinaryUlid, ULID_LEN};

impl Serialize for BinaryUlid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for BinaryUlid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BinaryVisitor;

        impl<'de> Visitor<'de> for BinaryVisitor {
            type Value = BinaryUlid;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a ULID string or its 16 bytes in Base64")
            }
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value.chars().count() == ULID_LEN {
                    return value.parse().map_err(de::Error::custom);
                }

                let bytes = STANDARD.decode(value).map_err(de::Error::custom)?;
                BinaryUlid::try_from(bytes.as_slice()).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(BinaryVisitor)
    }
}

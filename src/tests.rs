use std::time::{Duration, SystemTime};

use rand::Rng as _;

use crate::*;

// cspell:disable-next-line
const EXAMPLE: &str = "01JCJHNXPXV7C75VMGG0B70JT1";

fn random_ulid(rng: &mut impl rand::Rng, first_max: usize) -> String {
    let alphabet = ALPHABET.as_bytes();
    let first = char::from(alphabet[rng.gen_range(0..=first_max)]);
    let rest = (1..ULID_LEN).map(|_| char::from(alphabet[rng.gen_range(0..32)]));
    std::iter::once(first).chain(rest).collect()
}

/// Decodes by folding every symbol into one integer, the plain way.
fn fold_ulid(ulid: &str) -> u128 {
    ulid.bytes()
        .map(|b| ALPHABET.bytes().position(|a| a == b).unwrap() as u128)
        .fold(0, |n, v| (n << 5) | v)
}

#[test]
const fn test_send_sync() {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}

    assert_send::<BinaryUlid>();
    assert_sync::<BinaryUlid>();

    assert_send::<Error>();
    assert_sync::<Error>();
}

#[test]
fn test_sizeof() {
    assert_eq!(size_of::<BinaryUlid>(), ULID_BYTES);
}

#[test]
fn test_example() {
    let bytes = decode(EXAMPLE).unwrap();

    assert_eq!(bytes.len(), 16);
    assert_eq!(to_base64(&bytes), "AZMlGvbd2dhy7pCAFnBLQQ==");
    assert_eq!(
        bindata_literal(&bytes),
        r#"{"_id": BinData(0, 'AZMlGvbd2dhy7pCAFnBLQQ==')}"#
    );

    let expected = r#"{
  "$binary": {
    "base64": "AZMlGvbd2dhy7pCAFnBLQQ==",
    "subType": "00"
  }
}"#;
    assert_eq!(extended_json(&bytes).unwrap(), expected);
}

#[test]
fn test_parts_concatenate() {
    let bytes = decode(EXAMPLE).unwrap();
    let timestamp = decode_timestamp(&EXAMPLE[..TIMESTAMP_LEN]).unwrap();
    let randomness = decode_randomness(&EXAMPLE[TIMESTAMP_LEN..]).unwrap();

    assert_eq!(bytes[..TIMESTAMP_BYTES], timestamp);
    assert_eq!(bytes[TIMESTAMP_BYTES..], randomness);
}

#[test]
fn test_random_valid_ulids() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let ulid = random_ulid(&mut rng, 7);
        let bytes = decode(&ulid).unwrap();

        assert_eq!(u128::from_be_bytes(bytes), fold_ulid(&ulid), "{ulid}");
        assert_eq!(decode(&ulid), Ok(bytes));
        assert_eq!(validate(&ulid), Ok(()));
    }
}

#[test]
fn test_random_overflowing_ulids() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let mut ulid = random_ulid(&mut rng, 31);
        if ulid.as_bytes()[0] <= b'7' {
            ulid.replace_range(..1, "8");
        }
        assert_eq!(decode(&ulid), Err(Error::TimestampOverflow), "{ulid}");
    }
}

#[test]
fn test_timestamp_boundary() {
    assert_eq!(
        decode("7ZZZZZZZZZ0000000000000000"),
        Ok([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    );
    assert_eq!(decode("8000000000ZZZZZZZZZZZZZZZZ"), Err(Error::TimestampOverflow));

    for c in "89ABCDEFGHJKMNPQRSTVWXYZ".chars() {
        let ulid = format!("{c}0000000000000000000000000");
        assert_eq!(decode(&ulid), Err(Error::TimestampOverflow));
        assert_eq!(decode_timestamp(&ulid[..TIMESTAMP_LEN]), Err(Error::TimestampOverflow));
    }
}

#[test]
fn test_invalid_length() {
    assert_eq!(decode(""), Err(Error::InvalidLength { expected: 26, found: 0 }));
    assert_eq!(
        decode(&EXAMPLE[..25]),
        Err(Error::InvalidLength { expected: 26, found: 25 })
    );
    assert_eq!(
        decode(&format!("{EXAMPLE}0")),
        Err(Error::InvalidLength { expected: 26, found: 27 })
    );
    assert_eq!(
        decode("1234567890123456789012345$$"),
        Err(Error::InvalidLength { expected: 26, found: 27 })
    );

    assert_eq!(
        decode("000000000000000000000000é"),
        Err(Error::InvalidLength { expected: 26, found: 25 })
    );
    assert_eq!(
        "000000000000000000000000é".parse::<BinaryUlid>(),
        Err(Error::InvalidLength { expected: 26, found: 25 })
    );
    assert_eq!(
        decode_timestamp("00000000é"),
        Err(Error::InvalidLength { expected: 10, found: 9 })
    );
    assert_eq!(
        decode_randomness("00000000000000é"),
        Err(Error::InvalidLength { expected: 16, found: 15 })
    );

    assert_eq!(
        decode_timestamp(EXAMPLE),
        Err(Error::InvalidLength { expected: 10, found: 26 })
    );
    assert_eq!(
        decode_randomness(EXAMPLE),
        Err(Error::InvalidLength { expected: 16, found: 26 })
    );
}

#[test]
fn test_invalid_character() {
    for c in "ILOUilou!$ -_+=/".chars() {
        let ulid = format!("0000000000000{c}000000000000");
        assert_eq!(decode(&ulid), Err(Error::InvalidCharacter { position: 13 }), "{ulid}");
    }

    assert_eq!(
        decode(&EXAMPLE.to_lowercase()),
        Err(Error::InvalidCharacter { position: 2 })
    );

    assert_eq!(
        decode("000000000000000000000000é0"),
        Err(Error::InvalidCharacter { position: 24 })
    );
    assert_eq!(
        decode("0000000000000000000000000€"),
        Err(Error::InvalidCharacter { position: 25 })
    );
}

#[test]
fn test_invalid_character_wins_over_overflow() {
    assert_eq!(
        decode("Z000000000000000000000000U"),
        Err(Error::InvalidCharacter { position: 25 })
    );
    assert_eq!(validate("Z000000000000000000000000U"), Err(Error::InvalidCharacter { position: 25 }));
}

#[test]
fn test_parse() {
    let ulid: BinaryUlid = EXAMPLE.parse().unwrap();

    assert_eq!(ulid.to_bytes(), decode(EXAMPLE).unwrap());
    assert_eq!("".parse::<BinaryUlid>(), Err(Error::InvalidLength { expected: 26, found: 0 }));
    assert_eq!(
        "80000000000000000000000000".parse::<BinaryUlid>(),
        Err(Error::TimestampOverflow)
    );
}

#[test]
fn test_binary_parts() {
    let ulid: BinaryUlid = EXAMPLE.parse().unwrap();

    assert_eq!(ulid.timestamp(), 1_731_494_344_413);
    assert_eq!(ulid.randomness(), 0xD9D8_72EE_9080_1670_4B41);
    assert_eq!(ulid.to_parts(), (ulid.timestamp(), ulid.randomness()));

    assert_eq!(ulid.timestamp_bytes(), decode_timestamp("01JCJHNXPX").unwrap()); // cspell:disable-line
    assert_eq!(ulid.randomness_bytes(), decode_randomness("V7C75VMGG0B70JT1").unwrap());

    assert_eq!(
        ulid.try_datetime(),
        Some(SystemTime::UNIX_EPOCH + Duration::from_millis(1_731_494_344_413))
    );
    assert_eq!(ulid.datetime(), ulid.try_datetime().unwrap());
}

#[test]
fn test_binary_conversions() {
    let ulid: BinaryUlid = EXAMPLE.parse().unwrap();
    let bytes: [u8; 16] = ulid.into();
    let n: u128 = ulid.into();

    assert_eq!(BinaryUlid::from(bytes), ulid);
    assert_eq!(BinaryUlid::from(n), ulid);
    assert_eq!(BinaryUlid::from_u128(n).to_bytes(), bytes);
    assert_eq!(ulid.as_bytes(), &bytes);
    assert_eq!(AsRef::<[u8]>::as_ref(&ulid), bytes.as_slice());

    assert_eq!(BinaryUlid::try_from(bytes.as_slice()), Ok(ulid));
    assert_eq!(
        BinaryUlid::try_from(&bytes[..15]),
        Err(Error::InvalidLength { expected: 16, found: 15 })
    );
    assert_eq!(
        BinaryUlid::try_from(&bytes[..15]).unwrap_err().to_string(),
        "invalid length 15, expected exactly 16"
    );
}

#[test]
fn test_binary_rendering() {
    let ulid: BinaryUlid = EXAMPLE.parse().unwrap();

    assert_eq!(ulid.to_base64(), "AZMlGvbd2dhy7pCAFnBLQQ==");
    assert_eq!(ulid.to_bindata_literal(), bindata_literal(ulid.as_bytes()));
    assert_eq!(ulid.to_extended_json().unwrap(), extended_json(ulid.as_bytes()).unwrap());
}

#[test]
fn test_debug_fmt() {
    let ulid: BinaryUlid = EXAMPLE.parse().unwrap();

    assert_eq!(
        format!("{ulid:?}"),
        r#"BinaryUlid { timestamp: 1731494344413, randomness: "D9D872EE908016704B41" }"#
    );
}

#[test]
fn test_serde() {
    use serde_derive::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Document {
        _id: BinaryUlid,
    }

    let doc = Document {
        _id: EXAMPLE.parse().unwrap(),
    };

    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"_id":"AZMlGvbd2dhy7pCAFnBLQQ=="}"#);

    assert_eq!(serde_json::from_str::<Document>(&json).unwrap(), doc);

    let from_text = format!(r#"{{"_id":"{EXAMPLE}"}}"#);
    assert_eq!(serde_json::from_str::<Document>(&from_text).unwrap(), doc);

    assert!(serde_json::from_str::<Document>(r#"{"_id":"AAAA"}"#).is_err());
    assert!(serde_json::from_str::<Document>(r#"{"_id":"80000000000000000000000000"}"#).is_err());
}

//! Stateless codecs for the base ERD wire formats.
//!
//! Every composite converter is built out of these. Decoders take the raw hex
//! wire string; encoders produce lower-case hex (the `"FF"` boolean sentinel
//! is the one upper-case exception, kept byte-for-byte compatible with the
//! vendor cloud).

use bytes::Bytes;
use chrono::Duration;
use hearth_sdk::{ErdError, ErdResult, HexCodec};

/// Raw minute count that marks a timespan as unset.
const TIMESPAN_UNSET: u32 = 65535;

/// Decode a big-endian unsigned integer from the whole hex string.
#[inline]
pub fn decode_int(raw: &str) -> ErdResult<u32> {
    u32::from_str_radix(raw, 16)
        .map_err(|e| ErdError::DecodeError(format!("invalid integer value {raw:?}: {e}")))
}

/// Encode an unsigned integer as exactly two bytes (four hex chars).
#[inline]
pub fn encode_int(value: u32) -> ErdResult<String> {
    if value > 0xFFFF {
        return Err(ErdError::EncodeError(format!(
            "integer {value} does not fit in two bytes"
        )));
    }
    Ok(format!("{value:04x}"))
}

/// Decode a single byte using the vendor's offset rule: raw values above 128
/// wrap negative (`raw - 256`), while exactly 128 stays 128. This is not
/// two's complement; the asymmetry is what the appliances actually send.
#[inline]
pub fn decode_signed_byte(raw: &str) -> ErdResult<i16> {
    let value = decode_int(raw)?;
    if value > 0xFF {
        return Err(ErdError::DecodeError(format!(
            "signed byte value {raw:?} is wider than one byte"
        )));
    }
    let value = value as i16;
    Ok(if value > 128 { value - 256 } else { value })
}

/// Encode a signed byte by reversing the offset rule (negative values gain
/// 256 before encoding).
#[inline]
pub fn encode_signed_byte(value: i16) -> ErdResult<String> {
    if !(-128..=255).contains(&value) {
        return Err(ErdError::EncodeError(format!(
            "signed byte {value} out of range"
        )));
    }
    let raw = if value < 0 { value + 256 } else { value };
    Ok(format!("{raw:02x}"))
}

/// Decode the raw payload as uninterpreted bytes.
#[inline]
pub fn decode_bytes(raw: &str) -> ErdResult<Bytes> {
    HexCodec::decode(raw)
}

/// Encode uninterpreted bytes back to hex.
#[inline]
pub fn encode_bytes(bytes: &[u8]) -> String {
    HexCodec::encode(bytes)
}

/// Decode a tri-state boolean: the `FF` byte means "not applicable", any
/// other non-zero payload is true, all-zero is false.
#[inline]
pub fn decode_bool(raw: &str) -> ErdResult<Option<bool>> {
    let bytes = HexCodec::decode(raw)?;
    if bytes.as_ref() == [0xFF] {
        return Ok(None);
    }
    Ok(Some(bytes.iter().any(|b| *b != 0)))
}

/// Encode a tri-state boolean.
#[inline]
pub fn encode_bool(value: Option<bool>) -> String {
    match value {
        None => "FF".to_string(),
        Some(true) => "01".to_string(),
        Some(false) => "00".to_string(),
    }
}

/// Decode a null-padded ASCII string: hex to bytes, strip trailing NULs,
/// require ASCII content.
pub fn decode_string(raw: &str) -> ErdResult<String> {
    let bytes = HexCodec::decode(raw)?;
    let mut bytes = bytes.as_ref();
    while let [rest @ .., 0] = bytes {
        bytes = rest;
    }
    if !bytes.is_ascii() {
        return Err(ErdError::DecodeError(format!(
            "string value {raw:?} is not ASCII"
        )));
    }
    // Safe: ASCII is valid UTF-8.
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Encode an ASCII string. No NUL padding is added, so this is not an exact
/// inverse of [`decode_string`] for values shorter than their wire field.
pub fn encode_string(value: &str) -> ErdResult<String> {
    if !value.is_ascii() {
        return Err(ErdError::EncodeError(format!(
            "string {value:?} is not ASCII"
        )));
    }
    Ok(HexCodec::encode(value.as_bytes()))
}

/// Decode a minute-granularity timespan; the raw value 65535 means "unset".
pub fn decode_timespan(raw: &str) -> ErdResult<Option<Duration>> {
    let minutes = decode_int(raw)?;
    if minutes == TIMESPAN_UNSET {
        tracing::debug!("timespan value 65535 treated as unset");
        return Ok(None);
    }
    Ok(Some(Duration::minutes(minutes as i64)))
}

/// Encode a minute-granularity timespan; unset encodes as the 65535 sentinel
/// and sub-minute remainders truncate silently.
pub fn encode_timespan(value: Option<Duration>) -> ErdResult<String> {
    let minutes = match value {
        None => TIMESPAN_UNSET,
        Some(d) => {
            let minutes = d.num_seconds() / 60;
            u32::try_from(minutes).map_err(|_| {
                ErdError::EncodeError(format!("timespan of {minutes} minutes not encodable"))
            })?
        }
    };
    encode_int(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_decode() {
        assert_eq!(decode_int("00FF").unwrap(), 255);
        assert_eq!(decode_int("ffff").unwrap(), 65535);
        assert!(decode_int("xyz").is_err());
    }

    #[test]
    fn int_encode_is_two_bytes() {
        assert_eq!(encode_int(350).unwrap(), "015e");
        assert_eq!(encode_int(0).unwrap(), "0000");
        assert!(encode_int(0x1_0000).is_err());
    }

    #[test]
    fn signed_byte_roundtrip() {
        for n in -127..=128i16 {
            let hex = encode_signed_byte(n).unwrap();
            assert_eq!(decode_signed_byte(&hex).unwrap(), n, "value {n}");
        }
    }

    #[test]
    fn signed_byte_offset_rule() {
        assert_eq!(decode_signed_byte("81").unwrap(), -127);
        assert_eq!(decode_signed_byte("80").unwrap(), 128);
        assert_eq!(decode_signed_byte("ff").unwrap(), -1);
        assert_eq!(encode_signed_byte(-1).unwrap(), "ff");
    }

    #[test]
    fn bool_tri_state() {
        assert_eq!(decode_bool("FF").unwrap(), None);
        assert_eq!(decode_bool("ff").unwrap(), None);
        assert_eq!(decode_bool("01").unwrap(), Some(true));
        assert_eq!(decode_bool("02").unwrap(), Some(true));
        assert_eq!(decode_bool("00").unwrap(), Some(false));
        assert_eq!(encode_bool(None), "FF");
        assert_eq!(encode_bool(Some(true)), "01");
        assert_eq!(encode_bool(Some(false)), "00");
    }

    #[test]
    fn string_strips_trailing_nuls() {
        assert_eq!(decode_string("414243000000").unwrap(), "ABC");
        assert_eq!(decode_string("41424300410000").unwrap(), "ABC\0A");
        assert_eq!(encode_string("ABC").unwrap(), "414243");
    }

    #[test]
    fn string_rejects_non_ascii() {
        assert!(decode_string("c3a9").is_err());
        assert!(encode_string("é").is_err());
    }

    #[test]
    fn timespan_sentinel_and_roundtrip() {
        assert_eq!(decode_timespan("FFFF").unwrap(), None);
        assert_eq!(encode_timespan(None).unwrap(), "ffff");
        for m in [0i64, 1, 59, 60, 1439, 65534] {
            let hex = encode_timespan(Some(Duration::minutes(m))).unwrap();
            assert_eq!(decode_timespan(&hex).unwrap(), Some(Duration::minutes(m)));
        }
        // Sub-minute truncation is silent.
        assert_eq!(
            encode_timespan(Some(Duration::seconds(90))).unwrap(),
            encode_timespan(Some(Duration::minutes(1))).unwrap()
        );
    }
}

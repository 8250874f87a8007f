use crate::error::{ErdError, ErdResult};
use bytes::Bytes;

/// Hex wire-string utilities shared by every ERD converter.
///
/// Appliances report values as strings of hex digit pairs, one pair per byte,
/// without any prefix. The empty string is a valid payload and maps to zero
/// bytes; odd-length or non-hex input is rejected rather than padded.
pub struct HexCodec;

impl HexCodec {
    /// Decode a hex wire string into bytes.
    #[inline]
    pub fn decode(raw: &str) -> ErdResult<Bytes> {
        if raw.is_empty() {
            return Ok(Bytes::new());
        }
        hex::decode(raw)
            .map(Bytes::from)
            .map_err(|e| ErdError::DecodeError(format!("invalid hex value {raw:?}: {e}")))
    }

    /// Encode bytes as a lower-case hex wire string.
    #[inline]
    pub fn encode(bytes: &[u8]) -> String {
        hex::encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_mixed_case() {
        assert_eq!(HexCodec::decode("00FF").unwrap().as_ref(), &[0x00, 0xFF]);
        assert_eq!(HexCodec::decode("00ff").unwrap().as_ref(), &[0x00, 0xFF]);
    }

    #[test]
    fn decode_empty_is_zero_bytes() {
        assert!(HexCodec::decode("").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_odd_length_and_garbage() {
        assert!(HexCodec::decode("0").is_err());
        assert!(HexCodec::decode("zz").is_err());
    }

    #[test]
    fn encode_is_lower_case() {
        assert_eq!(HexCodec::encode(&[0x01, 0x5E, 0xFF]), "015eff");
    }
}

use super::expected;
use crate::primitives;
use crate::types::{
    ErdOvenCookMode, ErdOvenState, OvenConfiguration, OvenCookSetting, OvenRanges,
    AVAILABLE_COOK_MODES, OVEN_COOK_MODE_MAP,
};
use crate::value::ErdValue;
use hearth_sdk::{ErdError, ErdResult, HexCodec};
use std::collections::BTreeSet;

/// Map the raw current-state value onto a display state.
///
/// The upper codes are grouped by disjoint ranges checked in this exact
/// order; 1..=27 are individually enumerated states; everything else renders
/// as a dash.
pub fn decode_oven_state(raw: &str) -> ErdResult<ErdValue> {
    let state_code = primitives::decode_int(raw)?;
    let state = match state_code {
        44..=59 => ErdOvenState::SpecialX,
        42..=43 => ErdOvenState::BakedGoods,
        40..=41 => ErdOvenState::FrozenPizzaMulti,
        38..=39 => ErdOvenState::FrozenSnacksMulti,
        36..=37 => ErdOvenState::FrozenPizza,
        33..=35 => ErdOvenState::FrozenSnacks,
        1..=27 => ErdOvenState::from_code(state_code).unwrap_or(ErdOvenState::Dash),
        _ => ErdOvenState::Dash,
    };
    Ok(ErdValue::OvenState(state))
}

/// Decode the offered cook modes from the capability bit table. An empty
/// payload advertises plain bake only.
pub fn decode_available_cook_modes(raw: &str) -> ErdResult<ErdValue> {
    if raw.is_empty() {
        let mut modes = BTreeSet::new();
        modes.insert(ErdOvenCookMode::BakeNoOption);
        return Ok(ErdValue::AvailableCookModes(modes));
    }

    let bytes = HexCodec::decode(raw)?;
    let needed = AVAILABLE_COOK_MODES
        .iter()
        .map(|m| m.byte + 1)
        .max()
        .unwrap_or(0);
    if bytes.len() < needed {
        return Err(ErdError::DecodeError(format!(
            "available cook modes payload has {} bytes, need {needed}",
            bytes.len()
        )));
    }

    let modes = AVAILABLE_COOK_MODES
        .iter()
        .filter(|m| bytes[m.byte] & m.mask != 0)
        .map(|m| m.cook_mode)
        .collect();
    Ok(ErdValue::AvailableCookModes(modes))
}

/// Decode a cook-mode setting: mode code, big-endian temperature, and ten
/// trailing bytes that are carried along unmodeled.
pub fn decode_oven_cook_mode(raw: &str) -> ErdResult<ErdValue> {
    let bytes = HexCodec::decode(raw)?;
    if bytes.len() < 3 {
        return Err(ErdError::DecodeError(format!(
            "cook mode payload has {} bytes, need at least 3",
            bytes.len()
        )));
    }

    let code = bytes[0] as u16;
    let raw_mode = ErdOvenCookMode::from_code(code)
        .ok_or_else(|| ErdError::DecodeError(format!("unknown cook mode code {code}")))?;
    let cook_mode = OVEN_COOK_MODE_MAP
        .cook_mode(raw_mode)
        .ok_or_else(|| ErdError::DecodeError(format!("cook mode {raw_mode:?} has no decomposition")))?;
    let temperature = u16::from_be_bytes([bytes[1], bytes[2]]);

    Ok(ErdValue::OvenCookSetting(OvenCookSetting {
        cook_mode,
        temperature,
        raw: bytes,
    }))
}

/// Encode a cook-mode setting. The trailing ten bytes are always written as
/// zeros, so a decode → encode round trip loses whatever the appliance had
/// there.
pub fn encode_oven_cook_mode(value: &ErdValue) -> ErdResult<String> {
    let setting = match value {
        ErdValue::OvenCookSetting(setting) => setting,
        other => return Err(expected("oven cook setting", other)),
    };

    let raw_mode = OVEN_COOK_MODE_MAP
        .raw_mode(&setting.cook_mode)
        .ok_or_else(|| {
            ErdError::EncodeError(format!("no wire code for cook mode {:?}", setting.cook_mode))
        })?;
    let code = raw_mode.code();
    if code > 0xFF {
        return Err(ErdError::EncodeError(format!(
            "cook mode code {code} does not fit in one byte"
        )));
    }

    Ok(format!(
        "{code:02x}{temperature:04x}{zeros}",
        temperature = setting.temperature,
        zeros = "00".repeat(10)
    ))
}

/// Decode the hardware configuration bitfield. An empty payload reads as no
/// flags set.
pub fn decode_oven_configuration(raw: &str) -> ErdResult<ErdValue> {
    let n = if raw.is_empty() {
        0
    } else {
        primitives::decode_int(raw)?
    };
    Ok(ErdValue::OvenConfiguration(OvenConfiguration::from_bitfield(
        n, raw,
    )))
}

/// Decode the supported temperature range: upper bound in the first two
/// bytes, lower bound in the last two.
pub fn decode_oven_ranges(raw: &str) -> ErdResult<ErdValue> {
    let bytes = HexCodec::decode(raw)?;
    if bytes.len() < 4 {
        return Err(ErdError::DecodeError(format!(
            "temperature range payload has {} bytes, need 4",
            bytes.len()
        )));
    }
    let upper = u16::from_be_bytes([bytes[0], bytes[1]]);
    let lower = u16::from_be_bytes([bytes[bytes.len() - 2], bytes[bytes.len() - 1]]);
    Ok(ErdValue::OvenRanges(OvenRanges { lower, upper }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OvenCookMode;

    #[test]
    fn oven_state_range_groups() {
        let decode = |raw: &str| match decode_oven_state(raw).unwrap() {
            ErdValue::OvenState(s) => s,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(decode("002c"), ErdOvenState::SpecialX); // 44
        assert_eq!(decode("003b"), ErdOvenState::SpecialX); // 59
        assert_eq!(decode("002a"), ErdOvenState::BakedGoods); // 42
        assert_eq!(decode("0028"), ErdOvenState::FrozenPizzaMulti); // 40
        assert_eq!(decode("0026"), ErdOvenState::FrozenSnacksMulti); // 38
        assert_eq!(decode("0024"), ErdOvenState::FrozenPizza); // 36
        assert_eq!(decode("0021"), ErdOvenState::FrozenSnacks); // 33
        assert_eq!(decode("0005"), ErdOvenState::Bake);
        assert_eq!(decode("0012"), ErdOvenState::Warm); // 18
        assert_eq!(decode("0000"), ErdOvenState::Dash);
        assert_eq!(decode("003c"), ErdOvenState::Dash); // 60
    }

    #[test]
    fn available_cook_modes_bit_table() {
        // Byte 2 = 0x15 sets frozen snacks (1), frozen pizza (4) and baked
        // goods (16); byte 9 = 0x02 sets plain bake.
        let raw = "00001500000000000002";
        let modes = match decode_available_cook_modes(raw).unwrap() {
            ErdValue::AvailableCookModes(m) => m,
            other => panic!("unexpected value {other:?}"),
        };
        let expected: BTreeSet<_> = [
            ErdOvenCookMode::BakeNoOption,
            ErdOvenCookMode::FrozenSnacks,
            ErdOvenCookMode::FrozenPizza,
            ErdOvenCookMode::BakedGoods,
        ]
        .into_iter()
        .collect();
        assert_eq!(modes, expected);
    }

    #[test]
    fn available_cook_modes_empty_defaults_to_bake() {
        let modes = match decode_available_cook_modes("").unwrap() {
            ErdValue::AvailableCookModes(m) => m,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(modes.len(), 1);
        assert!(modes.contains(&ErdOvenCookMode::BakeNoOption));
    }

    #[test]
    fn available_cook_modes_short_payload_is_an_error() {
        assert!(decode_available_cook_modes("0000").is_err());
    }

    #[test]
    fn cook_mode_roundtrip_keeps_mode_and_temperature() {
        let encoded = "01015e00000000000000000000";
        let decoded = match decode_oven_cook_mode(encoded).unwrap() {
            ErdValue::OvenCookSetting(s) => s,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(
            decoded.cook_mode,
            OvenCookMode::base(ErdOvenState::Bake, false, false, false)
        );
        assert_eq!(decoded.temperature, 350);
        assert_eq!(
            encode_oven_cook_mode(&ErdValue::OvenCookSetting(decoded)).unwrap(),
            encoded
        );
    }

    #[test]
    fn cook_mode_trailing_bytes_are_kept_on_decode_but_zeroed_on_encode() {
        let wire = "01015e0102030405060708090a";
        let decoded = match decode_oven_cook_mode(wire).unwrap() {
            ErdValue::OvenCookSetting(s) => s,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(HexCodec::encode(&decoded.raw), wire);
        assert_eq!(
            encode_oven_cook_mode(&ErdValue::OvenCookSetting(decoded)).unwrap(),
            "01015e00000000000000000000"
        );
    }

    #[test]
    fn unknown_cook_mode_code_is_a_decode_error() {
        // 55 is a gap in the vendor table.
        assert!(decode_oven_cook_mode("37015e").is_err());
    }

    #[test]
    fn out_of_byte_range_cook_mode_is_an_encode_error() {
        let setting = OvenCookSetting {
            cook_mode: OvenCookMode::base(ErdOvenState::FrozenSnacksMulti, false, false, false),
            temperature: 0,
            raw: Default::default(),
        };
        assert!(encode_oven_cook_mode(&ErdValue::OvenCookSetting(setting)).is_err());
    }

    #[test]
    fn configuration_empty_payload_reads_as_no_flags() {
        let config = match decode_oven_configuration("").unwrap() {
            ErdValue::OvenConfiguration(c) => c,
            other => panic!("unexpected value {other:?}"),
        };
        assert!(!config.has_knob);
        assert!(!config.has_lower_oven);
    }

    #[test]
    fn ranges_take_first_and_last_pairs() {
        let ranges = match decode_oven_ranges("022600aa").unwrap() {
            ErdValue::OvenRanges(r) => r,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(ranges.upper, 550);
        assert_eq!(ranges.lower, 170);
    }
}

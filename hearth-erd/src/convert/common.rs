use super::expected;
use crate::primitives;
use crate::types::{
    ErdApplianceType, ErdClockFormat, ErdEndTone, ErdMeasurementUnits, ErdSoundLevel,
};
use crate::value::ErdValue;
use hearth_sdk::{ErdError, ErdResult, HexCodec};
use std::sync::Arc;

// Primitive-backed converters, shared by many codes.

pub fn decode_int(raw: &str) -> ErdResult<ErdValue> {
    primitives::decode_int(raw).map(ErdValue::Int)
}

pub fn encode_int(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::Int(n) => primitives::encode_int(*n),
        other => Err(expected("integer", other)),
    }
}

pub fn decode_bool(raw: &str) -> ErdResult<ErdValue> {
    primitives::decode_bool(raw).map(ErdValue::Boolean)
}

pub fn encode_bool(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::Boolean(b) => Ok(primitives::encode_bool(*b)),
        other => Err(expected("boolean", other)),
    }
}

pub fn decode_string(raw: &str) -> ErdResult<ErdValue> {
    primitives::decode_string(raw).map(|s| ErdValue::String(Arc::from(s)))
}

pub fn encode_string(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::String(s) => primitives::encode_string(s),
        other => Err(expected("string", other)),
    }
}

pub fn decode_timespan(raw: &str) -> ErdResult<ErdValue> {
    primitives::decode_timespan(raw).map(ErdValue::TimeSpan)
}

pub fn encode_timespan(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::TimeSpan(d) => primitives::encode_timespan(*d),
        other => Err(expected("timespan", other)),
    }
}

// Universal appliance fields.

pub fn decode_appliance_type(raw: &str) -> ErdResult<ErdValue> {
    Ok(ErdValue::ApplianceType(ErdApplianceType::from_raw(raw)))
}

/// Model and serial numbers arrive as a NUL-padded ASCII string whose first
/// byte is a checksum; the checksum is dropped, which is why these fields
/// have no encoder.
pub fn decode_model_serial(raw: &str) -> ErdResult<ErdValue> {
    let bytes = HexCodec::decode(raw)?;
    let mut bytes = bytes.as_ref();
    while let [rest @ .., 0] = bytes {
        bytes = rest;
    }
    let bytes = bytes.get(1..).unwrap_or_default();
    if !bytes.is_ascii() {
        return Err(ErdError::DecodeError(format!(
            "model/serial value {raw:?} is not ASCII"
        )));
    }
    Ok(ErdValue::String(Arc::from(
        String::from_utf8_lossy(bytes).into_owned(),
    )))
}

/// Software versions are sent as one byte per version segment, rendered as a
/// dot-joined decimal string (`"01020a00"` → `"1.2.10.0"`).
pub fn decode_software_version(raw: &str) -> ErdResult<ErdValue> {
    let bytes = HexCodec::decode(raw)?;
    let version = bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(".");
    Ok(ErdValue::String(Arc::from(version)))
}

/// Measurement units are the one field the cloud sends as a *decimal* string
/// rather than hex.
pub fn decode_measurement_units(raw: &str) -> ErdResult<ErdValue> {
    let units = raw
        .trim()
        .parse::<i64>()
        .map(ErdMeasurementUnits::from_value)
        .unwrap_or(ErdMeasurementUnits::Na);
    Ok(ErdValue::MeasurementUnits(units))
}

pub fn encode_measurement_units(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::MeasurementUnits(ErdMeasurementUnits::Na) => Err(ErdError::EncodeError(
            "measurement units NA has no wire form".to_string(),
        )),
        ErdValue::MeasurementUnits(units) => Ok(format!("{:02}", *units as i16)),
        other => Err(expected("measurement units", other)),
    }
}

pub fn decode_sound_level(raw: &str) -> ErdResult<ErdValue> {
    let level = primitives::decode_int(raw)?;
    Ok(ErdValue::SoundLevel(ErdSoundLevel::from_value(level)))
}

pub fn encode_sound_level(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::SoundLevel(ErdSoundLevel::Na) => Err(ErdError::EncodeError(
            "sound level NA has no wire form".to_string(),
        )),
        ErdValue::SoundLevel(level) => primitives::encode_int(*level as i16 as u32),
        other => Err(expected("sound level", other)),
    }
}

pub fn decode_clock_format(raw: &str) -> ErdResult<ErdValue> {
    Ok(ErdValue::ClockFormat(ErdClockFormat::from_raw(raw)))
}

pub fn encode_clock_format(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::ClockFormat(format) => format
            .raw()
            .map(str::to_string)
            .ok_or_else(|| ErdError::EncodeError("clock format NA has no wire form".to_string())),
        other => Err(expected("clock format", other)),
    }
}

pub fn decode_end_tone(raw: &str) -> ErdResult<ErdValue> {
    Ok(ErdValue::EndTone(ErdEndTone::from_raw(raw)))
}

pub fn encode_end_tone(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::EndTone(tone) => tone
            .raw()
            .map(str::to_string)
            .ok_or_else(|| ErdError::EncodeError("invalid end tone value".to_string())),
        other => Err(expected("end tone", other)),
    }
}

use crate::types::{
    ErdApplianceType, ErdClockFormat, ErdCycleState, ErdEndTone, ErdFilterStatus,
    ErdMeasurementUnits, ErdOperatingState, ErdOvenCookMode, ErdOvenState, ErdRinseAgent,
    ErdSoundLevel, FridgeDoorStatus, FridgeIceBucketStatus, FridgeSetPointLimits, FridgeSetPoints,
    HotWaterStatus, IceMakerControlStatus, OvenConfiguration, OvenCookSetting, OvenRanges,
};
use bytes::Bytes;
use chrono::Duration;
use hearth_sdk::HexCodec;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

/// A decoded ERD value.
///
/// Every converter produces exactly one of these shapes; the generic
/// fallbacks of the dispatcher produce `Int` and `Bytes`. "No value at all"
/// is expressed as `Option<ErdValue>::None` by the dispatcher and cache, and
/// is distinct from the in-band "not applicable" states some variants carry
/// (e.g. `Boolean(None)`).
#[derive(Debug, Clone, PartialEq)]
pub enum ErdValue {
    /// Plain unsigned integer (also the fallback for unregistered codes).
    Int(u32),
    /// Uninterpreted payload (also the fallback for unknown codes).
    Bytes(Bytes),
    /// Tri-state boolean; inner `None` is "not applicable".
    Boolean(Option<bool>),
    /// Null-stripped ASCII string.
    String(Arc<str>),
    /// Minute-granularity timespan; `None` is the unset sentinel.
    TimeSpan(Option<Duration>),

    ApplianceType(ErdApplianceType),
    MeasurementUnits(ErdMeasurementUnits),
    SoundLevel(ErdSoundLevel),
    ClockFormat(ErdClockFormat),
    EndTone(ErdEndTone),

    OvenState(ErdOvenState),
    AvailableCookModes(BTreeSet<ErdOvenCookMode>),
    OvenCookSetting(OvenCookSetting),
    OvenConfiguration(OvenConfiguration),
    OvenRanges(OvenRanges),

    DoorStatus(FridgeDoorStatus),
    IceBucketStatus(FridgeIceBucketStatus),
    IceMakerControl(IceMakerControlStatus),
    HotWaterStatus(HotWaterStatus),
    FilterStatus(ErdFilterStatus),
    SetPoints(FridgeSetPoints),
    SetPointLimits(FridgeSetPointLimits),

    CycleState(ErdCycleState),
    OperatingState(ErdOperatingState),
    RinseAgent(ErdRinseAgent),
}

impl ErdValue {
    #[inline]
    pub fn as_int(&self) -> Option<u32> {
        match self {
            ErdValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ErdValue::Boolean(b) => *b,
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ErdValue::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// JSON view of the value, for consumers that want to ship appliance
    /// state over a text protocol or log it. Binary payloads render as the
    /// wire hex form, timespans as whole minutes, in-band NA states as null.
    ///
    /// This is a presentation conversion; the hot decode/update path never
    /// goes through JSON.
    pub fn to_json_value(&self) -> Value {
        match self {
            ErdValue::Int(n) => json!(n),
            ErdValue::Bytes(b) => Value::String(HexCodec::encode(b)),
            ErdValue::Boolean(b) => match b {
                Some(b) => json!(b),
                None => Value::Null,
            },
            ErdValue::String(s) => Value::String(s.to_string()),
            ErdValue::TimeSpan(d) => match d {
                Some(d) => json!(d.num_minutes()),
                None => Value::Null,
            },
            ErdValue::ApplianceType(v) => to_value_or_null(v),
            ErdValue::MeasurementUnits(v) => to_value_or_null(v),
            ErdValue::SoundLevel(v) => to_value_or_null(v),
            ErdValue::ClockFormat(v) => to_value_or_null(v),
            ErdValue::EndTone(v) => to_value_or_null(v),
            ErdValue::OvenState(v) => to_value_or_null(v),
            ErdValue::AvailableCookModes(v) => to_value_or_null(v),
            ErdValue::OvenCookSetting(v) => to_value_or_null(v),
            ErdValue::OvenConfiguration(v) => to_value_or_null(v),
            ErdValue::OvenRanges(v) => to_value_or_null(v),
            ErdValue::DoorStatus(v) => to_value_or_null(v),
            ErdValue::IceBucketStatus(v) => to_value_or_null(v),
            ErdValue::IceMakerControl(v) => to_value_or_null(v),
            ErdValue::HotWaterStatus(v) => to_value_or_null(v),
            ErdValue::FilterStatus(v) => to_value_or_null(v),
            ErdValue::SetPoints(v) => to_value_or_null(v),
            ErdValue::SetPointLimits(v) => to_value_or_null(v),
            ErdValue::CycleState(v) => to_value_or_null(v),
            ErdValue::OperatingState(v) => to_value_or_null(v),
            ErdValue::RinseAgent(v) => to_value_or_null(v),
        }
    }
}

#[inline]
fn to_value_or_null<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl Serialize for ErdValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

/// Serialize `Bytes` fields as their hex wire form.
pub(crate) fn serialize_bytes_hex<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&HexCodec::encode(bytes))
}

/// Serialize optional durations as whole minutes.
pub(crate) fn serialize_minutes<S>(
    duration: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match duration {
        Some(d) => serializer.serialize_some(&d.num_minutes()),
        None => serializer.serialize_none(),
    }
}

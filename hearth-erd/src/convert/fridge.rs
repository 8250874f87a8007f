use super::{expected, hex_field};
use crate::primitives;
use crate::types::{
    ErdDoorStatus, ErdFilterStatus, ErdFullNotFull, ErdHotWaterStatus, ErdOnOff, ErdPodStatus,
    ErdPresent, FridgeDoorStatus, FridgeIceBucketStatus, FridgeSetPointLimits, FridgeSetPoints,
    HotWaterStatus, IceMakerControlStatus,
};
use crate::value::ErdValue;
use chrono::Duration;
use hearth_sdk::ErdResult;
use std::sync::Arc;

/// Two-hex-char field at the given byte offset; short payloads read as an
/// empty field so per-field NA fallbacks apply.
#[inline]
fn byte_field(raw: &str, index: usize) -> &str {
    raw.get(index * 2..index * 2 + 2).unwrap_or("")
}

/// Decode the ice bucket bitfield: bit 0/1 are fridge/freezer bucket
/// presence, bit 2/3 their fill state. Fill state of an absent bucket is
/// forced to NA.
pub fn decode_ice_bucket_status(raw: &str) -> ErdResult<ErdValue> {
    let n = if raw.is_empty() {
        0
    } else {
        primitives::decode_int(raw)?
    };

    let is_present_fridge = n & 1 != 0;
    let is_present_freezer = n & 2 != 0;
    let mut state_full_fridge = if n & 4 != 0 {
        ErdFullNotFull::Full
    } else {
        ErdFullNotFull::NotFull
    };
    let mut state_full_freezer = if n & 8 != 0 {
        ErdFullNotFull::Full
    } else {
        ErdFullNotFull::NotFull
    };

    if !is_present_fridge {
        state_full_fridge = ErdFullNotFull::Na;
    }
    if !is_present_freezer {
        state_full_freezer = ErdFullNotFull::Na;
    }

    // Note: the aggregate presence check keys off the fridge bucket twice,
    // matching the vendor app; a freezer-only bucket reports an NA aggregate.
    #[allow(clippy::eq_op)]
    let total_status = if !(is_present_fridge || is_present_fridge) {
        ErdFullNotFull::Na
    } else if state_full_fridge == ErdFullNotFull::NotFull
        || state_full_freezer == ErdFullNotFull::NotFull
    {
        ErdFullNotFull::NotFull
    } else {
        ErdFullNotFull::Full
    };

    Ok(ErdValue::IceBucketStatus(FridgeIceBucketStatus {
        state_full_fridge,
        state_full_freezer,
        is_present_fridge,
        is_present_freezer,
        total_status,
    }))
}

/// Decode the four door-state bytes and derive the display aggregate.
pub fn decode_door_status(raw: &str) -> ErdResult<ErdValue> {
    let fridge_right = ErdDoorStatus::from_raw(byte_field(raw, 0));
    let fridge_left = ErdDoorStatus::from_raw(byte_field(raw, 1));
    let freezer = ErdDoorStatus::from_raw(byte_field(raw, 2));
    let drawer = ErdDoorStatus::from_raw(byte_field(raw, 3));

    let status = if !fridge_right.is_open() && !fridge_left.is_open() {
        if freezer.is_open() {
            "Freezer Open"
        } else {
            "Closed"
        }
    } else if freezer.is_open() {
        "All Open"
    } else {
        "Fridge Open"
    };

    Ok(ErdValue::DoorStatus(FridgeDoorStatus {
        fridge_right,
        fridge_left,
        freezer,
        drawer,
        status: Arc::from(status),
    }))
}

/// Decode the hot water dispenser status block. An empty payload means the
/// dispenser is not reporting and decodes to the all-NA composite.
pub fn decode_hot_water_status(raw: &str) -> ErdResult<ErdValue> {
    if raw.is_empty() {
        return Ok(ErdValue::HotWaterStatus(HotWaterStatus::not_applicable()));
    }

    let status = ErdHotWaterStatus::from_raw(byte_field(raw, 0));
    // Minutes-remaining is always present in a non-empty payload; unlike
    // timespan codes it has no unset sentinel.
    let minutes = primitives::decode_int(hex_field(raw, 2..6, "hot water minutes")?)?;
    let current_temp = primitives::decode_int(hex_field(raw, 6..8, "hot water temperature")?)?;
    let tank_full = ErdFullNotFull::from_raw(byte_field(raw, 4));
    let brew_module = ErdPresent::from_raw(byte_field(raw, 5));
    let pod_status = ErdPodStatus::from_raw(byte_field(raw, 6));

    Ok(ErdValue::HotWaterStatus(HotWaterStatus {
        status,
        time_until_ready: Some(Duration::minutes(minutes as i64)),
        current_temp: Some(current_temp),
        tank_full,
        brew_module,
        pod_status,
    }))
}

/// Decode the per-compartment ice maker switches. The wire carries the
/// freezer field first.
pub fn decode_ice_maker_control(raw: &str) -> ErdResult<ErdValue> {
    let status_freezer = ErdOnOff::from_raw(byte_field(raw, 0));
    let status_fridge = ErdOnOff::from_raw(raw.get(2..).unwrap_or(""));
    Ok(ErdValue::IceMakerControl(IceMakerControlStatus {
        status_fridge,
        status_freezer,
    }))
}

pub fn encode_ice_maker_control(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::IceMakerControl(control) => Ok(format!(
            "{}{}",
            control.status_freezer.raw(),
            control.status_fridge.raw()
        )),
        other => Err(expected("ice maker control", other)),
    }
}

/// Decode the water filter status. Only the first two of the nine payload
/// bytes are understood; when the first byte is zero the second one carries
/// the status instead.
pub fn decode_filter_status(raw: &str) -> ErdResult<ErdValue> {
    let mut status_byte = byte_field(raw, 0);
    if status_byte == "00" {
        status_byte = byte_field(raw, 1);
    }
    Ok(ErdValue::FilterStatus(ErdFilterStatus::from_raw(status_byte)))
}

/// Decode the setpoint limit window: four signed bytes.
pub fn decode_setpoint_limits(raw: &str) -> ErdResult<ErdValue> {
    Ok(ErdValue::SetPointLimits(FridgeSetPointLimits {
        fridge_min: primitives::decode_signed_byte(hex_field(raw, 0..2, "fridge min")?)?,
        fridge_max: primitives::decode_signed_byte(hex_field(raw, 2..4, "fridge max")?)?,
        freezer_min: primitives::decode_signed_byte(hex_field(raw, 4..6, "freezer min")?)?,
        freezer_max: primitives::decode_signed_byte(hex_field(raw, 6..8, "freezer max")?)?,
    }))
}

/// Decode a setpoint pair: two signed bytes, fridge first.
pub fn decode_setpoints(raw: &str) -> ErdResult<ErdValue> {
    Ok(ErdValue::SetPoints(FridgeSetPoints {
        fridge: primitives::decode_signed_byte(hex_field(raw, 0..2, "fridge setpoint")?)?,
        freezer: primitives::decode_signed_byte(hex_field(raw, 2..4, "freezer setpoint")?)?,
    }))
}

pub fn encode_setpoints(value: &ErdValue) -> ErdResult<String> {
    match value {
        ErdValue::SetPoints(points) => Ok(format!(
            "{}{}",
            primitives::encode_signed_byte(points.fridge)?,
            primitives::encode_signed_byte(points.freezer)?
        )),
        other => Err(expected("setpoints", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ice_bucket(raw: &str) -> FridgeIceBucketStatus {
        match decode_ice_bucket_status(raw).unwrap() {
            ErdValue::IceBucketStatus(s) => s,
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn ice_bucket_no_buckets_is_all_na() {
        let status = ice_bucket("0000");
        assert_eq!(status.state_full_fridge, ErdFullNotFull::Na);
        assert_eq!(status.state_full_freezer, ErdFullNotFull::Na);
        assert!(!status.is_present_fridge);
        assert!(!status.is_present_freezer);
        assert_eq!(status.total_status, ErdFullNotFull::Na);
    }

    #[test]
    fn ice_bucket_fill_states() {
        // Both buckets present, fridge full, freezer not full.
        let status = ice_bucket("0007");
        assert_eq!(status.state_full_fridge, ErdFullNotFull::Full);
        assert_eq!(status.state_full_freezer, ErdFullNotFull::NotFull);
        assert_eq!(status.total_status, ErdFullNotFull::NotFull);

        // Both present and both full.
        let status = ice_bucket("000f");
        assert_eq!(status.total_status, ErdFullNotFull::Full);
    }

    #[test]
    fn ice_bucket_freezer_only_reports_na_aggregate() {
        // Freezer bucket present and full; the aggregate still reads NA
        // because only the fridge bucket feeds the presence check.
        let status = ice_bucket("000a");
        assert!(status.is_present_freezer);
        assert_eq!(status.state_full_freezer, ErdFullNotFull::Full);
        assert_eq!(status.total_status, ErdFullNotFull::Na);
    }

    fn door(raw: &str) -> FridgeDoorStatus {
        match decode_door_status(raw).unwrap() {
            ErdValue::DoorStatus(s) => s,
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn door_status_aggregates() {
        assert_eq!(door("00000000").status.as_ref(), "Closed");
        assert_eq!(door("01000000").status.as_ref(), "Fridge Open");
        assert_eq!(door("00010000").status.as_ref(), "Fridge Open");
        assert_eq!(door("00000100").status.as_ref(), "Freezer Open");
        assert_eq!(door("01000100").status.as_ref(), "All Open");
    }

    #[test]
    fn door_status_unknown_bytes_fall_back_to_na() {
        let status = door("01ff7a");
        assert_eq!(status.fridge_right, ErdDoorStatus::Open);
        assert_eq!(status.fridge_left, ErdDoorStatus::Na);
        assert_eq!(status.freezer, ErdDoorStatus::Na);
        assert_eq!(status.drawer, ErdDoorStatus::Na);
        assert_eq!(status.status.as_ref(), "Fridge Open");
    }

    #[test]
    fn hot_water_empty_payload_is_all_na() {
        let status = match decode_hot_water_status("").unwrap() {
            ErdValue::HotWaterStatus(s) => s,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(status, HotWaterStatus::not_applicable());
    }

    #[test]
    fn hot_water_full_payload() {
        // status=heating, 12 minutes, 185 degrees, tank full, brew module
        // present, pod ready.
        let status = match decode_hot_water_status("01000cb9010101").unwrap() {
            ErdValue::HotWaterStatus(s) => s,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(status.status, ErdHotWaterStatus::Heating);
        assert_eq!(status.time_until_ready, Some(Duration::minutes(12)));
        assert_eq!(status.current_temp, Some(185));
        assert_eq!(status.tank_full, ErdFullNotFull::Full);
        assert_eq!(status.brew_module, ErdPresent::Present);
        assert_eq!(status.pod_status, ErdPodStatus::Ready);
    }

    #[test]
    fn ice_maker_control_wire_order_is_freezer_first() {
        let control = match decode_ice_maker_control("0100").unwrap() {
            ErdValue::IceMakerControl(c) => c,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(control.status_freezer, ErdOnOff::On);
        assert_eq!(control.status_fridge, ErdOnOff::Off);
        assert_eq!(
            encode_ice_maker_control(&ErdValue::IceMakerControl(control)).unwrap(),
            "0100"
        );
    }

    #[test]
    fn filter_status_second_byte_fallback() {
        assert_eq!(
            decode_filter_status("010000000000000000").unwrap(),
            ErdValue::FilterStatus(ErdFilterStatus::Replace)
        );
        assert_eq!(
            decode_filter_status("000200000000000000").unwrap(),
            ErdValue::FilterStatus(ErdFilterStatus::Expired)
        );
        assert_eq!(
            decode_filter_status("7a").unwrap(),
            ErdValue::FilterStatus(ErdFilterStatus::Na)
        );
    }

    #[test]
    fn setpoints_signed_roundtrip() {
        let points = match decode_setpoints("25fc").unwrap() {
            ErdValue::SetPoints(p) => p,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(points.fridge, 37);
        assert_eq!(points.freezer, -4);
        assert_eq!(
            encode_setpoints(&ErdValue::SetPoints(points)).unwrap(),
            "25fc"
        );
    }

    #[test]
    fn setpoint_limits_short_payload_is_an_error() {
        assert!(decode_setpoint_limits("25fc").is_err());
        let limits = match decode_setpoint_limits("222cf600").unwrap() {
            ErdValue::SetPointLimits(l) => l,
            other => panic!("unexpected value {other:?}"),
        };
        assert_eq!(limits.fridge_min, 34);
        assert_eq!(limits.fridge_max, 44);
        assert_eq!(limits.freezer_min, -10);
        assert_eq!(limits.freezer_max, 0);
    }
}

mod common;

use common::init_tracing;
use hearth_appliance::{Appliance, ErdCode, ErdCodeId, ErdValue};
use std::collections::HashMap;

fn updates(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(code, raw)| (code.to_string(), raw.to_string()))
        .collect()
}

#[test]
fn batched_update_returns_only_changed_codes() {
    init_tracing();
    let mut appliance = Appliance::new("d828c9%fridge");

    let changes = appliance
        .apply_updates(&updates(&[("0x1016", "01000000")]))
        .unwrap();
    assert_eq!(changes.len(), 1);
    match changes.get(&ErdCodeId::Known(ErdCode::DoorStatus)) {
        Some(Some(ErdValue::DoorStatus(status))) => {
            assert_eq!(status.status.as_ref(), "Fridge Open");
        }
        other => panic!("unexpected change entry {other:?}"),
    }

    // Replaying the same batch produces an empty change set while the cache
    // still holds the value.
    let changes = appliance
        .apply_updates(&updates(&[("0x1016", "01000000")]))
        .unwrap();
    assert!(changes.is_empty());
    assert!(appliance.erd_value(ErdCode::DoorStatus).is_some());
}

#[test]
fn batch_mixes_known_unknown_and_unregistered_codes() {
    init_tracing();
    let mut appliance = Appliance::new("d828c9%range");

    let changes = appliance
        .apply_updates(&updates(&[
            ("APPLIANCE_TYPE", "07"),
            ("0x0005", "0b1e"), // CLOCK_TIME, unregistered -> integer
            ("0xdead", "0102"), // unknown -> raw bytes
            ("UPPER_OVEN_KITCHEN_TIMER", "ffff"), // unset sentinel
        ]))
        .unwrap();

    assert_eq!(changes.len(), 4);
    assert_eq!(
        changes.get(&ErdCodeId::Known(ErdCode::ClockTime)),
        Some(&Some(ErdValue::Int(0x0b1e)))
    );
    assert!(changes.contains_key(&ErdCodeId::from("0xdead")));
    // The sentinel still decodes to a present "unset" timespan.
    assert_eq!(
        changes.get(&ErdCodeId::Known(ErdCode::UpperOvenKitchenTimer)),
        Some(&Some(ErdValue::TimeSpan(None)))
    );

    use hearth_erd::types::ErdApplianceType;
    assert_eq!(appliance.appliance_type(), Some(ErdApplianceType::Oven));
}

#[test]
fn single_update_reports_change_exactly_once() {
    init_tracing();
    let mut appliance = Appliance::new("test");
    assert!(appliance
        .apply_update(ErdCode::LowerOvenKitchenTimer, "001e")
        .unwrap());
    assert!(!appliance
        .apply_update(ErdCode::LowerOvenKitchenTimer, "001e")
        .unwrap());
    assert!(appliance
        .apply_update(ErdCode::LowerOvenKitchenTimer, "001f")
        .unwrap());
    // Sentinel marks the timer unset; that transition is a change too.
    assert!(appliance
        .apply_update(ErdCode::LowerOvenKitchenTimer, "ffff")
        .unwrap());
    assert_eq!(
        appliance.erd_value(ErdCode::LowerOvenKitchenTimer),
        Some(&ErdValue::TimeSpan(None))
    );
}

#[test]
fn code_identities_converge_after_resolution() {
    init_tracing();
    let mut appliance = Appliance::new("test");

    // The same code addressed three ways lands on one cache entry.
    assert!(appliance.apply_update("SABBATH_MODE", "01").unwrap());
    assert!(!appliance.apply_update("0x0009", "01").unwrap());
    assert!(!appliance.apply_update(ErdCode::SabbathMode, "01").unwrap());
    assert_eq!(
        appliance.erd_value("0x0009"),
        Some(&ErdValue::Boolean(Some(true)))
    );
}

#[test]
fn decode_failures_propagate_out_of_batches() {
    init_tracing();
    let mut appliance = Appliance::new("test");
    let err = appliance
        .apply_updates(&updates(&[("SETPOINT_LIMITS", "25")]))
        .unwrap_err();
    assert!(matches!(err, hearth_appliance::ErdError::DecodeError(_)));
}

#[test]
fn prepare_write_wraps_the_encoder() {
    init_tracing();
    let appliance = Appliance::new("test");

    let write = appliance
        .prepare_write(
            "LOWER_OVEN_KITCHEN_TIMER",
            Some(&ErdValue::TimeSpan(Some(chrono_minutes(90)))),
        )
        .unwrap();
    assert_eq!(write.code, "0x5205");
    assert_eq!(write.value, "005a");

    // Clearing a value writes the empty payload.
    let write = appliance.prepare_write(ErdCode::SabbathMode, None).unwrap();
    assert_eq!(write.code, "0x0009");
    assert_eq!(write.value, "");

    // Read-only codes refuse.
    assert!(appliance
        .prepare_write(ErdCode::DoorStatus, Some(&ErdValue::Int(1)))
        .is_err());
}

fn chrono_minutes(minutes: i64) -> chrono::Duration {
    chrono::Duration::minutes(minutes)
}

//! Typed domain values carried by ERD codes.
//!
//! Raw-code enums map two-hex-char wire bytes to semantic variants; composite
//! records bundle several decoded fields from one payload. Unless a decoder
//! says otherwise, every enum lookup falls back to its `Na`/`Unknown` variant
//! on an unrecognized raw code instead of failing.

mod common;
mod dishwasher;
mod fridge;
mod oven;

pub use common::{
    ErdApplianceType, ErdClockFormat, ErdEndTone, ErdMeasurementUnits, ErdOnOff, ErdPresent,
    ErdSoundLevel,
};
pub use dishwasher::{
    ErdCycleState, ErdCycleStateRaw, ErdOperatingState, ErdRinseAgent, ErdRinseAgentRaw,
};
pub use fridge::{
    ErdDoorStatus, ErdFilterStatus, ErdFullNotFull, ErdHotWaterStatus, ErdPodStatus,
    FridgeDoorStatus, FridgeIceBucketStatus, FridgeSetPointLimits, FridgeSetPoints,
    HotWaterStatus, IceMakerControlStatus,
};
pub use oven::{
    AvailableCookMode, ErdOvenCookMode, ErdOvenState, OvenConfiguration, OvenCookMode,
    OvenCookModeMap, OvenCookSetting, OvenRanges, AVAILABLE_COOK_MODES, OVEN_COOK_MODE_MAP,
};

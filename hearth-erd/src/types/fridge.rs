use crate::types::common::{ErdOnOff, ErdPresent};
use crate::value::serialize_minutes;
use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;

/// Fill level of an ice bucket or water tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdFullNotFull {
    Full,
    NotFull,
    Na,
}

impl ErdFullNotFull {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "01" => Self::Full,
            "00" => Self::NotFull,
            _ => Self::Na,
        }
    }
}

/// Per-door open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdDoorStatus {
    Closed,
    Open,
    Na,
}

impl ErdDoorStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::Closed,
            "01" => Self::Open,
            _ => Self::Na,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, ErdDoorStatus::Open)
    }
}

/// Hot water dispenser heater state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdHotWaterStatus {
    NotHeating,
    Heating,
    Ready,
    FaultNeedCleared,
    FaultLockedOut,
    Na,
}

impl ErdHotWaterStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::NotHeating,
            "01" => Self::Heating,
            "02" => Self::Ready,
            "FD" => Self::FaultNeedCleared,
            "FE" => Self::FaultLockedOut,
            _ => Self::Na,
        }
    }
}

/// K-cup pod holder state of the hot water dispenser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdPodStatus {
    Replace,
    Ready,
    Na,
}

impl ErdPodStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::Replace,
            "01" => Self::Ready,
            _ => Self::Na,
        }
    }
}

/// Water filter cartridge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdFilterStatus {
    Good,
    Replace,
    Expired,
    Unfiltered,
    LeakDetected,
    Na,
}

impl ErdFilterStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::Good,
            "01" => Self::Replace,
            "02" => Self::Expired,
            "03" => Self::Unfiltered,
            "04" => Self::LeakDetected,
            _ => Self::Na,
        }
    }
}

/// Per-door states plus the aggregate display string shown in the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeDoorStatus {
    pub fridge_right: ErdDoorStatus,
    pub fridge_left: ErdDoorStatus,
    pub freezer: ErdDoorStatus,
    pub drawer: ErdDoorStatus,
    pub status: Arc<str>,
}

/// Ice bucket presence and fill state per compartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeIceBucketStatus {
    pub state_full_fridge: ErdFullNotFull,
    pub state_full_freezer: ErdFullNotFull,
    pub is_present_fridge: bool,
    pub is_present_freezer: bool,
    pub total_status: ErdFullNotFull,
}

/// Ice maker switch state per compartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IceMakerControlStatus {
    pub status_fridge: ErdOnOff,
    pub status_freezer: ErdOnOff,
}

/// Valid setpoint window per compartment, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeSetPointLimits {
    pub fridge_min: i16,
    pub fridge_max: i16,
    pub freezer_min: i16,
    pub freezer_max: i16,
}

/// Temperature setpoints (or current readings) per compartment, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeSetPoints {
    pub fridge: i16,
    pub freezer: i16,
}

/// Hot water dispenser composite status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotWaterStatus {
    pub status: ErdHotWaterStatus,
    #[serde(serialize_with = "serialize_minutes")]
    pub time_until_ready: Option<Duration>,
    pub current_temp: Option<u32>,
    pub tank_full: ErdFullNotFull,
    pub brew_module: ErdPresent,
    pub pod_status: ErdPodStatus,
}

impl HotWaterStatus {
    /// The all-NA composite reported when the dispenser sends no payload.
    pub fn not_applicable() -> Self {
        Self {
            status: ErdHotWaterStatus::Na,
            time_until_ready: None,
            current_temp: None,
            tank_full: ErdFullNotFull::Na,
            brew_module: ErdPresent::Na,
            pod_status: ErdPodStatus::Na,
        }
    }
}

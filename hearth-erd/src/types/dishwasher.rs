use serde::Serialize;
use serde_repr::Serialize_repr;

/// Raw dishwasher cycle phase as reported on the wire. The display layer only
/// cares about the coarse [`ErdCycleState`] each phase maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdCycleStateRaw {
    State01,
    State02,
    State03,
    State04,
    State05,
    State06,
    State07,
    State08,
    State09,
    State10,
    State11,
    State12,
    State13,
    State14,
    State15,
    State16,
    State17,
    State18,
}

impl ErdCycleStateRaw {
    pub fn from_raw(raw: &str) -> Option<Self> {
        Some(match raw {
            "01" => Self::State01,
            "02" => Self::State02,
            "03" => Self::State03,
            "04" => Self::State04,
            "05" => Self::State05,
            "06" => Self::State06,
            "07" => Self::State07,
            "08" => Self::State08,
            "09" => Self::State09,
            "10" => Self::State10,
            "11" => Self::State11,
            "12" => Self::State12,
            "13" => Self::State13,
            "14" => Self::State14,
            "15" => Self::State15,
            "16" => Self::State16,
            "17" => Self::State17,
            "18" => Self::State18,
            _ => return None,
        })
    }

    /// Coarse display state for this raw phase.
    pub fn cycle_state(&self) -> ErdCycleState {
        match self {
            Self::State01 | Self::State02 | Self::State03 | Self::State04 | Self::State05
            | Self::State06 => ErdCycleState::PreWash,
            Self::State07 => ErdCycleState::Sensing,
            Self::State08 | Self::State09 => ErdCycleState::MainWash,
            Self::State10 => ErdCycleState::Drying,
            Self::State11 => ErdCycleState::Sanitizing,
            Self::State12 | Self::State13 | Self::State14 | Self::State15 => ErdCycleState::Rinsing,
            Self::State16 => ErdCycleState::Pause,
            Self::State17 | Self::State18 => ErdCycleState::Na,
        }
    }
}

/// Coarse dishwasher cycle state shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(i16)]
pub enum ErdCycleState {
    Na = -1,
    PreWash = 1,
    Sensing = 2,
    MainWash = 3,
    Drying = 4,
    Sanitizing = 5,
    Rinsing = 6,
    Pause = 7,
}

/// Dishwasher controller operating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdOperatingState {
    LowPower,
    PowerUp,
    Standby,
    DelayStart,
    Pause,
    CycleActive,
    Eoc,
    DownloadMode,
    SensorCheckMode,
    LoadActivationMode,
    McOnlyMode,
    WarningMode,
    ControlLocked,
    CsmTripped,
    Na,
}

impl ErdOperatingState {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::LowPower,
            "01" => Self::PowerUp,
            "02" => Self::Standby,
            "03" => Self::DelayStart,
            "04" => Self::Pause,
            "05" => Self::CycleActive,
            "06" => Self::Eoc,
            "07" => Self::DownloadMode,
            "08" => Self::SensorCheckMode,
            "09" => Self::LoadActivationMode,
            "11" => Self::McOnlyMode,
            "12" => Self::WarningMode,
            "13" => Self::ControlLocked,
            "14" => Self::CsmTripped,
            _ => Self::Na,
        }
    }
}

/// Raw rinse agent reading. Two distinct wire codes both mean "low".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdRinseAgentRaw {
    RinseAgentGood,
    RinseAgentLow1,
    RinseAgentLow2,
}

impl ErdRinseAgentRaw {
    pub fn from_raw(raw: &str) -> Option<Self> {
        Some(match raw {
            "00" => Self::RinseAgentGood,
            "01" => Self::RinseAgentLow1,
            "02" => Self::RinseAgentLow2,
            _ => return None,
        })
    }

    pub fn rinse_agent(&self) -> ErdRinseAgent {
        match self {
            Self::RinseAgentGood => ErdRinseAgent::RinseAgentGood,
            Self::RinseAgentLow1 | Self::RinseAgentLow2 => ErdRinseAgent::RinseAgentLow,
        }
    }
}

/// Rinse agent level shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdRinseAgent {
    RinseAgentGood,
    RinseAgentLow,
    Na,
}

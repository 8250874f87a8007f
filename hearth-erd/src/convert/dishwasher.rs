use crate::types::{ErdCycleState, ErdCycleStateRaw, ErdOperatingState, ErdRinseAgent, ErdRinseAgentRaw};
use crate::value::ErdValue;
use hearth_sdk::ErdResult;

/// Decode the cycle phase through the raw-phase table; unknown phases and
/// the two reserved ones read as NA.
pub fn decode_cycle_state(raw: &str) -> ErdResult<ErdValue> {
    let state = ErdCycleStateRaw::from_raw(raw)
        .map(|s| s.cycle_state())
        .unwrap_or(ErdCycleState::Na);
    Ok(ErdValue::CycleState(state))
}

/// Decode the controller operating state.
pub fn decode_operating_state(raw: &str) -> ErdResult<ErdValue> {
    Ok(ErdValue::OperatingState(ErdOperatingState::from_raw(raw)))
}

/// Decode the rinse agent level; two distinct wire codes both read as low.
pub fn decode_rinse_agent(raw: &str) -> ErdResult<ErdValue> {
    let agent = ErdRinseAgentRaw::from_raw(raw)
        .map(|a| a.rinse_agent())
        .unwrap_or(ErdRinseAgent::Na);
    Ok(ErdValue::RinseAgent(agent))
}

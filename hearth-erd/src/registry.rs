use crate::codes::ErdCode;
use crate::convert::{common, dishwasher, fridge, oven};
use crate::value::ErdValue;
use hearth_sdk::{ErdError, ErdResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

pub type DecodeFn = fn(&str) -> ErdResult<ErdValue>;
pub type EncodeFn = fn(&ErdValue) -> ErdResult<String>;

/// The decode/encode pair responsible for one ERD code.
///
/// Converters are plain function pairs with no instance state. A converter
/// without an encode side is read-only: its wire format is device-reported
/// telemetry with no valid write representation.
#[derive(Clone, Copy)]
pub struct ErdConverter {
    decode: DecodeFn,
    encode: Option<EncodeFn>,
}

impl ErdConverter {
    pub const fn new(decode: DecodeFn, encode: EncodeFn) -> Self {
        Self {
            decode,
            encode: Some(encode),
        }
    }

    pub const fn read_only(decode: DecodeFn) -> Self {
        Self {
            decode,
            encode: None,
        }
    }

    #[inline]
    pub fn decode(&self, raw: &str) -> ErdResult<ErdValue> {
        (self.decode)(raw)
    }

    /// Encode a value for this code, or fail with [`ErdError::NotSupported`]
    /// when the converter is read-only.
    #[inline]
    pub fn encode(&self, code: ErdCode, value: &ErdValue) -> ErdResult<String> {
        match self.encode {
            Some(encode) => encode(value),
            None => Err(ErdError::NotSupported(code.name().to_string())),
        }
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        self.encode.is_some()
    }
}

/// Immutable mapping from known codes to their converters.
///
/// Built once and never mutated afterwards; instances can be shared freely
/// across appliances without synchronization. Most callers use
/// [`ConverterRegistry::shared`], construction stays public for tests and
/// embedders with trimmed-down code sets.
pub struct ConverterRegistry {
    converters: HashMap<ErdCode, ErdConverter>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        use ErdCode::*;

        let mut converters: HashMap<ErdCode, ErdConverter> = HashMap::new();
        let mut add = |code: ErdCode, converter: ErdConverter| {
            converters.insert(code, converter);
        };

        // Universal
        add(ApplianceType, ErdConverter::read_only(common::decode_appliance_type));
        add(ModelNumber, ErdConverter::read_only(common::decode_model_serial));
        add(SerialNumber, ErdConverter::read_only(common::decode_model_serial));
        add(SabbathMode, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(AcmUpdating, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(ApplianceUpdating, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(LcdUpdating, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(ClockFormat, ErdConverter::new(common::decode_clock_format, common::encode_clock_format));
        add(EndTone, ErdConverter::new(common::decode_end_tone, common::encode_end_tone));
        add(SoundLevel, ErdConverter::new(common::decode_sound_level, common::encode_sound_level));
        add(TemperatureUnit, ErdConverter::new(common::decode_measurement_units, common::encode_measurement_units));
        add(ApplianceSwVersion, ErdConverter::read_only(common::decode_software_version));
        add(ApplianceSwVersionAvailable, ErdConverter::read_only(common::decode_software_version));
        add(LcdSwVersion, ErdConverter::read_only(common::decode_software_version));
        add(LcdSwVersionAvailable, ErdConverter::read_only(common::decode_software_version));
        add(WifiModuleSwVersion, ErdConverter::read_only(common::decode_software_version));
        add(WifiModuleSwVersionAvailable, ErdConverter::read_only(common::decode_software_version));

        // Fridge
        add(HotWaterSetTemp, ErdConverter::new(common::decode_int, common::encode_int));
        add(HotWaterInUse, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(TurboFreezeStatus, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(TurboCoolStatus, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(DoorStatus, ErdConverter::read_only(fridge::decode_door_status));
        add(HotWaterStatus, ErdConverter::read_only(fridge::decode_hot_water_status));
        add(IceMakerBucketStatus, ErdConverter::read_only(fridge::decode_ice_bucket_status));
        add(IceMakerControl, ErdConverter::new(fridge::decode_ice_maker_control, fridge::encode_ice_maker_control));
        add(WaterFilterStatus, ErdConverter::read_only(fridge::decode_filter_status));
        add(SetpointLimits, ErdConverter::read_only(fridge::decode_setpoint_limits));
        add(CurrentTemperature, ErdConverter::new(fridge::decode_setpoints, fridge::encode_setpoints));
        add(TemperatureSetting, ErdConverter::new(fridge::decode_setpoints, fridge::encode_setpoints));

        // Oven
        add(ConvectionConversion, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(Hour12ShutoffEnabled, ErdConverter::new(common::decode_bool, common::encode_bool));
        add(OvenConfiguration, ErdConverter::read_only(oven::decode_oven_configuration));
        add(OvenModeMinMaxTemp, ErdConverter::read_only(oven::decode_oven_ranges));

        for (probe_present, remote_enabled) in [
            (LowerOvenProbePresent, LowerOvenRemoteEnabled),
            (UpperOvenProbePresent, UpperOvenRemoteEnabled),
        ] {
            add(probe_present, ErdConverter::new(common::decode_bool, common::encode_bool));
            add(remote_enabled, ErdConverter::new(common::decode_bool, common::encode_bool));
        }
        for code in [
            LowerOvenDisplayTemperature,
            LowerOvenProbeDisplayTemp,
            LowerOvenRawTemperature,
            LowerOvenUserTempOffset,
            UpperOvenDisplayTemperature,
            UpperOvenProbeDisplayTemp,
            UpperOvenRawTemperature,
            UpperOvenUserTempOffset,
        ] {
            add(code, ErdConverter::new(common::decode_int, common::encode_int));
        }
        for code in [
            LowerOvenCookTimeRemaining,
            LowerOvenDelayTimeRemaining,
            LowerOvenElapsedCookTime,
            LowerOvenKitchenTimer,
            UpperOvenCookTimeRemaining,
            UpperOvenDelayTimeRemaining,
            UpperOvenElapsedCookTime,
            UpperOvenKitchenTimer,
        ] {
            add(code, ErdConverter::new(common::decode_timespan, common::encode_timespan));
        }
        for code in [LowerOvenCurrentState, UpperOvenCurrentState] {
            add(code, ErdConverter::read_only(oven::decode_oven_state));
        }
        for code in [LowerOvenAvailableCookModes, UpperOvenAvailableCookModes] {
            add(code, ErdConverter::read_only(oven::decode_available_cook_modes));
        }
        for code in [LowerOvenCookMode, UpperOvenCookMode] {
            add(code, ErdConverter::new(oven::decode_oven_cook_mode, oven::encode_oven_cook_mode));
        }

        // Dishwasher
        add(CycleName, ErdConverter::new(common::decode_string, common::encode_string));
        add(PodsRemainingValue, ErdConverter::new(common::decode_int, common::encode_int));
        add(TimeRemaining, ErdConverter::new(common::decode_timespan, common::encode_timespan));
        add(CycleState, ErdConverter::read_only(dishwasher::decode_cycle_state));
        add(OperatingMode, ErdConverter::read_only(dishwasher::decode_operating_state));
        add(RinseAgent, ErdConverter::read_only(dishwasher::decode_rinse_agent));

        Self { converters }
    }

    /// The process-wide registry instance, built on first use.
    pub fn shared() -> Arc<ConverterRegistry> {
        static SHARED: Lazy<Arc<ConverterRegistry>> =
            Lazy::new(|| Arc::new(ConverterRegistry::new()));
        Arc::clone(&SHARED)
    }

    #[inline]
    pub fn converter(&self, code: ErdCode) -> Option<&ErdConverter> {
        self.converters.get(&code)
    }

    #[inline]
    pub fn is_registered(&self, code: ErdCode) -> bool {
        self.converters.contains_key(&code)
    }

    #[inline]
    pub fn is_writable(&self, code: ErdCode) -> bool {
        self.converter(code).is_some_and(ErdConverter::is_writable)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt;
use std::sync::Arc;

/// Declare the set of known ERD codes together with their canonical string
/// name and raw wire form, and emit the lookup tables the resolver needs.
///
/// The raw form is the lower-case hex identifier the cloud uses on the wire
/// and in request URIs (`/erd/0x5200` style).
macro_rules! erd_codes {
    ($( $(#[$meta:meta])* $variant:ident = ($name:literal, $raw:literal) ),+ $(,)?) => {
        /// A known, enumerated ERD code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ErdCode {
            $( $(#[$meta])* $variant, )+
        }

        impl ErdCode {
            /// Every known code, in declaration order.
            pub const ALL: &'static [ErdCode] = &[ $( ErdCode::$variant, )+ ];

            /// Canonical string name, e.g. `"DOOR_STATUS"`.
            pub fn name(&self) -> &'static str {
                match self { $( ErdCode::$variant => $name, )+ }
            }

            /// Raw wire identifier, e.g. `"0x1016"`. Always lower-case.
            pub fn raw(&self) -> &'static str {
                match self { $( ErdCode::$variant => $raw, )+ }
            }

            /// Case-sensitive lookup by canonical name.
            pub fn from_name(name: &str) -> Option<ErdCode> {
                match name { $( $name => Some(ErdCode::$variant), )+ _ => None }
            }

            /// Lookup by raw wire identifier. Callers normalize to lower case.
            pub fn from_raw(raw: &str) -> Option<ErdCode> {
                match raw { $( $raw => Some(ErdCode::$variant), )+ _ => None }
            }
        }
    };
}

erd_codes! {
    // Universal
    ModelNumber = ("MODEL_NUMBER", "0x0001"),
    SerialNumber = ("SERIAL_NUMBER", "0x0002"),
    ClockTime = ("CLOCK_TIME", "0x0005"),
    ClockFormat = ("CLOCK_FORMAT", "0x0006"),
    TemperatureUnit = ("TEMPERATURE_UNIT", "0x0007"),
    ApplianceType = ("APPLIANCE_TYPE", "0x0008"),
    SabbathMode = ("SABBATH_MODE", "0x0009"),
    SoundLevel = ("SOUND_LEVEL", "0x000a"),
    ApplianceSwVersion = ("APPLIANCE_SW_VERSION", "0x0100"),
    ApplianceSwVersionAvailable = ("APPLIANCE_SW_VERSION_AVAILABLE", "0x0101"),
    LcdSwVersion = ("LCD_SW_VERSION", "0x0102"),
    LcdSwVersionAvailable = ("LCD_SW_VERSION_AVAILABLE", "0x0103"),
    WifiModuleSwVersion = ("WIFI_MODULE_SW_VERSION", "0x0104"),
    WifiModuleSwVersionAvailable = ("WIFI_MODULE_SW_VERSION_AVAILABLE", "0x0105"),
    ApplianceUpdating = ("APPLIANCE_UPDATING", "0x0106"),
    LcdUpdating = ("LCD_UPDATING", "0x0107"),
    AcmUpdating = ("ACM_UPDATING", "0x0108"),

    // Fridge
    CurrentTemperature = ("CURRENT_TEMPERATURE", "0x1004"),
    TemperatureSetting = ("TEMPERATURE_SETTING", "0x1005"),
    IceMakerBucketStatus = ("ICE_MAKER_BUCKET_STATUS", "0x1007"),
    WaterFilterStatus = ("WATER_FILTER_STATUS", "0x1009"),
    IceMakerControl = ("ICE_MAKER_CONTROL", "0x100a"),
    SetpointLimits = ("SETPOINT_LIMITS", "0x100b"),
    TurboFreezeStatus = ("TURBO_FREEZE_STATUS", "0x100e"),
    TurboCoolStatus = ("TURBO_COOL_STATUS", "0x100f"),
    HotWaterStatus = ("HOT_WATER_STATUS", "0x1010"),
    HotWaterSetTemp = ("HOT_WATER_SET_TEMP", "0x1011"),
    DoorStatus = ("DOOR_STATUS", "0x1016"),
    HotWaterInUse = ("HOT_WATER_IN_USE", "0x1018"),

    // Dishwasher
    OperatingMode = ("OPERATING_MODE", "0x3001"),
    CycleState = ("CYCLE_STATE", "0x300e"),
    RinseAgent = ("RINSE_AGENT", "0x3013"),
    CycleName = ("CYCLE_NAME", "0x301c"),
    TimeRemaining = ("TIME_REMAINING", "0x301d"),
    PodsRemainingValue = ("PODS_REMAINING_VALUE", "0x301f"),

    // Oven, shared
    EndTone = ("END_TONE", "0x5001"),
    ConvectionConversion = ("CONVECTION_CONVERSION", "0x5003"),
    Hour12ShutoffEnabled = ("HOUR_12_SHUTOFF_ENABLED", "0x5005"),
    OvenConfiguration = ("OVEN_CONFIGURATION", "0x5007"),
    OvenModeMinMaxTemp = ("OVEN_MODE_MIN_MAX_TEMP", "0x5008"),

    // Upper oven
    UpperOvenCookMode = ("UPPER_OVEN_COOK_MODE", "0x5100"),
    UpperOvenCurrentState = ("UPPER_OVEN_CURRENT_STATE", "0x5101"),
    UpperOvenDelayTimeRemaining = ("UPPER_OVEN_DELAY_TIME_REMAINING", "0x5102"),
    UpperOvenElapsedCookTime = ("UPPER_OVEN_ELAPSED_COOK_TIME", "0x5103"),
    UpperOvenCookTimeRemaining = ("UPPER_OVEN_COOK_TIME_REMAINING", "0x5104"),
    UpperOvenKitchenTimer = ("UPPER_OVEN_KITCHEN_TIMER", "0x5105"),
    UpperOvenRemoteEnabled = ("UPPER_OVEN_REMOTE_ENABLED", "0x5106"),
    UpperOvenProbeDisplayTemp = ("UPPER_OVEN_PROBE_DISPLAY_TEMP", "0x5107"),
    UpperOvenProbePresent = ("UPPER_OVEN_PROBE_PRESENT", "0x5108"),
    UpperOvenDisplayTemperature = ("UPPER_OVEN_DISPLAY_TEMPERATURE", "0x5109"),
    UpperOvenRawTemperature = ("UPPER_OVEN_RAW_TEMPERATURE", "0x510a"),
    UpperOvenAvailableCookModes = ("UPPER_OVEN_AVAILABLE_COOK_MODES", "0x510b"),
    UpperOvenUserTempOffset = ("UPPER_OVEN_USER_TEMP_OFFSET", "0x510c"),

    // Lower oven
    LowerOvenCookMode = ("LOWER_OVEN_COOK_MODE", "0x5200"),
    LowerOvenCurrentState = ("LOWER_OVEN_CURRENT_STATE", "0x5201"),
    LowerOvenDelayTimeRemaining = ("LOWER_OVEN_DELAY_TIME_REMAINING", "0x5202"),
    LowerOvenElapsedCookTime = ("LOWER_OVEN_ELAPSED_COOK_TIME", "0x5203"),
    LowerOvenCookTimeRemaining = ("LOWER_OVEN_COOK_TIME_REMAINING", "0x5204"),
    LowerOvenKitchenTimer = ("LOWER_OVEN_KITCHEN_TIMER", "0x5205"),
    LowerOvenRemoteEnabled = ("LOWER_OVEN_REMOTE_ENABLED", "0x5206"),
    LowerOvenProbeDisplayTemp = ("LOWER_OVEN_PROBE_DISPLAY_TEMP", "0x5207"),
    LowerOvenProbePresent = ("LOWER_OVEN_PROBE_PRESENT", "0x5208"),
    LowerOvenDisplayTemperature = ("LOWER_OVEN_DISPLAY_TEMPERATURE", "0x5209"),
    LowerOvenRawTemperature = ("LOWER_OVEN_RAW_TEMPERATURE", "0x520a"),
    LowerOvenAvailableCookModes = ("LOWER_OVEN_AVAILABLE_COOK_MODES", "0x520b"),
    LowerOvenUserTempOffset = ("LOWER_OVEN_USER_TEMP_OFFSET", "0x520c"),
}

impl fmt::Display for ErdCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A code identifier as it travels through the SDK: either a known enumerated
/// code or an opaque string the cloud sent that we do not recognize.
///
/// Unrecognized codes are first-class citizens: they hash and compare as
/// plain strings and stay usable as cache keys and raw pass-through
/// identifiers. A `Known` code and its string forms are distinct keys unless
/// run through [`ErdCodeId::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErdCodeId {
    Known(ErdCode),
    Raw(Arc<str>),
}

impl ErdCodeId {
    /// Try to resolve this identifier to a known code.
    ///
    /// A `Known` identifier is returned unchanged. A `Raw` string is matched
    /// case-sensitively against canonical names first, then its lower-case
    /// form is matched against raw wire identifiers. If both fail the
    /// original string is returned unchanged; resolution never fails.
    pub fn resolve(&self) -> ErdCodeId {
        match self {
            ErdCodeId::Known(_) => self.clone(),
            ErdCodeId::Raw(s) => {
                if let Some(code) = ErdCode::from_name(s) {
                    return ErdCodeId::Known(code);
                }
                if let Some(code) = ErdCode::from_raw(&s.to_lowercase()) {
                    return ErdCodeId::Known(code);
                }
                self.clone()
            }
        }
    }

    /// The known code, if this identifier is one.
    pub fn as_known(&self) -> Option<ErdCode> {
        match self {
            ErdCodeId::Known(code) => Some(*code),
            ErdCodeId::Raw(_) => None,
        }
    }

    /// Raw wire key for outbound requests: the canonical `0x....` form for
    /// known codes, the original string for opaque ones.
    pub fn raw_key(&self) -> &str {
        match self {
            ErdCodeId::Known(code) => code.raw(),
            ErdCodeId::Raw(s) => s,
        }
    }
}

impl From<ErdCode> for ErdCodeId {
    fn from(code: ErdCode) -> Self {
        ErdCodeId::Known(code)
    }
}

impl From<&str> for ErdCodeId {
    fn from(s: &str) -> Self {
        ErdCodeId::Raw(Arc::from(s))
    }
}

impl From<String> for ErdCodeId {
    fn from(s: String) -> Self {
        ErdCodeId::Raw(Arc::from(s))
    }
}

impl fmt::Display for ErdCodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErdCodeId::Known(code) => f.write_str(code.name()),
            ErdCodeId::Raw(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_name() {
        let id = ErdCodeId::from("DOOR_STATUS").resolve();
        assert_eq!(id, ErdCodeId::Known(ErdCode::DoorStatus));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        // Lower-case names are not canonical; this falls through to the raw
        // wire lookup and stays opaque.
        let id = ErdCodeId::from("door_status").resolve();
        assert_eq!(id, ErdCodeId::from("door_status"));
    }

    #[test]
    fn resolves_raw_wire_form_any_case() {
        assert_eq!(
            ErdCodeId::from("0x5200").resolve(),
            ErdCodeId::Known(ErdCode::LowerOvenCookMode)
        );
        assert_eq!(
            ErdCodeId::from("0X520A").resolve(),
            ErdCodeId::Known(ErdCode::LowerOvenRawTemperature)
        );
    }

    #[test]
    fn unresolved_strings_pass_through() {
        let id = ErdCodeId::from("0xdead").resolve();
        assert_eq!(id, ErdCodeId::from("0xdead"));
        assert_eq!(id.raw_key(), "0xdead");
    }

    #[test]
    fn known_and_raw_are_distinct_keys() {
        use std::collections::HashMap;
        let mut map: HashMap<ErdCodeId, i32> = HashMap::new();
        map.insert(ErdCodeId::Known(ErdCode::DoorStatus), 1);
        map.insert(ErdCodeId::from("DOOR_STATUS"), 2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn raw_forms_are_unique() {
        use std::collections::HashSet;
        let raws: HashSet<&str> = ErdCode::ALL.iter().map(|c| c.raw()).collect();
        assert_eq!(raws.len(), ErdCode::ALL.len());
    }
}

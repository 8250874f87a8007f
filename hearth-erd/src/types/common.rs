use serde::Serialize;
use serde_repr::Serialize_repr;

/// Appliance category reported by the `APPLIANCE_TYPE` code.
///
/// Raw forms are matched exactly as the cloud sends them; anything else maps
/// to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdApplianceType {
    Unknown,
    WaterHeater,
    Dryer,
    Washer,
    Fridge,
    Microwave,
    Advantium,
    DishWasher,
    Oven,
    ElectricRange,
    GasRange,
    AirConditioner,
    ElectricCooktop,
    PizzaOven,
    GasCooktop,
    SplitAirConditioner,
    Hood,
    PoeWaterFilter,
    Cooktop,
    DeliveryBox,
    Zoneline,
    WaterSoftener,
    PortableAirConditioner,
    CombinationWasherDryer,
    CafeCoffeeMaker,
}

impl ErdApplianceType {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::WaterHeater,
            "01" => Self::Dryer,
            "02" => Self::Washer,
            "03" => Self::Fridge,
            "04" => Self::Microwave,
            "05" => Self::Advantium,
            "06" => Self::DishWasher,
            "07" => Self::Oven,
            "08" => Self::ElectricRange,
            "09" => Self::GasRange,
            "0a" => Self::AirConditioner,
            "0b" => Self::ElectricCooktop,
            "0c" => Self::PizzaOven,
            "0d" => Self::GasCooktop,
            "0e" => Self::SplitAirConditioner,
            "0f" => Self::Hood,
            "10" => Self::PoeWaterFilter,
            "11" => Self::Cooktop,
            "12" => Self::DeliveryBox,
            "14" => Self::Zoneline,
            "15" => Self::WaterSoftener,
            "16" => Self::PortableAirConditioner,
            "17" => Self::CombinationWasherDryer,
            // The cloud reports this one upper-case.
            "1A" => Self::CafeCoffeeMaker,
            _ => Self::Unknown,
        }
    }
}

/// Temperature display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(i16)]
pub enum ErdMeasurementUnits {
    Imperial = 0,
    Metric = 1,
    Na = -1,
}

impl ErdMeasurementUnits {
    pub fn from_value(value: i64) -> Self {
        match value {
            0 => Self::Imperial,
            1 => Self::Metric,
            _ => Self::Na,
        }
    }
}

/// Speaker volume steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(i16)]
pub enum ErdSoundLevel {
    Off = 0,
    Low = 1,
    Standard = 2,
    High = 3,
    Na = -1,
}

impl ErdSoundLevel {
    pub fn from_value(value: u32) -> Self {
        match value {
            0 => Self::Off,
            1 => Self::Low,
            2 => Self::Standard,
            3 => Self::High,
            _ => Self::Na,
        }
    }
}

/// Clock display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdClockFormat {
    TwelveHour,
    TwentyFourHour,
    NoDisplay,
    Na,
}

impl ErdClockFormat {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::TwelveHour,
            "01" => Self::TwentyFourHour,
            "02" => Self::NoDisplay,
            _ => Self::Na,
        }
    }

    pub fn raw(&self) -> Option<&'static str> {
        match self {
            Self::TwelveHour => Some("00"),
            Self::TwentyFourHour => Some("01"),
            Self::NoDisplay => Some("02"),
            Self::Na => None,
        }
    }
}

/// Timer end-of-cycle tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdEndTone {
    Beep,
    RepeatedBeep,
    Na,
}

impl ErdEndTone {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "00" => Self::Beep,
            "01" => Self::RepeatedBeep,
            _ => Self::Na,
        }
    }

    pub fn raw(&self) -> Option<&'static str> {
        match self {
            Self::Beep => Some("00"),
            Self::RepeatedBeep => Some("01"),
            Self::Na => None,
        }
    }
}

/// Generic on/off field with an in-band NA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdOnOff {
    On,
    Off,
    Na,
}

impl ErdOnOff {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "01" => Self::On,
            "00" => Self::Off,
            _ => Self::Na,
        }
    }

    pub fn raw(&self) -> &'static str {
        match self {
            Self::On => "01",
            Self::Off => "00",
            Self::Na => "FF",
        }
    }
}

/// Generic present/not-present field with an in-band NA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErdPresent {
    Present,
    NotPresent,
    Na,
}

impl ErdPresent {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "01" => Self::Present,
            "00" => Self::NotPresent,
            _ => Self::Na,
        }
    }
}

//! Domain models for WattWise

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Electricity rate used for every cost estimate (currency units per kWh)
pub const RATE_PER_KWH: f64 = 5.0;

/// Usage window the flat appliance draws assume, in hours per day
pub const DEFAULT_USAGE_WINDOW_HOURS: f64 = 8.0;

/// Upper bound for user-supplied usage hours
pub const MAX_USAGE_HOURS: f64 = 24.0;

/// Lighting draw per room, kWh/day
pub const LIGHTING_KWH_PER_ROOM: f64 = 0.4;

/// General-use draw per room, kWh/day
pub const GENERAL_KWH_PER_ROOM: f64 = 0.8;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

/// Apartment configuration driving base energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DwellingSize {
    #[serde(rename = "1BHK")]
    OneBhk,
    #[serde(rename = "2BHK")]
    TwoBhk,
    #[serde(rename = "3BHK")]
    ThreeBhk,
}

impl DwellingSize {
    pub const ALL: [DwellingSize; 3] = [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneBhk => "1BHK",
            Self::TwoBhk => "2BHK",
            Self::ThreeBhk => "3BHK",
        }
    }

    /// Rooms counted for lighting and general use (bedrooms + hall)
    pub fn rooms(&self) -> u32 {
        match self {
            Self::OneBhk => 2,
            Self::TwoBhk => 3,
            Self::ThreeBhk => 4,
        }
    }

    /// Daily base energy in kWh: `rooms * (lighting + general use)`
    pub fn base_energy(&self) -> f64 {
        match self {
            Self::OneBhk => 2.4,
            Self::TwoBhk => 3.6,
            Self::ThreeBhk => 4.8,
        }
    }
}

impl std::str::FromStr for DwellingSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1bhk" => Ok(Self::OneBhk),
            "2bhk" => Ok(Self::TwoBhk),
            "3bhk" => Ok(Self::ThreeBhk),
            _ => Err(format!("Unknown dwelling size: {} (valid: 1BHK, 2BHK, 3BHK)", s)),
        }
    }
}

impl std::fmt::Display for DwellingSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of building the dwelling is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HousingType {
    #[default]
    Flat,
    Tenement,
}

impl HousingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Tenement => "Tenement",
        }
    }
}

impl std::fmt::Display for HousingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Appliances in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Appliance {
    #[serde(rename = "AC")]
    AirConditioner,
    Refrigerator,
    #[serde(rename = "Washing Machine")]
    WashingMachine,
    #[serde(rename = "TV")]
    Television,
    Microwave,
    #[serde(rename = "Water Heater")]
    WaterHeater,
    Dishwasher,
    #[serde(rename = "Ceiling Fan")]
    CeilingFan,
}

impl Appliance {
    pub const ALL: [Appliance; 8] = [
        Self::AirConditioner,
        Self::Refrigerator,
        Self::WashingMachine,
        Self::Television,
        Self::Microwave,
        Self::WaterHeater,
        Self::Dishwasher,
        Self::CeilingFan,
    ];

    /// Catalog name, as shown to the user and stored on records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioner => "AC",
            Self::Refrigerator => "Refrigerator",
            Self::WashingMachine => "Washing Machine",
            Self::Television => "TV",
            Self::Microwave => "Microwave",
            Self::WaterHeater => "Water Heater",
            Self::Dishwasher => "Dishwasher",
            Self::CeilingFan => "Ceiling Fan",
        }
    }

    /// Nominal daily draw in kWh
    pub fn daily_draw(&self) -> f64 {
        match self {
            Self::AirConditioner => 3.0,
            Self::Refrigerator => 3.0,
            Self::WashingMachine => 3.0,
            Self::Television => 0.5,
            Self::Microwave => 1.5,
            Self::WaterHeater => 2.0,
            Self::Dishwasher => 2.5,
            Self::CeilingFan => 0.3,
        }
    }

    /// Whether usage hours scale this appliance's draw
    pub fn is_hour_adjustable(&self) -> bool {
        matches!(
            self,
            Self::AirConditioner | Self::Television | Self::Microwave | Self::WaterHeater
        )
    }

    /// Hours the entry form pre-fills for adjustable appliances
    pub fn default_usage_hours(&self) -> Option<f64> {
        match self {
            Self::AirConditioner => Some(8.0),
            Self::Television | Self::Microwave | Self::WaterHeater => Some(2.0),
            _ => None,
        }
    }
}

impl std::str::FromStr for Appliance {
    type Err = String;

    /// Catalog names only; case is ignored but spelling is not
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Unknown appliance: {}", s))
    }
}

impl std::fmt::Display for Appliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user's identity and dwelling attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub city: String,
    pub area: String,
    pub housing_type: HousingType,
    pub dwelling_size: DwellingSize,
}

fn default_age() -> i64 {
    25
}

/// Profile as submitted from a form, before clamping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: i64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub housing_type: HousingType,
    pub dwelling_size: DwellingSize,
}

impl NewProfile {
    /// Normalize into a stored profile: trims text, clamps age to 1-120
    pub fn into_profile(self) -> Profile {
        Profile {
            name: self.name.trim().to_string(),
            age: self.age.clamp(MIN_AGE as i64, MAX_AGE as i64) as u32,
            city: self.city.trim().to_string(),
            area: self.area.trim().to_string(),
            housing_type: self.housing_type,
            dwelling_size: self.dwelling_size,
        }
    }
}

/// One day of recorded consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub base_energy: f64,
    pub appliance_energy: f64,
    pub total_energy: f64,
    pub appliances: BTreeSet<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A daily entry as submitted by the user, before energy is computed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub appliances: Vec<String>,
    /// Usage hours keyed by appliance name; absent appliances use their flat draw
    #[serde(default)]
    pub usage_hours: BTreeMap<String, f64>,
    pub notes: Option<String>,
}

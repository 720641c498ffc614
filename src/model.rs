//! Input and output records for rooftop harvest estimates
//!
//! Enum variants serialize with the labels used on the wire (`"RCC"`,
//! `"metal_sheet"`, `"hybrid"`, ...).

use serde::{Deserialize, Serialize};

/// Roof surface material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoofType {
    /// Reinforced cement concrete
    #[serde(rename = "RCC")]
    Rcc,
    #[serde(rename = "metal_sheet")]
    MetalSheet,
    #[serde(rename = "tile")]
    Tile,
    #[serde(rename = "other")]
    Other,
}

impl RoofType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoofType::Rcc => "RCC",
            RoofType::MetalSheet => "metal_sheet",
            RoofType::Tile => "tile",
            RoofType::Other => "other",
        }
    }
}

/// Intended use of the harvested water (reserved, not used in sizing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseType {
    #[default]
    Domestic,
    Institutional,
    Industrial,
}

/// Kind of harvesting system to size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    #[default]
    Storage,
    Recharge,
    Hybrid,
}

impl SystemType {
    /// Storage and hybrid systems get a tank
    pub fn has_storage(&self) -> bool {
        matches!(self, SystemType::Storage | SystemType::Hybrid)
    }

    /// Recharge and hybrid systems get a recharge pit
    pub fn has_recharge(&self) -> bool {
        matches!(self, SystemType::Recharge | SystemType::Hybrid)
    }
}

/// Dominant soil at the site (reserved, not used in sizing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Sand,
    Loam,
    Clay,
}

/// Site parameters supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RooftopInput {
    /// Free text, not interpreted
    pub location: String,
    pub roof_area_m2: f64,
    pub roof_type: RoofType,
    pub annual_rainfall_mm: f64,
    #[serde(default)]
    pub use_type: UseType,
    pub num_occupants: u32,
    #[serde(default)]
    pub system_type: SystemType,
    #[serde(default)]
    pub soil_type: Option<SoilType>,
}

/// Sizing of a single cylindrical recharge pit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargePitDetails {
    pub diameter_m: f64,
    pub depth_m: f64,
    /// Full precision, never rounded
    pub volume_m3: f64,
    pub note: String,
}

/// Feasibility verdict, sizing and cost for one rooftop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestResult {
    pub feasible: bool,
    /// In evaluation order
    pub feasibility_reasons: Vec<String>,
    pub harvestable_volume_m3: f64,
    pub recommended_tank_volume_m3: Option<f64>,
    pub recharge_pit_details: Option<RechargePitDetails>,
    pub estimated_cost: f64,
    pub guidelines: Vec<String>,
}

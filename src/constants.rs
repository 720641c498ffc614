//! Fixed lookup tables for the harvest calculator.
//!
//! Runoff coefficients, cost rates, demand assumptions and the advisory
//! texts that appear verbatim in every `HarvestResult`.

/// Runoff coefficient per roof material, keyed by wire label.
pub const ROOF_RUNOFF_COEFF: &[(&str, f64)] = &[
    ("RCC", 0.85),
    ("metal_sheet", 0.80),
    ("tile", 0.75),
    ("other", 0.70),
];

/// Coefficient used when the roof label is not in `ROOF_RUNOFF_COEFF`.
pub const DEFAULT_RUNOFF_COEFF: f64 = 0.70;

/// Millimetres per metre (rainfall depth conversion).
pub const MM_PER_M: f64 = 1000.0;

// Feasibility gates
pub const MIN_ROOF_AREA_M2: f64 = 20.0;
pub const MIN_ANNUAL_RAINFALL_MM: f64 = 300.0;

// Demand baseline: 70 L per person per day for non-potable uses
pub const DAILY_DEMAND_L_PER_PERSON: f64 = 70.0;
pub const LITRES_PER_M3: f64 = 1000.0;
pub const STORAGE_DAYS: f64 = 30.0;

/// Share of annual harvestable volume a storage tank may hold.
pub const TANK_SHARE_OF_ANNUAL_VOLUME: f64 = 0.25;

// Reference recharge pit (single cylinder)
pub const PIT_DIAMETER_M: f64 = 2.0;
pub const PIT_DEPTH_M: f64 = 3.0;

// Costs in currency units
pub const FIXED_INSTALLATION_COST: f64 = 5000.0;
pub const COST_PER_M3_TANK: f64 = 3000.0;
pub const COST_PER_M3_RECHARGE: f64 = 1500.0;

pub const REASON_SMALL_ROOF: &str = "Roof area is less than 20 m².";
pub const REASON_LOW_RAINFALL: &str = "Annual rainfall is very low (< 300 mm).";
pub const REASON_ADEQUATE: &str = "Rooftop area and rainfall are adequate for RTRWH.";

pub const PIT_NOTE: &str = "Dimensions can be refined based on soil percolation tests.";

/// Guidelines included with every estimate, in output order.
pub const BASE_GUIDELINES: &[&str] = &[
    "Provide first-flush arrangement and filtration unit.",
    "Clean the rooftop and gutters before monsoon.",
    "Ensure overflow is directed safely away from building foundation.",
];

/// Appended for systems with a recharge pit.
pub const SEPTIC_DISTANCE_GUIDELINE: &str = "Recharge pit should be at least 10 m away from septic tanks.";

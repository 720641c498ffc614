//! Harvest Calculator
//!
//! Deterministic mapping from rooftop/site attributes to a `HarvestResult`:
//! runoff volume, feasibility verdict, tank and recharge pit sizing, cost
//! and advisory guidelines.
//!
//! The calculator is total over validated input (see `validation`) and holds
//! no state, so it is safe to call from any number of threads at once.

use std::f64::consts::PI;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::*;
use crate::model::{HarvestResult, RechargePitDetails, RooftopInput};

/// Runoff coefficient for a roof label, falling back to
/// `DEFAULT_RUNOFF_COEFF` for labels outside the table.
pub fn runoff_coefficient(roof_label: &str) -> f64 {
    ROOF_RUNOFF_COEFF
        .iter()
        .find(|(label, _)| *label == roof_label)
        .map(|(_, coeff)| *coeff)
        .unwrap_or(DEFAULT_RUNOFF_COEFF)
}

/// Annual catchable runoff in m³ (unrounded)
pub fn harvestable_volume(roof_area_m2: f64, annual_rainfall_mm: f64, runoff_coeff: f64) -> f64 {
    let rainfall_m = annual_rainfall_mm / MM_PER_M;
    roof_area_m2 * rainfall_m * runoff_coeff
}

/// Water needed over the storage window, in m³
pub fn demand_over_storage_window(num_occupants: u32) -> f64 {
    let daily_demand_m3 = (num_occupants as f64 * DAILY_DEMAND_L_PER_PERSON) / LITRES_PER_M3;
    daily_demand_m3 * STORAGE_DAYS
}

/// Reference recharge pit (one cylinder, fixed dimensions)
pub fn reference_recharge_pit() -> RechargePitDetails {
    let radius = PIT_DIAMETER_M / 2.0;
    RechargePitDetails {
        diameter_m: PIT_DIAMETER_M,
        depth_m: PIT_DEPTH_M,
        volume_m3: PI * radius.powi(2) * PIT_DEPTH_M,
        note: PIT_NOTE.to_string(),
    }
}

/// Round to 2 decimal places on the exact binary value, ties to even
/// (`10.625 -> 10.62`, `0.2125 -> 0.21` since 0.2125 is stored just below
/// the tie). Non-finite input is returned unchanged.
pub fn round2(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    exact
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Calculate feasibility, sizing and cost for one rooftop
///
/// Feasibility is advisory: sizing and cost are computed whatever the
/// verdict.
pub fn calculate_harvest(input: &RooftopInput) -> HarvestResult {
    // STEP 1: Runoff volume
    let coeff = runoff_coefficient(input.roof_type.as_str());
    let volume = harvestable_volume(input.roof_area_m2, input.annual_rainfall_mm, coeff);

    // STEP 2: Feasibility gates (independent, not short-circuited)
    let mut feasible = true;
    let mut reasons = Vec::new();

    if input.roof_area_m2 < MIN_ROOF_AREA_M2 {
        feasible = false;
        reasons.push(REASON_SMALL_ROOF.to_string());
    }
    if input.annual_rainfall_mm < MIN_ANNUAL_RAINFALL_MM {
        feasible = false;
        reasons.push(REASON_LOW_RAINFALL.to_string());
    }
    if feasible {
        reasons.push(REASON_ADEQUATE.to_string());
    }

    // STEP 3: Sizing
    let tank = if input.system_type.has_storage() {
        let demand = demand_over_storage_window(input.num_occupants);
        Some((TANK_SHARE_OF_ANNUAL_VOLUME * volume).min(demand))
    } else {
        None
    };

    let pit = if input.system_type.has_recharge() {
        Some(reference_recharge_pit())
    } else {
        None
    };

    // STEP 4: Cost. A zero-volume tank contributes nothing.
    let mut cost = FIXED_INSTALLATION_COST;
    if let Some(tank_m3) = tank.filter(|v| *v != 0.0) {
        cost += tank_m3 * COST_PER_M3_TANK;
    }
    if let Some(ref pit) = pit {
        cost += pit.volume_m3 * COST_PER_M3_RECHARGE;
    }

    // STEP 5: Guidelines
    let mut guidelines: Vec<String> = BASE_GUIDELINES.iter().map(|g| g.to_string()).collect();
    if input.system_type.has_recharge() {
        guidelines.push(SEPTIC_DISTANCE_GUIDELINE.to_string());
    }

    HarvestResult {
        feasible,
        feasibility_reasons: reasons,
        harvestable_volume_m3: round2(volume),
        recommended_tank_volume_m3: tank.filter(|v| *v != 0.0).map(round2),
        recharge_pit_details: pit,
        estimated_cost: round2(cost),
        guidelines,
    }
}

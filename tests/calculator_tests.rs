// Calculator Integration Tests
//
// Purpose: Drive the engine from JSON payloads the way the HTTP layer does
// Run with: cargo test --test calculator_tests

use approx::assert_relative_eq;
use rtrwh_estimator::{calculate_harvest, validate, HarvestResult, RooftopInput};
use serde_json::{json, Value};
use std::f64::consts::PI;

fn estimate(payload: Value) -> HarvestResult {
    let input: RooftopInput = serde_json::from_value(payload).expect("valid rooftop input");
    validate(&input).expect("input within constraints");
    calculate_harvest(&input)
}

#[test]
fn test_reference_rcc_storage_site() {
    let result = estimate(json!({
        "location": "Chennai",
        "roof_area_m2": 50.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": 4
    }));

    assert!(result.feasible);
    assert_eq!(
        result.feasibility_reasons,
        vec!["Rooftop area and rainfall are adequate for RTRWH."]
    );
    assert_relative_eq!(result.harvestable_volume_m3, 42.5, epsilon = 1e-9);
    assert_relative_eq!(result.recommended_tank_volume_m3.unwrap(), 8.4, epsilon = 1e-9);
    assert!(result.recharge_pit_details.is_none());
    assert_eq!(
        result.guidelines,
        vec![
            "Provide first-flush arrangement and filtration unit.",
            "Clean the rooftop and gutters before monsoon.",
            "Ensure overflow is directed safely away from building foundation.",
        ]
    );
}

#[test]
fn test_infeasible_site_still_sized() {
    let result = estimate(json!({
        "location": "Leh",
        "roof_area_m2": 10.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 100.0,
        "num_occupants": 2,
        "system_type": "hybrid"
    }));

    assert!(!result.feasible);
    assert_eq!(
        result.feasibility_reasons,
        vec![
            "Roof area is less than 20 m².",
            "Annual rainfall is very low (< 300 mm).",
        ]
    );

    // V = 10 * 0.1 * 0.85 = 0.85; tank = min(0.2125, 4.2)
    assert_relative_eq!(result.harvestable_volume_m3, 0.85, epsilon = 1e-9);
    assert_relative_eq!(result.recommended_tank_volume_m3.unwrap(), 0.21, epsilon = 1e-9);
    assert!(result.recharge_pit_details.is_some());
    assert!(result.estimated_cost > 5000.0);
}

#[test]
fn test_recharge_result_json_shape() {
    let result = estimate(json!({
        "location": "Bhopal",
        "roof_area_m2": 90.0,
        "roof_type": "metal_sheet",
        "annual_rainfall_mm": 1100.0,
        "use_type": "institutional",
        "num_occupants": 25,
        "system_type": "recharge",
        "soil_type": "sand"
    }));

    let value = serde_json::to_value(&result).unwrap();

    assert!(value["recommended_tank_volume_m3"].is_null());
    assert_eq!(value["recharge_pit_details"]["diameter_m"], 2.0);
    assert_eq!(value["recharge_pit_details"]["depth_m"], 3.0);
    assert_eq!(
        value["recharge_pit_details"]["note"],
        "Dimensions can be refined based on soil percolation tests."
    );

    // Pit volume is carried at full precision
    let pit_volume = value["recharge_pit_details"]["volume_m3"].as_f64().unwrap();
    assert_eq!(pit_volume, PI * 3.0);

    // V = 90 * 1.1 * 0.8 = 79.2
    assert_relative_eq!(value["harvestable_volume_m3"].as_f64().unwrap(), 79.2, epsilon = 1e-9);
    assert_relative_eq!(value["estimated_cost"].as_f64().unwrap(), 19137.17, epsilon = 1e-9);

    let guidelines = value["guidelines"].as_array().unwrap();
    assert_eq!(guidelines.len(), 4);
    assert_eq!(guidelines[3], "Recharge pit should be at least 10 m away from septic tanks.");
}

#[test]
fn test_hybrid_cost_includes_both_components() {
    let storage = estimate(json!({
        "location": "Kochi",
        "roof_area_m2": 50.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": 4,
        "system_type": "storage"
    }));
    let recharge = estimate(json!({
        "location": "Kochi",
        "roof_area_m2": 50.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": 4,
        "system_type": "recharge"
    }));
    let hybrid = estimate(json!({
        "location": "Kochi",
        "roof_area_m2": 50.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": 4,
        "system_type": "hybrid"
    }));

    // Each component adds on top of the shared fixed cost
    let combined = storage.estimated_cost + recharge.estimated_cost - 5000.0;
    assert_relative_eq!(hybrid.estimated_cost, combined, epsilon = 0.011);
    assert_eq!(hybrid.recommended_tank_volume_m3, storage.recommended_tank_volume_m3);
    assert_eq!(hybrid.recharge_pit_details, recharge.recharge_pit_details);
}

#[test]
fn test_repeated_calls_are_identical() {
    let payload = json!({
        "location": "Goa",
        "roof_area_m2": 64.2,
        "roof_type": "tile",
        "annual_rainfall_mm": 2900.0,
        "num_occupants": 7,
        "system_type": "hybrid"
    });

    let first = estimate(payload.clone());
    let second = estimate(payload);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_inputs_rejected_before_calculation() {
    let zero_area: RooftopInput = serde_json::from_value(json!({
        "location": "x",
        "roof_area_m2": 0.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": 4
    }))
    .unwrap();
    assert!(validate(&zero_area).is_err());

    // Negative occupants cannot even be represented
    let negative_occupants = serde_json::from_value::<RooftopInput>(json!({
        "location": "x",
        "roof_area_m2": 50.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": -1
    }));
    assert!(negative_occupants.is_err());
}

#[test]
fn test_tank_on_exact_tie_rounds_to_even() {
    // 0.25 * 42.5 = 10.625 exactly; 10 occupants need 21 m³ over 30 days
    let result = estimate(json!({
        "location": "Mysuru",
        "roof_area_m2": 50.0,
        "roof_type": "RCC",
        "annual_rainfall_mm": 1000.0,
        "num_occupants": 10
    }));

    assert_eq!(result.recommended_tank_volume_m3, Some(10.62));
    assert_eq!(result.estimated_cost, 36875.0);
}

//! Rooftop Rainwater Harvesting (RTRWH) Estimator
//!
//! Estimates harvestable runoff, storage/recharge sizing, installation cost
//! and feasibility for a rooftop from a handful of site parameters.
//!
//! - `model`: Input/output records
//! - `constants`: Runoff coefficients, cost rates and advisory texts
//! - `calculator`: The pure estimation engine
//! - `validation`: Numeric constraints checked before calculation
//! - `config`: Environment configuration for the server
//! - `project_store`, `api_server`: Project persistence and HTTP API (feature `api`)

pub mod model;
pub mod constants;
pub mod calculator;
pub mod validation;
pub mod config;

#[cfg(feature = "api")]
pub mod project_store;

pub mod api_server;

// Re-export commonly used types
pub use model::{HarvestResult, RechargePitDetails, RooftopInput, RoofType, SoilType, SystemType, UseType};
pub use calculator::{calculate_harvest, runoff_coefficient};
pub use validation::{validate, ValidationError};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use project_store::{Project, ProjectStore, StoreError};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};

//! Inventory replenishment planning.
//!
//! This crate turns a forecast horizon into reorder recommendations under a
//! safety-stock policy, implemented purely as deterministic logic (no IO, no
//! storage).

pub mod planner;

pub use planner::{InventoryPlan, InventoryRecommendation, ReplenishmentPolicy, plan};

use serde::{Deserialize, Serialize};
use tracing::debug;

use stockcast_core::{EngineError, EngineResult, ForecastHorizon, ForecastPoint, ValueObject, YearMonth};

/// Safety-stock policy for one planning run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentPolicy {
    /// Buffer held above forecast demand, as a percentage of the forecast.
    pub safety_stock_pct: f64,
    /// Units on hand before the first forecast period.
    pub starting_inventory: f64,
}

impl ReplenishmentPolicy {
    pub fn new(safety_stock_pct: f64, starting_inventory: f64) -> EngineResult<Self> {
        if !(safety_stock_pct.is_finite() && (0.0..=100.0).contains(&safety_stock_pct)) {
            return Err(EngineError::invalid_config(format!(
                "safety_stock_pct must be in 0..=100, got {safety_stock_pct}"
            )));
        }
        if !(starting_inventory.is_finite() && starting_inventory >= 0.0) {
            return Err(EngineError::invalid_config(format!(
                "starting_inventory must be a finite number >= 0, got {starting_inventory}"
            )));
        }
        Ok(Self {
            safety_stock_pct,
            starting_inventory,
        })
    }
}

/// Reorder advice for one forecast period.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct InventoryRecommendation {
    pub period: YearMonth,
    pub forecast: f64,
    pub safety_stock: f64,
    /// Always `forecast + safety_stock`.
    pub ideal_inventory: f64,
    pub units_to_order: f64,
    /// Stock left after this period's demand; seeds the next period.
    pub remaining_inventory: f64,
}

impl ValueObject for InventoryRecommendation {}

/// Period-by-period recommendations, in forecast order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InventoryPlan {
    recommendations: Vec<InventoryRecommendation>,
}

impl InventoryPlan {
    pub fn recommendations(&self) -> &[InventoryRecommendation] {
        &self.recommendations
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn total_units_to_order(&self) -> f64 {
        self.recommendations.iter().map(|r| r.units_to_order).sum()
    }

    /// Stock expected after the last planned period.
    pub fn closing_inventory(&self) -> Option<f64> {
        self.recommendations.last().map(|r| r.remaining_inventory)
    }
}

/// Stock carried between periods.
#[derive(Debug, Copy, Clone, PartialEq)]
struct OnHand(f64);

impl OnHand {
    /// Decide the order for one period and evolve the carried stock.
    fn step(&mut self, point: &ForecastPoint, safety_factor: f64) -> InventoryRecommendation {
        let forecast = point.point();
        let safety_stock = forecast * safety_factor;
        let ideal_inventory = forecast + safety_stock;
        let units_to_order = (ideal_inventory - self.0).max(0.0);

        self.0 = self.0 + units_to_order - forecast;

        InventoryRecommendation {
            period: point.period(),
            forecast,
            safety_stock,
            ideal_inventory,
            units_to_order,
            remaining_inventory: self.0,
        }
    }
}

/// Fold the horizon into reorder recommendations.
///
/// Each period depends on the stock left by the previous one, so this runs
/// strictly in horizon order (which [`ForecastHorizon`] guarantees).
pub fn plan(horizon: &ForecastHorizon, policy: &ReplenishmentPolicy) -> InventoryPlan {
    let safety_factor = policy.safety_stock_pct / 100.0;
    let mut on_hand = OnHand(policy.starting_inventory);

    let recommendations: Vec<InventoryRecommendation> = horizon
        .iter()
        .map(|point| on_hand.step(point, safety_factor))
        .collect();

    let plan = InventoryPlan { recommendations };
    debug!(
        periods = plan.len(),
        total_units_to_order = plan.total_units_to_order(),
        "inventory plan computed"
    );
    plan
}

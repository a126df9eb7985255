//! Core planning entities: products, containers, shipments, dumping settings.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A unit of cargo: something bought, shipped, and resold.
///
/// Dimensions use one linear unit kept consistent across a shipment; the
/// engine does no unit conversion. Invariants (quantity >= 1, non-negative
/// dimensions and prices) are the form layer's responsibility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub weight: f64,
    pub purchase_price: f64,
    pub resale_price: f64,
    /// Count of identical units.
    pub quantity: u32,
    /// Expected turnover time in days.
    pub days_to_sell: f64,
    /// Container this product is placed in; `None` means not yet assigned.
    #[serde(default)]
    pub container_id: Option<String>,
    /// Free-text grouping label, matched exactly for cross-shipment overlap.
    #[serde(default)]
    pub tag: Option<String>,
    /// Known competing sellers; the dumping engine treats `None` as 0.
    #[serde(default)]
    pub competitor_count: Option<u32>,
    /// Quantity at which the linear saturation model reaches 100%.
    #[serde(default)]
    pub saturation_threshold: Option<f64>,
    #[serde(default)]
    pub market_demand_factor: Option<f64>,
}

impl Product {
    pub fn is_assigned(&self) -> bool {
        self.container_id.is_some()
    }
}

/// A capacity unit products are assigned to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub max_weight: f64,
    /// Flat cost per container, independent of how full it is.
    pub shipping_cost: f64,
    #[serde(default)]
    pub shipping_duration_days: Option<f64>,
    #[serde(default)]
    pub tag: Option<String>,
    /// Redundant with `Product::container_id`; kept in sync by the caller
    /// and never consulted by the scoring engine.
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// Aggregate root: the products and containers of one planned shipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub name: String,
    pub products: Vec<Product>,
    pub containers: Vec<Container>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Used only to window cross-shipment comparisons in the dumping engine.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub departure_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub dumping_settings: Option<DumpingSettings>,
}

impl Shipment {
    /// Effective dumping settings; absent settings fall back to the
    /// documented defaults (disabled, logarithmic model).
    pub fn settings(&self) -> DumpingSettings {
        self.dumping_settings.unwrap_or_default()
    }

    /// Products assigned to the given container. `Product::container_id`
    /// is the sole source of truth for membership.
    pub fn container_products(&self, container_id: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| product.container_id.as_deref() == Some(container_id))
            .cloned()
            .collect()
    }
}

/// Saturation curve selector for the dumping penalizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpingModel {
    Linear,
    #[default]
    Logarithmic,
    Exponential,
    /// Reserved extension point; currently follows the linear curve.
    Custom,
}

impl DumpingModel {
    pub fn label(&self) -> &'static str {
        match self {
            DumpingModel::Linear => "Linear",
            DumpingModel::Logarithmic => "Logarithmic",
            DumpingModel::Exponential => "Exponential",
            DumpingModel::Custom => "Custom",
        }
    }
}

/// Configuration for the dumping penalizer, carried per shipment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumpingSettings {
    pub enabled: bool,
    pub model: DumpingModel,
    /// Scales base saturation; typical range 0.1 to 1.0.
    pub saturation_multiplier: f64,
    /// Weight of the competition penalty, 0 to 1.
    pub competition_weight: f64,
    /// Per-day penalty offset factor, 0 to 0.5.
    pub time_decay_factor: f64,
    /// Whether other shipments departing nearby in time count against us.
    pub cross_shipment_penalty: bool,
}

impl Default for DumpingSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            model: DumpingModel::default(),
            saturation_multiplier: 0.5,
            competition_weight: 0.3,
            time_decay_factor: 0.1,
            cross_shipment_penalty: false,
        }
    }
}

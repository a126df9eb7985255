//! Domain logic for shipment profitability scoring lives here.

pub mod dumping;
pub mod entities;
pub mod metrics;
pub mod plan_state;
pub mod ranking;

pub use dumping::{
    dumping_penalty, explain_penalty, saturation_curve, shipment_dumping, DumpingCalculation,
};
pub use entities::{Container, DumpingModel, DumpingSettings, Product, Shipment};
pub use metrics::{
    complete_shipment_score, container_score, container_volume, product_profit, product_score,
    product_volume, shipment_score, total_products_volume, total_products_weight, CompleteScore,
    ContainerScore, ProductScore, ShipmentScore,
};
pub use plan_state::{PersistedPlan, PlannerState};
pub use ranking::{sort_product_scores, ScoreFilter, ScoreSort};

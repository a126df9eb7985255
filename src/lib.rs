//! Shipment profitability planning.
//!
//! Users define products and containers, assign products to containers,
//! and get back computed scores: profit margin, space and weight
//! utilization, and a profit-per-volume "efficiency" ranking. An optional
//! dumping penalizer discounts resale estimates when simulated market
//! saturation and competition would erode achievable prices.
//!
//! The crate is a pure calculation library. The layer that owns the CRUD
//! around [`domain::Product`], [`domain::Container`], and
//! [`domain::Shipment`] calls [`domain::complete_shipment_score`] (or the
//! finer-grained functions in [`domain::metrics`] and [`domain::dumping`])
//! whenever it needs fresh numbers; nothing derived is ever cached here.

pub mod domain;
pub mod util;

pub use domain::{
    complete_shipment_score, container_score, shipment_dumping, shipment_score, CompleteScore,
    Container, DumpingCalculation, DumpingModel, DumpingSettings, PlannerState, Product, Shipment,
};

//! Deterministic numeric rollups over products and containers.
//!
//! Every function here is a pure total transform: no I/O, no errors.
//! Degenerate inputs (empty product or container lists) surface as NaN or
//! infinite ratios, and the presentation layer decides how to render them.

use std::collections::HashMap;

use super::dumping::{shipment_dumping, DumpingCalculation};
use super::entities::{Container, Product, Shipment};

/// Score breakdown for a single product.
///
/// The adjusted fields are only present when a dumping calculation was
/// supplied; the raw fields always are, so the caller can show before/after.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductScore {
    /// Volume occupied by all units of this product.
    pub volume: f64,
    pub total_profit: f64,
    /// Profit per unit volume; the primary ranking metric.
    pub raw_score: f64,
    /// Raw score normalized by how long capital is tied up.
    pub efficiency_score: f64,
    pub adjusted_profit: Option<f64>,
    pub adjusted_score: Option<f64>,
    pub dumping_penalty: Option<f64>,
}

/// Aggregate score for a set of products and containers.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipmentScore {
    pub total_cost: f64,
    pub total_resale: f64,
    pub profit_margin: f64,
    /// Fraction of container volume consumed, capped at 1.
    pub volume_utilization: f64,
    /// Fraction of container weight capacity consumed, capped at 1.
    pub weight_utilization: f64,
    pub raw_score: f64,
    pub efficiency_score: f64,
}

/// A [`ShipmentScore`] scoped to one container's assigned products.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerScore {
    pub container_id: String,
    pub score: ShipmentScore,
}

/// Everything the planner view needs for one shipment in a single pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteScore {
    pub score: ShipmentScore,
    pub dumping_calculations: Vec<DumpingCalculation>,
    pub product_scores: Vec<(String, ProductScore)>,
}

pub fn product_volume(product: &Product) -> f64 {
    product.height * product.width * product.length
}

/// Profit across all units; negative when resale is below purchase.
pub fn product_profit(product: &Product) -> f64 {
    (product.resale_price - product.purchase_price) * product.quantity as f64
}

pub fn product_score(
    product: &Product,
    dumping_calculation: Option<&DumpingCalculation>,
) -> ProductScore {
    let volume = product_volume(product) * product.quantity as f64;
    let total_profit = product_profit(product);
    let raw_score = total_profit / volume;
    let efficiency_score = raw_score / product.days_to_sell;

    let (adjusted_profit, adjusted_score, dumping_penalty) = match dumping_calculation {
        Some(calc) => {
            let adjusted_profit = calc.adjusted_profit * product.quantity as f64;
            (
                Some(adjusted_profit),
                Some(adjusted_profit / volume),
                Some(calc.total_penalty),
            )
        }
        None => (None, None, None),
    };

    ProductScore {
        volume,
        total_profit,
        raw_score,
        efficiency_score,
        adjusted_profit,
        adjusted_score,
        dumping_penalty,
    }
}

pub fn total_products_volume(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|product| product_volume(product) * product.quantity as f64)
        .sum()
}

pub fn total_products_weight(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|product| product.weight * product.quantity as f64)
        .sum()
}

pub fn container_volume(container: &Container) -> f64 {
    container.height * container.width * container.length
}

/// Score one container in isolation, treating its assigned products as a
/// single-container shipment. The caller scopes `products` to the container
/// beforehand (see [`Shipment::container_products`]); only this container's
/// shipping cost is counted.
pub fn container_score(products: &[Product], container: &Container) -> ContainerScore {
    let score = shipment_score(products, std::slice::from_ref(container), None);
    ContainerScore {
        container_id: container.id.clone(),
        score,
    }
}

/// The aggregate rollup across all given products and containers.
///
/// When `dumping_calculations` is supplied, resale totals use each product's
/// penalty-adjusted price; products without a matching calculation fall back
/// to their raw resale price. This is the single point where dumping
/// penalties enter the aggregate score.
pub fn shipment_score(
    products: &[Product],
    containers: &[Container],
    dumping_calculations: Option<&[DumpingCalculation]>,
) -> ShipmentScore {
    let products_volume = total_products_volume(products);
    let products_weight = total_products_weight(products);
    let container_capacity: f64 = containers.iter().map(container_volume).sum();
    let max_weight: f64 = containers.iter().map(|c| c.max_weight).sum();

    // One map per call keeps the resale rollup O(n) in product count.
    let calculations_by_product: HashMap<&str, &DumpingCalculation> = dumping_calculations
        .unwrap_or_default()
        .iter()
        .map(|calc| (calc.product_id.as_str(), calc))
        .collect();

    let total_purchase_cost: f64 = products
        .iter()
        .map(|p| p.purchase_price * p.quantity as f64)
        .sum();
    let total_resale: f64 = products
        .iter()
        .map(|p| {
            let unit_price = calculations_by_product
                .get(p.id.as_str())
                .map(|calc| calc.adjusted_price)
                .unwrap_or(p.resale_price);
            unit_price * p.quantity as f64
        })
        .sum();
    let total_shipping_cost: f64 = containers.iter().map(|c| c.shipping_cost).sum();

    let total_cost = total_purchase_cost + total_shipping_cost;
    let total_profit = total_resale - total_cost;

    let raw_score = total_profit / products_volume;

    // Days-to-sell weighted by each product's share of total volume: bulky
    // slow movers dominate when the shipment "feels" sold through.
    let weighted_days_to_sell: f64 = products
        .iter()
        .map(|p| p.days_to_sell * (product_volume(p) * p.quantity as f64 / products_volume))
        .sum();
    let efficiency_divisor = if weighted_days_to_sell == 0.0 {
        1.0
    } else {
        weighted_days_to_sell
    };

    ShipmentScore {
        total_cost,
        total_resale,
        profit_margin: total_profit / total_cost,
        volume_utilization: cap_at_one(products_volume / container_capacity),
        weight_utilization: cap_at_one(products_weight / max_weight),
        raw_score,
        efficiency_score: raw_score / efficiency_divisor,
    }
}

/// Orchestration entry point: runs the dumping engine over the shipment,
/// folds the calculations into the aggregate score, and scores each product
/// against its own calculation.
pub fn complete_shipment_score(shipment: &Shipment, all_shipments: &[Shipment]) -> CompleteScore {
    let dumping_calculations = shipment_dumping(shipment, all_shipments);
    let score = shipment_score(
        &shipment.products,
        &shipment.containers,
        Some(&dumping_calculations),
    );

    let calculations_by_product: HashMap<&str, &DumpingCalculation> = dumping_calculations
        .iter()
        .map(|calc| (calc.product_id.as_str(), calc))
        .collect();
    let product_scores = shipment
        .products
        .iter()
        .map(|product| {
            let calc = calculations_by_product.get(product.id.as_str()).copied();
            (product.id.clone(), product_score(product, calc))
        })
        .collect();

    CompleteScore {
        score,
        dumping_calculations,
        product_scores,
    }
}

/// Overpacking reports 100%, never more. NaN from 0/0 (no containers and no
/// products) passes through untouched for the caller to render.
fn cap_at_one(ratio: f64) -> f64 {
    if ratio > 1.0 {
        1.0
    } else {
        ratio
    }
}

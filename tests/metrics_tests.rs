//! Metrics engine tests.
//!
//! Validates that:
//! 1. Volume and weight rollups are additive across products and quantities
//! 2. Utilization ratios are capped at 100% and never guarded to fake zeros
//! 3. The single-product baseline scenario produces the documented numbers
//! 4. Zero-penalty dumping calculations leave the aggregate score unchanged
//! 5. Degenerate inputs (no products, no containers) surface as non-finite
//!    ratios instead of silently defaulting

use shipment_profit_planner::domain::{
    container_score, product_profit, product_score, product_volume, shipment_dumping,
    shipment_score, total_products_volume, total_products_weight, Container, Product, Shipment,
};
use time::macros::datetime;

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        height: 10.0,
        width: 10.0,
        length: 10.0,
        weight: 1.0,
        purchase_price: 50.0,
        resale_price: 100.0,
        quantity: 1,
        days_to_sell: 10.0,
        container_id: None,
        tag: None,
        competitor_count: None,
        saturation_threshold: None,
        market_demand_factor: None,
    }
}

fn container(id: &str) -> Container {
    Container {
        id: id.to_string(),
        name: "40ft standard".to_string(),
        height: 100.0,
        width: 100.0,
        length: 100.0,
        max_weight: 1000.0,
        shipping_cost: 0.0,
        shipping_duration_days: None,
        tag: None,
        product_ids: Vec::new(),
    }
}

fn shipment(id: &str, products: Vec<Product>, containers: Vec<Container>) -> Shipment {
    Shipment {
        id: id.to_string(),
        name: format!("Shipment {id}"),
        products,
        containers,
        created_at: datetime!(2024-01-01 00:00 UTC),
        departure_date: None,
        dumping_settings: None,
    }
}

// ---------------------------------------------------------------------------
// Volume / weight rollups
// ---------------------------------------------------------------------------

#[test]
fn product_volume_is_the_dimension_product() {
    let mut p = product("p1", "Desk lamp");
    p.height = 2.0;
    p.width = 3.0;
    p.length = 4.0;
    assert!((product_volume(&p) - 24.0).abs() < EPS);
}

#[test]
fn total_volume_and_weight_multiply_by_quantity() {
    let mut a = product("p1", "Desk lamp");
    a.quantity = 3;
    let mut b = product("p2", "Office chair");
    b.height = 20.0;
    b.weight = 5.0;
    b.quantity = 2;

    // a: 1000 * 3, b: 2000 * 2
    assert!((total_products_volume(&[a.clone(), b.clone()]) - 7000.0).abs() < EPS);
    // a: 1 * 3, b: 5 * 2
    assert!((total_products_weight(&[a, b]) - 13.0).abs() < EPS);
}

#[test]
fn product_profit_can_be_negative() {
    let mut p = product("p1", "Overpriced vase");
    p.purchase_price = 120.0;
    p.quantity = 4;
    assert!((product_profit(&p) - (-80.0)).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Baseline scenario
// ---------------------------------------------------------------------------

#[test]
fn single_product_shipment_baseline() {
    let products = vec![product("p1", "Desk lamp")];
    let containers = vec![container("c1")];

    let score = shipment_score(&products, &containers, None);

    assert!((score.total_cost - 50.0).abs() < EPS);
    assert!((score.total_resale - 100.0).abs() < EPS);
    assert!((score.profit_margin - 1.0).abs() < EPS);
    assert!((score.raw_score - 0.05).abs() < EPS);
    assert!((score.volume_utilization - 0.001).abs() < EPS);
    assert!((score.weight_utilization - 0.001).abs() < EPS);
    assert!((score.efficiency_score - 0.005).abs() < EPS);
}

#[test]
fn weighted_days_to_sell_favors_bulky_products() {
    let a = product("p1", "Desk lamp"); // volume 1000, 10 days
    let mut b = product("p2", "Bookshelf");
    b.length = 40.0; // volume 4000
    b.days_to_sell = 20.0;

    let score = shipment_score(&[a, b], &[container("c1")], None);

    // profit 100 over volume 5000; weighted days = 10*(1/5) + 20*(4/5) = 18
    assert!((score.raw_score - 0.02).abs() < EPS);
    assert!((score.efficiency_score - 0.02 / 18.0).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Utilization capping
// ---------------------------------------------------------------------------

#[test]
fn utilization_is_capped_at_one_when_overpacked() {
    let mut p = product("p1", "Marble slab");
    p.height = 200.0;
    p.width = 200.0;
    p.length = 200.0;
    p.weight = 5000.0;

    let score = shipment_score(&[p], &[container("c1")], None);

    assert!((score.volume_utilization - 1.0).abs() < EPS);
    assert!((score.weight_utilization - 1.0).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Dumping interaction
// ---------------------------------------------------------------------------

#[test]
fn zero_penalty_calculations_leave_the_score_unchanged() {
    let products = vec![product("p1", "Desk lamp"), product("p2", "Office chair")];
    let containers = vec![container("c1")];

    // Dumping disabled yields one zero-penalty calculation per product.
    let ship = shipment("s1", products.clone(), containers.clone());
    let calculations = shipment_dumping(&ship, &[]);
    assert_eq!(calculations.len(), 2);

    let with = shipment_score(&products, &containers, Some(&calculations));
    let without = shipment_score(&products, &containers, None);
    assert_eq!(with, without);
}

#[test]
fn product_score_keeps_raw_fields_next_to_adjusted_ones() {
    let p = product("p1", "Desk lamp");
    let ship = shipment("s1", vec![p.clone()], vec![]);
    let calculations = shipment_dumping(&ship, &[]);

    let plain = product_score(&p, None);
    assert!(plain.adjusted_profit.is_none());
    assert!(plain.dumping_penalty.is_none());
    assert!((plain.raw_score - 0.05).abs() < EPS);
    assert!((plain.efficiency_score - 0.005).abs() < EPS);

    let scored = product_score(&p, Some(&calculations[0]));
    assert!((scored.raw_score - plain.raw_score).abs() < EPS);
    assert!((scored.adjusted_profit.unwrap() - 50.0).abs() < EPS);
    assert!((scored.adjusted_score.unwrap() - 0.05).abs() < EPS);
    assert!((scored.dumping_penalty.unwrap()).abs() < EPS);
}

// ---------------------------------------------------------------------------
// Container-level scoring
// ---------------------------------------------------------------------------

#[test]
fn container_score_counts_only_its_own_shipping_cost() {
    let mut p = product("p1", "Desk lamp");
    p.container_id = Some("c1".to_string());
    let mut c = container("c1");
    c.shipping_cost = 25.0;

    let scored = container_score(&[p], &c);

    assert_eq!(scored.container_id, "c1");
    assert!((scored.score.total_cost - 75.0).abs() < EPS);
    assert!((scored.score.total_resale - 100.0).abs() < EPS);
}

#[test]
fn empty_container_reports_zero_utilization_and_nan_score() {
    let scored = container_score(&[], &container("c1"));

    // No products: utilization is a true 0, but profit-density ratios are
    // 0/0 and must stay NaN for the caller to render as n/a.
    assert!((scored.score.volume_utilization).abs() < EPS);
    assert!((scored.score.weight_utilization).abs() < EPS);
    assert!(scored.score.raw_score.is_nan());
    assert!(scored.score.profit_margin.is_nan());
}

#[test]
fn empty_container_with_shipping_cost_yields_negative_infinity() {
    let mut c = container("c1");
    c.shipping_cost = 40.0;

    let scored = container_score(&[], &c);

    // Profit is -40 over zero volume.
    assert!(scored.score.raw_score.is_infinite() && scored.score.raw_score < 0.0);
}

#[test]
fn empty_shipment_ratios_are_not_finite() {
    let score = shipment_score(&[], &[], None);

    assert!(score.volume_utilization.is_nan());
    assert!(score.weight_utilization.is_nan());
    assert!(score.raw_score.is_nan());
    assert!(score.profit_margin.is_nan());
}

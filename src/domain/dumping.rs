//! Market-saturation price penalties (the "dumping" penalizer).
//!
//! Simulates how oversupply, competing sellers, and overlapping concurrent
//! shipments erode the resale price a product can actually fetch. The
//! curves are heuristic choices for plausibility, not calibrated economics.

use time::Duration;

use super::entities::{DumpingModel, DumpingSettings, Product, Shipment};

/// How far apart two departure dates may lie for shipments to compete.
const CONCURRENCY_WINDOW: Duration = Duration::days(30);

/// Saturation threshold assumed when a product does not specify one.
const DEFAULT_SATURATION_THRESHOLD: f64 = 10.0;

/// Cross-shipment overlap: 1% penalty per overlapping unit, capped at 50%.
const CROSS_SHIPMENT_RATE: f64 = 0.01;
const CROSS_SHIPMENT_CAP: f64 = 0.5;

/// Longer selling windows offset the penalty by at most 30%.
const TIME_DECAY_CAP: f64 = 0.3;

/// Per-product penalty breakdown, recomputed on demand and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct DumpingCalculation {
    pub product_id: String,
    pub base_saturation: f64,
    pub competition_penalty: f64,
    pub cross_shipment_penalty: f64,
    pub time_decay: f64,
    /// Net price-discount fraction, always within [0, 1].
    pub total_penalty: f64,
    pub adjusted_price: f64,
    /// Per-unit profit after the penalty; aggregation multiplies by quantity.
    pub adjusted_profit: f64,
}

/// Base saturation from quantity alone, in [0, 1].
pub fn saturation_curve(quantity: u32, threshold: f64, model: DumpingModel) -> f64 {
    let quantity = quantity as f64;
    match model {
        // Custom is reserved for user-supplied curves and follows the
        // linear curve until it grows semantics of its own.
        DumpingModel::Linear | DumpingModel::Custom => (quantity / threshold).min(1.0),
        DumpingModel::Logarithmic => ((1.0 + quantity).ln() / (1.0 + threshold).ln()).min(1.0),
        DumpingModel::Exponential => {
            let ratio = quantity / threshold;
            (ratio * ratio).min(1.0)
        }
    }
}

/// Full penalty computation for one product.
///
/// `concurrent_shipments` must already exclude the product's own shipment;
/// [`shipment_dumping`] handles the windowing.
pub fn dumping_penalty(
    product: &Product,
    settings: &DumpingSettings,
    concurrent_shipments: &[&Shipment],
) -> DumpingCalculation {
    let threshold = product
        .saturation_threshold
        .unwrap_or(DEFAULT_SATURATION_THRESHOLD);
    let base_saturation = saturation_curve(product.quantity, threshold, settings.model);

    // Normalized so that 9 competitors yield the full competition weight.
    let competitors = product.competitor_count.unwrap_or(0);
    let competition_penalty = if competitors > 0 {
        settings.competition_weight * (1.0 + competitors as f64).ln() / 10f64.ln()
    } else {
        0.0
    };

    let cross_shipment_penalty = if settings.cross_shipment_penalty {
        let overlapping_units: u32 = concurrent_shipments
            .iter()
            .flat_map(|shipment| shipment.products.iter())
            .filter(|other| competes_with(product, other))
            .map(|other| other.quantity)
            .sum();
        (overlapping_units as f64 * CROSS_SHIPMENT_RATE).min(CROSS_SHIPMENT_CAP)
    } else {
        0.0
    };

    let time_decay =
        (product.days_to_sell * settings.time_decay_factor * 0.01).min(TIME_DECAY_CAP);

    // Ceiling applies to the raw sum before the floor, so the result always
    // lands in [0, 1].
    let total_penalty = (base_saturation * settings.saturation_multiplier
        + competition_penalty
        + cross_shipment_penalty
        - time_decay)
        .clamp(0.0, 1.0);

    let adjusted_price = product.resale_price * (1.0 - total_penalty);

    DumpingCalculation {
        product_id: product.id.clone(),
        base_saturation,
        competition_penalty,
        cross_shipment_penalty,
        time_decay,
        total_penalty,
        adjusted_price,
        adjusted_profit: adjusted_price - product.purchase_price,
    }
}

/// One calculation per product in the shipment.
///
/// Disabled settings produce zero-penalty calculations so callers can
/// consume the list unconditionally instead of branching on the flag.
pub fn shipment_dumping(shipment: &Shipment, all_shipments: &[Shipment]) -> Vec<DumpingCalculation> {
    let settings = shipment.settings();

    if !settings.enabled {
        return shipment.products.iter().map(zero_penalty).collect();
    }

    let concurrent: Vec<&Shipment> = all_shipments
        .iter()
        .filter(|other| other.id != shipment.id && departs_concurrently(shipment, other))
        .collect();

    shipment
        .products
        .iter()
        .map(|product| dumping_penalty(product, &settings, &concurrent))
        .collect()
}

/// Human-readable breakdown of a penalty, listing only factors large enough
/// to matter (saturation above 10%, competition and overlap above 5%).
pub fn explain_penalty(calculation: &DumpingCalculation) -> String {
    if calculation.total_penalty == 0.0 {
        return "No dumping penalty applies".to_string();
    }

    let mut factors = Vec::new();
    if calculation.base_saturation > 0.10 {
        factors.push(format!(
            "market saturation {:.0}%",
            calculation.base_saturation * 100.0
        ));
    }
    if calculation.competition_penalty > 0.05 {
        factors.push(format!(
            "competition {:.0}%",
            calculation.competition_penalty * 100.0
        ));
    }
    if calculation.cross_shipment_penalty > 0.05 {
        factors.push(format!(
            "concurrent shipments {:.0}%",
            calculation.cross_shipment_penalty * 100.0
        ));
    }

    let summary = format!(
        "Estimated price reduced by {:.0}%",
        calculation.total_penalty * 100.0
    );
    if factors.is_empty() {
        summary
    } else {
        format!("{} ({})", summary, factors.join(", "))
    }
}

fn zero_penalty(product: &Product) -> DumpingCalculation {
    DumpingCalculation {
        product_id: product.id.clone(),
        base_saturation: 0.0,
        competition_penalty: 0.0,
        cross_shipment_penalty: 0.0,
        time_decay: 0.0,
        total_penalty: 0.0,
        adjusted_price: product.resale_price,
        adjusted_profit: product.resale_price - product.purchase_price,
    }
}

/// Two products compete when one name contains the other, case-insensitive
/// in either direction, or their tags match exactly.
fn competes_with(product: &Product, other: &Product) -> bool {
    let ours = product.name.to_lowercase();
    let theirs = other.name.to_lowercase();
    if ours.contains(&theirs) || theirs.contains(&ours) {
        return true;
    }
    matches!((&product.tag, &other.tag), (Some(a), Some(b)) if a == b)
}

/// A missing departure date on either side means no concurrency, not an
/// error: such shipments simply never window together.
fn departs_concurrently(shipment: &Shipment, other: &Shipment) -> bool {
    match (shipment.departure_date, other.departure_date) {
        (Some(ours), Some(theirs)) => (ours - theirs).abs() <= CONCURRENCY_WINDOW,
        _ => false,
    }
}

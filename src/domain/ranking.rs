//! Sorting and filtering over computed product scores.

use std::cmp::Ordering;

use super::entities::Product;
use super::metrics::ProductScore;

/// Sorting options for the product table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreSort {
    #[default]
    RawScore,
    EfficiencyScore,
    AdjustedScore,
    TotalProfit,
    Volume,
}

impl ScoreSort {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RawScore => "Profit/Volume",
            Self::EfficiencyScore => "Efficiency",
            Self::AdjustedScore => "Adjusted",
            Self::TotalProfit => "Profit",
            Self::Volume => "Volume",
        }
    }
}

/// Filter options for the product table.
#[derive(Clone, Debug, Default)]
pub struct ScoreFilter {
    pub min_profit: Option<f64>,
    pub max_days_to_sell: Option<f64>,
    pub container_id: Option<String>,
    pub tag: Option<String>,
    pub only_assigned: bool,
}

impl ScoreFilter {
    pub fn matches(&self, product: &Product, score: &ProductScore) -> bool {
        if let Some(min) = self.min_profit {
            if score.total_profit < min {
                return false;
            }
        }
        if let Some(max) = self.max_days_to_sell {
            if product.days_to_sell > max {
                return false;
            }
        }
        if self.only_assigned && !product.is_assigned() {
            return false;
        }
        if let Some(ref id) = self.container_id {
            if product.container_id.as_ref() != Some(id) {
                return false;
            }
        }
        if let Some(ref tag) = self.tag {
            if product.tag.as_ref() != Some(tag) {
                return false;
            }
        }

        true
    }
}

/// Sort scored products by the given criteria.
///
/// `AdjustedScore` falls back to the raw score for products that were
/// scored without a dumping calculation, so mixed lists stay comparable.
pub fn sort_product_scores(
    entries: &mut [(Product, ProductScore)],
    sort: ScoreSort,
    descending: bool,
) {
    entries.sort_by(|(_, a), (_, b)| {
        let ord = match sort {
            ScoreSort::RawScore => compare(a.raw_score, b.raw_score),
            ScoreSort::EfficiencyScore => compare(a.efficiency_score, b.efficiency_score),
            ScoreSort::AdjustedScore => compare(
                a.adjusted_score.unwrap_or(a.raw_score),
                b.adjusted_score.unwrap_or(b.raw_score),
            ),
            ScoreSort::TotalProfit => compare(a.total_profit, b.total_profit),
            ScoreSort::Volume => compare(a.volume, b.volume),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

// NaN scores (empty-volume products) sort as equal rather than panicking.
fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

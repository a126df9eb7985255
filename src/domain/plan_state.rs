//! Caller-side planner state and its persisted form.

use serde::{Deserialize, Serialize};

use super::entities::Shipment;
use super::metrics::{complete_shipment_score, CompleteScore};

/// The set of shipments a user is planning. The engines never mutate this;
/// all CRUD happens in the layer that owns it.
#[derive(Clone, Debug, Default)]
pub struct PlannerState {
    pub shipments: Vec<Shipment>,
}

impl PlannerState {
    pub fn shipment(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|shipment| shipment.id == id)
    }

    /// Score one shipment against its siblings, which feed the
    /// cross-shipment penalty when that setting is enabled.
    pub fn score_shipment(&self, id: &str) -> Option<CompleteScore> {
        self.shipment(id)
            .map(|shipment| complete_shipment_score(shipment, &self.shipments))
    }

    pub fn apply_persisted(&mut self, persisted: PersistedPlan) {
        self.shipments = persisted.shipments;
    }

    pub fn to_persisted(&self) -> PersistedPlan {
        PersistedPlan {
            shipments: self.shipments.clone(),
        }
    }
}

/// On-disk snapshot of the planner state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedPlan {
    #[serde(default)]
    pub shipments: Vec<Shipment>,
}

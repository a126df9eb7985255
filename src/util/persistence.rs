use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::plan_state::PersistedPlan;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ShipmentProfitPlanner";
const APP_NAME: &str = "ShipmentProfitPlanner";

fn plan_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("plans.json"))
}

/// Load the saved plan snapshot, if any. A corrupt or unreadable file
/// degrades to `None` so the planner starts empty instead of failing.
pub fn load_persisted_plan() -> Option<PersistedPlan> {
    let path = plan_file()?;
    let data = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(plan) => Some(plan),
        Err(e) => {
            println!("[store] Failed to parse {}: {e}", path.display());
            None
        }
    }
}

pub fn save_persisted_plan(plan: &PersistedPlan) -> Result<(), PersistSaveError> {
    let path = plan_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&path, json)?;
    println!(
        "[store] Saved {} shipments to {}",
        plan.shipments.len(),
        path.display()
    );
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

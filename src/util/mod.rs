use uuid::Uuid;

pub mod format;
pub mod persistence;

/// Mint an opaque entity id with a readable prefix, e.g. `product-1f3a...`.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

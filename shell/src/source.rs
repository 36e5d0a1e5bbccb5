//! Order fetch boundary between the screens and whatever backs them.

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::invariants::validate_orders;
use crate::fixtures;
use crate::order::Order;

/// The only contract the view layer needs from an order backend.
pub trait OrderSource {
    fn list_orders(&self) -> Vec<Order>;
}

/// Source backed by the embedded sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl OrderSource for FixtureSource {
    fn list_orders(&self) -> Vec<Order> {
        fixtures::sample_orders()
    }
}

/// Parse and validate an order payload from an untrusted JSON source.
///
/// Payloads that parse but break the semantic conventions (duplicate ids,
/// agent-presence rules) are rejected; see [`validate_orders`].
pub fn orders_from_json(payload: &str) -> Result<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_str(payload).context("parse order payload")?;
    let errors = validate_orders(&orders);
    if !errors.is_empty() {
        return Err(anyhow!(
            "order payload invariants failed: {}",
            errors.join("; ")
        ));
    }
    debug!(count = orders.len(), "order payload accepted");
    Ok(orders)
}

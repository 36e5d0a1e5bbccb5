use serde::{Deserialize, Serialize};

use crate::core::status::OrderStatus;

/// Worker assigned to fulfil an order once it leaves `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub rating: f32,
}

/// A single requested errand with its lifecycle status.
///
/// This shape is the contract a backend integration must match; see
/// [`crate::source::orders_from_json`] for the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier for this order.
    pub id: String,
    /// Free-text label of the requested errand category.
    pub service: String,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Absent while the order is pending; the convention is checked in
    /// [`crate::core::invariants`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,
    pub pickup: String,
    pub delivery: String,
    /// Integer currency units.
    pub amount: u32,
    /// Calendar date of creation, as the backend formats it.
    pub date: String,
    /// Free-text ETA or terminal marker ("Delivered").
    pub estimated_time: String,
    pub description: String,
}

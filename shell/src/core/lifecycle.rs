//! Lifecycle rules for order status transitions.
//!
//! The shell never mutates orders; these predicates define the edges an
//! order update must respect: pending, accepted, in_progress, completed in
//! sequence, with cancellation reachable from any non-terminal state.

use thiserror::Error;

use crate::core::status::OrderStatus;

/// True if no further transitions may leave `status`.
pub fn is_terminal(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Completed | OrderStatus::Cancelled)
}

/// True if `from` to `to` is a legal lifecycle edge.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    match (from, to) {
        (OrderStatus::Pending, OrderStatus::Accepted) => true,
        (OrderStatus::Accepted, OrderStatus::InProgress) => true,
        (OrderStatus::InProgress, OrderStatus::Completed) => true,
        (from, OrderStatus::Cancelled) => !is_terminal(from),
        _ => false,
    }
}

/// A lifecycle edge rejected by [`can_transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid order transition {} -> {}", .from.wire_name(), .to.wire_name())]
pub struct TransitionError {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// Validate a lifecycle edge, naming the rejected pair on failure.
pub fn check_transition(from: OrderStatus, to: OrderStatus) -> Result<(), TransitionError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}

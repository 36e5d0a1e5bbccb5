//! Semantic checks for order collections crossing the fetch boundary.

use std::collections::HashSet;

use crate::core::status::OrderStatus;
use crate::order::Order;

/// Check conventions the order shape cannot express in types:
/// - no duplicate ids
/// - pending orders carry no agent
/// - accepted/in_progress/completed orders carry an agent
///
/// Cancelled orders may go either way, because cancellation is reachable
/// from the agentless pending state. Returns a list of stable error
/// messages (empty on success).
pub fn validate_orders(orders: &[Order]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for order in orders {
        if !seen.insert(order.id.as_str()) {
            errors.push(format!("duplicate order id '{}'", order.id));
        }

        match order.status {
            OrderStatus::Pending => {
                if order.agent.is_some() {
                    errors.push(format!(
                        "order '{}': pending orders must not have an agent",
                        order.id
                    ));
                }
            }
            OrderStatus::Accepted | OrderStatus::InProgress | OrderStatus::Completed => {
                if order.agent.is_none() {
                    errors.push(format!(
                        "order '{}': {} orders must have an agent",
                        order.id,
                        order.status.wire_name()
                    ));
                }
            }
            OrderStatus::Cancelled => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assigned, order};

    #[test]
    fn well_formed_orders_pass() {
        let orders = vec![
            order("a", OrderStatus::Pending),
            assigned("b", OrderStatus::InProgress),
            assigned("c", OrderStatus::Completed),
            order("d", OrderStatus::Cancelled),
        ];
        assert!(validate_orders(&orders).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let orders = vec![
            order("a", OrderStatus::Pending),
            order("a", OrderStatus::Pending),
        ];
        assert_eq!(validate_orders(&orders), vec!["duplicate order id 'a'".to_string()]);
    }

    #[test]
    fn pending_with_agent_is_reported() {
        let orders = vec![assigned("a", OrderStatus::Pending)];
        assert_eq!(
            validate_orders(&orders),
            vec!["order 'a': pending orders must not have an agent".to_string()]
        );
    }

    #[test]
    fn assigned_states_without_agent_are_reported() {
        for status in [
            OrderStatus::Accepted,
            OrderStatus::InProgress,
            OrderStatus::Completed,
        ] {
            let orders = vec![order("a", status)];
            let errors = validate_orders(&orders);
            assert_eq!(errors.len(), 1, "{} must require an agent", status.wire_name());
        }
    }

    /// Cancelled orders are valid with or without an agent.
    #[test]
    fn cancelled_orders_may_be_unassigned() {
        let orders = vec![
            order("a", OrderStatus::Cancelled),
            assigned("b", OrderStatus::Cancelled),
        ];
        assert!(validate_orders(&orders).is_empty());
    }
}

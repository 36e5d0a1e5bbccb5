//! Stable partitioning of orders into active and completed views.

use crate::core::status::OrderStatus;
use crate::order::Order;

/// Orders split by lifecycle state, original relative order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    /// Everything not yet completed, cancelled orders included.
    pub active: Vec<&'a Order>,
    /// Exactly the orders with status `Completed`.
    pub completed: Vec<&'a Order>,
}

/// Split `orders` into active and completed views.
///
/// A stable filter, not a sort: each order lands in exactly one side and
/// relative order within each side matches the input sequence.
pub fn partition(orders: &[Order]) -> Partition<'_> {
    let mut split = Partition {
        active: Vec::new(),
        completed: Vec::new(),
    };

    for order in orders {
        if order.status == OrderStatus::Completed {
            split.completed.push(order);
        } else {
            split.active.push(order);
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_orders;
    use crate::test_support::order;

    /// The shipped sample data splits into active = [1001, 1002],
    /// completed = [1003].
    #[test]
    fn sample_orders_partition_as_shipped() {
        let orders = sample_orders();
        let split = partition(&orders);

        let active_ids: Vec<&str> = split.active.iter().map(|o| o.id.as_str()).collect();
        let completed_ids: Vec<&str> = split.completed.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(active_ids, vec!["1001", "1002"]);
        assert_eq!(completed_ids, vec!["1003"]);
    }

    /// Every order lands in exactly one side, never both, never neither.
    #[test]
    fn partition_never_drops_or_duplicates() {
        let orders: Vec<Order> = OrderStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| order(&format!("o{}", i), *status))
            .collect();
        let split = partition(&orders);

        assert_eq!(split.active.len() + split.completed.len(), orders.len());
        for o in &orders {
            let in_active = split.active.iter().any(|a| a.id == o.id);
            let in_completed = split.completed.iter().any(|c| c.id == o.id);
            assert_ne!(in_active, in_completed, "order {} must be in exactly one side", o.id);
        }
    }

    /// Cancelled orders are active, not completed.
    #[test]
    fn cancelled_orders_stay_active() {
        let orders = vec![order("a", OrderStatus::Cancelled)];
        let split = partition(&orders);
        assert_eq!(split.active.len(), 1);
        assert!(split.completed.is_empty());
    }

    /// Relative order within each side matches the input sequence.
    #[test]
    fn partition_is_stable() {
        let orders = vec![
            order("a", OrderStatus::Completed),
            order("b", OrderStatus::Pending),
            order("c", OrderStatus::Completed),
            order("d", OrderStatus::Cancelled),
        ];
        let split = partition(&orders);

        let active_ids: Vec<&str> = split.active.iter().map(|o| o.id.as_str()).collect();
        let completed_ids: Vec<&str> = split.completed.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(active_ids, vec!["b", "d"]);
        assert_eq!(completed_ids, vec!["a", "c"]);
    }

    #[test]
    fn empty_input_yields_empty_sides() {
        let split = partition(&[]);
        assert!(split.active.is_empty());
        assert!(split.completed.is_empty());
    }
}

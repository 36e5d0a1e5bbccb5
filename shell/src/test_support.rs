//! Test-only helpers for constructing orders.

use crate::core::status::OrderStatus;
use crate::order::{Agent, Order};

/// Create a deterministic order with default fields and no agent.
pub fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        service: format!("{} service", id),
        status,
        agent: None,
        pickup: format!("{} pickup", id),
        delivery: format!("{} delivery", id),
        amount: 100,
        date: "2025-01-13".to_string(),
        estimated_time: "30 mins".to_string(),
        description: format!("{} description", id),
    }
}

/// Create a deterministic agent.
pub fn agent(name: &str) -> Agent {
    Agent {
        name: name.to_string(),
        phone: "+254700000000".to_string(),
        rating: 4.5,
    }
}

/// Create an order with an agent assigned (for post-pending states).
pub fn assigned(id: &str, status: OrderStatus) -> Order {
    Order {
        agent: Some(agent("Test Agent")),
        ..order(id, status)
    }
}

//! Embedded sample data standing in for a backend.
//!
//! Everything here is what [`crate::source::OrderSource`] would fetch in a
//! real deployment; the shapes are part of the backend contract, the values
//! are not.

use serde::{Deserialize, Serialize};

use crate::core::status::OrderStatus;
use crate::order::{Agent, Order};

/// Sample orders backing the orders screen.
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1001".to_string(),
            service: "Grocery Shopping".to_string(),
            status: OrderStatus::InProgress,
            agent: Some(Agent {
                name: "John Kamau".to_string(),
                phone: "+254712345678".to_string(),
                rating: 4.8,
            }),
            pickup: "Naivas Supermarket, Kerugoya".to_string(),
            delivery: "Kerugoya University, Main Campus".to_string(),
            amount: 850,
            date: "2025-01-13".to_string(),
            estimated_time: "15 mins".to_string(),
            description: "Rice, cooking oil, vegetables, and fruits".to_string(),
        },
        Order {
            id: "1002".to_string(),
            service: "Document Printing".to_string(),
            status: OrderStatus::Accepted,
            agent: Some(Agent {
                name: "Mary Wanjiku".to_string(),
                phone: "+254723456789".to_string(),
                rating: 4.9,
            }),
            pickup: "Print Shop, Town Center".to_string(),
            delivery: "Kerugoya University Library".to_string(),
            amount: 200,
            date: "2025-01-13".to_string(),
            estimated_time: "30 mins".to_string(),
            description: "10 copies of research proposal, spiral binding".to_string(),
        },
        Order {
            id: "1003".to_string(),
            service: "Pharmacy Pickup".to_string(),
            status: OrderStatus::Completed,
            agent: Some(Agent {
                name: "Peter Mwangi".to_string(),
                phone: "+254734567890".to_string(),
                rating: 4.7,
            }),
            pickup: "Goodlife Pharmacy".to_string(),
            delivery: "Residential Area B".to_string(),
            amount: 450,
            date: "2025-01-12".to_string(),
            estimated_time: "Delivered".to_string(),
            description: "Prescription medication and vitamins".to_string(),
        },
    ]
}

/// Lightweight summary row for the home screen's recent list.
///
/// The status here is a free-text label from the activity feed, not the
/// order taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub service: String,
    #[serde(rename = "status")]
    pub status_label: String,
    #[serde(rename = "time")]
    pub time_ago: String,
    pub amount: u32,
}

pub fn recent_orders() -> Vec<RecentOrder> {
    vec![
        RecentOrder {
            service: "Grocery Shopping".to_string(),
            status_label: "Delivered".to_string(),
            time_ago: "2 hours ago".to_string(),
            amount: 850,
        },
        RecentOrder {
            service: "Document Printing".to_string(),
            status_label: "In Progress".to_string(),
            time_ago: "30 mins ago".to_string(),
            amount: 200,
        },
    ]
}

/// Aggregate figures shown on the profile stats strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_orders: u32,
    pub completed_orders: u32,
    pub rating: f32,
    pub saved_amount: u32,
}

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub stats: UserStats,
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        phone: "+254 712 345 678".to_string(),
        email: "john.doe@example.com".to_string(),
        stats: UserStats {
            total_orders: 47,
            completed_orders: 43,
            rating: 4.8,
            saved_amount: 12500,
        },
    }
}

/// Per-user context for the home header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSnapshot {
    /// Location line under the greeting.
    pub location: String,
    pub unread_notifications: u32,
}

pub fn home_snapshot() -> HomeSnapshot {
    HomeSnapshot {
        location: "Kerugoya, Kirinyaga".to_string(),
        unread_notifications: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invariants::validate_orders;

    /// The shipped sample data satisfies the boundary invariants.
    #[test]
    fn sample_orders_are_well_formed() {
        assert!(validate_orders(&sample_orders()).is_empty());
    }

    #[test]
    fn sample_profile_counts_are_consistent() {
        let profile = sample_profile();
        assert!(profile.stats.completed_orders <= profile.stats.total_orders);
    }

    #[test]
    fn sample_orders_cover_three_lifecycle_states() {
        let statuses: Vec<OrderStatus> = sample_orders().iter().map(|o| o.status).collect();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::InProgress,
                OrderStatus::Accepted,
                OrderStatus::Completed
            ]
        );
    }
}

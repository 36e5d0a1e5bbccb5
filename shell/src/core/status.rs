//! Status taxonomy: the closed set of order lifecycle states and the
//! display metadata (color, icon, label) attached to each.
//!
//! Because [`OrderStatus`] is a closed enum, every lookup is an exhaustive
//! match checked at compile time. The defensive defaults the taxonomy
//! documents (slate, clock, raw label) exist only at the trust boundary,
//! in [`Badge::from_wire`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Requested, no agent assigned yet.
    Pending,
    /// An agent accepted the order.
    Accepted,
    /// The agent is running the errand.
    InProgress,
    /// Delivered; terminal.
    Completed,
    /// Called off; terminal, reachable from any non-terminal state.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Badge color for this status.
    pub fn color(self) -> Color {
        match self {
            OrderStatus::Pending => Color::Amber,
            OrderStatus::Accepted => Color::Blue,
            OrderStatus::InProgress => Color::Violet,
            OrderStatus::Completed => Color::Green,
            OrderStatus::Cancelled => Color::Red,
        }
    }

    /// Badge icon for this status. Cancelled shares the pending clock.
    pub fn icon(self) -> StatusIcon {
        match self {
            OrderStatus::Pending => StatusIcon::Clock,
            OrderStatus::Accepted => StatusIcon::Check,
            OrderStatus::InProgress => StatusIcon::Truck,
            OrderStatus::Completed => StatusIcon::Package,
            OrderStatus::Cancelled => StatusIcon::Clock,
        }
    }

    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Waiting for Agent",
            OrderStatus::Accepted => "Agent Assigned",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The snake_case name used on the wire (`in_progress`).
    pub fn wire_name(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A status string that is not part of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "accepted" => Ok(OrderStatus::Accepted),
            "in_progress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Display palette shared by status badges and category tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Amber,
    Blue,
    Violet,
    Green,
    Red,
    Slate,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Amber => "#f59e0b",
            Color::Blue => "#3b82f6",
            Color::Violet => "#8b5cf6",
            Color::Green => "#10b981",
            Color::Red => "#ef4444",
            Color::Slate => "#64748b",
        }
    }
}

/// Icon family used by status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Clock,
    Check,
    Truck,
    Package,
}

/// Resolved display metadata for a status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: Color,
    pub icon: StatusIcon,
}

impl Badge {
    /// Badge for a known status.
    pub fn of(status: OrderStatus) -> Self {
        Badge {
            label: status.label().to_string(),
            color: status.color(),
            icon: status.icon(),
        }
    }

    /// Badge for a raw status string from an untrusted source.
    ///
    /// Out-of-set values fall back to a neutral badge (slate, clock) keeping
    /// the raw string as the label, so rendering never fails on bad input.
    pub fn from_wire(raw: &str) -> Self {
        match raw.parse::<OrderStatus>() {
            Ok(status) => Badge::of(status),
            Err(_) => Badge {
                label: raw.to_string(),
                color: Color::Slate,
                icon: StatusIcon::Clock,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every status in the closed set maps to defined, non-empty metadata.
    #[test]
    fn lookups_are_total_over_the_taxonomy() {
        for status in OrderStatus::ALL {
            assert!(!status.label().is_empty());
            assert!(status.color().hex().starts_with('#'));
            assert!(!status.wire_name().is_empty());
        }
    }

    #[test]
    fn color_table_matches_taxonomy() {
        assert_eq!(OrderStatus::Pending.color(), Color::Amber);
        assert_eq!(OrderStatus::Accepted.color(), Color::Blue);
        assert_eq!(OrderStatus::InProgress.color(), Color::Violet);
        assert_eq!(OrderStatus::Completed.color(), Color::Green);
        assert_eq!(OrderStatus::Cancelled.color(), Color::Red);
    }

    #[test]
    fn label_table_matches_taxonomy() {
        assert_eq!(OrderStatus::InProgress.label(), "In Progress");
        assert_eq!(OrderStatus::Pending.label(), "Waiting for Agent");
        assert_eq!(OrderStatus::Accepted.label(), "Agent Assigned");
    }

    #[test]
    fn icon_table_matches_taxonomy() {
        assert_eq!(OrderStatus::Pending.icon(), StatusIcon::Clock);
        assert_eq!(OrderStatus::Accepted.icon(), StatusIcon::Check);
        assert_eq!(OrderStatus::InProgress.icon(), StatusIcon::Truck);
        assert_eq!(OrderStatus::Completed.icon(), StatusIcon::Package);
        assert_eq!(OrderStatus::Cancelled.icon(), StatusIcon::Clock);
    }

    /// Wire names parse back to the status they came from.
    #[test]
    fn wire_names_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.wire_name().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn serde_uses_snake_case_wire_names() {
        let json = serde_json::to_string(&OrderStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in_progress\"");
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").expect("deserialize");
        assert_eq!(status, OrderStatus::Cancelled);
    }

    /// Out-of-set values get the documented neutral fallback instead of
    /// failing.
    #[test]
    fn wire_badge_falls_back_to_neutral_defaults() {
        let badge = Badge::from_wire("refunded");
        assert_eq!(badge.label, "refunded");
        assert_eq!(badge.color, Color::Slate);
        assert_eq!(badge.icon, StatusIcon::Clock);
    }

    #[test]
    fn wire_badge_resolves_known_statuses() {
        let badge = Badge::from_wire("in_progress");
        assert_eq!(badge.label, "In Progress");
        assert_eq!(badge.color, Color::Violet);
        assert_eq!(badge.icon, StatusIcon::Truck);
    }
}

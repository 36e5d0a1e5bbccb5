//! Orders tab: active/completed tabs, order cards, detail modal.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ShellConfig;
use crate::core::partition::partition;
use crate::core::status::{Badge, OrderStatus};
use crate::order::Order;
use crate::source::OrderSource;

const TITLE: &str = "My Orders";
const SUBTITLE: &str = "Track your errands";

/// Which partition the list is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdersTab {
    #[default]
    Active,
    Completed,
}

/// Local state of the orders tab.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersScreen {
    pub orders: Vec<Order>,
    pub tab: OrdersTab,
    /// Order id shown in the detail modal, if any.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrdersEvent {
    TabSelected(OrdersTab),
    OrderOpened(String),
    OrderDismissed,
}

impl OrdersScreen {
    /// Build the screen from whatever backs the order list.
    pub fn new(source: &dyn OrderSource) -> Self {
        Self {
            orders: source.list_orders(),
            tab: OrdersTab::default(),
            selected: None,
        }
    }

    pub fn apply(&mut self, event: OrdersEvent) {
        match event {
            OrdersEvent::TabSelected(tab) => {
                self.tab = tab;
            }
            OrdersEvent::OrderOpened(id) => {
                if self.orders.iter().any(|o| o.id == id) {
                    debug!(order_id = %id, "order detail opened");
                    self.selected = Some(id);
                } else {
                    warn!(order_id = %id, "ignoring open for unknown order");
                }
            }
            OrdersEvent::OrderDismissed => {
                self.selected = None;
            }
        }
    }

    pub fn view(&self, cfg: &ShellConfig) -> OrdersView {
        let split = partition(&self.orders);
        let displayed = match self.tab {
            OrdersTab::Active => &split.active,
            OrdersTab::Completed => &split.completed,
        };

        let cards: Vec<OrderCard> = displayed.iter().map(|o| order_card(o, cfg)).collect();
        let empty_state = if cards.is_empty() {
            Some(empty_state(self.tab))
        } else {
            None
        };
        let detail = self
            .selected
            .as_ref()
            .and_then(|id| self.orders.iter().find(|o| &o.id == id))
            .map(|o| order_detail(o, cfg));

        OrdersView {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            tabs: [
                tab_view(OrdersTab::Active, split.active.len(), self.tab),
                tab_view(OrdersTab::Completed, split.completed.len(), self.tab),
            ],
            cards,
            empty_state,
            detail,
        }
    }
}

fn tab_view(tab: OrdersTab, count: usize, current: OrdersTab) -> TabView {
    let name = match tab {
        OrdersTab::Active => "Active",
        OrdersTab::Completed => "Completed",
    };
    TabView {
        tab,
        label: format!("{} ({})", name, count),
        selected: tab == current,
    }
}

fn order_card(order: &Order, cfg: &ShellConfig) -> OrderCard {
    // No agent row before assignment or after delivery.
    let agent = match order.status {
        OrderStatus::Pending | OrderStatus::Completed => None,
        _ => order.agent.as_ref().map(|a| AgentRow {
            name: a.name.clone(),
        }),
    };

    OrderCard {
        id: order.id.clone(),
        service: order.service.clone(),
        badge: Badge::of(order.status),
        amount_label: cfg.format_amount(order.amount),
        pickup: order.pickup.clone(),
        delivery: order.delivery.clone(),
        estimated_time: order.estimated_time.clone(),
        agent,
    }
}

fn order_detail(order: &Order, cfg: &ShellConfig) -> OrderDetail {
    let agent = if order.status == OrderStatus::Pending {
        None
    } else {
        order.agent.as_ref().map(|a| AgentDetail {
            name: a.name.clone(),
            phone: a.phone.clone(),
            rating: a.rating,
        })
    };

    OrderDetail {
        id: order.id.clone(),
        service: order.service.clone(),
        badge: Badge::of(order.status),
        description: order.description.clone(),
        pickup: order.pickup.clone(),
        delivery: order.delivery.clone(),
        agent,
        amount_label: cfg.format_amount(order.amount),
    }
}

fn empty_state(tab: OrdersTab) -> EmptyState {
    match tab {
        OrdersTab::Active => EmptyState {
            title: "No active orders".to_string(),
            subtitle: "Your active orders will appear here".to_string(),
        },
        OrdersTab::Completed => EmptyState {
            title: "No completed orders".to_string(),
            subtitle: "Your completed orders will appear here".to_string(),
        },
    }
}

/// Declarative render of the orders tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersView {
    pub title: String,
    pub subtitle: String,
    pub tabs: [TabView; 2],
    pub cards: Vec<OrderCard>,
    pub empty_state: Option<EmptyState>,
    pub detail: Option<OrderDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub tab: OrdersTab,
    /// Tab caption with its partition count, "Active (2)".
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCard {
    pub id: String,
    pub service: String,
    pub badge: Badge,
    pub amount_label: String,
    pub pickup: String,
    pub delivery: String,
    pub estimated_time: String,
    pub agent: Option<AgentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentRow {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub id: String,
    pub service: String,
    pub badge: Badge,
    pub description: String,
    pub pickup: String,
    pub delivery: String,
    pub agent: Option<AgentDetail>,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDetail {
    pub name: String,
    pub phone: String,
    pub rating: f32,
}

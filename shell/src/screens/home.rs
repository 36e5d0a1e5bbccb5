//! Home tab: brand header, search, quick-service grid, recent activity.

use serde::Serialize;

use crate::catalog::{CategoryIcon, ServiceCategory};
use crate::config::ShellConfig;
use crate::core::status::Color;
use crate::fixtures::{HomeSnapshot, RecentOrder};

const GREETING: &str = "Good Morning!";
const BRAND: &str = "Swift Assist";
const TAGLINE: &str = "Your errands, done fast.";
const SEARCH_PLACEHOLDER: &str = "What can we help you with today?";
const BANNER_TITLE: &str = "New Customer?";
const BANNER_SUBTITLE: &str = "Get 20% off your first errand";

/// Local state of the home tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeScreen {
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    SearchChanged(String),
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: HomeEvent) {
        match event {
            HomeEvent::SearchChanged(query) => {
                self.search_query = query;
            }
        }
    }

    pub fn view(
        &self,
        cfg: &ShellConfig,
        catalog: &[ServiceCategory],
        snapshot: &HomeSnapshot,
        recent: &[RecentOrder],
    ) -> HomeView {
        HomeView {
            greeting: GREETING.to_string(),
            location: snapshot.location.clone(),
            notification_badge: cfg.format_badge_count(snapshot.unread_notifications),
            brand: BRAND.to_string(),
            tagline: TAGLINE.to_string(),
            search_query: self.search_query.clone(),
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
            quick_services: catalog
                .iter()
                .map(|cat| QuickServiceTile {
                    category_id: cat.id,
                    name: cat.short_name.clone(),
                    icon: cat.icon,
                    color: cat.color,
                })
                .collect(),
            banner: Banner {
                title: BANNER_TITLE.to_string(),
                subtitle: BANNER_SUBTITLE.to_string(),
            },
            recent_orders: recent
                .iter()
                .map(|row| RecentOrderRow {
                    service: row.service.clone(),
                    time_ago: row.time_ago.clone(),
                    amount_label: cfg.format_amount(row.amount),
                    status_label: row.status_label.clone(),
                    delivered: row.status_label == "Delivered",
                })
                .collect(),
        }
    }
}

/// Declarative render of the home tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub greeting: String,
    pub location: String,
    pub notification_badge: String,
    pub brand: String,
    pub tagline: String,
    pub search_query: String,
    pub search_placeholder: String,
    pub quick_services: Vec<QuickServiceTile>,
    pub banner: Banner,
    pub recent_orders: Vec<RecentOrderRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickServiceTile {
    pub category_id: u32,
    pub name: String,
    pub icon: CategoryIcon,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentOrderRow {
    pub service: String,
    pub time_ago: String,
    pub amount_label: String,
    pub status_label: String,
    /// Delivered rows render the settled badge, everything else the busy one.
    pub delivered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::service_catalog;
    use crate::fixtures::{home_snapshot, recent_orders};

    fn render(screen: &HomeScreen) -> HomeView {
        screen.view(
            &ShellConfig::default(),
            &service_catalog(),
            &home_snapshot(),
            &recent_orders(),
        )
    }

    #[test]
    fn search_events_update_the_query() {
        let mut screen = HomeScreen::new();
        screen.apply(HomeEvent::SearchChanged("printing".to_string()));
        assert_eq!(render(&screen).search_query, "printing");
    }

    #[test]
    fn quick_grid_mirrors_the_catalog() {
        let view = render(&HomeScreen::new());
        let names: Vec<&str> = view.quick_services.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Shopping", "Business", "Household", "Student", "Personal"]
        );
    }

    #[test]
    fn recent_rows_format_amounts_and_flag_delivery() {
        let view = render(&HomeScreen::new());
        assert_eq!(view.recent_orders.len(), 2);
        assert_eq!(view.recent_orders[0].amount_label, "KSh 850");
        assert!(view.recent_orders[0].delivered);
        assert!(!view.recent_orders[1].delivered);
    }

    #[test]
    fn notification_badge_respects_the_cap() {
        let view = render(&HomeScreen::new());
        assert_eq!(view.notification_badge, "2");

        let mut snapshot = home_snapshot();
        snapshot.unread_notifications = 25;
        let capped = HomeScreen::new().view(
            &ShellConfig::default(),
            &service_catalog(),
            &snapshot,
            &recent_orders(),
        );
        assert_eq!(capped.notification_badge, "9+");
    }
}

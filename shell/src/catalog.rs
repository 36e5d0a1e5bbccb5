//! Service taxonomy: the five errand categories and the urgency ladder.

use serde::{Deserialize, Serialize};

use crate::core::status::Color;

/// Icon family for category tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Cart,
    Briefcase,
    House,
    GraduationCap,
    Heart,
}

/// One errand category offered by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub id: u32,
    /// Full name shown on the services screen ("Shopping & Delivery").
    pub name: String,
    /// Short name for the home-screen quick grid ("Shopping").
    pub short_name: String,
    pub description: String,
    pub icon: CategoryIcon,
    pub color: Color,
    /// Starting price in integer currency units.
    pub base_price: u32,
    /// Concrete errands offered under this category.
    pub services: Vec<String>,
}

/// How soon a requested errand should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Asap,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Normal, Urgency::Urgent, Urgency::Asap];

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent",
            Urgency::Asap => "ASAP",
        }
    }

    /// Turnaround window shown next to the option.
    pub fn eta_label(self) -> &'static str {
        match self {
            Urgency::Normal => "1-2 hours",
            Urgency::Urgent => "30-60 mins",
            Urgency::Asap => "15-30 mins",
        }
    }
}

fn category(
    id: u32,
    name: &str,
    short_name: &str,
    description: &str,
    icon: CategoryIcon,
    color: Color,
    base_price: u32,
    services: [&str; 5],
) -> ServiceCategory {
    ServiceCategory {
        id,
        name: name.to_string(),
        short_name: short_name.to_string(),
        description: description.to_string(),
        icon,
        color,
        base_price,
        services: services.iter().map(|s| s.to_string()).collect(),
    }
}

/// The catalog the app ships with.
pub fn service_catalog() -> Vec<ServiceCategory> {
    vec![
        category(
            1,
            "Shopping & Delivery",
            "Shopping",
            "Get your groceries, medicines, and essentials delivered",
            CategoryIcon::Cart,
            Color::Green,
            150,
            [
                "Grocery Shopping",
                "Pharmacy Pickups",
                "Restaurant Delivery",
                "Supermarket Shopping",
                "Fresh Market Shopping",
            ],
        ),
        category(
            2,
            "Business & Office",
            "Business",
            "Professional errands for your business needs",
            CategoryIcon::Briefcase,
            Color::Blue,
            200,
            [
                "Document Delivery",
                "Bank Errands",
                "Office Supplies",
                "Meeting Preparations",
                "Business Registration",
            ],
        ),
        category(
            3,
            "Household Support",
            "Household",
            "Daily household tasks made easy",
            CategoryIcon::House,
            Color::Amber,
            300,
            [
                "Laundry Services",
                "Gas Delivery",
                "Water Delivery",
                "Bill Payments",
                "Utility Top-ups",
            ],
        ),
        category(
            4,
            "Student Support",
            "Student",
            "Academic and campus assistance",
            CategoryIcon::GraduationCap,
            Color::Violet,
            100,
            [
                "Document Printing",
                "Assignment Submission",
                "Stationery Shopping",
                "Book Collection",
                "Library Services",
            ],
        ),
        category(
            5,
            "Personal & Lifestyle",
            "Personal",
            "Personal errands and lifestyle services",
            CategoryIcon::Heart,
            Color::Red,
            120,
            [
                "Parcel Collection",
                "Event Tickets",
                "Airtime & Data",
                "Gift Shopping",
                "Personal Shopping",
            ],
        ),
    ]
}

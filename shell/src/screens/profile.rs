//! Profile tab: user card, stats, preference toggles, account menus.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ShellConfig;
use crate::core::status::Color;
use crate::fixtures::UserProfile;

const TITLE: &str = "Profile";
const USER_SUBTITLE: &str = "Verified Customer";

/// Icon family for menu rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuIcon {
    Edit,
    CreditCard,
    MapPin,
    Award,
    HelpCircle,
    Smartphone,
    Shield,
}

/// Local state of the profile tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileScreen {
    pub profile: UserProfile,
    pub notifications_enabled: bool,
    pub location_enabled: bool,
    /// Whether the logout confirmation dialog is showing.
    pub logout_prompt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEvent {
    NotificationsToggled,
    LocationToggled,
    LogoutRequested,
    LogoutDismissed,
    LogoutConfirmed,
}

/// Outcome the embedder must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    LogOut,
}

impl ProfileScreen {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            notifications_enabled: true,
            location_enabled: true,
            logout_prompt: false,
        }
    }

    pub fn apply(&mut self, event: ProfileEvent) -> Option<ProfileAction> {
        match event {
            ProfileEvent::NotificationsToggled => {
                self.notifications_enabled = !self.notifications_enabled;
            }
            ProfileEvent::LocationToggled => {
                self.location_enabled = !self.location_enabled;
            }
            ProfileEvent::LogoutRequested => {
                self.logout_prompt = true;
            }
            ProfileEvent::LogoutDismissed => {
                self.logout_prompt = false;
            }
            ProfileEvent::LogoutConfirmed => {
                if !self.logout_prompt {
                    warn!("ignoring logout confirm with no prompt showing");
                    return None;
                }
                self.logout_prompt = false;
                info!("logout confirmed");
                return Some(ProfileAction::LogOut);
            }
        }
        None
    }

    pub fn view(&self, cfg: &ShellConfig) -> ProfileView {
        ProfileView {
            title: TITLE.to_string(),
            user: UserCard {
                name: self.profile.name.clone(),
                subtitle: USER_SUBTITLE.to_string(),
                phone: self.profile.phone.clone(),
                email: self.profile.email.clone(),
            },
            stats: StatsStrip {
                total_orders: self.profile.stats.total_orders,
                rating: self.profile.stats.rating,
                saved_label: cfg.format_amount(self.profile.stats.saved_amount),
            },
            preferences: vec![
                PreferenceSwitch {
                    title: "Push Notifications".to_string(),
                    subtitle: "Get updates on your orders".to_string(),
                    enabled: self.notifications_enabled,
                },
                PreferenceSwitch {
                    title: "Location Services".to_string(),
                    subtitle: "For accurate pickup & delivery".to_string(),
                    enabled: self.location_enabled,
                },
            ],
            account_menu: account_menu(),
            support_menu: support_menu(),
            logout_prompt: self.logout_prompt.then(|| ConfirmDialog {
                title: "Logout".to_string(),
                message: "Are you sure you want to logout?".to_string(),
                confirm_label: "Logout".to_string(),
                cancel_label: "Cancel".to_string(),
            }),
        }
    }
}

fn account_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            title: "Edit Profile".to_string(),
            subtitle: "Update your personal information".to_string(),
            icon: MenuIcon::Edit,
            color: Color::Blue,
        },
        MenuEntry {
            title: "Payment Methods".to_string(),
            subtitle: "Manage Mpesa and payment options".to_string(),
            icon: MenuIcon::CreditCard,
            color: Color::Green,
        },
        MenuEntry {
            title: "Addresses".to_string(),
            subtitle: "Manage pickup and delivery locations".to_string(),
            icon: MenuIcon::MapPin,
            color: Color::Amber,
        },
        MenuEntry {
            title: "Order History".to_string(),
            subtitle: "View all your past errands".to_string(),
            icon: MenuIcon::Award,
            color: Color::Violet,
        },
    ]
}

fn support_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry {
            title: "Help Center".to_string(),
            subtitle: "FAQs and troubleshooting".to_string(),
            icon: MenuIcon::HelpCircle,
            color: Color::Slate,
        },
        MenuEntry {
            title: "Contact Support".to_string(),
            subtitle: "Chat with our support team".to_string(),
            icon: MenuIcon::Smartphone,
            color: Color::Slate,
        },
        MenuEntry {
            title: "Privacy & Security".to_string(),
            subtitle: "Manage your privacy settings".to_string(),
            icon: MenuIcon::Shield,
            color: Color::Slate,
        },
    ]
}

/// Declarative render of the profile tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub title: String,
    pub user: UserCard,
    pub stats: StatsStrip,
    pub preferences: Vec<PreferenceSwitch>,
    pub account_menu: Vec<MenuEntry>,
    pub support_menu: Vec<MenuEntry>,
    pub logout_prompt: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCard {
    pub name: String,
    pub subtitle: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsStrip {
    pub total_orders: u32,
    pub rating: f32,
    pub saved_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceSwitch {
    pub title: String,
    pub subtitle: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub title: String,
    pub subtitle: String,
    pub icon: MenuIcon,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_profile;

    fn screen() -> ProfileScreen {
        ProfileScreen::new(sample_profile())
    }

    #[test]
    fn toggles_start_enabled_and_flip() {
        let mut screen = screen();
        assert!(screen.notifications_enabled);
        assert!(screen.location_enabled);

        screen.apply(ProfileEvent::NotificationsToggled);
        screen.apply(ProfileEvent::LocationToggled);
        let view = screen.view(&ShellConfig::default());
        assert!(!view.preferences[0].enabled);
        assert!(!view.preferences[1].enabled);
    }

    #[test]
    fn stats_strip_formats_savings() {
        let view = screen().view(&ShellConfig::default());
        assert_eq!(view.stats.total_orders, 47);
        assert_eq!(view.stats.saved_label, "KSh 12500");
    }

    #[test]
    fn menus_list_the_expected_rows() {
        let view = screen().view(&ShellConfig::default());
        assert_eq!(view.account_menu.len(), 4);
        assert_eq!(view.support_menu.len(), 3);
        assert_eq!(view.account_menu[0].title, "Edit Profile");
        assert_eq!(view.support_menu[2].icon, MenuIcon::Shield);
    }

    /// Logout needs an explicit confirmation before producing an action.
    #[test]
    fn logout_flow_requires_confirmation() {
        let mut screen = screen();

        assert!(screen.apply(ProfileEvent::LogoutConfirmed).is_none());

        assert!(screen.apply(ProfileEvent::LogoutRequested).is_none());
        let view = screen.view(&ShellConfig::default());
        assert_eq!(view.logout_prompt.expect("prompt").confirm_label, "Logout");

        screen.apply(ProfileEvent::LogoutDismissed);
        assert!(screen.view(&ShellConfig::default()).logout_prompt.is_none());

        screen.apply(ProfileEvent::LogoutRequested);
        let action = screen.apply(ProfileEvent::LogoutConfirmed);
        assert_eq!(action, Some(ProfileAction::LogOut));
        assert!(!screen.logout_prompt);
    }
}

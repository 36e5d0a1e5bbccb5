//! Services tab: category cards, category detail, request form.
//!
//! Submitting a valid request yields a [`ServiceRequest`] outcome for the
//! embedder to hand to a backend; the shell itself never creates orders.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{CategoryIcon, ServiceCategory, Urgency};
use crate::config::ShellConfig;
use crate::core::status::Color;

const TITLE: &str = "Our Services";
const SUBTITLE: &str = "Choose the service you need";
const REQUEST_LABEL: &str = "Request This Service";
const SUBMIT_LABEL: &str = "Get Quote & Submit";
const FORM_TITLE: &str = "Request Service";

/// Draft fields of the request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForm {
    pub pickup: String,
    pub delivery: String,
    pub description: String,
    pub urgency: Urgency,
}

impl RequestForm {
    fn empty(urgency: Urgency) -> Self {
        Self {
            pickup: String::new(),
            delivery: String::new(),
            description: String::new(),
            urgency,
        }
    }
}

/// A missing required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    MissingPickup,
    MissingDelivery,
    MissingDescription,
}

impl FormIssue {
    pub fn message(self) -> &'static str {
        match self {
            FormIssue::MissingPickup => "Pickup location is required",
            FormIssue::MissingDelivery => "Delivery location is required",
            FormIssue::MissingDescription => "Service description is required",
        }
    }
}

/// A validated draft, ready for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub category_id: u32,
    pub pickup: String,
    pub delivery: String,
    pub description: String,
    pub urgency: Urgency,
}

/// Local state of the services tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicesScreen {
    pub catalog: Vec<ServiceCategory>,
    /// Category shown in the detail modal, if any.
    pub selected: Option<u32>,
    /// Category the open request form was started from.
    pub form_category: Option<u32>,
    pub form_open: bool,
    pub form: RequestForm,
    /// Issues from the last rejected submit; cleared on success.
    pub issues: Vec<FormIssue>,
    default_urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicesEvent {
    CategorySelected(u32),
    CategoryDismissed,
    RequestOpened,
    /// Closes the form but keeps the field contents.
    RequestDismissed,
    PickupChanged(String),
    DeliveryChanged(String),
    DescriptionChanged(String),
    UrgencySelected(Urgency),
    Submitted,
}

impl ServicesScreen {
    pub fn new(catalog: Vec<ServiceCategory>, cfg: &ShellConfig) -> Self {
        Self {
            catalog,
            selected: None,
            form_category: None,
            form_open: false,
            form: RequestForm::empty(cfg.default_urgency),
            issues: Vec::new(),
            default_urgency: cfg.default_urgency,
        }
    }

    /// Apply a user event. Returns the submitted request when a valid draft
    /// is submitted, `None` otherwise.
    pub fn apply(&mut self, event: ServicesEvent) -> Option<ServiceRequest> {
        match event {
            ServicesEvent::CategorySelected(id) => {
                if self.catalog.iter().any(|c| c.id == id) {
                    self.selected = Some(id);
                } else {
                    warn!(category_id = id, "ignoring selection of unknown category");
                }
            }
            ServicesEvent::CategoryDismissed => {
                self.selected = None;
            }
            ServicesEvent::RequestOpened => match self.selected {
                Some(id) => {
                    self.form_category = Some(id);
                    self.form_open = true;
                }
                None => warn!("ignoring request form open with no category selected"),
            },
            ServicesEvent::RequestDismissed => {
                self.form_open = false;
            }
            ServicesEvent::PickupChanged(text) => {
                self.form.pickup = text;
            }
            ServicesEvent::DeliveryChanged(text) => {
                self.form.delivery = text;
            }
            ServicesEvent::DescriptionChanged(text) => {
                self.form.description = text;
            }
            ServicesEvent::UrgencySelected(urgency) => {
                self.form.urgency = urgency;
            }
            ServicesEvent::Submitted => return self.submit(),
        }
        None
    }

    fn submit(&mut self) -> Option<ServiceRequest> {
        if !self.form_open {
            warn!("ignoring submit with no request form open");
            return None;
        }
        let category_id = self.form_category?;

        let issues = validate_form(&self.form);
        if !issues.is_empty() {
            debug!(issues = issues.len(), "service request rejected");
            self.issues = issues;
            return None;
        }

        let request = ServiceRequest {
            category_id,
            pickup: self.form.pickup.trim().to_string(),
            delivery: self.form.delivery.trim().to_string(),
            description: self.form.description.trim().to_string(),
            urgency: self.form.urgency,
        };
        info!(
            category_id,
            urgency = ?request.urgency,
            "service request submitted"
        );

        // Source behavior: a successful submit closes both modals and
        // resets the draft.
        self.form = RequestForm::empty(self.default_urgency);
        self.form_open = false;
        self.form_category = None;
        self.selected = None;
        self.issues = Vec::new();

        Some(request)
    }

    pub fn view(&self, cfg: &ShellConfig) -> ServicesView {
        let detail = self
            .selected
            .and_then(|id| self.catalog.iter().find(|c| c.id == id))
            .map(|cat| CategoryDetail {
                id: cat.id,
                name: cat.name.clone(),
                description: cat.description.clone(),
                icon: cat.icon,
                color: cat.color,
                base_price_label: cfg.format_base_price(cat.base_price),
                services: cat.services.clone(),
                request_label: REQUEST_LABEL.to_string(),
            });

        let request_form = self.form_open.then(|| RequestFormView {
            title: FORM_TITLE.to_string(),
            pickup: FieldView {
                label: "Pickup Location".to_string(),
                placeholder: "Where should we pick up from?".to_string(),
                value: self.form.pickup.clone(),
            },
            delivery: FieldView {
                label: "Delivery Location".to_string(),
                placeholder: "Where should we deliver to?".to_string(),
                value: self.form.delivery.clone(),
            },
            description: FieldView {
                label: "Service Description".to_string(),
                placeholder: "Describe what you need in detail...".to_string(),
                value: self.form.description.clone(),
            },
            urgency_options: Urgency::ALL
                .iter()
                .map(|u| UrgencyOption {
                    urgency: *u,
                    label: u.label().to_string(),
                    eta: u.eta_label().to_string(),
                    selected: *u == self.form.urgency,
                })
                .collect(),
            issues: self.issues.iter().map(|i| i.message().to_string()).collect(),
            submit_label: SUBMIT_LABEL.to_string(),
        });

        ServicesView {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            cards: self
                .catalog
                .iter()
                .map(|cat| CategoryCard {
                    id: cat.id,
                    name: cat.name.clone(),
                    description: cat.description.clone(),
                    icon: cat.icon,
                    color: cat.color,
                    base_price_label: cfg.format_base_price(cat.base_price),
                })
                .collect(),
            detail,
            request_form,
        }
    }
}

fn validate_form(form: &RequestForm) -> Vec<FormIssue> {
    let mut issues = Vec::new();
    if form.pickup.trim().is_empty() {
        issues.push(FormIssue::MissingPickup);
    }
    if form.delivery.trim().is_empty() {
        issues.push(FormIssue::MissingDelivery);
    }
    if form.description.trim().is_empty() {
        issues.push(FormIssue::MissingDescription);
    }
    issues
}

/// Declarative render of the services tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesView {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<CategoryCard>,
    pub detail: Option<CategoryDetail>,
    pub request_form: Option<RequestFormView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub icon: CategoryIcon,
    pub color: Color,
    pub base_price_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub icon: CategoryIcon,
    pub color: Color,
    pub base_price_label: String,
    pub services: Vec<String>,
    pub request_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestFormView {
    pub title: String,
    pub pickup: FieldView,
    pub delivery: FieldView,
    pub description: FieldView,
    pub urgency_options: Vec<UrgencyOption>,
    /// Messages from the last rejected submit, empty otherwise.
    pub issues: Vec<String>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub label: String,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrgencyOption {
    pub urgency: Urgency,
    pub label: String,
    pub eta: String,
    pub selected: bool,
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The kind of home service being subscribed to.
///
/// The category decides which recurrence frequencies are legal and which
/// billing cycle the subscription must use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Cleaning,
    Laundry,
    Cooking,
    PestControl,
    Errands,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceCategory::Cleaning => "Cleaning",
            ServiceCategory::Laundry => "Laundry",
            ServiceCategory::Cooking => "Cooking",
            ServiceCategory::PestControl => "Pest control",
            ServiceCategory::Errands => "Errands",
        };
        write!(f, "{}", name)
    }
}

/// How often a single service recurs within a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionFrequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
}

impl fmt::Display for SubscriptionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubscriptionFrequency::Daily => "daily",
            SubscriptionFrequency::Weekly => "weekly",
            SubscriptionFrequency::BiWeekly => "bi-weekly",
            SubscriptionFrequency::Monthly => "monthly",
            SubscriptionFrequency::Quarterly => "quarterly",
        };
        write!(f, "{}", name)
    }
}

/// The interval at which the customer is charged for the whole subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
        };
        write!(f, "{}", name)
    }
}

/// One selectable service within a subscription draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    /// Display name shown to the customer, used to prefix validation messages.
    pub name: String,
    pub category: ServiceCategory,
}

/// The options chosen for one specific service, keyed by service id
/// within the draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServiceConfiguration {
    pub frequency: SubscriptionFrequency,
}

/// An in-progress subscription as a customer or admin builds it.
///
/// Drafts are transient: constructed in memory, validated synchronously,
/// and discarded or submitted. Nothing here persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDraft {
    pub services: Vec<Service>,
    #[serde(default)]
    pub configurations: HashMap<String, ServiceConfiguration>,
    pub billing_cycle: BillingCycle,
    pub duration_months: u32,
}

/// Machine-readable reason attached to every [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    InvalidFrequencyForCategory,
    InvalidCookingFrequency,
    InvalidPestControlFrequency,
    InvalidBillingCycleForServices,
    InvalidPestControlBilling,
    IncompatibleServiceBillingCycles,
    InvalidMonthlyDuration,
    InvalidQuarterlyDuration,
    MissingServiceConfiguration,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::InvalidFrequencyForCategory => "INVALID_FREQUENCY_FOR_CATEGORY",
            ValidationCode::InvalidCookingFrequency => "INVALID_COOKING_FREQUENCY",
            ValidationCode::InvalidPestControlFrequency => "INVALID_PEST_CONTROL_FREQUENCY",
            ValidationCode::InvalidBillingCycleForServices => "INVALID_BILLING_CYCLE_FOR_SERVICES",
            ValidationCode::InvalidPestControlBilling => "INVALID_PEST_CONTROL_BILLING",
            ValidationCode::IncompatibleServiceBillingCycles => {
                "INCOMPATIBLE_SERVICE_BILLING_CYCLES"
            }
            ValidationCode::InvalidMonthlyDuration => "INVALID_MONTHLY_DURATION",
            ValidationCode::InvalidQuarterlyDuration => "INVALID_QUARTERLY_DURATION",
            ValidationCode::MissingServiceConfiguration => "MISSING_SERVICE_CONFIGURATION",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation. Violations are data, never panics or `Err`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Form field the violation belongs to, e.g. `services.cleaning-01.frequency`.
    pub field: String,
    pub message: String,
    pub code: ValidationCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ValidationCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// Outcome of validating a whole draft: every check that can run, runs,
/// and all failures are reported together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

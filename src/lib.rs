pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::subscription::{validate_draft, validate_subscription};
pub use config::{CliConfig, OutputFormat};
pub use domain::model::{
    BillingCycle, Service, ServiceCategory, ServiceConfiguration, SubscriptionDraft,
    SubscriptionFrequency, ValidationCode, ValidationError, ValidationResult,
};
pub use utils::error::{Result, RulesError};

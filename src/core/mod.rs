pub mod billing;
pub mod duration;
pub mod frequency;
pub mod subscription;

pub use crate::domain::model::{
    BillingCycle, Service, ServiceCategory, ServiceConfiguration, SubscriptionDraft,
    SubscriptionFrequency, ValidationCode, ValidationError, ValidationResult,
};
pub use crate::utils::error::Result;
pub use self::billing::{
    required_billing_cycle, requires_monthly_billing, requires_quarterly_billing,
    validate_billing_cycle_alignment,
};
pub use self::duration::{minimum_duration_months, validate_minimum_duration};
pub use self::frequency::{allowed_frequencies, validate_frequency, ALL_FREQUENCIES};
pub use self::subscription::{validate_draft, validate_subscription};

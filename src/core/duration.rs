use crate::domain::model::{BillingCycle, ValidationCode, ValidationError};

/// Floor on subscription length, in months, for a billing cycle.
pub fn minimum_duration_months(billing_cycle: BillingCycle) -> u32 {
    match billing_cycle {
        BillingCycle::Monthly => 1,
        BillingCycle::Quarterly => 3,
    }
}

/// Check the proposed duration against the cycle's floor.
pub fn validate_minimum_duration(
    billing_cycle: BillingCycle,
    duration_months: u32,
) -> Option<ValidationError> {
    let floor = minimum_duration_months(billing_cycle);
    if duration_months >= floor {
        return None;
    }

    let (code, message) = match billing_cycle {
        BillingCycle::Monthly => (
            ValidationCode::InvalidMonthlyDuration,
            format!("Monthly subscriptions must run for at least {} month", floor),
        ),
        BillingCycle::Quarterly => (
            ValidationCode::InvalidQuarterlyDuration,
            format!("Quarterly subscriptions must run for at least {} months", floor),
        ),
    };

    Some(ValidationError::new("duration_months", message, code))
}

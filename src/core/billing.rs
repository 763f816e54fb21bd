use crate::domain::model::{BillingCycle, ServiceCategory, ValidationCode, ValidationError};

/// Cleaning, laundry and cooking run on the monthly billing cycle.
pub fn requires_monthly_billing(category: ServiceCategory) -> bool {
    matches!(
        category,
        ServiceCategory::Cleaning | ServiceCategory::Laundry | ServiceCategory::Cooking
    )
}

/// Pest control treatments are billed per quarter.
pub fn requires_quarterly_billing(category: ServiceCategory) -> bool {
    matches!(category, ServiceCategory::PestControl)
}

/// Check that the selected categories can share the chosen billing cycle.
///
/// A draft mixing monthly-billed and quarterly-billed categories reports the
/// incompatibility under its own code, on top of whichever group mismatch the
/// chosen cycle trips. Callers therefore see up to two errors for a mixed
/// draft with a given cycle.
pub fn validate_billing_cycle_alignment(
    categories: &[ServiceCategory],
    billing_cycle: BillingCycle,
) -> Vec<ValidationError> {
    let has_monthly_group = categories.iter().copied().any(requires_monthly_billing);
    let has_quarterly_group = categories.iter().copied().any(requires_quarterly_billing);

    let mut errors = Vec::new();

    if has_monthly_group && billing_cycle != BillingCycle::Monthly {
        errors.push(ValidationError::new(
            "billing_cycle",
            "Cleaning, laundry and cooking services require monthly billing",
            ValidationCode::InvalidBillingCycleForServices,
        ));
    }

    if has_quarterly_group && billing_cycle != BillingCycle::Quarterly {
        errors.push(ValidationError::new(
            "billing_cycle",
            "Pest control services require quarterly billing",
            ValidationCode::InvalidPestControlBilling,
        ));
    }

    // No single cycle satisfies both groups, so the mix itself is an error
    // regardless of which cycle was chosen.
    if has_monthly_group && has_quarterly_group {
        errors.push(ValidationError::new(
            "billing_cycle",
            "Pest control cannot share a subscription with monthly-billed services",
            ValidationCode::IncompatibleServiceBillingCycles,
        ));
    }

    errors
}

/// The one billing cycle the given categories allow, used to preselect the
/// cycle in a form.
///
/// Returns `None` when the set mixes the two incompatible groups, and also
/// when no category constrains the cycle at all; the alignment validator is
/// the place that tells those cases apart.
pub fn required_billing_cycle(categories: &[ServiceCategory]) -> Option<BillingCycle> {
    let has_monthly_group = categories.iter().copied().any(requires_monthly_billing);
    let has_quarterly_group = categories.iter().copied().any(requires_quarterly_billing);

    match (has_monthly_group, has_quarterly_group) {
        (true, false) => Some(BillingCycle::Monthly),
        (false, true) => Some(BillingCycle::Quarterly),
        (true, true) | (false, false) => None,
    }
}

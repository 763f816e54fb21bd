use crate::core::{billing, duration, frequency};
use crate::domain::model::{
    BillingCycle, Service, ServiceCategory, ServiceConfiguration, SubscriptionDraft,
    ValidationCode, ValidationError, ValidationResult,
};
use std::collections::HashMap;

/// Validate a whole draft subscription.
///
/// Runs every per-service check, then one billing-cycle alignment pass over
/// the full set of categories, then the duration check. Never fail-fast:
/// every check that can run, runs, and the caller gets the full accumulated
/// list to surface inline next to the offending fields.
pub fn validate_subscription(
    services: &[Service],
    configurations: &HashMap<String, ServiceConfiguration>,
    billing_cycle: BillingCycle,
    duration_months: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    for service in services {
        match configurations.get(&service.id) {
            None => {
                errors.push(ValidationError::new(
                    format!("services.{}", service.id),
                    format!("{} has not been configured", service.name),
                    ValidationCode::MissingServiceConfiguration,
                ));
            }
            Some(configuration) => {
                if let Some(err) =
                    frequency::validate_frequency(service.category, configuration.frequency)
                {
                    // Re-scope the bare frequency error to this service so the
                    // form can attach it to the right card.
                    errors.push(ValidationError::new(
                        format!("services.{}.frequency", service.id),
                        format!("{}: {}", service.name, err.message),
                        err.code,
                    ));
                }
            }
        }
    }

    let categories: Vec<ServiceCategory> = services.iter().map(|s| s.category).collect();
    errors.extend(billing::validate_billing_cycle_alignment(
        &categories,
        billing_cycle,
    ));

    if let Some(err) = duration::validate_minimum_duration(billing_cycle, duration_months) {
        errors.push(err);
    }

    ValidationResult::from_errors(errors)
}

/// Convenience over [`validate_subscription`] for an assembled draft.
pub fn validate_draft(draft: &SubscriptionDraft) -> ValidationResult {
    validate_subscription(
        &draft.services,
        &draft.configurations,
        draft.billing_cycle,
        draft.duration_months,
    )
}

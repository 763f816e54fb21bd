use crate::domain::model::{
    ServiceCategory, SubscriptionFrequency, ValidationCode, ValidationError,
};

/// Every frequency a draft can carry, used for unrestricted categories.
pub const ALL_FREQUENCIES: [SubscriptionFrequency; 5] = [
    SubscriptionFrequency::Daily,
    SubscriptionFrequency::Weekly,
    SubscriptionFrequency::BiWeekly,
    SubscriptionFrequency::Monthly,
    SubscriptionFrequency::Quarterly,
];

const CLEANING_LAUNDRY_FREQUENCIES: [SubscriptionFrequency; 3] = [
    SubscriptionFrequency::Weekly,
    SubscriptionFrequency::BiWeekly,
    SubscriptionFrequency::Monthly,
];

const COOKING_FREQUENCIES: [SubscriptionFrequency; 2] = [
    SubscriptionFrequency::Weekly,
    SubscriptionFrequency::BiWeekly,
];

const PEST_CONTROL_FREQUENCIES: [SubscriptionFrequency; 1] = [SubscriptionFrequency::Quarterly];

/// The full set of frequencies a category may be scheduled at.
///
/// This is the same table [`validate_frequency`] checks against, exposed so
/// a form can populate its frequency selector from it.
pub fn allowed_frequencies(category: ServiceCategory) -> &'static [SubscriptionFrequency] {
    match category {
        ServiceCategory::Cleaning | ServiceCategory::Laundry => &CLEANING_LAUNDRY_FREQUENCIES,
        ServiceCategory::Cooking => &COOKING_FREQUENCIES,
        ServiceCategory::PestControl => &PEST_CONTROL_FREQUENCIES,
        // Errands carry no frequency restriction.
        ServiceCategory::Errands => &ALL_FREQUENCIES,
    }
}

/// Check one category/frequency pair against the rule table.
///
/// Returns `None` when the pair is legal. Violations come back as data so a
/// form can render them inline; nothing here panics or returns `Err`.
pub fn validate_frequency(
    category: ServiceCategory,
    frequency: SubscriptionFrequency,
) -> Option<ValidationError> {
    let code = match category {
        ServiceCategory::Cleaning | ServiceCategory::Laundry => {
            ValidationCode::InvalidFrequencyForCategory
        }
        ServiceCategory::Cooking => ValidationCode::InvalidCookingFrequency,
        ServiceCategory::PestControl => ValidationCode::InvalidPestControlFrequency,
        // Unrestricted: any frequency is accepted for errands.
        ServiceCategory::Errands => return None,
    };

    let allowed = allowed_frequencies(category);
    if allowed.contains(&frequency) {
        return None;
    }

    let allowed_list = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(ValidationError::new(
        "frequency",
        format!(
            "{} services cannot be scheduled {}; choose one of: {}",
            category, frequency, allowed_list
        ),
        code,
    ))
}

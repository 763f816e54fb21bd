use crate::domain::model::SubscriptionDraft;
use crate::utils::error::{Result, RulesError};
use crate::utils::validation::{self, Validate};
use std::collections::HashSet;
use std::path::Path;

/// Load a subscription draft from a TOML file.
pub fn load_draft<P: AsRef<Path>>(path: P) -> Result<SubscriptionDraft> {
    let content = std::fs::read_to_string(&path).map_err(RulesError::IoError)?;
    parse_draft(&content)
}

/// Parse a draft from a TOML string and check its shape.
///
/// Shape problems (unparseable file, blank ids, duplicate ids) abort with a
/// [`RulesError`]; whether the draft satisfies the subscription rules is a
/// separate question answered by `core::validate_draft`.
pub fn parse_draft(content: &str) -> Result<SubscriptionDraft> {
    let draft: SubscriptionDraft = toml::from_str(content).map_err(|e| RulesError::DraftError {
        message: format!("TOML parsing error: {}", e),
    })?;

    draft.validate()?;
    Ok(draft)
}

impl Validate for SubscriptionDraft {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for service in &self.services {
            validation::validate_non_empty_string("services.id", &service.id)?;
            validation::validate_non_empty_string("services.name", &service.name)?;

            if !seen.insert(service.id.as_str()) {
                return Err(RulesError::DraftError {
                    message: format!("Duplicate service id: {}", service.id),
                });
            }
        }
        Ok(())
    }
}

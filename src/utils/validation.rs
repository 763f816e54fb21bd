use crate::utils::error::{Result, RulesError};

/// Shell-level shape validation for configuration inputs.
///
/// Distinct from the subscription rule validators in `core`: a failure here
/// means the input is malformed (bad path, empty id) and aborts the run,
/// while rule violations are ordinary data the caller renders.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RulesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RulesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RulesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("draft", "./drafts/weekly.toml").is_ok());
        assert!(validate_path("draft", "").is_err());
        assert!(validate_path("draft", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("services.id", "clean-01").is_ok());
        assert!(validate_non_empty_string("services.id", "").is_err());
        assert!(validate_non_empty_string("services.id", "   ").is_err());
    }
}

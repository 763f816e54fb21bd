use metromellow_rules::config::draft;
use metromellow_rules::{validate_draft, RulesError, ValidationCode};
use tempfile::TempDir;

fn write_draft(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_valid_monthly_draft_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_draft(
        &dir,
        "family.toml",
        r#"
billing_cycle = "monthly"
duration_months = 6

[[services]]
id = "clean-01"
name = "Deep Home Cleaning"
category = "cleaning"

[[services]]
id = "cook-01"
name = "Chef at Home"
category = "cooking"

[configurations.clean-01]
frequency = "bi_weekly"

[configurations.cook-01]
frequency = "weekly"
"#,
    );

    let subscription = draft::load_draft(&path).unwrap();
    let result = validate_draft(&subscription);

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_valid_quarterly_pest_control_draft() {
    let dir = TempDir::new().unwrap();
    let path = write_draft(
        &dir,
        "pest.toml",
        r#"
billing_cycle = "quarterly"
duration_months = 3

[[services]]
id = "pest-01"
name = "Quarterly Pest Control"
category = "pest_control"

[configurations.pest-01]
frequency = "quarterly"
"#,
    );

    let subscription = draft::load_draft(&path).unwrap();
    let result = validate_draft(&subscription);

    assert!(result.is_valid);
}

#[test]
fn test_mixed_draft_reports_every_problem_at_once() {
    let dir = TempDir::new().unwrap();
    let path = write_draft(
        &dir,
        "mixed.toml",
        r#"
billing_cycle = "quarterly"
duration_months = 2

[[services]]
id = "clean-01"
name = "Deep Home Cleaning"
category = "cleaning"

[[services]]
id = "pest-01"
name = "Quarterly Pest Control"
category = "pest_control"

[configurations.clean-01]
frequency = "weekly"

[configurations.pest-01]
frequency = "quarterly"
"#,
    );

    let subscription = draft::load_draft(&path).unwrap();
    let result = validate_draft(&subscription);

    assert!(!result.is_valid);
    let codes: Vec<ValidationCode> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(
        codes,
        vec![
            ValidationCode::InvalidBillingCycleForServices,
            ValidationCode::IncompatibleServiceBillingCycles,
            ValidationCode::InvalidQuarterlyDuration,
        ]
    );
}

#[test]
fn test_missing_configuration_surfaces_service_name() {
    let dir = TempDir::new().unwrap();
    let path = write_draft(
        &dir,
        "unconfigured.toml",
        r#"
billing_cycle = "monthly"
duration_months = 1

[[services]]
id = "laundry-01"
name = "Wash & Fold"
category = "laundry"
"#,
    );

    let subscription = draft::load_draft(&path).unwrap();
    let result = validate_draft(&subscription);

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].code,
        ValidationCode::MissingServiceConfiguration
    );
    assert!(result.errors[0].message.contains("Wash & Fold"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = draft::load_draft(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, RulesError::IoError(_)));
}

#[test]
fn test_result_json_wire_format() {
    let dir = TempDir::new().unwrap();
    let path = write_draft(
        &dir,
        "short.toml",
        r#"
billing_cycle = "quarterly"
duration_months = 1

[[services]]
id = "pest-01"
name = "Quarterly Pest Control"
category = "pest_control"

[configurations.pest-01]
frequency = "quarterly"
"#,
    );

    let subscription = draft::load_draft(&path).unwrap();
    let result = validate_draft(&subscription);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["is_valid"], serde_json::Value::Bool(false));
    assert_eq!(json["errors"][0]["code"], "INVALID_QUARTERLY_DURATION");
    assert_eq!(json["errors"][0]["field"], "duration_months");
}

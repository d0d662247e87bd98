use anyhow::Result;
use small_tasks::core::InMemoryCases;
use small_tasks::utils::validation::Validate;
use small_tasks::{SecondLargestMode, TaskRunner, TasksConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const COURSEWORK_CASES: &str = r#"
[settings]
name = "coursework"

[[second_largest]]
name = "when given parameter is less than 2"
values = [1]
expect_error = "invalid_argument"

[[second_largest]]
name = "get number"
values = [1, 2, 3, 4, 5]
expect = 4

[[second_largest]]
name = "duplicate maximum"
values = [5, 5, 3]
expect = 5

[[palindrome]]
input = "asd"
expect = false

[[palindrome]]
input = "ada"
expect = true

[[palindrome]]
input = "saippuakivikauppias"
expect = true
"#;

fn write_cases(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_case_file_passes_in_literal_mode() -> Result<()> {
    let file = write_cases(COURSEWORK_CASES)?;
    let config = TasksConfig::from_file(file.path())?;
    config.validate()?;

    let report = TaskRunner::new(config).run()?;
    assert_eq!(report.outcomes.len(), 6);
    assert!(report.is_success());
    assert_eq!(report.mode, SecondLargestMode::Literal);
    Ok(())
}

#[test]
fn test_mode_override_reports_mismatch() -> Result<()> {
    let file = write_cases(COURSEWORK_CASES)?;
    let mut config = TasksConfig::from_file(file.path())?;
    config.override_mode(SecondLargestMode::Distinct);

    let report = TaskRunner::new(config).run()?;
    assert_eq!(report.failed(), 1);
    let failure = report.failures().next().expect("one failure");
    assert_eq!(failure.name, "duplicate maximum");
    assert_eq!(failure.expected, "5");
    assert_eq!(failure.actual, "3");
    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let config = TasksConfig::from_toml_str(COURSEWORK_CASES)?;
    let cases = config.to_cases()?;
    let report = TaskRunner::new(InMemoryCases::new(cases, SecondLargestMode::Literal)).run()?;

    let json: serde_json::Value = serde_json::to_value(&report)?;
    assert_eq!(json["mode"], "literal");
    assert_eq!(json["outcomes"].as_array().map(|a| a.len()), Some(6));
    assert_eq!(json["outcomes"][3]["name"], "palindrome[0]");
    Ok(())
}

#[test]
fn test_invalid_case_file_is_rejected() -> Result<()> {
    let file = write_cases(
        r#"
[[second_largest]]
values = [1, 2]
"#,
    )?;
    let config = TasksConfig::from_file(file.path())?;
    assert!(config.validate().is_err());
    assert!(TaskRunner::new(config).run().is_err());
    Ok(())
}

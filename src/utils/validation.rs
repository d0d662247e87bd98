use crate::utils::error::{Result, TaskError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_count(field_name: &str, count: usize, min_count: usize) -> Result<()> {
    if count < min_count {
        return Err(TaskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: count.to_string(),
            reason: format!("Expected at least {} entries", min_count),
        });
    }
    Ok(())
}

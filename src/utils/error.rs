use crate::domain::model::ExpectedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid argument: sequence has {len} element(s), at least {min} required")]
    InvalidArgument { len: usize, min: usize },

    #[error("No second distinct value: every element equals {value}")]
    NoSecondDistinct { value: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 1 保留給案例比對失敗
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 3,
            ErrorSeverity::Critical => 4,
        }
    }
}

impl TaskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TaskError::InvalidArgument { .. } | TaskError::NoSecondDistinct { .. } => {
                ErrorCategory::Input
            }
            TaskError::ConfigError { .. }
            | TaskError::InvalidConfigValueError { .. }
            | TaskError::ValidationError { .. } => ErrorCategory::Configuration,
            TaskError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TaskError::InvalidArgument { min, .. } => {
                format!("Provide at least {} values", min)
            }
            TaskError::NoSecondDistinct { .. } => {
                "Use --mode literal, or provide at least two different values".to_string()
            }
            TaskError::IoError(_) => "Check that the file exists and is readable".to_string(),
            TaskError::ConfigError { .. } => "Make sure the case file is valid TOML".to_string(),
            TaskError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the case file", field)
            }
            TaskError::ValidationError { .. } => {
                "Review the case file against the documented layout".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TaskError::InvalidArgument { len, .. } => {
                format!("Need at least two numbers, got {}", len)
            }
            TaskError::NoSecondDistinct { value } => {
                format!("All numbers are {}, there is no second distinct value", value)
            }
            TaskError::IoError(e) => format!("Could not read file: {}", e),
            other => other.to_string(),
        }
    }

    /// 對應到案例檔可預期的錯誤種類；設定或系統錯誤回傳 None
    pub fn expected_kind(&self) -> Option<ExpectedError> {
        match self {
            TaskError::InvalidArgument { .. } => Some(ExpectedError::InvalidArgument),
            TaskError::NoSecondDistinct { .. } => Some(ExpectedError::NoSecondDistinct),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = TaskError::InvalidArgument { len: 1, min: 2 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.expected_kind(), Some(ExpectedError::InvalidArgument));
        assert!(err.to_string().contains("1 element(s)"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = TaskError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.expected_kind(), None);
        assert!(err.user_friendly_message().contains("bad"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TaskError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let input = TaskError::NoSecondDistinct { value: 7 };
        let config = TaskError::ValidationError {
            message: "x".to_string(),
        };
        let io: TaskError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(input.severity().exit_code(), 2);
        assert_eq!(config.severity().exit_code(), 3);
        assert_eq!(io.severity().exit_code(), 4);
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Could not parse '{input}' as a number: {reason}")]
    ParseError { input: String, reason: String },

    #[error("Unrecognized currency/unit marker: '{marker}'")]
    DispatchError { marker: String },

    #[error("Invalid exchange rate: {rate}")]
    InvalidRateError { rate: f64 },

    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflowError { operation: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ConverterError {
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn overflow(operation: &str) -> Self {
        Self::ArithmeticOverflowError {
            operation: operation.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseError { .. } | Self::DispatchError { .. } | Self::InvalidRateError { .. } => {
                ErrorCategory::Input
            }
            Self::ArithmeticOverflowError { .. } => ErrorCategory::Arithmetic,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// A dispatch error means the marker set and the dispatcher disagree, which
    /// is a bug rather than bad input.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DispatchError { .. } => ErrorSeverity::Critical,
            _ => match self.category() {
                ErrorCategory::System => ErrorSeverity::Critical,
                _ => ErrorSeverity::High,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => {
                "Use digits (12345, 12,345) or Japanese units (1万2345), optionally with $, 円, dollars, yen or a distance unit"
            }
            Self::DispatchError { .. } => "Use one of: $, 円, cm, in, m, ft, km, mi",
            Self::InvalidRateError { .. } => "Pass a positive exchange rate, e.g. --rate 110",
            Self::ArithmeticOverflowError { .. } => "Try a smaller amount or exchange rate",
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Check the configuration file and command line options",
            Self::IoError(_) => "Check that the input file exists and is readable",
            Self::CsvError(_) | Self::SerializationError(_) => "Check that the output stream is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Arithmetic => format!("Amount out of range: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_high_severity() {
        let err = ConverterError::parse("abc", "not a number");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().starts_with("Invalid input"));
    }

    #[test]
    fn test_dispatch_error_is_critical() {
        let err = ConverterError::DispatchError {
            marker: "lb".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("lb"));
    }

    #[test]
    fn test_io_error_is_system() {
        let err: ConverterError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}

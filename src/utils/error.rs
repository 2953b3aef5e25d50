use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatcherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Rule file parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid pattern in rule '{rule}': {source}")]
    PatternError {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error in '{field}': {message}")]
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
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PatcherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatcherError::IoError(_) => ErrorCategory::Io,
            PatcherError::SerializationError(_) => ErrorCategory::Serialization,
            PatcherError::TomlError(_)
            | PatcherError::PatternError { .. }
            | PatcherError::ConfigValidationError { .. }
            | PatcherError::InvalidConfigValueError { .. }
            | PatcherError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Exit code for the binary, derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PatcherError::IoError(_) => {
                "Check that the target file exists and is readable and writable"
            }
            PatcherError::SerializationError(_) => "Check that the report path is writable",
            PatcherError::TomlError(_) => "Fix the rule file so it is valid TOML with [[rules]] entries",
            PatcherError::PatternError { .. } => {
                "Fix the regular expression; it must contain exactly two capture groups"
            }
            PatcherError::ConfigValidationError { .. }
            | PatcherError::InvalidConfigValueError { .. }
            | PatcherError::MissingConfigError { .. } => {
                "Review the command line options and rule file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PatcherError::IoError(e) => format!("Could not access the target file: {}", e),
            PatcherError::PatternError { rule, .. } => {
                format!("Rule '{}' has an invalid pattern", rule)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatcherError>;

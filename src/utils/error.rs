use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed archive: {message}")]
    MalformedArchiveError { message: String },

    #[error("Failed to save archive '{path}': {source}")]
    SaveError {
        path: String,
        source: Box<LibraryError>,
    },

    #[error("Failed to load archive '{path}': {source}")]
    LoadError {
        path: String,
        source: Box<LibraryError>,
    },

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LibraryError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedArchiveError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// 包裝後的 save/load 錯誤依底層原因分類
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::MalformedArchiveError { .. } => ErrorCategory::Data,
            Self::SaveError { source, .. } | Self::LoadError { source, .. } => source.category(),
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the archive directory exists and is writable, then try again"
            }
            ErrorCategory::Data => {
                "The archive file is corrupted or was not written by this tool; restore it from a backup"
            }
            ErrorCategory::Configuration => {
                "Review the configuration file and command line options"
            }
            ErrorCategory::Validation => "Correct the item fields and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SaveError { path, .. } => format!("Could not save the catalog to '{}'", path),
            Self::LoadError { path, .. } => format!("Could not load the catalog from '{}'", path),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

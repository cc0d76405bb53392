use thiserror::Error;

pub mod codes;

pub use codes::ErrorCode;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for tripboard
#[derive(Error, Debug)]
pub enum TripError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Storage error: {message}")]
    Storage {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl TripError {
    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with specific code
    pub fn storage_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Storage {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an error for a day or item position that does not exist
    pub fn index_out_of_range(field: &str, index: usize, len: usize) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_OUT_OF_RANGE,
            message: format!("{field} index {index} is out of range (length {len})"),
            field: Some(field.to_string()),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Storage { source: src, .. }
            | Self::Validation { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Storage { .. } => 4,
            Self::Validation { .. } => 8,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Storage { code, .. }
            | Self::Validation { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config {
                message,
                source: Some(cause),
                ..
            } => format!("Configuration problem: {}: {}", message, cause),
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            // The message of a storage error already carries its cause
            Self::Storage { message, .. } => format!("Storage error: {}", message),
            Self::Validation { message, field, .. } => {
                if let Some(f) = field {
                    format!("Invalid {}: {}", f, message)
                } else {
                    format!("Validation error: {}", message)
                }
            }
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg
    }

    /// True when a caller addressed a day or item that does not exist
    pub fn is_index_out_of_range(&self) -> bool {
        self.code() == ErrorCode::VALIDATION_OUT_OF_RANGE
    }
}

/// Type alias for Results using TripError
pub type Result<T> = std::result::Result<T, TripError>;

use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

#[derive(Debug, Error)]
pub enum EstateError {
    #[error("{message}")]
    Constraint { message: String },

    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: String },

    #[error("Unknown command")]
    UnknownCommand,

    #[error("This {entity} already exists in the address book")]
    Duplicate { entity: String },

    #[error("{entity} not found in the address book")]
    NotFound { entity: String },

    #[error("The {entity} index provided is invalid")]
    InvalidIndex { entity: String },

    #[error("{entity} list contains duplicate {entity}(s).")]
    DuplicateInData { entity: String },

    #[error("Data file could not be loaded: {0}")]
    DataLoading(String),

    #[error("Could not save data to file: {0}")]
    Save(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EstateError {
    pub fn invalid_format(usage: &str) -> Self {
        EstateError::InvalidFormat {
            usage: usage.to_string(),
        }
    }

    pub fn constraint(message: &str) -> Self {
        EstateError::Constraint {
            message: message.to_string(),
        }
    }

    /// True for errors caused by malformed command text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            EstateError::InvalidFormat { .. } | EstateError::UnknownCommand
        )
    }
}

pub type EstateResult<T> = Result<T, EstateError>;

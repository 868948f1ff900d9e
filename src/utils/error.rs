use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Customer index {index} is out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown field '{0}', expected one of: name, age, address")]
    UnknownField(String),

    #[error("Invalid command: {message}")]
    CommandError { message: String },
}

impl FormError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::IoError(e) => format!("Could not read or write a file: {}", e),
            FormError::SerializationError(_) | FormError::CsvError(_) => {
                "Could not encode the submitted customers".to_string()
            }
            FormError::ConfigValidationError { field, .. }
            | FormError::InvalidConfigValueError { field, .. }
            | FormError::MissingConfigError { field } => {
                format!("The configuration value '{}' is not usable", field)
            }
            FormError::IndexOutOfRange { index, len } => format!(
                "There is no customer {} (the form has {})",
                index + 1,
                len
            ),
            FormError::UnknownField(name) => format!("'{}' is not a form field", name),
            FormError::CommandError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormError::IoError(_) => "Check that the output directory exists and is writable",
            FormError::SerializationError(_) | FormError::CsvError(_) => {
                "Try the other output format (json or csv)"
            }
            FormError::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            FormError::InvalidConfigValueError { .. } | FormError::MissingConfigError { .. } => {
                "Fix the value in the config file or override it on the command line"
            }
            FormError::IndexOutOfRange { .. } => "Type 'show' to list the customers",
            FormError::UnknownField(_) | FormError::CommandError { .. } => {
                "Type 'help' to list the available commands"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

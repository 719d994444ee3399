//! Error types and handling for the `Wearcast` application

use thiserror::Error;

/// Main error type for the `Wearcast` application
#[derive(Error, Debug)]
pub enum WearcastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather gateway communication errors (geocoding or forecast)
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Cache operation errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// A wardrobe item was referenced by name but is not in the catalog
    #[error("Catalog error: no {category} named '{name}'")]
    Catalog { category: String, name: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WearcastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a new catalog lookup error
    pub fn catalog<S: Into<String>>(category: S, name: S) -> Self {
        Self::Catalog {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WearcastError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WearcastError::Api { message } => {
                format!("Unable to fetch weather data: {message}")
            }
            WearcastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WearcastError::Cache { .. } => {
                "Cache operation failed. You may need to clear your cache.".to_string()
            }
            WearcastError::Catalog { category, name } => {
                format!("Unknown {category} '{name}' in the wardrobe catalog.")
            }
            WearcastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            WearcastError::General { message } => message.clone(),
        }
    }
}

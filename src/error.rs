//! Error types and handling for the weather lookup

use thiserror::Error;

/// Main error type for location and forecast lookups
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The geocoding service returned no candidates
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// HTTP failure, non-success status or a response we could not make sense of
    #[error("Network error: {message}")]
    Network { message: String },

    /// Durable key-value storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherError {
    /// Create a new not-found error for a query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, WeatherError::NotFound { .. })
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, WeatherError::Network { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::NotFound { query } => {
                format!("No place called '{query}' could be found.")
            }
            WeatherError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            WeatherError::Storage { .. } => {
                "Could not read or save the last location. Check the storage directory."
                    .to_string()
            }
            WeatherError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WeatherError::network(format!("malformed response: {err}"))
        } else {
            WeatherError::network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = WeatherError::not_found("Xyzzy");
        assert!(not_found.is_not_found());
        assert!(!not_found.is_network());

        let network = WeatherError::network("connection refused");
        assert!(network.is_network());

        let storage = WeatherError::storage("disk full");
        assert!(matches!(storage, WeatherError::Storage { .. }));
    }

    #[test]
    fn test_display_includes_detail() {
        assert_eq!(
            WeatherError::not_found("Xyzzy").to_string(),
            "Location not found: Xyzzy"
        );
        assert!(
            WeatherError::network("status 500")
                .to_string()
                .contains("status 500")
        );
    }

    #[test]
    fn test_user_messages() {
        let not_found = WeatherError::not_found("Xyzzy");
        assert!(not_found.user_message().contains("Xyzzy"));

        let network = WeatherError::network("test");
        assert!(network.user_message().contains("Unable to reach"));

        let config = WeatherError::config("test");
        assert!(config.user_message().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WeatherError = io_err.into();
        assert!(matches!(err, WeatherError::Io { .. }));
    }
}

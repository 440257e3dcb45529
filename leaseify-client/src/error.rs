//! Client-side error types.

use leaseify_api::FieldError;

/// Error raised by a transport call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status and a normalized body.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// The normalized error a store keeps for a failed operation.
///
/// The message is what the UI layer renders; `errors` carries field-level
/// validation detail when the server supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorRecord {
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl ErrorRecord {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl ClientError {
    /// Normalize into the record a store keeps. Server-reported failures
    /// propagate their message and field errors verbatim; anything that
    /// never produced a response collapses to a generic network failure.
    pub fn to_record(&self) -> ErrorRecord {
        match self {
            ClientError::Api {
                message, errors, ..
            } => ErrorRecord {
                message: message.clone(),
                errors: errors.clone(),
            },
            ClientError::Http(err) if err.status().is_none() => {
                ErrorRecord::message("Network Error")
            }
            other => ErrorRecord::message(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_record_keeps_server_message() {
        let err = ClientError::Api {
            status: 400,
            message: "Required field 'title' is missing".to_string(),
            errors: vec![FieldError::new("title", "is required")],
        };

        let record = err.to_record();
        assert_eq!(record.message, "Required field 'title' is missing");
        assert_eq!(record.errors.len(), 1);
        assert_eq!(record.errors[0].field, "title");
    }

    #[test]
    fn test_config_error_record_uses_display() {
        let err = ClientError::Config("api_base_url is required".to_string());
        assert!(err.to_record().message.contains("api_base_url"));
    }
}

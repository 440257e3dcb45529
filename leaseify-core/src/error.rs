//! Error types for Leaseify operations

use crate::EntityType;
use thiserror::Error;
use uuid::Uuid;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Entity not found: {entity_type:?} with id {id}")]
    NotFound { entity_type: EntityType, id: Uuid },

    #[error("Duplicate id for {entity_type:?}: {id}")]
    DuplicateId { entity_type: EntityType, id: Uuid },

    #[error("Update failed for {entity_type:?} with id {id}: {reason}")]
    UpdateFailed {
        entity_type: EntityType,
        id: Uuid,
        reason: String,
    },
}

/// Validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all Leaseify errors.
#[derive(Debug, Clone, Error)]
pub enum LeaseifyError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for Leaseify operations.
pub type LeaseifyResult<T> = Result<T, LeaseifyError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_not_found() {
        let err = StoreError::NotFound {
            entity_type: EntityType::Tenant,
            id: Uuid::nil(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Entity not found"));
        assert!(msg.contains("Tenant"));
        assert!(msg.contains("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn test_validation_error_display_missing_field() {
        let err = ValidationError::RequiredFieldMissing {
            field: "email".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Required field missing"));
        assert!(msg.contains("email"));
    }

    #[test]
    fn test_config_error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "api_base_url".to_string(),
            value: "bad".to_string(),
            reason: "must be a url".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("api_base_url"));
        assert!(msg.contains("bad"));
        assert!(msg.contains("must be a url"));
    }

    #[test]
    fn test_leaseify_error_from_variants() {
        let store = LeaseifyError::from(StoreError::NotFound {
            entity_type: EntityType::Lease,
            id: Uuid::nil(),
        });
        assert!(matches!(store, LeaseifyError::Store(_)));

        let validation = LeaseifyError::from(ValidationError::RequiredFieldMissing {
            field: "name".to_string(),
        });
        assert!(matches!(validation, LeaseifyError::Validation(_)));

        let config = LeaseifyError::from(ConfigError::MissingRequired {
            field: "bind_addr".to_string(),
        });
        assert!(matches!(config, LeaseifyError::Config(_)));
    }
}

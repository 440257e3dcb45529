//! Validation Traits
//!
//! Common validation patterns extracted from route handlers.
//! These traits reduce boilerplate and improve consistency.

use crate::error::{ApiError, ApiResult};

/// Trait for validating non-empty strings.
pub trait ValidateNonEmpty {
    /// Validate that the value is non-empty.
    ///
    /// # Errors
    /// Returns `ApiError::missing_field` if the value is empty or
    /// whitespace-only.
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()>;
}

impl ValidateNonEmpty for str {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        if self.trim().is_empty() {
            return Err(ApiError::missing_field(field_name));
        }
        Ok(())
    }
}

impl ValidateNonEmpty for String {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        self.as_str().validate_non_empty(field_name)
    }
}

impl<T: ValidateNonEmpty> ValidateNonEmpty for Option<T> {
    fn validate_non_empty(&self, field_name: &str) -> ApiResult<()> {
        match self {
            Some(value) => value.validate_non_empty(field_name),
            None => Err(ApiError::missing_field(field_name)),
        }
    }
}

/// Trait for validating positive amounts and counts.
pub trait ValidatePositive {
    fn validate_positive(&self, field_name: &str) -> ApiResult<()>;
}

macro_rules! impl_validate_positive {
    ($($t:ty),*) => {
        $(
            impl ValidatePositive for $t {
                fn validate_positive(&self, field_name: &str) -> ApiResult<()> {
                    if *self <= 0 {
                        return Err(ApiError::validation_failed(format!(
                            "Field '{}' must be positive",
                            field_name
                        )));
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_validate_positive!(i32, i64);

/// Trait for checking if an update request has any fields set.
///
/// Implement this on update request types to provide a unified
/// "has any updates" check.
pub trait HasUpdates {
    /// Check if any update fields are set.
    fn has_any_updates(&self) -> bool;

    /// Validate that at least one update field is set.
    fn validate_has_updates(&self) -> ApiResult<()> {
        if !self.has_any_updates() {
            return Err(ApiError::invalid_input(
                "At least one field must be provided for update",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_str() {
        assert!("hello".validate_non_empty("test").is_ok());
        assert!("".validate_non_empty("test").is_err());
        assert!("   ".validate_non_empty("test").is_err());
        assert!("  hi  ".validate_non_empty("test").is_ok());
    }

    #[test]
    fn test_validate_non_empty_option() {
        let some_str: Option<String> = Some("hello".to_string());
        let some_empty: Option<String> = Some("".to_string());
        let none_str: Option<String> = None;

        assert!(some_str.validate_non_empty("test").is_ok());
        assert!(some_empty.validate_non_empty("test").is_err());
        assert!(none_str.validate_non_empty("test").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(5i64.validate_positive("test").is_ok());
        assert!(1i32.validate_positive("test").is_ok());
        assert!(0i64.validate_positive("test").is_err());
        assert!((-1i32).validate_positive("test").is_err());
    }
}

//! Property-related API types

use leaseify_core::{Property, PropertyKind};
use serde::{Deserialize, Serialize};

use crate::validation::HasUpdates;

/// Request to create a new property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePropertyRequest {
    pub name: String,
    pub address: String,
    pub kind: PropertyKind,
    pub unit_count: i32,
    /// Asking rent in cents per month
    pub monthly_rent_cents: i64,
    pub notes: Option<String>,
}

/// Request to update an existing property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePropertyRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub kind: Option<PropertyKind>,
    pub unit_count: Option<i32>,
    pub monthly_rent_cents: Option<i64>,
    pub notes: Option<String>,
}

impl HasUpdates for UpdatePropertyRequest {
    fn has_any_updates(&self) -> bool {
        self.name.is_some()
            || self.address.is_some()
            || self.kind.is_some()
            || self.unit_count.is_some()
            || self.monthly_rent_cents.is_some()
            || self.notes.is_some()
    }
}

/// Response containing a list of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListPropertiesResponse {
    pub properties: Vec<Property>,
    /// Total count (before pagination)
    pub total: i32,
}

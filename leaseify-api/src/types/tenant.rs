//! Tenant-related API types

use leaseify_core::{LeaseId, Tenant, Timestamp};
use serde::{Deserialize, Serialize};

use crate::validation::HasUpdates;

/// Request to create a new tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateTenantRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Lease the tenant starts on, if already signed
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "uuid"))]
    pub lease_id: Option<LeaseId>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub move_in_date: Option<Timestamp>,
}

/// Request to update an existing tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateTenantRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "uuid"))]
    pub lease_id: Option<LeaseId>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub move_in_date: Option<Timestamp>,
}

impl HasUpdates for UpdateTenantRequest {
    fn has_any_updates(&self) -> bool {
        self.full_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.lease_id.is_some()
            || self.move_in_date.is_some()
    }
}

/// Response containing a list of tenants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListTenantsResponse {
    pub tenants: Vec<Tenant>,
    pub total: i32,
}

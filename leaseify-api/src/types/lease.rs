//! Lease-related API types

use leaseify_core::{Lease, LeaseStatus, PropertyId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::validation::HasUpdates;

/// Request to create a new lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateLeaseRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub property_id: PropertyId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub tenant_id: TenantId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub starts_on: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub ends_on: Timestamp,
    pub monthly_rent_cents: i64,
    pub deposit_cents: i64,
}

/// Request to update an existing lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateLeaseRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub starts_on: Option<Timestamp>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub ends_on: Option<Timestamp>,
    pub monthly_rent_cents: Option<i64>,
    pub deposit_cents: Option<i64>,
    pub status: Option<LeaseStatus>,
}

impl HasUpdates for UpdateLeaseRequest {
    fn has_any_updates(&self) -> bool {
        self.starts_on.is_some()
            || self.ends_on.is_some()
            || self.monthly_rent_cents.is_some()
            || self.deposit_cents.is_some()
            || self.status.is_some()
    }
}

/// Response containing a list of leases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListLeasesResponse {
    pub leases: Vec<Lease>,
    pub total: i32,
}

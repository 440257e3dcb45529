//! Core entity structures

use crate::{
    ApplicationId, ApplicationStatus, LeaseId, LeaseStatus, PaymentId, PaymentMethod,
    PaymentStatus, PropertyId, PropertyKind, TaskId, TaskPriority, TenantId, Timestamp,
};
use serde::{Deserialize, Serialize};

/// Property - a building or unit under management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Property {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub property_id: PropertyId,
    pub name: String,
    pub address: String,
    pub kind: PropertyKind,
    pub unit_count: i32,
    /// Asking rent in cents per month.
    pub monthly_rent_cents: i64,
    pub notes: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// Tenant - a person renting (or about to rent) a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Tenant {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub tenant_id: TenantId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Lease the tenant is currently on, if any.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "uuid"))]
    pub lease_id: Option<LeaseId>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub move_in_date: Option<Timestamp>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// Lease - binds a tenant to a property for a period at a rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Lease {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub lease_id: LeaseId,
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
    pub status: LeaseStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// Payment - a rent payment against a lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Payment {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub payment_id: PaymentId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub lease_id: LeaseId,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub paid_at: Option<Timestamp>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

/// MaintenanceTask - a repair or upkeep request against a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MaintenanceTask {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub task_id: TaskId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub property_id: PropertyId,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub is_completed: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

/// Application - a prospective tenant applying for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Application {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub application_id: ApplicationId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub property_id: PropertyId,
    pub applicant_name: String,
    pub applicant_email: String,
    pub status: ApplicationStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub submitted_at: Timestamp,
}

/// ReliabilityScore - computed payment-reliability breakdown for a tenant.
///
/// The score itself is produced by a collaborator service; this system only
/// transports and caches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReliabilityScore {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub tenant_id: TenantId,
    /// 0-100, higher is better.
    pub score: i32,
    pub on_time_payments: i32,
    pub late_payments: i32,
    pub missed_payments: i32,
}

/// PaymentSummary - aggregate totals for the payments dashboard widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentSummary {
    pub collected_cents: i64,
    pub outstanding_cents: i64,
    pub payment_count: i32,
}

//! Rental-application API types

use leaseify_core::{Application, ApplicationStatus, PropertyId};
use serde::{Deserialize, Serialize};

/// Request to submit a new rental application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateApplicationRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub property_id: PropertyId,
    pub applicant_name: String,
    pub applicant_email: String,
}

/// Request to move an application through review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReviewApplicationRequest {
    /// Target status; `Submitted` is not a valid review outcome.
    pub status: ApplicationStatus,
}

/// Response containing a list of applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListApplicationsResponse {
    pub applications: Vec<Application>,
    pub total: i32,
}

//! Lease REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use leaseify_core::{Lease, LeaseId, LeaseStatus, ValidationError};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateLeaseRequest, ListLeasesResponse, UpdateLeaseRequest},
    validation::{HasUpdates, ValidatePositive},
};

/// POST /api/v1/leases - Create a new lease
///
/// The referenced property and tenant must already exist; a fresh lease
/// starts in Draft status.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/leases",
    tag = "Leases",
    request_body = CreateLeaseRequest,
    responses(
        (status = 201, description = "Lease created successfully", body = Lease),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Referenced property or tenant not found", body = ApiError),
    )
))]
pub async fn create_lease(
    State(state): State<AppState>,
    Json(req): Json<CreateLeaseRequest>,
) -> ApiResult<impl IntoResponse> {
    req.monthly_rent_cents.validate_positive("monthly_rent_cents")?;
    if req.deposit_cents < 0 {
        return Err(ValidationError::InvalidValue {
            field: "deposit_cents".to_string(),
            reason: "must not be negative".to_string(),
        }
        .into());
    }
    if req.ends_on <= req.starts_on {
        return Err(ValidationError::InvalidValue {
            field: "ends_on".to_string(),
            reason: "must be after starts_on".to_string(),
        }
        .into());
    }

    state
        .store
        .properties
        .get(req.property_id.as_uuid())
        .ok_or_else(|| ApiError::entity_not_found("Property", req.property_id))?;
    state
        .store
        .tenants
        .get(req.tenant_id.as_uuid())
        .ok_or_else(|| ApiError::entity_not_found("Tenant", req.tenant_id))?;

    let now = Utc::now();
    let lease = Lease {
        lease_id: LeaseId::generate(),
        property_id: req.property_id,
        tenant_id: req.tenant_id,
        starts_on: req.starts_on,
        ends_on: req.ends_on,
        monthly_rent_cents: req.monthly_rent_cents,
        deposit_cents: req.deposit_cents,
        status: LeaseStatus::Draft,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .leases
        .insert(lease.lease_id.as_uuid(), lease.clone());

    Ok((StatusCode::CREATED, Json(lease)))
}

/// GET /api/v1/leases - List leases
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/leases",
    tag = "Leases",
    responses(
        (status = 200, description = "List of leases", body = ListLeasesResponse),
    )
))]
pub async fn list_leases(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let leases = state.store.leases.list();
    let total = leases.len() as i32;
    Ok(Json(ListLeasesResponse { leases, total }))
}

/// GET /api/v1/leases/{id} - Get lease by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/leases/{id}",
    tag = "Leases",
    params(("id" = Uuid, Path, description = "Lease ID")),
    responses(
        (status = 200, description = "Lease details", body = Lease),
        (status = 404, description = "Lease not found", body = ApiError),
    )
))]
pub async fn get_lease(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let lease = state
        .store
        .leases
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Lease", id))?;

    Ok(Json(lease))
}

/// PATCH /api/v1/leases/{id} - Update lease
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/api/v1/leases/{id}",
    tag = "Leases",
    request_body = UpdateLeaseRequest,
    params(("id" = Uuid, Path, description = "Lease ID")),
    responses(
        (status = 200, description = "Lease updated successfully", body = Lease),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Lease not found", body = ApiError),
    )
))]
pub async fn update_lease(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLeaseRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(rent) = req.monthly_rent_cents {
        rent.validate_positive("monthly_rent_cents")?;
    }

    let lease = state.store.leases.update(id, |l| {
        if let Some(starts_on) = req.starts_on {
            l.starts_on = starts_on;
        }
        if let Some(ends_on) = req.ends_on {
            l.ends_on = ends_on;
        }
        if let Some(rent) = req.monthly_rent_cents {
            l.monthly_rent_cents = rent;
        }
        if let Some(deposit) = req.deposit_cents {
            l.deposit_cents = deposit;
        }
        if let Some(status) = req.status {
            l.status = status;
        }
        l.updated_at = Utc::now();
    })?;

    Ok(Json(lease))
}

/// DELETE /api/v1/leases/{id} - Delete lease
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/leases/{id}",
    tag = "Leases",
    params(("id" = Uuid, Path, description = "Lease ID")),
    responses(
        (status = 204, description = "Lease deleted successfully"),
        (status = 404, description = "Lease not found", body = ApiError),
    )
))]
pub async fn delete_lease(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.leases.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the lease routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(create_lease))
        .route("/", axum::routing::get(list_leases))
        .route("/:id", axum::routing::get(get_lease))
        .route("/:id", axum::routing::patch(update_lease))
        .route("/:id", axum::routing::delete(delete_lease))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaseify_core::{PropertyId, TenantId};

    #[test]
    fn test_update_lease_request_empty_rejected() {
        let req = UpdateLeaseRequest {
            starts_on: None,
            ends_on: None,
            monthly_rent_cents: None,
            deposit_cents: None,
            status: None,
        };

        assert!(req.validate_has_updates().is_err());
    }

    #[test]
    fn test_create_lease_request_shape() {
        let now = Utc::now();
        let req = CreateLeaseRequest {
            property_id: PropertyId::generate(),
            tenant_id: TenantId::generate(),
            starts_on: now,
            ends_on: now + chrono::Duration::days(365),
            monthly_rent_cents: 150_000,
            deposit_cents: 150_000,
        };

        assert!(req.ends_on > req.starts_on);
        assert!(req.monthly_rent_cents.validate_positive("monthly_rent_cents").is_ok());
    }
}

//! Tenant REST API Routes
//!
//! CRUD handlers plus the per-tenant reliability score endpoint. The score
//! is a coarse heuristic over recorded payments; a dedicated scoring
//! service owns the real model.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use leaseify_core::{PaymentStatus, ReliabilityScore, Tenant, TenantId};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateTenantRequest, ListTenantsResponse, UpdateTenantRequest},
    validation::{HasUpdates, ValidateNonEmpty},
};

/// POST /api/v1/tenants - Create a new tenant
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/tenants",
    tag = "Tenants",
    request_body = CreateTenantRequest,
    responses(
        (status = 201, description = "Tenant created successfully", body = Tenant),
        (status = 400, description = "Invalid request", body = ApiError),
    )
))]
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(req): Json<CreateTenantRequest>,
) -> ApiResult<impl IntoResponse> {
    req.full_name.validate_non_empty("full_name")?;
    req.email.validate_non_empty("email")?;

    let now = Utc::now();
    let tenant = Tenant {
        tenant_id: TenantId::generate(),
        full_name: req.full_name,
        email: req.email,
        phone: req.phone,
        lease_id: req.lease_id,
        move_in_date: req.move_in_date,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .tenants
        .insert(tenant.tenant_id.as_uuid(), tenant.clone());

    Ok((StatusCode::CREATED, Json(tenant)))
}

/// GET /api/v1/tenants - List tenants
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/tenants",
    tag = "Tenants",
    responses(
        (status = 200, description = "List of tenants", body = ListTenantsResponse),
    )
))]
pub async fn list_tenants(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let tenants = state.store.tenants.list();
    let total = tenants.len() as i32;
    Ok(Json(ListTenantsResponse { tenants, total }))
}

/// GET /api/v1/tenants/{id} - Get tenant by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant details", body = Tenant),
        (status = 404, description = "Tenant not found", body = ApiError),
    )
))]
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let tenant = state
        .store
        .tenants
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Tenant", id))?;

    Ok(Json(tenant))
}

/// PATCH /api/v1/tenants/{id} - Update tenant
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/api/v1/tenants/{id}",
    tag = "Tenants",
    request_body = UpdateTenantRequest,
    params(("id" = Uuid, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant updated successfully", body = Tenant),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Tenant not found", body = ApiError),
    )
))]
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTenantRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(ref full_name) = req.full_name {
        full_name.validate_non_empty("full_name")?;
    }
    if let Some(ref email) = req.email {
        email.validate_non_empty("email")?;
    }

    let tenant = state.store.tenants.update(id, |t| {
        if let Some(full_name) = req.full_name {
            t.full_name = full_name;
        }
        if let Some(email) = req.email {
            t.email = email;
        }
        if let Some(phone) = req.phone {
            t.phone = Some(phone);
        }
        if let Some(lease_id) = req.lease_id {
            t.lease_id = Some(lease_id);
        }
        if let Some(move_in_date) = req.move_in_date {
            t.move_in_date = Some(move_in_date);
        }
        t.updated_at = Utc::now();
    })?;

    Ok(Json(tenant))
}

/// DELETE /api/v1/tenants/{id} - Delete tenant
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/tenants/{id}",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "Tenant ID")),
    responses(
        (status = 204, description = "Tenant deleted successfully"),
        (status = 404, description = "Tenant not found", body = ApiError),
    )
))]
pub async fn delete_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.tenants.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/tenants/{id}/score - Payment-reliability score for a tenant
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/tenants/{id}/score",
    tag = "Tenants",
    params(("id" = Uuid, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Reliability score", body = ReliabilityScore),
        (status = 404, description = "Tenant not found", body = ApiError),
    )
))]
pub async fn get_tenant_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let tenant = state
        .store
        .tenants
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Tenant", id))?;

    Ok(Json(compute_score(&state, &tenant)))
}

/// Coarse reliability heuristic over the tenant's recorded payments.
/// A tenant with no payment history starts at a full score.
fn compute_score(state: &AppState, tenant: &Tenant) -> ReliabilityScore {
    let mut on_time = 0;
    let mut late = 0;
    let mut missed = 0;

    if let Some(lease_id) = tenant.lease_id {
        for payment in state.store.payments.list() {
            if payment.lease_id != lease_id {
                continue;
            }
            match payment.status {
                PaymentStatus::Completed | PaymentStatus::Refunded => on_time += 1,
                PaymentStatus::Pending => late += 1,
                PaymentStatus::Failed => missed += 1,
            }
        }
    }

    let total = on_time + late + missed;
    let score = if total == 0 {
        100
    } else {
        (on_time * 100 + late * 50) / total
    };

    ReliabilityScore {
        tenant_id: tenant.tenant_id,
        score,
        on_time_payments: on_time,
        late_payments: late,
        missed_payments: missed,
    }
}

/// Create the tenant routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(create_tenant))
        .route("/", axum::routing::get(list_tenants))
        .route("/:id", axum::routing::get(get_tenant))
        .route("/:id", axum::routing::patch(update_tenant))
        .route("/:id", axum::routing::delete(delete_tenant))
        .route("/:id/score", axum::routing::get(get_tenant_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tenant_request_presence() {
        let req = CreateTenantRequest {
            full_name: "  ".to_string(),
            email: "jordan@example.com".to_string(),
            phone: None,
            lease_id: None,
            move_in_date: None,
        };

        assert!(req.full_name.validate_non_empty("full_name").is_err());
        assert!(req.email.validate_non_empty("email").is_ok());
    }

    #[test]
    fn test_update_tenant_request_empty_rejected() {
        let req = UpdateTenantRequest {
            full_name: None,
            email: None,
            phone: None,
            lease_id: None,
            move_in_date: None,
        };

        assert!(req.validate_has_updates().is_err());
    }

    #[test]
    fn test_score_defaults_to_full_without_history() {
        let state = AppState::default();
        let tenant = leaseify_test_utils::sample_tenant("Jordan Vega");

        let score = compute_score(&state, &tenant);
        assert_eq!(score.score, 100);
        assert_eq!(score.on_time_payments, 0);
    }

    #[test]
    fn test_score_weights_settled_payments() {
        let state = AppState::default();
        let property = leaseify_test_utils::sample_property("Maple Court");
        let mut tenant = leaseify_test_utils::sample_tenant("Jordan Vega");
        let lease = leaseify_test_utils::sample_lease(property.property_id, tenant.tenant_id);
        tenant.lease_id = Some(lease.lease_id);

        // Two settled payments and one pending.
        for paid in [true, true, false] {
            let mut payment = leaseify_test_utils::sample_payment(lease.lease_id);
            if !paid {
                payment.status = PaymentStatus::Pending;
                payment.paid_at = None;
            }
            state
                .store
                .payments
                .insert(payment.payment_id.as_uuid(), payment);
        }

        let score = compute_score(&state, &tenant);
        assert_eq!(score.on_time_payments, 2);
        assert_eq!(score.late_payments, 1);
        assert_eq!(score.score, (2 * 100 + 50) / 3);
    }
}

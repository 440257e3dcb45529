//! Payment REST API Routes
//!
//! CRUD handlers plus the aggregate summary endpoint backing the
//! dashboard widget.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use leaseify_core::{Payment, PaymentId, PaymentStatus, PaymentSummary};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreatePaymentRequest, ListPaymentsResponse, UpdatePaymentRequest},
    validation::{HasUpdates, ValidatePositive},
};

/// POST /api/v1/payments - Record a new payment
///
/// A payment with a `paid_at` timestamp is recorded as Completed,
/// otherwise as Pending.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/payments",
    tag = "Payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded successfully", body = Payment),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Referenced lease not found", body = ApiError),
    )
))]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> ApiResult<impl IntoResponse> {
    req.amount_cents.validate_positive("amount_cents")?;

    state
        .store
        .leases
        .get(req.lease_id.as_uuid())
        .ok_or_else(|| ApiError::entity_not_found("Lease", req.lease_id))?;

    let status = if req.paid_at.is_some() {
        PaymentStatus::Completed
    } else {
        PaymentStatus::Pending
    };

    let payment = Payment {
        payment_id: PaymentId::generate(),
        lease_id: req.lease_id,
        amount_cents: req.amount_cents,
        method: req.method,
        status,
        paid_at: req.paid_at,
        created_at: Utc::now(),
    };

    state
        .store
        .payments
        .insert(payment.payment_id.as_uuid(), payment.clone());

    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /api/v1/payments - List payments
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/payments",
    tag = "Payments",
    responses(
        (status = 200, description = "List of payments", body = ListPaymentsResponse),
    )
))]
pub async fn list_payments(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let payments = state.store.payments.list();
    let total = payments.len() as i32;
    Ok(Json(ListPaymentsResponse { payments, total }))
}

/// GET /api/v1/payments/summary - Aggregate totals across all payments
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/payments/summary",
    tag = "Payments",
    responses(
        (status = 200, description = "Aggregate payment totals", body = PaymentSummary),
    )
))]
pub async fn payment_summary(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let payments = state.store.payments.list();

    let mut summary = PaymentSummary {
        collected_cents: 0,
        outstanding_cents: 0,
        payment_count: payments.len() as i32,
    };
    for payment in &payments {
        match payment.status {
            PaymentStatus::Completed => summary.collected_cents += payment.amount_cents,
            PaymentStatus::Pending | PaymentStatus::Failed => {
                summary.outstanding_cents += payment.amount_cents
            }
            PaymentStatus::Refunded => {}
        }
    }

    Ok(Json(summary))
}

/// GET /api/v1/payments/{id} - Get payment by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = Payment),
        (status = 404, description = "Payment not found", body = ApiError),
    )
))]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let payment = state
        .store
        .payments
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Payment", id))?;

    Ok(Json(payment))
}

/// PATCH /api/v1/payments/{id} - Update payment
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    request_body = UpdatePaymentRequest,
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment updated successfully", body = Payment),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Payment not found", body = ApiError),
    )
))]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePaymentRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(amount) = req.amount_cents {
        amount.validate_positive("amount_cents")?;
    }

    let payment = state.store.payments.update(id, |p| {
        if let Some(amount) = req.amount_cents {
            p.amount_cents = amount;
        }
        if let Some(method) = req.method {
            p.method = method;
        }
        if let Some(status) = req.status {
            p.status = status;
        }
        if let Some(paid_at) = req.paid_at {
            p.paid_at = Some(paid_at);
        }
    })?;

    Ok(Json(payment))
}

/// DELETE /api/v1/payments/{id} - Delete payment
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/payments/{id}",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted successfully"),
        (status = 404, description = "Payment not found", body = ApiError),
    )
))]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.payments.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the payment routes router.
///
/// `/summary` is registered before `/:id` so the literal segment wins.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(create_payment))
        .route("/", axum::routing::get(list_payments))
        .route("/summary", axum::routing::get(payment_summary))
        .route("/:id", axum::routing::get(get_payment))
        .route("/:id", axum::routing::patch(update_payment))
        .route("/:id", axum::routing::delete(delete_payment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaseify_core::{LeaseId, PaymentMethod};

    #[test]
    fn test_create_payment_request_amount_positive() {
        let req = CreatePaymentRequest {
            lease_id: LeaseId::generate(),
            amount_cents: 0,
            method: PaymentMethod::Card,
            paid_at: None,
        };

        assert!(req.amount_cents.validate_positive("amount_cents").is_err());
    }

    #[test]
    fn test_update_payment_request_empty_rejected() {
        let req = UpdatePaymentRequest {
            amount_cents: None,
            method: None,
            status: None,
            paid_at: None,
        };

        assert!(req.validate_has_updates().is_err());
    }
}

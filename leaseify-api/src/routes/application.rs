//! Rental-application REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use leaseify_core::{Application, ApplicationId, ApplicationStatus};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateApplicationRequest, ListApplicationsResponse, ReviewApplicationRequest},
    validation::ValidateNonEmpty,
};

/// POST /api/v1/applications - Submit a new rental application
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/applications",
    tag = "Applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application submitted successfully", body = Application),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Referenced property not found", body = ApiError),
    )
))]
pub async fn create_application(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicationRequest>,
) -> ApiResult<impl IntoResponse> {
    req.applicant_name.validate_non_empty("applicant_name")?;
    req.applicant_email.validate_non_empty("applicant_email")?;

    state
        .store
        .properties
        .get(req.property_id.as_uuid())
        .ok_or_else(|| ApiError::entity_not_found("Property", req.property_id))?;

    let application = Application {
        application_id: ApplicationId::generate(),
        property_id: req.property_id,
        applicant_name: req.applicant_name,
        applicant_email: req.applicant_email,
        status: ApplicationStatus::Submitted,
        submitted_at: Utc::now(),
    };

    state
        .store
        .applications
        .insert(application.application_id.as_uuid(), application.clone());

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications - List applications
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/applications",
    tag = "Applications",
    responses(
        (status = 200, description = "List of applications", body = ListApplicationsResponse),
    )
))]
pub async fn list_applications(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let applications = state.store.applications.list();
    let total = applications.len() as i32;
    Ok(Json(ListApplicationsResponse {
        applications,
        total,
    }))
}

/// GET /api/v1/applications/{id} - Get application by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application details", body = Application),
        (status = 404, description = "Application not found", body = ApiError),
    )
))]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let application = state
        .store
        .applications
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Application", id))?;

    Ok(Json(application))
}

/// POST /api/v1/applications/{id}/review - Move an application through review
///
/// Valid transitions: Submitted -> UnderReview/Approved/Rejected, and
/// UnderReview -> Approved/Rejected. Reviewing back to Submitted or
/// re-reviewing a decided application is a conflict.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/applications/{id}/review",
    tag = "Applications",
    request_body = ReviewApplicationRequest,
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application reviewed", body = Application),
        (status = 404, description = "Application not found", body = ApiError),
        (status = 409, description = "Invalid status transition", body = ApiError),
    )
))]
pub async fn review_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewApplicationRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.status == ApplicationStatus::Submitted {
        return Err(ApiError::state_conflict(
            "An application cannot be reviewed back to Submitted",
        ));
    }

    let current = state
        .store
        .applications
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Application", id))?;

    match current.status {
        ApplicationStatus::Submitted | ApplicationStatus::UnderReview => {}
        decided => {
            return Err(ApiError::state_conflict(format!(
                "Application already decided: {:?}",
                decided
            )));
        }
    }

    let application = state.store.applications.update(id, |a| {
        a.status = req.status;
    })?;

    Ok(Json(application))
}

/// DELETE /api/v1/applications/{id} - Withdraw an application
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 204, description = "Application withdrawn"),
        (status = 404, description = "Application not found", body = ApiError),
    )
))]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.applications.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the application routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(create_application))
        .route("/", axum::routing::get(list_applications))
        .route("/:id", axum::routing::get(get_application))
        .route("/:id", axum::routing::delete(delete_application))
        .route("/:id/review", axum::routing::post(review_application))
}

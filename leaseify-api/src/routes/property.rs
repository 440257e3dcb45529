//! Property REST API Routes
//!
//! Axum route handlers for property CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use leaseify_core::{Property, PropertyId};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreatePropertyRequest, ListPropertiesResponse, UpdatePropertyRequest},
    validation::{HasUpdates, ValidateNonEmpty, ValidatePositive},
};

/// POST /api/v1/properties - Create a new property
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/properties",
    tag = "Properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property created successfully", body = Property),
        (status = 400, description = "Invalid request", body = ApiError),
    )
))]
pub async fn create_property(
    State(state): State<AppState>,
    Json(req): Json<CreatePropertyRequest>,
) -> ApiResult<impl IntoResponse> {
    req.name.validate_non_empty("name")?;
    req.address.validate_non_empty("address")?;
    req.unit_count.validate_positive("unit_count")?;
    req.monthly_rent_cents.validate_positive("monthly_rent_cents")?;

    let now = Utc::now();
    let property = Property {
        property_id: PropertyId::generate(),
        name: req.name,
        address: req.address,
        kind: req.kind,
        unit_count: req.unit_count,
        monthly_rent_cents: req.monthly_rent_cents,
        notes: req.notes,
        created_at: now,
        updated_at: now,
    };

    state
        .store
        .properties
        .insert(property.property_id.as_uuid(), property.clone());

    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /api/v1/properties - List properties
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/properties",
    tag = "Properties",
    responses(
        (status = 200, description = "List of properties", body = ListPropertiesResponse),
    )
))]
pub async fn list_properties(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let properties = state.store.properties.list();
    let total = properties.len() as i32;
    Ok(Json(ListPropertiesResponse { properties, total }))
}

/// GET /api/v1/properties/{id} - Get property by ID
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property details", body = Property),
        (status = 404, description = "Property not found", body = ApiError),
    )
))]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let property = state
        .store
        .properties
        .get(id)
        .ok_or_else(|| ApiError::entity_not_found("Property", id))?;

    Ok(Json(property))
}

/// PATCH /api/v1/properties/{id} - Update property
#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    request_body = UpdatePropertyRequest,
    params(("id" = Uuid, Path, description = "Property ID")),
    responses(
        (status = 200, description = "Property updated successfully", body = Property),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Property not found", body = ApiError),
    )
))]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePropertyRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate_has_updates()?;
    if let Some(ref name) = req.name {
        name.validate_non_empty("name")?;
    }
    if let Some(unit_count) = req.unit_count {
        unit_count.validate_positive("unit_count")?;
    }
    if let Some(rent) = req.monthly_rent_cents {
        rent.validate_positive("monthly_rent_cents")?;
    }

    let property = state.store.properties.update(id, |p| {
        if let Some(name) = req.name {
            p.name = name;
        }
        if let Some(address) = req.address {
            p.address = address;
        }
        if let Some(kind) = req.kind {
            p.kind = kind;
        }
        if let Some(unit_count) = req.unit_count {
            p.unit_count = unit_count;
        }
        if let Some(rent) = req.monthly_rent_cents {
            p.monthly_rent_cents = rent;
        }
        if let Some(notes) = req.notes {
            p.notes = Some(notes);
        }
        p.updated_at = Utc::now();
    })?;

    Ok(Json(property))
}

/// DELETE /api/v1/properties/{id} - Delete property
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "Property ID")),
    responses(
        (status = 204, description = "Property deleted successfully"),
        (status = 404, description = "Property not found", body = ApiError),
    )
))]
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.store.properties.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the property routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::post(create_property))
        .route("/", axum::routing::get(list_properties))
        .route("/:id", axum::routing::get(get_property))
        .route("/:id", axum::routing::patch(update_property))
        .route("/:id", axum::routing::delete(delete_property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaseify_core::PropertyKind;

    #[test]
    fn test_create_property_request_presence() {
        let req = CreatePropertyRequest {
            name: "".to_string(),
            address: "12 Main St".to_string(),
            kind: PropertyKind::House,
            unit_count: 1,
            monthly_rent_cents: 150_000,
            notes: None,
        };

        assert!(req.name.validate_non_empty("name").is_err());
        assert!(req.address.validate_non_empty("address").is_ok());
    }

    #[test]
    fn test_update_property_request_empty_rejected() {
        let req = UpdatePropertyRequest {
            name: None,
            address: None,
            kind: None,
            unit_count: None,
            monthly_rent_cents: None,
            notes: None,
        };

        assert!(!req.has_any_updates());
        assert!(req.validate_has_updates().is_err());
    }
}

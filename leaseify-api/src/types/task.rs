//! Maintenance-task API types

use leaseify_core::{MaintenanceTask, PropertyId, TaskPriority};
use serde::{Deserialize, Serialize};

use crate::validation::HasUpdates;

/// Request to open a new maintenance task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateTaskRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub property_id: PropertyId,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
}

/// Request to update an existing maintenance task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub is_completed: Option<bool>,
}

impl HasUpdates for UpdateTaskRequest {
    fn has_any_updates(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.priority.is_some()
            || self.is_completed.is_some()
    }
}

/// Query filters for listing maintenance tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListTasksRequest {
    /// Filter by property
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "uuid"))]
    pub property_id: Option<PropertyId>,
    /// When false, completed tasks are filtered out
    pub include_completed: Option<bool>,
}

/// Response containing a list of maintenance tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListTasksResponse {
    pub tasks: Vec<MaintenanceTask>,
    pub total: i32,
}

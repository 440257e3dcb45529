//! Presence-only form validation.
//!
//! Each form validates its raw inputs and, on success, produces the
//! request the store dispatches. Validation happens before dispatch, so
//! a failed form never starts an operation.

use leaseify_api::{
    CreateApplicationRequest, CreatePropertyRequest, CreateTaskRequest, CreateTenantRequest,
    FieldError,
};
use leaseify_core::{PropertyId, PropertyKind, TaskPriority};

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "is required"));
    }
}

/// Raw inputs for the new-property form.
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    pub name: String,
    pub address: String,
    pub kind: Option<PropertyKind>,
    pub unit_count: i32,
    pub monthly_rent_cents: i64,
    pub notes: String,
}

impl PropertyForm {
    pub fn validate(&self) -> Result<CreatePropertyRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "address", &self.address);
        let Some(kind) = self.kind else {
            errors.push(FieldError::new("kind", "is required"));
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreatePropertyRequest {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            kind,
            unit_count: self.unit_count.max(1),
            monthly_rent_cents: self.monthly_rent_cents,
            notes: optional(&self.notes),
        })
    }
}

/// Raw inputs for the new-tenant form.
#[derive(Debug, Clone, Default)]
pub struct TenantForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl TenantForm {
    pub fn validate(&self) -> Result<CreateTenantRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "full_name", &self.full_name);
        require(&mut errors, "email", &self.email);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateTenantRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            lease_id: None,
            move_in_date: None,
        })
    }
}

/// Raw inputs for the new-task form.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub property_id: Option<PropertyId>,
    pub title: String,
    pub description: String,
    pub priority: Option<TaskPriority>,
}

impl TaskForm {
    pub fn validate(&self) -> Result<CreateTaskRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "title", &self.title);
        let Some(property_id) = self.property_id else {
            errors.push(FieldError::new("property_id", "is required"));
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateTaskRequest {
            property_id,
            title: self.title.trim().to_string(),
            description: optional(&self.description),
            priority: self.priority,
        })
    }
}

/// Raw inputs for the rental-application form.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    pub property_id: Option<PropertyId>,
    pub applicant_name: String,
    pub applicant_email: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<CreateApplicationRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, "applicant_name", &self.applicant_name);
        require(&mut errors, "applicant_email", &self.applicant_email);
        let Some(property_id) = self.property_id else {
            errors.push(FieldError::new("property_id", "is required"));
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateApplicationRequest {
            property_id,
            applicant_name: self.applicant_name.trim().to_string(),
            applicant_email: self.applicant_email.trim().to_string(),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//! Leaseify Test Utilities
//!
//! Centralized test infrastructure for the Leaseify workspace:
//! - Fixtures for common entities
//! - Proptest generators for property-based tests

// Re-export core types for convenience
pub use leaseify_core::{
    Application, ApplicationId, ApplicationStatus, Lease, LeaseId, LeaseStatus, MaintenanceTask,
    Payment, PaymentId, PaymentMethod, PaymentStatus, Property, PropertyId, PropertyKind,
    ReliabilityScore, TaskId, TaskPriority, Tenant, TenantId, Timestamp,
};

use chrono::{Duration, Utc};
use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

pub fn sample_property(name: &str) -> Property {
    let now = Utc::now();
    Property {
        property_id: PropertyId::generate(),
        name: name.to_string(),
        address: "12 Main St".to_string(),
        kind: PropertyKind::Apartment,
        unit_count: 4,
        monthly_rent_cents: 150_000,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_tenant(full_name: &str) -> Tenant {
    let now = Utc::now();
    Tenant {
        tenant_id: TenantId::generate(),
        full_name: full_name.to_string(),
        email: format!(
            "{}@example.com",
            full_name.to_lowercase().replace(' ', ".")
        ),
        phone: None,
        lease_id: None,
        move_in_date: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_lease(property_id: PropertyId, tenant_id: TenantId) -> Lease {
    let now = Utc::now();
    Lease {
        lease_id: LeaseId::generate(),
        property_id,
        tenant_id,
        starts_on: now,
        ends_on: now + Duration::days(365),
        monthly_rent_cents: 150_000,
        deposit_cents: 150_000,
        status: LeaseStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_payment(lease_id: LeaseId) -> Payment {
    let now = Utc::now();
    Payment {
        payment_id: PaymentId::generate(),
        lease_id,
        amount_cents: 150_000,
        method: PaymentMethod::BankTransfer,
        status: PaymentStatus::Completed,
        paid_at: Some(now),
        created_at: now,
    }
}

pub fn sample_task(property_id: PropertyId, title: &str) -> MaintenanceTask {
    let now = Utc::now();
    MaintenanceTask {
        task_id: TaskId::generate(),
        property_id,
        title: title.to_string(),
        description: None,
        priority: TaskPriority::Medium,
        is_completed: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_application(property_id: PropertyId, applicant_name: &str) -> Application {
    Application {
        application_id: ApplicationId::generate(),
        property_id,
        applicant_name: applicant_name.to_string(),
        applicant_email: format!(
            "{}@example.com",
            applicant_name.to_lowercase().replace(' ', ".")
        ),
        status: ApplicationStatus::Submitted,
        submitted_at: Utc::now(),
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub fn arb_property_kind() -> impl Strategy<Value = PropertyKind> {
    prop_oneof![
        Just(PropertyKind::Apartment),
        Just(PropertyKind::House),
        Just(PropertyKind::Condo),
        Just(PropertyKind::Duplex),
        Just(PropertyKind::Commercial),
    ]
}

pub fn arb_task_priority() -> impl Strategy<Value = TaskPriority> {
    prop_oneof![
        Just(TaskPriority::Low),
        Just(TaskPriority::Medium),
        Just(TaskPriority::High),
        Just(TaskPriority::Emergency),
    ]
}

pub fn arb_payment_status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Completed),
        Just(PaymentStatus::Failed),
        Just(PaymentStatus::Refunded),
    ]
}

prop_compose! {
    pub fn arb_property()(
        name in "[A-Z][a-z]{2,12} (Court|House|Lofts|Plaza)",
        address in "[1-9][0-9]{0,2} [A-Z][a-z]{2,10} St",
        kind in arb_property_kind(),
        unit_count in 1i32..50,
        monthly_rent_cents in 50_000i64..1_000_000,
    ) -> Property {
        let now = Utc::now();
        Property {
            property_id: PropertyId::generate(),
            name,
            address,
            kind,
            unit_count,
            monthly_rent_cents,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }
}

prop_compose! {
    pub fn arb_tenant()(
        full_name in "[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}",
    ) -> Tenant {
        let now = Utc::now();
        let email = format!("{}@example.com", full_name.to_lowercase().replace(' ', "."));
        Tenant {
            tenant_id: TenantId::generate(),
            full_name,
            email,
            phone: None,
            lease_id: None,
            move_in_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}

prop_compose! {
    pub fn arb_task()(
        title in "(Fix|Replace|Inspect|Paint) [a-z]{3,10}",
        priority in arb_task_priority(),
        is_completed in any::<bool>(),
    ) -> MaintenanceTask {
        let now = Utc::now();
        MaintenanceTask {
            task_id: TaskId::generate(),
            property_id: PropertyId::generate(),
            title,
            description: None,
            priority,
            is_completed,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lease_links_property_and_tenant() {
        let property = sample_property("Maple Court");
        let tenant = sample_tenant("Jordan Vega");
        let lease = sample_lease(property.property_id, tenant.tenant_id);
        assert_eq!(lease.property_id, property.property_id);
        assert_eq!(lease.tenant_id, tenant.tenant_id);
        assert!(lease.ends_on > lease.starts_on);
    }

    proptest! {
        #[test]
        fn prop_generated_properties_are_valid(property in arb_property()) {
            prop_assert!(property.unit_count >= 1);
            prop_assert!(property.monthly_rent_cents > 0);
            prop_assert!(!property.name.trim().is_empty());
        }

        #[test]
        fn prop_generated_tenants_have_derived_emails(tenant in arb_tenant()) {
            prop_assert!(tenant.email.ends_with("@example.com"));
        }
    }
}

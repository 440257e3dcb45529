//! Identity types for Leaseify entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity identifier using UUIDv7 for timestamp-sortable IDs.
/// UUIDv7 embeds a Unix timestamp, making IDs naturally sortable by creation time.
pub type EntityId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 EntityId (timestamp-sortable).
pub fn new_entity_id() -> EntityId {
    Uuid::now_v7()
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh, timestamp-sortable identifier.
            pub fn generate() -> Self {
                Self(new_entity_id())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Identifier of a property under management.
    PropertyId
);
entity_id!(
    /// Identifier of a tenant.
    TenantId
);
entity_id!(
    /// Identifier of a lease.
    LeaseId
);
entity_id!(
    /// Identifier of a payment.
    PaymentId
);
entity_id!(
    /// Identifier of a maintenance task.
    TaskId
);
entity_id!(
    /// Identifier of a rental application.
    ApplicationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = PropertyId::generate();
        let b = PropertyId::generate();
        assert_ne!(a.as_uuid(), b.as_uuid());
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = TenantId::new(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");

        let back: TenantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display_matches_uuid() {
        let raw = Uuid::now_v7();
        let id = LeaseId::new(raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}

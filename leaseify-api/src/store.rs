//! In-memory storage for the API layer.
//!
//! The durable database is an external collaborator; this store stands in
//! for it with one concurrent collection per resource type. Listing orders
//! by id, and ids are UUIDv7, so list order is creation order.

use dashmap::DashMap;
use leaseify_core::{
    Application, EntityType, Lease, MaintenanceTask, Payment, Property, StoreError, Tenant,
};
use uuid::Uuid;

/// A concurrent keyed collection for one resource type.
pub struct Collection<T> {
    entity_type: EntityType,
    items: DashMap<Uuid, T>,
}

impl<T: Clone> Collection<T> {
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            items: DashMap::new(),
        }
    }

    pub fn insert(&self, id: Uuid, item: T) {
        self.items.insert(id, item);
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.items.get(&id).map(|entry| entry.clone())
    }

    /// Apply `f` to the record under `id`, returning the updated record.
    pub fn update<F>(&self, id: Uuid, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut entry = self.items.get_mut(&id).ok_or(StoreError::NotFound {
            entity_type: self.entity_type,
            id,
        })?;
        f(entry.value_mut());
        Ok(entry.clone())
    }

    pub fn remove(&self, id: Uuid) -> Result<T, StoreError> {
        self.items
            .remove(&id)
            .map(|(_, item)| item)
            .ok_or(StoreError::NotFound {
                entity_type: self.entity_type,
                id,
            })
    }

    /// Snapshot of all records, ordered by id (creation order for UUIDv7).
    pub fn list(&self) -> Vec<T> {
        let mut pairs: Vec<(Uuid, T)> = self
            .items
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        pairs.sort_by_key(|(id, _)| *id);
        pairs.into_iter().map(|(_, item)| item).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Application-wide in-memory store: one collection per resource.
pub struct MemStore {
    pub properties: Collection<Property>,
    pub tenants: Collection<Tenant>,
    pub leases: Collection<Lease>,
    pub payments: Collection<Payment>,
    pub tasks: Collection<MaintenanceTask>,
    pub applications: Collection<Application>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            properties: Collection::new(EntityType::Property),
            tenants: Collection::new(EntityType::Tenant),
            leases: Collection::new(EntityType::Lease),
            payments: Collection::new(EntityType::Payment),
            tasks: Collection::new(EntityType::MaintenanceTask),
            applications: Collection::new(EntityType::Application),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Tenant store: collection slice plus per-tenant reliability scores.

use leaseify_api::{CreateTenantRequest, UpdateTenantRequest};
use leaseify_core::{ReliabilityScore, Tenant, TenantId};

use crate::api_client::RestClient;
use crate::error::ClientError;
use crate::keyed::KeyedCache;
use crate::slice::{OpKind, RecordId, ResourceSlice};

impl RecordId for Tenant {
    type Id = TenantId;

    fn record_id(&self) -> TenantId {
        self.tenant_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct TenantStore {
    slice: ResourceSlice<Tenant>,
    scores: KeyedCache<TenantId, ReliabilityScore>,
}

impl TenantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self) -> &ResourceSlice<Tenant> {
        &self.slice
    }

    pub fn scores(&self) -> &KeyedCache<TenantId, ReliabilityScore> {
        &self.scores
    }

    pub async fn fetch_all(&mut self, client: &RestClient) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::List);
        match client.list_tenants().await {
            Ok(resp) => {
                self.slice.fulfill_list(token, resp.tenants);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn fetch_one(
        &mut self,
        client: &RestClient,
        id: TenantId,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Get);
        match client.get_tenant(id).await {
            Ok(tenant) => {
                self.slice.fulfill_get(token, tenant);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn create(
        &mut self,
        client: &RestClient,
        req: &CreateTenantRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Create);
        match client.create_tenant(req).await {
            Ok(tenant) => {
                self.slice.fulfill_create(token, tenant);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn update(
        &mut self,
        client: &RestClient,
        id: TenantId,
        req: &UpdateTenantRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        match client.update_tenant(id, req).await {
            Ok(tenant) => {
                self.slice.fulfill_update(token, tenant);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, client: &RestClient, id: TenantId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Delete);
        match client.delete_tenant(id).await {
            Ok(()) => {
                self.slice.fulfill_delete(token, id);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    /// Fetch the reliability score for one tenant into the keyed cache;
    /// scores already cached for other tenants are untouched.
    pub async fn fetch_score(
        &mut self,
        client: &RestClient,
        id: TenantId,
    ) -> Result<(), ClientError> {
        let token = self.scores.begin();
        match client.tenant_score(id).await {
            Ok(score) => {
                self.scores.fulfill(token, id, score);
                Ok(())
            }
            Err(err) => {
                self.scores.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    /// Reinitialize everything, discarding in-flight resolutions.
    pub fn reset(&mut self) {
        self.slice.reset();
        self.scores.reset();
    }
}

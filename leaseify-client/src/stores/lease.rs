//! Lease store.

use leaseify_api::{CreateLeaseRequest, UpdateLeaseRequest};
use leaseify_core::{Lease, LeaseId};

use crate::api_client::RestClient;
use crate::error::ClientError;
use crate::slice::{OpKind, RecordId, ResourceSlice};

impl RecordId for Lease {
    type Id = LeaseId;

    fn record_id(&self) -> LeaseId {
        self.lease_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeaseStore {
    slice: ResourceSlice<Lease>,
}

impl LeaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self) -> &ResourceSlice<Lease> {
        &self.slice
    }

    pub async fn fetch_all(&mut self, client: &RestClient) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::List);
        match client.list_leases().await {
            Ok(resp) => {
                self.slice.fulfill_list(token, resp.leases);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn fetch_one(&mut self, client: &RestClient, id: LeaseId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Get);
        match client.get_lease(id).await {
            Ok(lease) => {
                self.slice.fulfill_get(token, lease);
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
        req: &CreateLeaseRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Create);
        match client.create_lease(req).await {
            Ok(lease) => {
                self.slice.fulfill_create(token, lease);
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
        id: LeaseId,
        req: &UpdateLeaseRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        match client.update_lease(id, req).await {
            Ok(lease) => {
                self.slice.fulfill_update(token, lease);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, client: &RestClient, id: LeaseId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Delete);
        match client.delete_lease(id).await {
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

    pub fn reset(&mut self) {
        self.slice.reset();
    }
}

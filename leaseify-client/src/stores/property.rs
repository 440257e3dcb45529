//! Property store.

use leaseify_api::{CreatePropertyRequest, UpdatePropertyRequest};
use leaseify_core::{Property, PropertyId};

use crate::api_client::RestClient;
use crate::error::ClientError;
use crate::slice::{OpKind, RecordId, ResourceSlice};

impl RecordId for Property {
    type Id = PropertyId;

    fn record_id(&self) -> PropertyId {
        self.property_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    slice: ResourceSlice<Property>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self) -> &ResourceSlice<Property> {
        &self.slice
    }

    pub async fn fetch_all(&mut self, client: &RestClient) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::List);
        match client.list_properties().await {
            Ok(resp) => {
                self.slice.fulfill_list(token, resp.properties);
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
        id: PropertyId,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Get);
        match client.get_property(id).await {
            Ok(property) => {
                self.slice.fulfill_get(token, property);
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
        req: &CreatePropertyRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Create);
        match client.create_property(req).await {
            Ok(property) => {
                self.slice.fulfill_create(token, property);
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
        id: PropertyId,
        req: &UpdatePropertyRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        match client.update_property(id, req).await {
            Ok(property) => {
                self.slice.fulfill_update(token, property);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, client: &RestClient, id: PropertyId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Delete);
        match client.delete_property(id).await {
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

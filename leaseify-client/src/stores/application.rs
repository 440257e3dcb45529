//! Rental-application store.

use leaseify_api::{CreateApplicationRequest, ReviewApplicationRequest};
use leaseify_core::{Application, ApplicationId, ApplicationStatus};

use crate::api_client::RestClient;
use crate::error::ClientError;
use crate::slice::{OpKind, RecordId, ResourceSlice};

impl RecordId for Application {
    type Id = ApplicationId;

    fn record_id(&self) -> ApplicationId {
        self.application_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationStore {
    slice: ResourceSlice<Application>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self) -> &ResourceSlice<Application> {
        &self.slice
    }

    pub async fn fetch_all(&mut self, client: &RestClient) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::List);
        match client.list_applications().await {
            Ok(resp) => {
                self.slice.fulfill_list(token, resp.applications);
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
        id: ApplicationId,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Get);
        match client.get_application(id).await {
            Ok(application) => {
                self.slice.fulfill_get(token, application);
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
        req: &CreateApplicationRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Create);
        match client.create_application(req).await {
            Ok(application) => {
                self.slice.fulfill_create(token, application);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    /// Move an application through review and reconcile the returned
    /// record in place.
    pub async fn review(
        &mut self,
        client: &RestClient,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        let req = ReviewApplicationRequest { status };
        match client.review_application(id, &req).await {
            Ok(application) => {
                self.slice.fulfill_update(token, application);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn delete(
        &mut self,
        client: &RestClient,
        id: ApplicationId,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Delete);
        match client.delete_application(id).await {
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

//! Maintenance-task store.
//!
//! `toggle` is the checklist interaction: it runs as an update-kind
//! operation and reconciles the flipped record in place, so the rest of
//! the list never re-fetches.

use leaseify_api::{CreateTaskRequest, ListTasksRequest, UpdateTaskRequest};
use leaseify_core::{MaintenanceTask, PropertyId, TaskId};

use crate::api_client::RestClient;
use crate::error::ClientError;
use crate::slice::{OpKind, RecordId, ResourceSlice};

impl RecordId for MaintenanceTask {
    type Id = TaskId;

    fn record_id(&self) -> TaskId {
        self.task_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    slice: ResourceSlice<MaintenanceTask>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self) -> &ResourceSlice<MaintenanceTask> {
        &self.slice
    }

    pub async fn fetch_all(&mut self, client: &RestClient) -> Result<(), ClientError> {
        self.fetch_filtered(client, &ListTasksRequest::default()).await
    }

    /// List the tasks for one property; the fetched list replaces the
    /// cache wholesale, like any list fulfillment.
    pub async fn fetch_for_property(
        &mut self,
        client: &RestClient,
        property_id: PropertyId,
    ) -> Result<(), ClientError> {
        let params = ListTasksRequest {
            property_id: Some(property_id),
            include_completed: None,
        };
        self.fetch_filtered(client, &params).await
    }

    pub async fn fetch_filtered(
        &mut self,
        client: &RestClient,
        params: &ListTasksRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::List);
        match client.list_tasks(params).await {
            Ok(resp) => {
                self.slice.fulfill_list(token, resp.tasks);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn fetch_one(&mut self, client: &RestClient, id: TaskId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Get);
        match client.get_task(id).await {
            Ok(task) => {
                self.slice.fulfill_get(token, task);
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
        req: &CreateTaskRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Create);
        match client.create_task(req).await {
            Ok(task) => {
                self.slice.fulfill_create(token, task);
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
        id: TaskId,
        req: &UpdateTaskRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        match client.update_task(id, req).await {
            Ok(task) => {
                self.slice.fulfill_update(token, task);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    /// Flip a task's completion flag on the server and reconcile the
    /// returned record.
    pub async fn toggle(&mut self, client: &RestClient, id: TaskId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        match client.toggle_task(id).await {
            Ok(task) => {
                self.slice.fulfill_update(token, task);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, client: &RestClient, id: TaskId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Delete);
        match client.delete_task(id).await {
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

//! Transport client for the Leaseify REST API.
//!
//! One HTTP request per logical call: 2xx bodies decode into the typed
//! response, anything else surfaces as a structured `ClientError`. No
//! retries, no caching at this layer.

use std::time::Duration;

use leaseify_api::{
    ApiError, CreateApplicationRequest, CreateLeaseRequest, CreatePaymentRequest,
    CreatePropertyRequest, CreateTaskRequest, CreateTenantRequest, ListApplicationsResponse,
    ListLeasesResponse, ListPaymentsResponse, ListPropertiesResponse, ListTasksRequest, ListTasksResponse,
    ListTenantsResponse, ReviewApplicationRequest, UpdateLeaseRequest, UpdatePaymentRequest,
    UpdatePropertyRequest, UpdateTaskRequest, UpdateTenantRequest,
};
use leaseify_core::{
    Application, ApplicationId, Lease, LeaseId, MaintenanceTask, Payment, PaymentId,
    PaymentSummary, Property, PropertyId, ReliabilityScore, TaskId, Tenant, TenantId,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    pub async fn list_properties(&self) -> Result<ListPropertiesResponse, ClientError> {
        self.get_json::<_, ()>("/api/v1/properties", None).await
    }

    pub async fn get_property(&self, id: PropertyId) -> Result<Property, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/properties/{}", id.as_uuid()), None)
            .await
    }

    pub async fn create_property(
        &self,
        req: &CreatePropertyRequest,
    ) -> Result<Property, ClientError> {
        self.post_json("/api/v1/properties", req).await
    }

    pub async fn update_property(
        &self,
        id: PropertyId,
        req: &UpdatePropertyRequest,
    ) -> Result<Property, ClientError> {
        self.patch_json(&format!("/api/v1/properties/{}", id.as_uuid()), req)
            .await
    }

    pub async fn delete_property(&self, id: PropertyId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/properties/{}", id.as_uuid()))
            .await
    }

    // ------------------------------------------------------------------------
    // Tenants
    // ------------------------------------------------------------------------

    pub async fn list_tenants(&self) -> Result<ListTenantsResponse, ClientError> {
        self.get_json::<_, ()>("/api/v1/tenants", None).await
    }

    pub async fn get_tenant(&self, id: TenantId) -> Result<Tenant, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/tenants/{}", id.as_uuid()), None)
            .await
    }

    pub async fn create_tenant(&self, req: &CreateTenantRequest) -> Result<Tenant, ClientError> {
        self.post_json("/api/v1/tenants", req).await
    }

    pub async fn update_tenant(
        &self,
        id: TenantId,
        req: &UpdateTenantRequest,
    ) -> Result<Tenant, ClientError> {
        self.patch_json(&format!("/api/v1/tenants/{}", id.as_uuid()), req)
            .await
    }

    pub async fn delete_tenant(&self, id: TenantId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/tenants/{}", id.as_uuid()))
            .await
    }

    pub async fn tenant_score(&self, id: TenantId) -> Result<ReliabilityScore, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/tenants/{}/score", id.as_uuid()), None)
            .await
    }

    // ------------------------------------------------------------------------
    // Leases
    // ------------------------------------------------------------------------

    pub async fn list_leases(&self) -> Result<ListLeasesResponse, ClientError> {
        self.get_json::<_, ()>("/api/v1/leases", None).await
    }

    pub async fn get_lease(&self, id: LeaseId) -> Result<Lease, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/leases/{}", id.as_uuid()), None)
            .await
    }

    pub async fn create_lease(&self, req: &CreateLeaseRequest) -> Result<Lease, ClientError> {
        self.post_json("/api/v1/leases", req).await
    }

    pub async fn update_lease(
        &self,
        id: LeaseId,
        req: &UpdateLeaseRequest,
    ) -> Result<Lease, ClientError> {
        self.patch_json(&format!("/api/v1/leases/{}", id.as_uuid()), req)
            .await
    }

    pub async fn delete_lease(&self, id: LeaseId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/leases/{}", id.as_uuid())).await
    }

    // ------------------------------------------------------------------------
    // Payments
    // ------------------------------------------------------------------------

    pub async fn list_payments(&self) -> Result<ListPaymentsResponse, ClientError> {
        self.get_json::<_, ()>("/api/v1/payments", None).await
    }

    pub async fn get_payment(&self, id: PaymentId) -> Result<Payment, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/payments/{}", id.as_uuid()), None)
            .await
    }

    pub async fn create_payment(&self, req: &CreatePaymentRequest) -> Result<Payment, ClientError> {
        self.post_json("/api/v1/payments", req).await
    }

    pub async fn update_payment(
        &self,
        id: PaymentId,
        req: &UpdatePaymentRequest,
    ) -> Result<Payment, ClientError> {
        self.patch_json(&format!("/api/v1/payments/{}", id.as_uuid()), req)
            .await
    }

    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/payments/{}", id.as_uuid()))
            .await
    }

    pub async fn payment_summary(&self) -> Result<PaymentSummary, ClientError> {
        self.get_json::<_, ()>("/api/v1/payments/summary", None).await
    }

    // ------------------------------------------------------------------------
    // Maintenance tasks
    // ------------------------------------------------------------------------

    pub async fn list_tasks(&self, params: &ListTasksRequest) -> Result<ListTasksResponse, ClientError> {
        self.get_json("/api/v1/tasks", Some(params)).await
    }

    pub async fn get_task(&self, id: TaskId) -> Result<MaintenanceTask, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/tasks/{}", id.as_uuid()), None)
            .await
    }

    pub async fn create_task(&self, req: &CreateTaskRequest) -> Result<MaintenanceTask, ClientError> {
        self.post_json("/api/v1/tasks", req).await
    }

    pub async fn update_task(
        &self,
        id: TaskId,
        req: &UpdateTaskRequest,
    ) -> Result<MaintenanceTask, ClientError> {
        self.patch_json(&format!("/api/v1/tasks/{}", id.as_uuid()), req)
            .await
    }

    pub async fn toggle_task(&self, id: TaskId) -> Result<MaintenanceTask, ClientError> {
        self.post_empty(&format!("/api/v1/tasks/{}/toggle", id.as_uuid()))
            .await
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/tasks/{}", id.as_uuid())).await
    }

    // ------------------------------------------------------------------------
    // Applications
    // ------------------------------------------------------------------------

    pub async fn list_applications(&self) -> Result<ListApplicationsResponse, ClientError> {
        self.get_json::<_, ()>("/api/v1/applications", None).await
    }

    pub async fn get_application(&self, id: ApplicationId) -> Result<Application, ClientError> {
        self.get_json::<_, ()>(&format!("/api/v1/applications/{}", id.as_uuid()), None)
            .await
    }

    pub async fn create_application(
        &self,
        req: &CreateApplicationRequest,
    ) -> Result<Application, ClientError> {
        self.post_json("/api/v1/applications", req).await
    }

    pub async fn review_application(
        &self,
        id: ApplicationId,
        req: &ReviewApplicationRequest,
    ) -> Result<Application, ClientError> {
        self.post_json(&format!("/api/v1/applications/{}/review", id.as_uuid()), req)
            .await
    }

    pub async fn delete_application(&self, id: ApplicationId) -> Result<(), ClientError> {
        self.delete(&format!("/api/v1/applications/{}", id.as_uuid()))
            .await
    }

    // ------------------------------------------------------------------------
    // Request plumbing
    // ------------------------------------------------------------------------

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.parse_response(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).json(body).send().await?;
        self.parse_response(response).await
    }

    async fn post_empty<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).send().await?;
        self.parse_response(response).await
    }

    async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.patch(url).json(body).send().await?;
        self.parse_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(self.error_from_response(status.as_u16(), response).await)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(self.error_from_response(status.as_u16(), response).await)
        }
    }

    /// Decode the server's normalized error body; fall back to the raw
    /// text when the body is not the expected shape.
    async fn error_from_response(&self, status: u16, response: reqwest::Response) -> ClientError {
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return ClientError::Http(err),
        };
        match serde_json::from_str::<ApiError>(&text) {
            Ok(body) => ClientError::Api {
                status,
                message: body.message,
                errors: body.errors.unwrap_or_default(),
            },
            Err(_) => ClientError::Api {
                status,
                message: format!("HTTP {}: {}", status, text),
                errors: Vec::new(),
            },
        }
    }
}

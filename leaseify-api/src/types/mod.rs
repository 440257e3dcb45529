//! Request/response types for the REST API, organized by entity type.

mod application;
mod lease;
mod payment;
mod property;
mod task;
mod tenant;

pub use application::{
    CreateApplicationRequest, ListApplicationsResponse, ReviewApplicationRequest,
};
pub use lease::{CreateLeaseRequest, ListLeasesResponse, UpdateLeaseRequest};
pub use payment::{CreatePaymentRequest, ListPaymentsResponse, UpdatePaymentRequest};
pub use property::{CreatePropertyRequest, ListPropertiesResponse, UpdatePropertyRequest};
pub use task::{CreateTaskRequest, ListTasksRequest, ListTasksResponse, UpdateTaskRequest};
pub use tenant::{CreateTenantRequest, ListTenantsResponse, UpdateTenantRequest};

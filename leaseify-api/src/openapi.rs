//! OpenAPI documentation aggregator.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode, FieldError};
use crate::types::*;
use leaseify_core::{
    Application, ApplicationStatus, Lease, LeaseStatus, MaintenanceTask, Payment, PaymentMethod,
    PaymentStatus, PaymentSummary, Property, PropertyKind, ReliabilityScore, TaskPriority, Tenant,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leaseify API",
        description = "REST API for the Leaseify property-management platform"
    ),
    paths(
        crate::routes::property::create_property,
        crate::routes::property::list_properties,
        crate::routes::property::get_property,
        crate::routes::property::update_property,
        crate::routes::property::delete_property,
        crate::routes::tenant::create_tenant,
        crate::routes::tenant::list_tenants,
        crate::routes::tenant::get_tenant,
        crate::routes::tenant::update_tenant,
        crate::routes::tenant::delete_tenant,
        crate::routes::tenant::get_tenant_score,
        crate::routes::lease::create_lease,
        crate::routes::lease::list_leases,
        crate::routes::lease::get_lease,
        crate::routes::lease::update_lease,
        crate::routes::lease::delete_lease,
        crate::routes::payment::create_payment,
        crate::routes::payment::list_payments,
        crate::routes::payment::payment_summary,
        crate::routes::payment::get_payment,
        crate::routes::payment::update_payment,
        crate::routes::payment::delete_payment,
        crate::routes::task::create_task,
        crate::routes::task::list_tasks,
        crate::routes::task::get_task,
        crate::routes::task::update_task,
        crate::routes::task::toggle_task,
        crate::routes::task::delete_task,
        crate::routes::application::create_application,
        crate::routes::application::list_applications,
        crate::routes::application::get_application,
        crate::routes::application::review_application,
        crate::routes::application::delete_application,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        FieldError,
        Property,
        PropertyKind,
        Tenant,
        Lease,
        LeaseStatus,
        Payment,
        PaymentMethod,
        PaymentStatus,
        PaymentSummary,
        MaintenanceTask,
        TaskPriority,
        Application,
        ApplicationStatus,
        ReliabilityScore,
        CreatePropertyRequest,
        UpdatePropertyRequest,
        ListPropertiesResponse,
        CreateTenantRequest,
        UpdateTenantRequest,
        ListTenantsResponse,
        CreateLeaseRequest,
        UpdateLeaseRequest,
        ListLeasesResponse,
        CreatePaymentRequest,
        UpdatePaymentRequest,
        ListPaymentsResponse,
        CreateTaskRequest,
        UpdateTaskRequest,
        ListTasksRequest,
        ListTasksResponse,
        CreateApplicationRequest,
        ReviewApplicationRequest,
        ListApplicationsResponse,
    ))
)]
pub struct ApiDoc;

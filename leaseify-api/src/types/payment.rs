//! Payment-related API types

use leaseify_core::{LeaseId, Payment, PaymentMethod, PaymentStatus, Timestamp};
use serde::{Deserialize, Serialize};

use crate::validation::HasUpdates;

/// Request to record a new payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePaymentRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub lease_id: LeaseId,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub paid_at: Option<Timestamp>,
}

/// Request to update an existing payment (status corrections).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePaymentRequest {
    pub amount_cents: Option<i64>,
    pub method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub paid_at: Option<Timestamp>,
}

impl HasUpdates for UpdatePaymentRequest {
    fn has_any_updates(&self) -> bool {
        self.amount_cents.is_some()
            || self.method.is_some()
            || self.status.is_some()
            || self.paid_at.is_some()
    }
}

/// Response containing a list of payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListPaymentsResponse {
    pub payments: Vec<Payment>,
    pub total: i32,
}

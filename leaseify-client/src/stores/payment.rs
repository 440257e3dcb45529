//! Payment store: collection slice plus the summary slot.

use leaseify_api::{CreatePaymentRequest, UpdatePaymentRequest};
use leaseify_core::{Payment, PaymentId, PaymentSummary};

use crate::api_client::RestClient;
use crate::error::ClientError;
use crate::keyed::SlotCache;
use crate::slice::{OpKind, RecordId, ResourceSlice};

impl RecordId for Payment {
    type Id = PaymentId;

    fn record_id(&self) -> PaymentId {
        self.payment_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentStore {
    slice: ResourceSlice<Payment>,
    summary: SlotCache<PaymentSummary>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self) -> &ResourceSlice<Payment> {
        &self.slice
    }

    pub fn summary(&self) -> &SlotCache<PaymentSummary> {
        &self.summary
    }

    pub async fn fetch_all(&mut self, client: &RestClient) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::List);
        match client.list_payments().await {
            Ok(resp) => {
                self.slice.fulfill_list(token, resp.payments);
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
        id: PaymentId,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Get);
        match client.get_payment(id).await {
            Ok(payment) => {
                self.slice.fulfill_get(token, payment);
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
        req: &CreatePaymentRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Create);
        match client.create_payment(req).await {
            Ok(payment) => {
                self.slice.fulfill_create(token, payment);
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
        id: PaymentId,
        req: &UpdatePaymentRequest,
    ) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Update);
        match client.update_payment(id, req).await {
            Ok(payment) => {
                self.slice.fulfill_update(token, payment);
                Ok(())
            }
            Err(err) => {
                self.slice.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, client: &RestClient, id: PaymentId) -> Result<(), ClientError> {
        let token = self.slice.begin(OpKind::Delete);
        match client.delete_payment(id).await {
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

    /// Fetch the aggregate totals into the summary slot. Tracked as its
    /// own named status, independent of the collection operations.
    pub async fn fetch_summary(&mut self, client: &RestClient) -> Result<(), ClientError> {
        let token = self.summary.begin();
        match client.payment_summary().await {
            Ok(summary) => {
                self.summary.fulfill(token, summary);
                Ok(())
            }
            Err(err) => {
                self.summary.reject(token, err.to_record());
                Err(err)
            }
        }
    }

    pub fn reset(&mut self) {
        self.slice.reset();
        self.summary.reset();
    }
}

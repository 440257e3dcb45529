//! Per-resource stores.
//!
//! Each store owns the slice (and keyed caches, where the resource has
//! secondary fetches) for one resource type and exposes its operations:
//! begin the operation, run the transport call, then apply the
//! fulfillment or rejection. The store records the outcome either way;
//! the returned `Result` lets the caller notify without re-reading state.

mod application;
mod lease;
mod payment;
mod property;
mod task;
mod tenant;

pub use application::ApplicationStore;
pub use lease::LeaseStore;
pub use payment::PaymentStore;
pub use property::PropertyStore;
pub use task::TaskStore;
pub use tenant::TenantStore;

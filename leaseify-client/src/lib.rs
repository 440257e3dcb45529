//! Leaseify client - data synchronization library.
//!
//! Implements the async resource-slice pattern used by every Leaseify
//! screen: a transport client over the REST API, one store per resource
//! type with pending/fulfilled/rejected operation lifecycles guarded by
//! request tokens, and the view binding contract (render-state selection
//! and fetch-on-key-change).
//!
//! Stores are exclusively owned by the app loop; views read them and
//! dispatch operations, never mutating the caches directly.

pub mod api_client;
pub mod config;
pub mod error;
pub mod forms;
pub mod keyed;
pub mod slice;
pub mod stores;
pub mod view;

pub use api_client::RestClient;
pub use config::ClientConfig;
pub use error::{ClientError, ErrorRecord};
pub use keyed::{KeyedCache, KeyedToken, SlotCache};
pub use slice::{Applied, OpKind, OpStatus, OperationState, RecordId, RequestToken, ResourceSlice};
pub use stores::{
    ApplicationStore, LeaseStore, PaymentStore, PropertyStore, TaskStore, TenantStore,
};
pub use view::{render_state, FetchGuard, RenderState};

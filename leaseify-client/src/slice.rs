//! Generic resource slice: the per-resource store unit.
//!
//! A slice owns the collection cache, the selected-record slot, and one
//! operation state per logical operation kind. Operations follow a
//! three-phase lifecycle: `begin` issues a request token and marks the
//! operation loading; `fulfill_*` applies the result and marks it
//! succeeded; `reject` records the error and marks it failed. Every
//! resolution is guarded by the token: if a newer `begin` (or a `reset`)
//! superseded it, the resolution is discarded and the slice is left
//! untouched.

use crate::error::ErrorRecord;

/// Status of one logical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Logical operation kinds every resource slice tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

const OP_KINDS: usize = 5;

impl OpKind {
    fn index(self) -> usize {
        match self {
            OpKind::List => 0,
            OpKind::Get => 1,
            OpKind::Create => 2,
            OpKind::Update => 3,
            OpKind::Delete => 4,
        }
    }
}

/// Per-operation lifecycle state.
#[derive(Debug, Clone, Default)]
pub struct OperationState {
    status: OpStatus,
    error: Option<ErrorRecord>,
    /// Latest issued sequence number for this operation kind.
    seq: u64,
}

impl OperationState {
    pub fn status(&self) -> OpStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == OpStatus::Loading
    }

    fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.status = OpStatus::Loading;
        self.error = None;
        self.seq
    }

    fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }

    /// Invalidate any outstanding token and return to the initial state.
    fn reset(&mut self) {
        self.seq += 1;
        self.status = OpStatus::Idle;
        self.error = None;
    }
}

/// Token identifying one issued request for one operation kind.
///
/// Opaque to callers: obtain it from `begin` and hand it back to the
/// matching `fulfill_*`/`reject` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    kind: OpKind,
    seq: u64,
}

impl RequestToken {
    pub fn kind(&self) -> OpKind {
        self.kind
    }
}

/// Outcome of applying an update result to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The result was applied to the cache.
    Yes,
    /// The record was absent from the cache; statuses advanced, cache unchanged.
    NotFound,
    /// The token was superseded; nothing changed.
    Stale,
}

/// Types carrying a server-assigned identifier.
pub trait RecordId {
    type Id: Copy + Eq + std::fmt::Debug;

    fn record_id(&self) -> Self::Id;
}

/// Per-resource store unit: collection cache + selected slot + operation
/// states.
#[derive(Debug, Clone)]
pub struct ResourceSlice<T: RecordId> {
    items: Vec<T>,
    selected: Option<T>,
    ops: [OperationState; OP_KINDS],
}

impl<T: RecordId + Clone> ResourceSlice<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            ops: Default::default(),
        }
    }

    /// The collection cache, in last-fetch/last-mutation order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The single-selected-record slot populated by get-one.
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn op(&self, kind: OpKind) -> &OperationState {
        &self.ops[kind.index()]
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.record_id() == id)
    }

    /// Start an operation: mark it loading, clear its previous error, and
    /// issue the token its resolution must present.
    pub fn begin(&mut self, kind: OpKind) -> RequestToken {
        let seq = self.ops[kind.index()].begin();
        RequestToken { kind, seq }
    }

    fn settle(&mut self, token: RequestToken, status: OpStatus) -> bool {
        let op = &mut self.ops[token.kind.index()];
        if !op.is_current(token.seq) {
            tracing::debug!(kind = ?token.kind, "discarding stale resolution");
            return false;
        }
        op.status = status;
        true
    }

    /// List fulfillment: replace the cache wholesale.
    pub fn fulfill_list(&mut self, token: RequestToken, items: Vec<T>) -> bool {
        if !self.settle(token, OpStatus::Succeeded) {
            return false;
        }
        self.items = items;
        true
    }

    /// Get-one fulfillment: store into the selected slot, not the list.
    pub fn fulfill_get(&mut self, token: RequestToken, item: T) -> bool {
        if !self.settle(token, OpStatus::Succeeded) {
            return false;
        }
        self.selected = Some(item);
        true
    }

    /// Create fulfillment: append the new record. An identifier collision
    /// replaces in place, keeping the no-duplicates invariant.
    pub fn fulfill_create(&mut self, token: RequestToken, item: T) -> bool {
        if !self.settle(token, OpStatus::Succeeded) {
            return false;
        }
        let id = item.record_id();
        if let Some(existing) = self.items.iter_mut().find(|i| i.record_id() == id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
        true
    }

    /// Update fulfillment: replace the record sharing the identifier.
    pub fn fulfill_update(&mut self, token: RequestToken, item: T) -> Applied {
        if !self.settle(token, OpStatus::Succeeded) {
            return Applied::Stale;
        }
        let id = item.record_id();
        if let Some(selected) = self.selected.as_mut() {
            if selected.record_id() == id {
                *selected = item.clone();
            }
        }
        match self.items.iter_mut().find(|i| i.record_id() == id) {
            Some(existing) => {
                *existing = item;
                Applied::Yes
            }
            None => Applied::NotFound,
        }
    }

    /// Delete fulfillment: remove by identifier; no-op safe if absent.
    pub fn fulfill_delete(&mut self, token: RequestToken, id: T::Id) -> bool {
        if !self.settle(token, OpStatus::Succeeded) {
            return false;
        }
        self.items.retain(|item| item.record_id() != id);
        if self
            .selected
            .as_ref()
            .is_some_and(|item| item.record_id() == id)
        {
            self.selected = None;
        }
        true
    }

    /// Rejection: record the error, leave the cache untouched.
    pub fn reject(&mut self, token: RequestToken, error: ErrorRecord) -> bool {
        let op = &mut self.ops[token.kind.index()];
        if !op.is_current(token.seq) {
            tracing::debug!(kind = ?token.kind, "discarding stale rejection");
            return false;
        }
        op.status = OpStatus::Failed;
        op.error = Some(error);
        true
    }

    /// Return to the initial state and invalidate every outstanding token,
    /// so in-flight resolutions issued before the reset are discarded.
    pub fn reset(&mut self) {
        self.items.clear();
        self.selected = None;
        for op in &mut self.ops {
            op.reset();
        }
    }
}

impl<T: RecordId + Clone> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: String,
    }

    impl RecordId for Item {
        type Id = u32;

        fn record_id(&self) -> u32 {
            self.id
        }
    }

    fn item(id: u32, label: &str) -> Item {
        Item {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_begin_marks_loading_and_clears_error() {
        let mut slice: ResourceSlice<Item> = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.reject(token, ErrorRecord::message("boom"));
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Failed);
        assert!(slice.op(OpKind::List).error().is_some());

        slice.begin(OpKind::List);
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Loading);
        assert!(slice.op(OpKind::List).error().is_none());
    }

    #[test]
    fn test_list_fulfillment_replaces_wholesale() {
        let mut slice = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        assert!(slice.fulfill_list(token, vec![item(1, "a"), item(2, "b")]));

        let token = slice.begin(OpKind::List);
        assert!(slice.fulfill_list(token, vec![item(3, "c")]));
        assert_eq!(slice.items().len(), 1);
        assert_eq!(slice.items()[0].id, 3);
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Succeeded);
    }

    #[test]
    fn test_get_populates_selected_slot_not_list() {
        let mut slice = ResourceSlice::new();
        let token = slice.begin(OpKind::Get);
        assert!(slice.fulfill_get(token, item(7, "seven")));
        assert_eq!(slice.selected().unwrap().id, 7);
        assert!(slice.items().is_empty());
    }

    #[test]
    fn test_create_appends_and_reconciles_by_id() {
        let mut slice = ResourceSlice::new();
        let token = slice.begin(OpKind::Create);
        slice.fulfill_create(token, item(1, "first"));

        // Same id again replaces rather than duplicating.
        let token = slice.begin(OpKind::Create);
        slice.fulfill_create(token, item(1, "renamed"));
        assert_eq!(slice.items().len(), 1);
        assert_eq!(slice.items()[0].label, "renamed");
    }

    #[test]
    fn test_update_replaces_matching_record_only() {
        let mut slice = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.fulfill_list(token, vec![item(1, "a"), item(2, "b")]);

        let token = slice.begin(OpKind::Update);
        assert_eq!(slice.fulfill_update(token, item(2, "patched")), Applied::Yes);
        assert_eq!(slice.items()[0].label, "a");
        assert_eq!(slice.items()[1].label, "patched");
    }

    #[test]
    fn test_update_of_absent_record_signals_not_found() {
        let mut slice: ResourceSlice<Item> = ResourceSlice::new();
        let token = slice.begin(OpKind::Update);
        assert_eq!(
            slice.fulfill_update(token, item(9, "ghost")),
            Applied::NotFound
        );
        assert!(slice.items().is_empty());
        assert_eq!(slice.op(OpKind::Update).status(), OpStatus::Succeeded);
    }

    #[test]
    fn test_delete_removes_by_id_and_is_noop_safe() {
        let mut slice = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.fulfill_list(token, vec![item(1, "a"), item(2, "b")]);

        let token = slice.begin(OpKind::Delete);
        assert!(slice.fulfill_delete(token, 1));
        assert_eq!(slice.items().len(), 1);

        let token = slice.begin(OpKind::Delete);
        assert!(slice.fulfill_delete(token, 42));
        assert_eq!(slice.items().len(), 1);
    }

    #[test]
    fn test_reject_leaves_cache_unchanged() {
        let mut slice = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.fulfill_list(token, vec![item(1, "a")]);

        let token = slice.begin(OpKind::List);
        slice.reject(token, ErrorRecord::message("Network Error"));
        assert_eq!(slice.items().len(), 1);
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Failed);
        assert_eq!(
            slice.op(OpKind::List).error().unwrap().message,
            "Network Error"
        );
        assert!(!slice.op(OpKind::List).is_loading());
    }

    #[test]
    fn test_stale_list_fulfillment_is_discarded() {
        let mut slice = ResourceSlice::new();
        let stale = slice.begin(OpKind::List);
        let fresh = slice.begin(OpKind::List);

        assert!(slice.fulfill_list(fresh, vec![item(2, "fresh")]));
        // The superseded request resolves late; nothing may change.
        assert!(!slice.fulfill_list(stale, vec![item(1, "stale")]));
        assert_eq!(slice.items().len(), 1);
        assert_eq!(slice.items()[0].id, 2);
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Succeeded);
    }

    #[test]
    fn test_stale_rejection_does_not_clobber_fresh_success() {
        let mut slice = ResourceSlice::new();
        let stale = slice.begin(OpKind::List);
        let fresh = slice.begin(OpKind::List);

        slice.fulfill_list(fresh, vec![item(1, "kept")]);
        assert!(!slice.reject(stale, ErrorRecord::message("too late")));
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Succeeded);
        assert!(slice.op(OpKind::List).error().is_none());
    }

    #[test]
    fn test_reset_discards_in_flight_resolutions() {
        let mut slice = ResourceSlice::new();
        let seeded = slice.begin(OpKind::List);
        slice.fulfill_list(seeded, vec![item(1, "seed")]);

        let in_flight = slice.begin(OpKind::List);
        slice.reset();

        assert!(!slice.fulfill_list(in_flight, vec![item(2, "late")]));
        assert!(slice.items().is_empty());
        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Idle);
    }

    #[test]
    fn test_operations_track_independent_statuses() {
        let mut slice = ResourceSlice::new();
        let list = slice.begin(OpKind::List);
        let create = slice.begin(OpKind::Create);

        slice.reject(create, ErrorRecord::message("invalid"));
        slice.fulfill_list(list, vec![item(1, "a")]);

        assert_eq!(slice.op(OpKind::List).status(), OpStatus::Succeeded);
        assert_eq!(slice.op(OpKind::Create).status(), OpStatus::Failed);
    }

    #[test]
    fn test_delete_clears_matching_selected() {
        let mut slice = ResourceSlice::new();
        let get = slice.begin(OpKind::Get);
        slice.fulfill_get(get, item(5, "five"));

        let del = slice.begin(OpKind::Delete);
        slice.fulfill_delete(del, 5);
        assert!(slice.selected().is_none());
    }

    proptest! {
        /// After any interleaving of create/update fulfillments, the cache
        /// never holds two records with the same identifier.
        #[test]
        fn prop_no_duplicate_ids(ops in proptest::collection::vec((0u32..8, any::<bool>()), 0..64)) {
            let mut slice: ResourceSlice<Item> = ResourceSlice::new();
            for (id, create) in ops {
                let kind = if create { OpKind::Create } else { OpKind::Update };
                let token = slice.begin(kind);
                let record = item(id, "x");
                if create {
                    slice.fulfill_create(token, record);
                } else {
                    slice.fulfill_update(token, record);
                }
            }
            let mut ids: Vec<u32> = slice.items().iter().map(|i| i.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), slice.items().len());
        }
    }
}

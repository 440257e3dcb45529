//! View binding contract: render-state selection and fetch triggering.

use crate::error::ErrorRecord;
use crate::slice::{OpKind, OpStatus, RecordId, ResourceSlice};

/// The four mutually exclusive states a collection screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState<'a> {
    /// A list-fetch failed; render its message.
    Error(&'a ErrorRecord),
    /// First load in progress; render the skeleton.
    Loading,
    /// Loaded and empty; render the empty state.
    Empty,
    /// Loaded with records; render them.
    Populated,
}

/// Choose the render state for a collection view from its slice.
///
/// Precedence: error present -> Error; else list-fetch loading with an
/// empty cache -> Loading; else empty cache -> Empty; else Populated.
/// A refresh over an already-populated cache keeps rendering the data.
pub fn render_state<T: RecordId + Clone>(slice: &ResourceSlice<T>) -> RenderState<'_> {
    let list_op = slice.op(OpKind::List);
    if let Some(error) = list_op.error() {
        return RenderState::Error(error);
    }
    if list_op.status() == OpStatus::Loading && slice.items().is_empty() {
        return RenderState::Loading;
    }
    if slice.items().is_empty() {
        return RenderState::Empty;
    }
    RenderState::Populated
}

/// Tracks the key dependency a view last fetched for, so the fetch is
/// dispatched once when the view first shows and again only when the key
/// changes.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard<K: PartialEq + Copy> {
    last: Option<K>,
}

impl<K: PartialEq + Copy> FetchGuard<K> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// True the first time and whenever `key` differs from the last
    /// fetched key; records `key` as fetched.
    pub fn should_fetch(&mut self, key: K) -> bool {
        if self.last == Some(key) {
            return false;
        }
        self.last = Some(key);
        true
    }

    /// Forget the last key, forcing the next `should_fetch` to fire.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u32);

    impl RecordId for Item {
        type Id = u32;

        fn record_id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_idle_empty_renders_empty() {
        let slice: ResourceSlice<Item> = ResourceSlice::new();
        assert_eq!(render_state(&slice), RenderState::Empty);
    }

    #[test]
    fn test_loading_with_empty_cache_renders_skeleton() {
        let mut slice: ResourceSlice<Item> = ResourceSlice::new();
        slice.begin(OpKind::List);
        assert_eq!(render_state(&slice), RenderState::Loading);
    }

    #[test]
    fn test_fulfilled_empty_list_renders_empty_not_loading() {
        let mut slice: ResourceSlice<Item> = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.fulfill_list(token, vec![]);
        assert_eq!(render_state(&slice), RenderState::Empty);
    }

    #[test]
    fn test_error_takes_precedence() {
        let mut slice: ResourceSlice<Item> = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.reject(token, ErrorRecord::message("Network Error"));

        match render_state(&slice) {
            RenderState::Error(record) => assert_eq!(record.message, "Network Error"),
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn test_refresh_over_populated_cache_keeps_data_visible() {
        let mut slice: ResourceSlice<Item> = ResourceSlice::new();
        let token = slice.begin(OpKind::List);
        slice.fulfill_list(token, vec![Item(1)]);

        // A second fetch is in flight; keep rendering the stale data.
        slice.begin(OpKind::List);
        assert_eq!(render_state(&slice), RenderState::Populated);
    }

    #[test]
    fn test_fetch_guard_fires_once_per_key() {
        let mut guard = FetchGuard::new();
        assert!(guard.should_fetch(1u32));
        assert!(!guard.should_fetch(1u32));
        assert!(guard.should_fetch(2u32));
        assert!(!guard.should_fetch(2u32));

        guard.invalidate();
        assert!(guard.should_fetch(2u32));
    }
}

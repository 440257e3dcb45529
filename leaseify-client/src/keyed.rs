//! Keyed and singleton caches for secondary fetches.
//!
//! Some resources carry per-record lookups (a reliability score per
//! tenant) or a singleton aggregate (the payment summary). These live
//! beside the main slice with their own operation state, so a score
//! fetch never disturbs the collection statuses, and a fulfillment for
//! one key never overwrites unrelated keys.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::ErrorRecord;
use crate::slice::OpStatus;

/// Token for keyed/singleton cache operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyedToken(u64);

#[derive(Debug, Clone, Default)]
struct KeyedOp {
    status: OpStatus,
    error: Option<ErrorRecord>,
    seq: u64,
}

impl KeyedOp {
    fn begin(&mut self) -> KeyedToken {
        self.seq += 1;
        self.status = OpStatus::Loading;
        self.error = None;
        KeyedToken(self.seq)
    }

    fn settle(&mut self, token: KeyedToken, status: OpStatus) -> bool {
        if self.seq != token.0 {
            tracing::debug!("discarding stale keyed resolution");
            return false;
        }
        self.status = status;
        true
    }

    fn reset(&mut self) {
        self.seq += 1;
        self.status = OpStatus::Idle;
        self.error = None;
    }
}

/// One value per key, with a single operation state for the fetch kind.
#[derive(Debug, Clone)]
pub struct KeyedCache<K: Eq + Hash + Copy, V> {
    entries: HashMap<K, V>,
    op: KeyedOp,
}

impl<K: Eq + Hash + Copy, V> KeyedCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            op: KeyedOp::default(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn status(&self) -> OpStatus {
        self.op.status
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        self.op.error.as_ref()
    }

    pub fn begin(&mut self) -> KeyedToken {
        self.op.begin()
    }

    /// Store the value under its key, leaving other keys untouched.
    pub fn fulfill(&mut self, token: KeyedToken, key: K, value: V) -> bool {
        if !self.op.settle(token, OpStatus::Succeeded) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn reject(&mut self, token: KeyedToken, error: ErrorRecord) -> bool {
        if self.op.seq != token.0 {
            tracing::debug!("discarding stale keyed rejection");
            return false;
        }
        self.op.status = OpStatus::Failed;
        self.op.error = Some(error);
        true
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.op.reset();
    }
}

impl<K: Eq + Hash + Copy, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Singleton slot variant for aggregate fetches.
#[derive(Debug, Clone)]
pub struct SlotCache<V> {
    value: Option<V>,
    op: KeyedOp,
}

impl<V> SlotCache<V> {
    pub fn new() -> Self {
        Self {
            value: None,
            op: KeyedOp::default(),
        }
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn status(&self) -> OpStatus {
        self.op.status
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        self.op.error.as_ref()
    }

    pub fn begin(&mut self) -> KeyedToken {
        self.op.begin()
    }

    pub fn fulfill(&mut self, token: KeyedToken, value: V) -> bool {
        if !self.op.settle(token, OpStatus::Succeeded) {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn reject(&mut self, token: KeyedToken, error: ErrorRecord) -> bool {
        if self.op.seq != token.0 {
            return false;
        }
        self.op.status = OpStatus::Failed;
        self.op.error = Some(error);
        true
    }

    pub fn reset(&mut self) {
        self.value = None;
        self.op.reset();
    }
}

impl<V> Default for SlotCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_fulfillment_preserves_other_keys() {
        let mut cache: KeyedCache<u32, &str> = KeyedCache::new();
        let token = cache.begin();
        cache.fulfill(token, 1, "one");
        let token = cache.begin();
        cache.fulfill(token, 2, "two");

        assert_eq!(cache.get(&1), Some(&"one"));
        assert_eq!(cache.get(&2), Some(&"two"));
        assert_eq!(cache.status(), OpStatus::Succeeded);
    }

    #[test]
    fn test_keyed_stale_fulfillment_discarded() {
        let mut cache: KeyedCache<u32, &str> = KeyedCache::new();
        let stale = cache.begin();
        let fresh = cache.begin();
        cache.fulfill(fresh, 1, "fresh");
        assert!(!cache.fulfill(stale, 1, "stale"));
        assert_eq!(cache.get(&1), Some(&"fresh"));
    }

    #[test]
    fn test_keyed_reject_records_error() {
        let mut cache: KeyedCache<u32, &str> = KeyedCache::new();
        let token = cache.begin();
        cache.reject(token, ErrorRecord::message("nope"));
        assert_eq!(cache.status(), OpStatus::Failed);
        assert_eq!(cache.error().unwrap().message, "nope");
        assert!(cache.get(&1).is_none());
    }

    #[test]
    fn test_slot_roundtrip_and_reset() {
        let mut slot: SlotCache<i64> = SlotCache::new();
        let token = slot.begin();
        slot.fulfill(token, 42);
        assert_eq!(slot.value(), Some(&42));

        let in_flight = slot.begin();
        slot.reset();
        assert!(!slot.fulfill(in_flight, 7));
        assert!(slot.value().is_none());
        assert_eq!(slot.status(), OpStatus::Idle);
    }
}

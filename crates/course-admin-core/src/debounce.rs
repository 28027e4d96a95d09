//! Debounced Search Binding
//!
//! Clock-agnostic: callers pass millisecond timestamps, the UI schedules a
//! timer for `deadline()` and calls `fire` when it elapses.

use crate::query::SEARCH_KEY;
use crate::view_state::ViewAction;

/// Holds the latest value until `delay_ms` pass without a newer one.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms, pending: None }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Supersede any pending value; returns the new deadline.
    pub fn push(&mut self, value: T, now_ms: u64) -> u64 {
        let deadline = now_ms + self.delay_ms;
        self.pending = Some((value, deadline));
        deadline
    }

    /// Take the pending value once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now_ms => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    /// Take the pending value regardless of the clock.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Text input bound to one query key through a debounce window.
///
/// `input_value` changes on every keystroke; the query key only changes
/// when the window elapses.
#[derive(Debug, Clone)]
pub struct DebouncedBinding {
    key: String,
    input_value: String,
    debouncer: Debouncer<String>,
}

impl DebouncedBinding {
    pub fn new(key: impl Into<String>, initial: &str, delay_ms: u64) -> Self {
        Self {
            key: key.into(),
            input_value: initial.to_string(),
            debouncer: Debouncer::new(delay_ms),
        }
    }

    /// The usual `searchTerm` binding
    pub fn search(initial: &str, delay_ms: u64) -> Self {
        Self::new(SEARCH_KEY, initial, delay_ms)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Keystroke: update the visible value, restart the window.
    pub fn on_input(&mut self, value: &str, now_ms: u64) -> u64 {
        self.input_value = value.to_string();
        self.debouncer.push(value.to_string(), now_ms)
    }

    pub fn deadline(&self) -> Option<u64> {
        self.debouncer.deadline()
    }

    /// Action to dispatch once the window has elapsed.
    pub fn fire(&mut self, now_ms: u64) -> Option<ViewAction> {
        self.debouncer
            .poll(now_ms)
            .map(|value| ViewAction::set(self.key.clone(), value))
    }

    /// The timer armed by the latest keystroke elapsed. Commits without
    /// re-reading the clock, which may lag the timer by a millisecond.
    pub fn fire_elapsed(&mut self) -> Option<ViewAction> {
        self.debouncer
            .flush()
            .map(|value| ViewAction::set(self.key.clone(), value))
    }

    /// Teardown or navigation away: the pending commit must not land.
    pub fn cancel(&mut self) -> bool {
        self.debouncer.cancel()
    }

    /// Follow an external URL change (back button, clear-all) unless the
    /// user is mid-typing.
    pub fn sync_from_query(&mut self, value: Option<&str>) {
        if !self.debouncer.is_pending() {
            self.input_value = value.unwrap_or_default().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::{MemoryPersistence, QueryPersistence, QueryStore};

    #[test]
    fn test_typing_burst_commits_once() {
        let mut store = QueryStore::new(MemoryPersistence::default());
        let mut binding = DebouncedBinding::search("", 500);

        let mut fired = Vec::new();
        for (i, text) in ["a", "ab", "abc"].iter().enumerate() {
            let now = i as u64 * 100;
            binding.on_input(text, now);
            // timers scheduled for earlier keystrokes find nothing due
            if let Some(action) = binding.fire(now + 99) {
                fired.push(action);
            }
        }
        assert_eq!(binding.input_value(), "abc");
        assert!(fired.is_empty());

        let action = binding.fire(200 + 500).expect("due after quiet window");
        assert!(store.dispatch(&action));
        assert_eq!(binding.fire(2000), None);

        assert_eq!(store.persistence().history.len(), 1);
        assert_eq!(store.persistence().current(), "searchTerm=abc");
    }

    #[test]
    fn test_clearing_commits_removal() {
        let mut store = QueryStore::new(MemoryPersistence::new("searchTerm=abc&page=3"));
        let mut binding = DebouncedBinding::search("abc", 500);

        binding.on_input("", 0);
        let action = binding.fire(500).expect("due");
        store.dispatch(&action);
        assert_eq!(store.persistence().current(), "");
    }

    #[test]
    fn test_cancel_prevents_stale_write() {
        let mut binding = DebouncedBinding::search("", 500);
        binding.on_input("draft", 0);
        assert!(binding.cancel());
        assert_eq!(binding.fire(10_000), None);
    }

    #[test]
    fn test_elapsed_timer_commits_despite_lagging_clock() {
        let mut binding = DebouncedBinding::search("", 500);
        let deadline = binding.on_input("rust", 1_000);

        // the clock read inside the timer callback can trail the deadline
        assert_eq!(binding.fire(deadline - 1), None);
        assert_eq!(binding.fire_elapsed(), Some(ViewAction::set("searchTerm", "rust")));
        assert_eq!(binding.fire_elapsed(), None);

        binding.on_input("rus", 2_000);
        binding.cancel();
        assert_eq!(binding.fire_elapsed(), None);
    }

    #[test]
    fn test_sync_from_query_respects_pending_input() {
        let mut binding = DebouncedBinding::search("old", 500);
        binding.sync_from_query(Some("new"));
        assert_eq!(binding.input_value(), "new");

        binding.on_input("typing", 0);
        binding.sync_from_query(None);
        assert_eq!(binding.input_value(), "typing");
    }
}

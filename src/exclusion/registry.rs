// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Thread-safe exclusion rule storage with change notification.

use super::rule::{ExclusionRule, ExclusionRuleType};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Change callback. Receives the full rule snapshot after every mutation.
pub type Listener = Arc<dyn Fn(&[ExclusionRule]) + Send + Sync>;

/// Handle returned by [`ExclusionRuleRegistry::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Copy-on-write rule list.
///
/// Readers clone an `Arc` to the current list and never hold the lock while
/// matching; writers build a new list and swap it in. A snapshot handed out by
/// [`list`](Self::list) therefore never changes. Listeners run synchronously on
/// the mutating thread after the lock is released.
#[derive(Default)]
pub struct ExclusionRuleRegistry {
    rules: RwLock<Arc<Vec<ExclusionRule>>>,
    listeners: RwLock<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
}

impl ExclusionRuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, rule: ExclusionRule) {
        tracing::debug!(id = %rule.id(), %rule, "adding exclusion rule");
        self.mutate(|rules| {
            rules.push(rule);
            true
        });
    }

    /// Remove every rule with `id`. Unknown ids are a silent no-op, but
    /// listeners are still notified.
    pub fn remove(&self, id: &str) {
        self.mutate(|rules| {
            rules.retain(|r| r.id() != id);
            true
        });
    }

    /// Replace the rule with `id` in place, keeping its position.
    /// Unknown ids are a silent no-op and notify nobody.
    pub fn update(&self, id: &str, kind: ExclusionRuleType, pattern: impl Into<String>) {
        let pattern = pattern.into();
        self.mutate(|rules| match rules.iter().position(|r| r.id() == id) {
            Some(idx) => {
                rules[idx] = ExclusionRule::with_id(id, kind, pattern);
                true
            }
            None => false,
        });
    }

    pub fn clear(&self) {
        self.mutate(|rules| {
            rules.clear();
            true
        });
    }

    pub fn get(&self, id: &str) -> Option<ExclusionRule> {
        self.read_rules().iter().find(|r| r.id() == id).cloned()
    }

    /// Immutable snapshot of the current rules.
    pub fn list(&self) -> Arc<Vec<ExclusionRule>> {
        self.read_rules().clone()
    }

    pub fn len(&self) -> usize {
        self.read_rules().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_rules().is_empty()
    }

    /// True when any current rule matches the request.
    pub fn should_exclude(&self, method: &str, url: &str) -> bool {
        let rules = self.list();
        rules.iter().any(|r| r.matches(method, url))
    }

    /// Register a change callback.
    ///
    /// Each mutation delivers its own snapshot after the write lock is released,
    /// so with concurrent writers a listener may see an older snapshot after a
    /// newer one. Use [`list`](Self::list) when the latest state matters.
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&[ExclusionRule]) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.write_listeners().push((id, Arc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) {
        self.write_listeners().retain(|(lid, _)| *lid != id);
    }

    /// Apply `f` to a private copy of the rules; publish and notify when it
    /// reports a change.
    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut Vec<ExclusionRule>) -> bool,
    {
        let snapshot = {
            let mut guard = self.write_rules();
            let mut next = guard.as_slice().to_vec();
            if !f(&mut next) {
                return;
            }
            let next = Arc::new(next);
            *guard = Arc::clone(&next);
            next
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &[ExclusionRule]) {
        let listeners: Vec<Listener> = self
            .read_listeners()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    fn read_rules(&self) -> RwLockReadGuard<'_, Arc<Vec<ExclusionRule>>> {
        match self.rules.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("exclusion rules lock poisoned during read");
                poisoned.into_inner()
            }
        }
    }

    fn write_rules(&self) -> RwLockWriteGuard<'_, Arc<Vec<ExclusionRule>>> {
        match self.rules.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("exclusion rules lock poisoned during write");
                poisoned.into_inner()
            }
        }
    }

    fn read_listeners(&self) -> RwLockReadGuard<'_, Vec<(ListenerId, Listener)>> {
        match self.listeners.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("exclusion listeners lock poisoned during read");
                poisoned.into_inner()
            }
        }
    }

    fn write_listeners(&self) -> RwLockWriteGuard<'_, Vec<(ListenerId, Listener)>> {
        match self.listeners.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("exclusion listeners lock poisoned during write");
                poisoned.into_inner()
            }
        }
    }
}

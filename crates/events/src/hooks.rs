//! Synchronous mutation hooks for the default dashboard layout.
//!
//! The broadcast bus is fire-and-forget, so collaborators that need to
//! *rewrite* the default layout text before it is finalized register a
//! filter here instead. Filters run in registration order on the layout
//! string, after the stored/hardcoded default is resolved and before the
//! disabled-plugin pass.

use std::sync::RwLock;

/// A registered layout filter. Receives the layout text in place.
type LayoutFilter = Box<dyn Fn(&mut String) + Send + Sync>;

/// Registry of default-layout mutation hooks.
///
/// Shared via `Arc<HookRegistry>`; registration normally happens once at
/// startup while plugins are wired up.
#[derive(Default)]
pub struct HookRegistry {
    filters: RwLock<Vec<LayoutFilter>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter to run on the default layout text.
    pub fn register(&self, filter: impl Fn(&mut String) + Send + Sync + 'static) {
        let mut filters = self.filters.write().unwrap_or_else(|e| e.into_inner());
        filters.push(Box::new(filter));
    }

    /// Apply every registered filter, in registration order.
    pub fn apply(&self, layout: &mut String) {
        let filters = self.filters.read().unwrap_or_else(|e| e.into_inner());
        for filter in filters.iter() {
            filter(layout);
        }
    }

    /// Number of registered filters (used by startup logging).
    pub fn len(&self) -> usize {
        self.filters.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

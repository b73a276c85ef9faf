//! Compiled update lists keyed by template identity.
//!
//! Entries are added lazily on first render and never evicted; the cache grows
//! with the number of distinct templates, not with the number of renders.
//!
//! Each template may hold several lists, one per instrumentation variant (see
//! [`Instrument::variant`](crate::instrument::Instrument::variant)), so renderers
//! that instrument differently can share one cache.
//!
//! Two threads may compile the same unseen template at once. Compilation runs
//! outside the lock and the first list inserted wins; the other is dropped.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::compiler::UpdateList;
use crate::error::Result;
use crate::template::{Template, TemplateId};

/// Thread-safe map from [`TemplateId`] and variant to a compiled [`UpdateList`].
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: RwLock<HashMap<TemplateId, HashMap<String, Arc<UpdateList>>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The list compiled for template `id` under `variant`, if any.
    pub fn get(&self, id: TemplateId, variant: &str) -> Option<Arc<UpdateList>> {
        self.entries.read().get(&id)?.get(variant).cloned()
    }

    /// Whether template `id` has been compiled under any variant.
    pub fn contains(&self, id: TemplateId) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Return the cached list for `template` under `variant`, compiling it with
    /// `compile` on a miss.
    ///
    /// A failed compilation leaves the cache untouched.
    pub fn get_or_compile<F>(
        &self,
        template: &Template,
        variant: &str,
        compile: F,
    ) -> Result<Arc<UpdateList>>
    where
        F: FnOnce(&Template) -> Result<UpdateList>,
    {
        let id = template.id();
        if let Some(list) = self.get(id, variant) {
            tracing::trace!(template = %id, variant, "template cache hit");
            return Ok(list);
        }

        let compiled = Arc::new(compile(template)?);
        tracing::debug!(template = %id, variant, updates = compiled.len(), "compiled template");

        let mut entries = self.entries.write();
        Ok(entries
            .entry(id)
            .or_default()
            .entry(variant.to_string())
            .or_insert(compiled)
            .clone())
    }

    /// Number of compiled lists across all templates and variants.
    pub fn len(&self) -> usize {
        self.entries.read().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

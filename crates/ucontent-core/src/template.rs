//! Template identity.
//!
//! A [`Template`] is created once per call site and reused for every render.
//! Identity is the [`TemplateId`] handed out at construction, never the text:
//! two templates with identical fragments are still distinct cache entries.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity token of a template, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(u64);

impl TemplateId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Inner {
    id: TemplateId,
    fragments: Vec<String>,
}

/// Immutable static fragments of a template. Cloning shares identity.
#[derive(Debug, Clone)]
pub struct Template {
    inner: Arc<Inner>,
}

impl Template {
    /// Create a template from its static fragments.
    ///
    /// `n` fragments declare `n - 1` dynamic slots. An empty fragment list is
    /// treated as a single empty fragment.
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        if fragments.is_empty() {
            fragments.push(String::new());
        }
        Self {
            inner: Arc::new(Inner {
                id: TemplateId::next(),
                fragments,
            }),
        }
    }

    pub fn id(&self) -> TemplateId {
        self.inner.id
    }

    pub fn fragments(&self) -> &[String] {
        &self.inner.fragments
    }

    /// Number of dynamic slots.
    pub fn slots(&self) -> usize {
        self.inner.fragments.len() - 1
    }

    /// Fragments joined with `${}`, for diagnostics.
    pub fn source(&self) -> String {
        self.inner.fragments.join("${}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_from_fragments() {
        assert_eq!(Template::new(["<p>", "</p>"]).slots(), 1);
        assert_eq!(Template::new(["<p>static</p>"]).slots(), 0);
        assert_eq!(Template::new(Vec::<String>::new()).slots(), 0);
    }

    #[test]
    fn test_clone_shares_identity() {
        let t = Template::new(["a", "b"]);
        assert_eq!(t.id(), t.clone().id());
    }

    #[test]
    fn test_equal_text_distinct_identity() {
        let a = Template::new(["<p>", "</p>"]);
        let b = Template::new(["<p>", "</p>"]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.source(), b.source());
    }

    #[test]
    fn test_source_marks_slots() {
        let t = Template::new(["<p class=\"", "\">", "</p>"]);
        assert_eq!(t.source(), "<p class=\"${}\">${}</p>");
    }
}

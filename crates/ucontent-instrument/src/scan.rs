//! Lexical helpers over raw template fragments.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `name=`, `name="` or `name='` at the very end of a fragment.
pub(crate) static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s\\>"'=]+)\s*=\s*(['"]?)$"#).expect("attribute pattern is valid")
});

/// A fragment ending inside an open tag.
static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<[a-z][^>]+$").expect("open tag pattern is valid"));

/// A fragment whose last tag is closed.
static CLOSED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">[^<>]*$").expect("closed tag pattern is valid"));

static SELF_CLOSING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<([a-z]+[a-z0-9:._-]*)([^>]*?)(/>)").expect("self-closing pattern is valid")
});

static VOID_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:area|base|br|col|embed|hr|img|input|keygen|link|menuitem|meta|param|source|track|wbr)$",
    )
    .expect("void element pattern is valid")
});

/// Whether the slot after `fragments[i - 1]` sits inside a tag.
///
/// Walks back through earlier fragments until one either ends in an open tag
/// or has its last tag closed.
pub(crate) fn inside_tag(fragments: &[String], mut i: usize) -> bool {
    while i > 0 {
        i -= 1;
        let fragment = &fragments[i];
        if OPEN_TAG.is_match(fragment) {
            return true;
        }
        if CLOSED_TAG.is_match(fragment) {
            return false;
        }
    }
    false
}

/// Rewrite `<tag .../>` as `<tag ...></tag>` for every non-void element.
pub(crate) fn expand_self_closing(markup: &str) -> String {
    SELF_CLOSING
        .replace_all(markup, |caps: &Captures<'_>| {
            let name = &caps[1];
            if VOID_ELEMENT.is_match(name) {
                caps[0].to_string()
            } else {
                format!("<{name}{}></{name}>", caps[2].trim_end())
            }
        })
        .into_owned()
}

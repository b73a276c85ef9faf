//! The instrumentation seam.
//!
//! An instrumenter turns a template's raw fragments into one markup string in
//! which every slot is represented by exactly one marker (see [`crate::compiler`]),
//! in slot order. The default implementation lives in the `ucontent-instrument`
//! crate.

use crate::error::Result;

/// Rewrites raw template fragments into canonical markup with placeholder markers.
pub trait Instrument: Send + Sync {
    /// `fragments.len() - 1` markers must appear in the output, numbered from zero.
    fn instrument(&self, fragments: &[String], prefix: &str) -> Result<String>;

    /// Names the markup this instrumenter produces.
    ///
    /// Two instrumenters that can turn the same fragments into different markup
    /// must report different variants; renderers sharing a
    /// [`TemplateCache`](crate::cache::TemplateCache) keep one update list per
    /// template and variant.
    fn variant(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Treats every slot as a text node: `fragment <!--marker--> fragment ...`.
///
/// Useful for plain-text templates and for tests; attributes are never detected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOnly;

impl Instrument for TextOnly {
    fn instrument(&self, fragments: &[String], prefix: &str) -> Result<String> {
        let mut out = String::new();
        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                out.push_str(&format!("<!--{prefix}{}-->", i - 1));
            }
            out.push_str(fragment);
        }
        Ok(out)
    }

    fn variant(&self) -> String {
        "text-only".into()
    }
}

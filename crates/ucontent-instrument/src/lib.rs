//! Default instrumentation step for ucontent.
//!
//! [`MarkupInstrumenter`] joins a template's raw fragments into one markup string,
//! replacing every slot with a marker the core compiler understands:
//!
//! - a slot right after `name=`, `name="` or `name='` inside an open tag becomes
//!   ` {prefix}{N}="name"` (the template's own quote is kept; when the template
//!   left the value unquoted, `"` is used)
//! - any other slot becomes `<!--{prefix}{N}-->`
//!
//! The result is trimmed, and unless SVG mode is on, self-closing non-void
//! elements such as `<div/>` are expanded to `<div></div>`.
//!
//! The markup is trusted: quotes inside attribute names and markers nested in
//! comments are not validated.

mod scan;

use ucontent_core::config::RendererConfig;
use ucontent_core::error::Result;
use ucontent_core::instrument::Instrument;
use ucontent_core::Renderer;

/// Markup-aware instrumenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupInstrumenter {
    svg: bool,
}

impl MarkupInstrumenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep self-closing tags as written.
    pub fn svg(mut self, svg: bool) -> Self {
        self.svg = svg;
        self
    }

    pub fn from_config(config: &RendererConfig) -> Self {
        Self::new().svg(config.svg)
    }
}

impl Instrument for MarkupInstrumenter {
    fn instrument(&self, fragments: &[String], prefix: &str) -> Result<String> {
        let mut out = String::new();

        for i in 1..fragments.len() {
            let fragment = &fragments[i - 1];
            let slot = i - 1;
            match scan::ATTR.captures(fragment) {
                Some(caps) if scan::inside_tag(fragments, i) => {
                    let start = caps.get(0).map_or(fragment.len(), |m| m.start());
                    let name = &caps[1];
                    out.push_str(&fragment[..start]);
                    match &caps[2] {
                        "" => out.push_str(&format!("{prefix}{slot}=\"{name}\"")),
                        quote => out.push_str(&format!("{prefix}{slot}={quote}{name}")),
                    }
                }
                _ => {
                    out.push_str(fragment);
                    out.push_str(&format!("<!--{prefix}{slot}-->"));
                }
            }
        }
        if let Some(last) = fragments.last() {
            out.push_str(last);
        }

        let markup = out.trim();
        tracing::trace!(
            slots = fragments.len().saturating_sub(1),
            len = markup.len(),
            "instrumented template"
        );
        if self.svg {
            Ok(markup.to_string())
        } else {
            Ok(scan::expand_self_closing(markup))
        }
    }

    fn variant(&self) -> String {
        if self.svg {
            "markup+svg".into()
        } else {
            "markup".into()
        }
    }
}

/// Build a [`Renderer`] that instruments with [`MarkupInstrumenter`], honouring
/// `config.svg`.
pub fn renderer(config: RendererConfig) -> Result<Renderer> {
    let instrumenter = MarkupInstrumenter::from_config(&config);
    Renderer::with_config(instrumenter, config)
}

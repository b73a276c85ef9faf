//! Render entry point.
//!
//! [`Renderer`] ties the pieces together: it instruments a [`Template`] with its
//! marker prefix, compiles the markup into an [`UpdateList`] through the
//! [`TemplateCache`], then applies each update to its value.
//!
//! ## Usage
//!
//! ```ignore
//! use ucontent_core::{Renderer, Template, Value};
//! use ucontent_instrument::MarkupInstrumenter;
//!
//! let renderer = Renderer::new(MarkupInstrumenter::new())?;
//! let card = Template::new(["<p class=\"", "\">", "</p>"]);
//! let html = renderer.render(&card, &["a&b".into(), "<x>".into()])?;
//! assert_eq!(html.as_str(), r#"<p class="a&amp;b">&lt;x&gt;</p>"#);
//! ```
//!
//! The result is an `Html` [`Chunk`], so it can be passed as a value to another
//! template and is emitted there verbatim.

use std::sync::Arc;

use crate::cache::TemplateCache;
use crate::chunk::{Chunk, Minifier, Verbatim};
use crate::compiler::{compile, MarkerPattern, UpdateList};
use crate::config::RendererConfig;
use crate::error::{Result, UcontentError};
use crate::instrument::Instrument;
use crate::template::Template;
use crate::value::Value;

/// Renders templates, compiling each one at most once.
pub struct Renderer {
    config: RendererConfig,
    prefix: String,
    pattern: MarkerPattern,
    cache: Arc<TemplateCache>,
    instrumenter: Box<dyn Instrument>,
    variant: String,
    minifier: Arc<dyn Minifier>,
}

impl Renderer {
    /// Create a renderer with the default configuration and a private cache.
    pub fn new(instrumenter: impl Instrument + 'static) -> Result<Self> {
        Self::with_config(instrumenter, RendererConfig::default())
    }

    pub fn with_config(
        instrumenter: impl Instrument + 'static,
        config: RendererConfig,
    ) -> Result<Self> {
        let prefix = config.prefix();
        let pattern = MarkerPattern::new(&prefix)?;
        let variant = instrumenter.variant();
        Ok(Self {
            config,
            prefix,
            pattern,
            cache: Arc::new(TemplateCache::new()),
            instrumenter: Box::new(instrumenter),
            variant,
            minifier: Arc::new(Verbatim),
        })
    }

    /// Share `cache` with other renderers.
    ///
    /// Renderers whose instrumenters report different variants keep separate
    /// update lists for the same template.
    pub fn with_cache(mut self, cache: Arc<TemplateCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Minifier attached to rendered chunks, and applied when `config.minify` is set.
    pub fn with_minifier(mut self, minifier: Arc<dyn Minifier>) -> Self {
        self.minifier = minifier;
        self
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn cache(&self) -> &Arc<TemplateCache> {
        &self.cache
    }

    /// Look up the update list of `template`, compiling it on first use.
    pub fn compile(&self, template: &Template) -> Result<Arc<UpdateList>> {
        self.cache.get_or_compile(template, &self.variant, |t| {
            let markup = self.instrumenter.instrument(t.fragments(), &self.prefix)?;
            compile(&markup, t.slots(), &t.source(), &self.pattern)
        })
    }

    /// Render `template` with one value per slot.
    pub fn render(&self, template: &Template, values: &[Value]) -> Result<Chunk> {
        if values.len() != template.slots() {
            tracing::warn!(
                template = %template.id(),
                expected = template.slots(),
                found = values.len(),
                "wrong number of values for template"
            );
            return Err(UcontentError::ValueCount {
                template: template.source(),
                expected: template.slots(),
                found: values.len(),
            });
        }

        let updates = self.compile(template).map_err(|e| {
            tracing::warn!(template = %template.id(), error = %e, "template failed to compile");
            e
        })?;

        let chunk = Chunk::html(updates.render(values)).with_minifier(Arc::clone(&self.minifier));
        if self.config.minify {
            Ok(Chunk::html(chunk.min()).with_minifier(Arc::clone(&self.minifier)))
        } else {
            Ok(chunk)
        }
    }

    /// [`Renderer::render`], returning the markup as a `String`.
    pub fn render_to_string(&self, template: &Template, values: &[Value]) -> Result<String> {
        Ok(self.render(template, values)?.into_string())
    }
}

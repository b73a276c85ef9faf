//! Core library for ucontent, a minimal HTML templating engine.
//!
//! A template is a list of static fragments with dynamic slots between them. The
//! first time a template is rendered it is instrumented (each slot replaced by a
//! marker), and the markup is compiled into one update function per slot. The
//! compiled [`compiler::UpdateList`] is cached by template identity, so later
//! renders only run the updates.
//!
//! Each slot is classified by where its marker sits:
//! - text node: the value is coerced by [`value::coerce`] and escaped unless trusted
//! - `name=${v}`: quoted, escaped attribute; omitted for null
//! - `.name=${v}`: boolean attribute (`true` gives a bare name, `false`/null nothing)
//! - `onname=${v}`: kept only for string handlers
//! - `data=${r}` / `aria=${r}`: one `data-*` / `aria-*` attribute per record key
//!
//! Instrumentation is pluggable via [`instrument::Instrument`]; the
//! [`ucontent_instrument`](https://docs.rs/ucontent-instrument) crate provides the
//! markup-aware default.

pub mod attribute;
pub mod cache;
pub mod chunk;
pub mod compiler;
pub mod config;
pub mod error;
pub mod escape;
pub mod expand;
pub mod instrument;
pub mod renderer;
pub mod template;
pub mod value;

pub use chunk::{Chunk, ChunkKind};
pub use config::RendererConfig;
pub use error::{Result, UcontentError};
pub use renderer::Renderer;
pub use template::Template;
pub use value::{Record, Value};

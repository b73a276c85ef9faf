//! Interpolation classifier and compiler.
//!
//! The instrumentation step marks every dynamic slot in the template markup with
//! one of two markers:
//!
//! ```text
//! <!--{prefix}{N}-->             text node
//!  {prefix}{N}="{attribute}"     attribute (either quote style)
//! ```
//!
//! [`compile`] scans the markup left to right with a single [`MarkerPattern`],
//! classifies each marker into a [`Slot`], and produces one [`Update`] per slot.
//! Each update owns the static markup preceding its marker; the last one also owns
//! the trailing markup after the final marker.

use regex::{Captures, Regex};

use crate::attribute::{render_attribute, Quote};
use crate::error::{Result, UcontentError};
use crate::expand;
use crate::value::{coerce, Value};

/// Matches either marker form for a given prefix.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Build the pattern for `prefix`. The prefix is matched literally.
    ///
    /// Capture groups: 1 text index, 2 attribute index, 3 single-quoted name,
    /// 4 double-quoted name.
    pub fn new(prefix: &str) -> Result<Self> {
        let p = regex::escape(prefix);
        let regex = Regex::new(&format!(
            r#"<!--{p}(\d+)-->|\s*{p}(\d+)=(?:'([^']+)'|"([^"]+)")"#
        ))?;
        Ok(Self { regex })
    }

    /// The compiled regular expression.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

/// Syntactic role of a placeholder, decided once at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// `<!--marker-->` between elements.
    Text,
    /// `data=${record}`
    Data,
    /// `aria=${record}`
    Aria,
    /// `.name=${value}`, name stored lowercased without the dot.
    Property { name: String, quote: Quote },
    /// `onname=${value}`, only string values are kept.
    Event { name: String, quote: Quote },
    /// Any other attribute.
    Attribute { name: String, quote: Quote },
}

impl Slot {
    /// Classify an attribute marker by its attribute name.
    pub fn classify(name: &str, quote: Quote) -> Self {
        if name == "data" {
            Self::Data
        } else if name == "aria" {
            Self::Aria
        } else if let Some(prop) = name.strip_prefix('.') {
            Self::Property {
                name: prop.to_lowercase(),
                quote,
            }
        } else if name.starts_with("on") {
            Self::Event {
                name: name.to_string(),
                quote,
            }
        } else {
            Self::Attribute {
                name: name.to_string(),
                quote,
            }
        }
    }

    /// Render `value` for this slot, without surrounding static markup.
    pub fn render(&self, value: &Value) -> String {
        match self {
            Self::Text => coerce(value),
            Self::Data => match value {
                Value::Record(record) => expand::data(record),
                other => skip_non_record("data", other),
            },
            Self::Aria => match value {
                Value::Record(record) => expand::aria(record),
                other => skip_non_record("aria", other),
            },
            Self::Property { name, quote } => match value {
                Value::Null | Value::Bool(false) => String::new(),
                Value::Bool(true) => format!(" {name}"),
                other => render_attribute(name, *quote, &other.stringify()),
            },
            Self::Event { name, quote } => match value {
                Value::Text(handler) => render_attribute(name, *quote, handler),
                _ => String::new(),
            },
            Self::Attribute { name, quote } => match value {
                Value::Null => String::new(),
                other => render_attribute(name, *quote, &other.stringify()),
            },
        }
    }
}

fn skip_non_record(attribute: &str, value: &Value) -> String {
    if !value.is_null() {
        tracing::debug!(attribute, ?value, "non-record value in expander slot, emitting nothing");
    }
    String::new()
}

/// One compiled update function.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pre: String,
    slot: Option<Slot>,
    post: String,
}

impl Update {
    /// `pre + render(value) + post`. A static update ignores `value`.
    pub fn apply(&self, value: &Value) -> String {
        let mut out = self.pre.clone();
        if let Some(slot) = &self.slot {
            out.push_str(&slot.render(value));
        }
        out.push_str(&self.post);
        out
    }

    /// Classification of the slot, `None` for the update of a static template.
    pub fn slot(&self) -> Option<&Slot> {
        self.slot.as_ref()
    }

    /// Whether this update ignores its value.
    pub fn is_static(&self) -> bool {
        self.slot.is_none()
    }
}

/// Update functions of a template, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateList {
    updates: Vec<Update>,
}

impl UpdateList {
    /// Number of updates. A static template has exactly one.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Updates in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Update> {
        self.updates.iter()
    }

    /// Number of dynamic slots. Zero for a fully static template.
    pub fn slots(&self) -> usize {
        self.updates.iter().filter(|u| !u.is_static()).count()
    }

    /// Apply each update to its value and concatenate in source order.
    ///
    /// Missing values render as [`Value::Null`]; callers check counts beforehand.
    pub fn render(&self, values: &[Value]) -> String {
        self.updates
            .iter()
            .enumerate()
            .map(|(i, update)| update.apply(values.get(i).unwrap_or(&Value::Null)))
            .collect()
    }
}

/// Compile instrumented `markup` into its update list.
///
/// `template` is the template's source text, used only in the shape error.
pub fn compile(
    markup: &str,
    expected: usize,
    template: &str,
    pattern: &MarkerPattern,
) -> Result<UpdateList> {
    let html = markup.trim();
    let mut updates = Vec::new();
    let mut last = 0;

    for caps in pattern.as_regex().captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let pre = html[last..whole.start()].to_string();
        last = whole.end();
        updates.push(Update {
            pre,
            slot: Some(classify_match(&caps)),
            post: String::new(),
        });
    }

    if updates.len() != expected {
        return Err(UcontentError::TemplateShape {
            template: template.to_string(),
            expected,
            found: updates.len(),
        });
    }

    match updates.last_mut() {
        Some(tail) => tail.post = html[last..].to_string(),
        None => updates.push(Update {
            pre: html.to_string(),
            slot: None,
            post: String::new(),
        }),
    }

    Ok(UpdateList { updates })
}

fn classify_match(caps: &Captures<'_>) -> Slot {
    if caps.get(1).is_some() {
        return Slot::Text;
    }
    match (caps.get(3), caps.get(4)) {
        (Some(name), _) => Slot::classify(name.as_str(), Quote::Single),
        (None, Some(name)) => Slot::classify(name.as_str(), Quote::Double),
        (None, None) => Slot::Text,
    }
}

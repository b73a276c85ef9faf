//! Dynamic values and their coercion to HTML text.
//!
//! A [`Value`] is decided once, when the caller builds it (or converts from
//! `serde_json::Value`), and every consumer matches on it exhaustively.

use crate::chunk::{Chunk, ChunkKind};
use crate::escape::escape;

/// A dynamic value supplied for one template slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Escaped when interpolated.
    Text(String),
    /// Emitted in canonical decimal form, never escaped.
    Number(f64),
    /// Emitted as `true` / `false`, never escaped.
    Bool(bool),
    /// Absent value. Emits nothing.
    Null,
    /// Kind-tagged buffer, see [`crate::chunk`].
    Chunk(Chunk),
    /// Each element coerced in order and concatenated without separator.
    List(Vec<Value>),
    /// Key/value pairs for `data` and `aria` slots.
    Record(Record),
    /// Anything the caller has already stringified; escaped like text.
    Other(String),
}

/// Ordered key/value pairs, in insertion order. Repeated keys are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(Vec<(String, Value)>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Builder form of [`Record::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Value {
    /// Generic string conversion, unescaped.
    ///
    /// Used by attribute slots, which escape the result themselves and never
    /// trust a chunk's kind.
    pub fn stringify(&self) -> String {
        match self {
            Self::Text(s) | Self::Other(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Bool(b) => b.to_string(),
            Self::Null | Self::Record(_) => String::new(),
            Self::Chunk(chunk) => chunk.as_str().to_string(),
            Self::List(items) => items
                .iter()
                .map(Value::stringify)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Coerce a value into its HTML text representation.
///
/// Strings and unrecognised values are escaped; numbers and booleans are not.
/// `Html` and `Raw` chunks are trusted verbatim, `Css` and `Js` chunks are
/// minified first. Never fails.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::Text(s) => escape(s).into_owned(),
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Chunk(chunk) => match chunk.kind() {
            ChunkKind::Html | ChunkKind::Raw => chunk.as_str().to_string(),
            ChunkKind::Css | ChunkKind::Js => chunk.min(),
        },
        Value::List(items) => items.iter().map(coerce).collect(),
        Value::Record(record) => {
            tracing::debug!(keys = record.len(), "record interpolated as text, emitting nothing");
            String::new()
        }
        Value::Other(s) => escape(s).into_owned(),
    }
}

/// Canonical decimal form: integral values print without a fraction.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".into()
        } else {
            "-Infinity".into()
        }
    } else if n == 0.0 {
        "0".into()
    } else {
        n.to_string()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);

impl From<f32> for Value {
    /// Widened through the shortest decimal form, so `0.1f32` stays `0.1`.
    fn from(n: f32) -> Self {
        Self::Number(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<Chunk> for Value {
    fn from(chunk: Chunk) -> Self {
        Self::Chunk(chunk)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Record(map.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let out = coerce(&Value::from("<script>alert('x') & \"y\"</script>"));
        for c in ['<', '>', '"', '\''] {
            assert!(!out.contains(c), "raw {c} in {out}");
        }
        assert!(out.contains("&amp;"));
    }

    #[test]
    fn test_numbers_and_booleans_unescaped() {
        assert_eq!(coerce(&Value::from(42)), "42");
        assert_eq!(coerce(&Value::from(1.5)), "1.5");
        assert_eq!(coerce(&Value::from(-3.0)), "-3");
        assert_eq!(coerce(&Value::from(true)), "true");
        assert_eq!(coerce(&Value::from(false)), "false");
    }

    #[test]
    fn test_f32_keeps_shortest_form() {
        assert_eq!(coerce(&Value::from(0.1f32)), "0.1");
        assert_eq!(coerce(&Value::from(2.5f32)), "2.5");
        assert_eq!(coerce(&Value::from(f32::INFINITY)), "Infinity");
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(coerce(&Value::Number(f64::NAN)), "NaN");
        assert_eq!(coerce(&Value::Number(f64::INFINITY)), "Infinity");
        assert_eq!(coerce(&Value::Number(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(coerce(&Value::Number(-0.0)), "0");
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(coerce(&Value::Null), "");
        assert_eq!(coerce(&Value::from(None::<&str>)), "");
    }

    #[test]
    fn test_trusted_chunks_verbatim() {
        assert_eq!(coerce(&Chunk::html("<b>x</b>").into()), "<b>x</b>");
        assert_eq!(coerce(&Chunk::raw("<i>&nbsp;</i>").into()), "<i>&nbsp;</i>");
    }

    #[test]
    fn test_css_and_js_chunks_minified() {
        assert_eq!(coerce(&Chunk::css("\n  a{color:red}\n").into()), "a{color:red}");
        assert_eq!(coerce(&Chunk::js("  f(1<2)  ").into()), "f(1<2)");
    }

    #[test]
    fn test_list_concatenates_in_order() {
        let list = Value::List(vec![
            Value::from("<a>"),
            Value::from(1),
            Chunk::html("<br>").into(),
            Value::Null,
            Value::from(vec!["x", "y"]),
        ]);
        assert_eq!(coerce(&list), "&lt;a&gt;1<br>xy");
    }

    #[test]
    fn test_other_is_escaped() {
        assert_eq!(coerce(&Value::Other("a<b".into())), "a&lt;b");
    }

    #[test]
    fn test_record_in_text_context_is_empty() {
        let record = Record::new().with("id", 1);
        assert_eq!(coerce(&record.into()), "");
    }

    #[test]
    fn test_stringify_list_joins_with_comma() {
        assert_eq!(Value::from(vec![1, 2, 3]).stringify(), "1,2,3");
        assert_eq!(Value::from(Chunk::html("<b>")).stringify(), "<b>");
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let json = serde_json::json!({ "zeta": 1, "alpha": "two", "mid": null });
        let Value::Record(record) = Value::from(json) else {
            panic!("expected record");
        };
        let keys: Vec<&str> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_record_keeps_repeated_keys() {
        let record = Record::new().with("a", 1).with("a", 2);
        assert_eq!(record.len(), 2);
    }
}

//! `data` and `aria` attribute expansion.
//!
//! A `data=${record}` slot becomes one `data-*` attribute per record key, and an
//! `aria=${record}` slot one `aria-*` attribute per key, in the record's own order.
//! Keys are hyphenized; values are stringified and escaped, always double-quoted.

use crate::escape::{escape, hyphenize};
use crate::value::Record;

/// Render every key of `record` as ` data-{key}="{value}"`.
pub fn data(record: &Record) -> String {
    record
        .iter()
        .map(|(key, value)| {
            format!(" data-{}=\"{}\"", hyphenize(key), escape(&value.stringify()))
        })
        .collect()
}

/// Render every key of `record` as ` aria-{key}="{value}"`.
///
/// The `role` key is emitted as a plain ` role="{value}"`.
pub fn aria(record: &Record) -> String {
    record.iter().map(|(key, value)| aria_attribute(key, &value.stringify())).collect()
}

fn aria_attribute(key: &str, value: &str) -> String {
    let value = escape(value);
    if key == "role" {
        format!(" role=\"{value}\"")
    } else {
        format!(" aria-{}=\"{value}\"", hyphenize(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_data_in_insertion_order() {
        let record = Record::new().with("userId", 7).with("name", "a\"b");
        assert_eq!(data(&record), r#" data-user-id="7" data-name="a&quot;b""#);
    }

    #[test]
    fn test_aria_role_has_no_prefix() {
        let record = Record::new()
            .with("role", "button")
            .with("labelledBy", "title")
            .with("hidden", false);
        assert_eq!(
            aria(&record),
            r#" role="button" aria-labelled-by="title" aria-hidden="false""#
        );
    }

    #[test]
    fn test_repeated_keys_repeat() {
        let record = Record::new().with("x", 1).with("x", 2);
        assert_eq!(data(&record), r#" data-x="1" data-x="2""#);
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(data(&Record::new()), "");
        assert_eq!(aria(&Record::new()), "");
    }

    #[test]
    fn test_null_value_renders_empty_string() {
        let record = Record::new().with("note", Value::Null);
        assert_eq!(data(&record), r#" data-note="""#);
    }
}

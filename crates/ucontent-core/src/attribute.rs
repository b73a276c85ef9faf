//! Quoted attribute rendering.

use crate::escape::escape;

/// Quoting style captured from the template, preserved byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    pub fn as_char(&self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }

    /// Map a captured quote character. Anything but `'` is treated as `"`.
    pub fn from_char(c: char) -> Self {
        if c == '\'' {
            Self::Single
        } else {
            Self::Double
        }
    }
}

/// Render ` name=<q>escaped value<q>`.
///
/// The value is always escaped, whatever it was coerced from.
pub fn render_attribute(name: &str, quote: Quote, value: &str) -> String {
    let q = quote.as_char();
    format!(" {name}={q}{}{q}", escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quoted() {
        assert_eq!(render_attribute("class", Quote::Double, "a&b"), r#" class="a&amp;b""#);
    }

    #[test]
    fn test_single_quote_preserved() {
        assert_eq!(render_attribute("title", Quote::Single, "hi"), " title='hi'");
    }

    #[test]
    fn test_value_cannot_break_out() {
        let out = render_attribute("title", Quote::Single, "x' onload='evil()");
        assert_eq!(out.matches('\'').count(), 2);
    }

    #[test]
    fn test_quote_from_char() {
        assert_eq!(Quote::from_char('\''), Quote::Single);
        assert_eq!(Quote::from_char('"'), Quote::Double);
    }
}

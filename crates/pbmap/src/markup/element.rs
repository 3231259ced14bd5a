use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::error::MapError;

/// Value written for an unset entity reference.
pub const NO_REFERENCE: &str = "-1";

/// Builds one self-closing element with attributes in insertion order.
///
/// Every value goes through [`escape_attribute`], so uids or model names that
/// contain quotes, ampersands or line breaks come back unchanged on import.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: &'static str,
    attributes: Vec<(Cow<'static, str>, String)>,
}

impl ElementBuilder {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        self.attributes.push((name.into(), value.to_string()));
        self
    }

    pub fn reference(self, name: impl Into<Cow<'static, str>>, target: Option<&str>) -> Self {
        self.attr(name, target.unwrap_or(NO_REFERENCE))
    }

    /// Fails when a value holds a character XML 1.0 cannot carry, even
    /// escaped; such markup would not import again.
    pub fn finish(self) -> Result<String, MapError> {
        let mut out = String::with_capacity(16 + self.attributes.len() * 16);
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            if let Some(bad) = value.chars().find(|ch| !is_xml_char(*ch)) {
                return Err(MapError::invalid_argument(
                    "export",
                    format!("{}.{}", self.tag, name),
                    format!("character U+{:04X} cannot be written to map markup", bad as u32),
                ));
            }
            // Writing into a String cannot fail.
            let _ = write!(out, " {}=\"{}\"", name, escape_attribute(value));
        }
        out.push_str(" />");
        Ok(out)
    }
}

/// `Char` production of XML 1.0. Surrogates are not representable in `char`.
fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|ch| matches!(ch, '&' | '<' | '>' | '"' | '\'' | '\n' | '\r' | '\t'))
    {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // Attribute-value normalization would turn these into spaces.
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

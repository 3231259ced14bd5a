use roxmltree::Node;

use crate::error::{MapError, SourceLocation};
use crate::model::Kind;

use super::element::NO_REFERENCE;

/// Typed access to the attributes of one imported element.
///
/// Absent attributes fall back to the supplied default; present attributes
/// that fail coercion abort with [`MapError::MalformedAttribute`].
#[derive(Debug, Clone, Copy)]
pub struct AttributeReader<'a, 'input> {
    node: Node<'a, 'input>,
    kind: Kind,
    element_index: usize,
    location: SourceLocation,
}

impl<'a, 'input> AttributeReader<'a, 'input> {
    pub(crate) fn new(
        node: Node<'a, 'input>,
        kind: Kind,
        element_index: usize,
        location: SourceLocation,
    ) -> Self {
        Self {
            node,
            kind,
            element_index,
            location,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn raw(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Name of the first attribute in `names` present on the element, else
    /// the first name. Lets older attribute spellings take precedence.
    pub fn first_present<'n>(&self, names: &[&'n str]) -> &'n str {
        names
            .iter()
            .copied()
            .find(|name| self.raw(name).is_some())
            .or_else(|| names.first().copied())
            .unwrap_or_default()
    }

    pub fn uid(&self) -> Result<String, MapError> {
        match self.raw("uid") {
            Some(uid) => Ok(uid.to_string()),
            None => Err(MapError::MissingIdentifier {
                kind: self.kind,
                element_index: self.element_index,
                location: self.location,
            }),
        }
    }

    pub fn int(&self, name: &str, default: i64) -> Result<i64, MapError> {
        let Some(raw) = self.raw(name) else {
            return Ok(default);
        };
        parse_int(raw).ok_or_else(|| self.malformed(name, raw, "integer"))
    }

    pub fn int32(&self, name: &str, default: i32) -> Result<i32, MapError> {
        let Some(raw) = self.raw(name) else {
            return Ok(default);
        };
        parse_int(raw)
            .and_then(|value| i32::try_from(value).ok())
            .ok_or_else(|| self.malformed(name, raw, "32-bit integer"))
    }

    pub fn float(&self, name: &str, default: f64) -> Result<f64, MapError> {
        let Some(raw) = self.raw(name) else {
            return Ok(default);
        };
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.malformed(name, raw, "number"))
    }

    pub fn boolean(&self, name: &str, default: bool) -> Result<bool, MapError> {
        let Some(raw) = self.raw(name) else {
            return Ok(default);
        };
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
            Ok(false)
        } else {
            Err(self.malformed(name, raw, "boolean"))
        }
    }

    pub fn text(&self, name: &str, default: &str) -> String {
        self.raw(name).unwrap_or(default).to_string()
    }

    /// Reads a uid reference; both a missing attribute and `-1` mean "none".
    pub fn reference(&self, name: &str) -> Option<String> {
        self.raw(name)
            .filter(|value| *value != NO_REFERENCE)
            .map(ToString::to_string)
    }

    fn malformed(&self, attribute: &str, value: &str, expected: &'static str) -> MapError {
        MapError::MalformedAttribute {
            kind: self.kind,
            attribute: attribute.to_string(),
            value: value.to_string(),
            expected,
            element_index: self.element_index,
            location: self.location,
        }
    }
}

/// Accepts plain integers and integral decimals such as `12.0`.
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use roxmltree::Document;

    use super::*;
    use crate::error::MapErrorCode;

    fn with_reader<T>(markup: &str, f: impl FnOnce(AttributeReader<'_, '_>) -> T) -> T {
        let doc = Document::parse(markup).expect("parse");
        let reader = AttributeReader::new(
            doc.root_element(),
            Kind::Door,
            0,
            SourceLocation { line: 1, column: 1 },
        );
        f(reader)
    }

    #[test]
    fn missing_attributes_use_defaults() {
        with_reader("<door uid=\"d\" />", |reader| {
            assert_eq!(reader.int("w", 7).expect("int"), 7);
            assert_eq!(reader.float("maxspeed", 1.5).expect("float"), 1.5);
            assert!(reader.boolean("vis", true).expect("bool"));
            assert_eq!(reader.text("model", "stone"), "stone");
            assert_eq!(reader.reference("attach"), None);
        });
    }

    #[test]
    fn coerces_present_attributes() {
        with_reader(
            r#"<door w="12.0" h="-3" maxspeed="2.5" vis="TRUE" moving="0" attach="-1" model="m" />"#,
            |reader| {
                assert_eq!(reader.int("w", 0).expect("w"), 12);
                assert_eq!(reader.int("h", 0).expect("h"), -3);
                assert_eq!(reader.float("maxspeed", 0.0).expect("speed"), 2.5);
                assert!(reader.boolean("vis", false).expect("vis"));
                assert!(!reader.boolean("moving", true).expect("moving"));
                assert_eq!(reader.reference("attach"), None);
                assert_eq!(reader.text("model", ""), "m");
            },
        );
    }

    #[test]
    fn non_numeric_text_is_malformed() {
        with_reader(r#"<door w="wide" h="1.5" tox="nan" vis="maybe" />"#, |reader| {
            for result in [reader.int("w", 0), reader.int("h", 0)] {
                let err = result.expect_err("int should fail");
                assert_eq!(err.code(), MapErrorCode::MalformedAttribute);
            }
            let err = reader.float("tox", 0.0).expect_err("nan rejected");
            assert_eq!(err.code(), MapErrorCode::MalformedAttribute);
            let err = reader.boolean("vis", false).expect_err("bool");
            match err {
                MapError::MalformedAttribute {
                    attribute, value, ..
                } => {
                    assert_eq!(attribute, "vis");
                    assert_eq!(value, "maybe");
                }
                other => panic!("unexpected error {other:?}"),
            }
        });
    }

    #[test]
    fn first_present_prefers_listed_order() {
        with_reader(r#"<decor u="1" addx="2" at="door_1" />"#, |reader| {
            assert_eq!(reader.first_present(&["addx", "u"]), "addx");
            assert_eq!(reader.first_present(&["addy", "v"]), "addy");
            assert_eq!(reader.first_present(&["at", "attach"]), "at");
            assert_eq!(reader.first_present(&["missing"]), "missing");
        });
    }

    #[test]
    fn missing_uid_is_reported_with_kind() {
        with_reader("<door x=\"1\" />", |reader| {
            let err = reader.uid().expect_err("uid");
            assert_eq!(err.code(), MapErrorCode::MissingIdentifier);
        });
    }
}

//! Decoder for the "qpack" text compression used by the map server.
//!
//! Encoded text replaces frequent markup fragments with short `^x` tokens.
//! Some expansions contain other tokens, so decoding must walk the table from
//! the last entry to the first.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

/// `(expansion, token)` pairs in server order.
pub const QPACK_TABLE: [(&str, &str); 83] = [
    ("^", "[^]"),
    (r#"" /><player x=""#, "^0"),
    (r#"" /><enemy x=""#, "^1"),
    (r#"" /><door x=""#, "^2"),
    (r#"" /><box x=""#, "^3"),
    (r#"" /><gun x=""#, "^4"),
    (r#"" /><pushf x=""#, "^5"),
    (r#"" /><decor x=""#, "^6"),
    (r#"" /><trigger enabled="true"#, "^7"),
    (r#"" /><trigger enabled="false"#, "^8"),
    (r#"" /><timer enabled="true"#, "^9"),
    (r#"" /><timer enabled="false"#, "^a"),
    (r#"" /><inf mark=""#, "^b"),
    (r#" /><bg x=""#, "^c"),
    (r#" /><lamp x=""#, "^d"),
    (r#" /><region x=""#, "^e"),
    (r#"<player x=""#, "^f"),
    (r#"" damage=""#, "^g"),
    (r#"" maxspeed=""#, "^h"),
    (r#"" model="gun_"#, "^i"),
    (r#"" model=""#, "^j"),
    (r#"" botaction=""#, "^k"),
    (r#"" ondeath=""#, "^l"),
    (r#"" actions_"#, "^m"),
    (r#"_targetB=""#, "^n"),
    (r#"_type=""#, "^o"),
    (r#"_targetA=""#, "^p"),
    (r#"" team=""#, "^q"),
    (r#"" side=""#, "^r"),
    (r#"" command=""#, "^s"),
    (r#"" flare=""#, "^t"),
    (r#"" power=""#, "^u"),
    (r#"" moving="true"#, "^w"),
    (r#"" moving="false"#, "^x"),
    (r#"" tarx=""#, "^y"),
    (r#"" tary=""#, "^z"),
    (r#"" tox=""#, "^A"),
    (r#"" toy=""#, "^B"),
    (r#"" hea=""#, "^C"),
    (r#"" hmax=""#, "^D"),
    (r#"" incar=""#, "^E"),
    (r#"" char=""#, "^F"),
    (r#"" maxcalls=""#, "^G"),
    (r#"" vis="false"#, "^H"),
    (r#"" vis="true"#, "^I"),
    (r#"" use_on=""#, "^J"),
    (r#"" use_target=""#, "^K"),
    (r#"" upg="0^"#, "^L"),
    (r#"" upg=""#, "^M"),
    ("^fgun_", "^N"),
    (r#"" addx=""#, "^O"),
    (r#"" addy=""#, "^P"),
    (r#"" y=""#, "^Q"),
    (r#"" w=""#, "^R"),
    (r#"" h=""#, "^S"),
    (r#"" m=""#, "^T"),
    (r#"" at=""#, "^U"),
    (r#"" delay=""#, "^W"),
    (r#"" target=""#, "^X"),
    (r#"" stab=""#, "^Y"),
    (r#"" mark=""#, "^Z"),
    ("0^T0^3", "^_"),
    ("0^x^y0^z0^h1^", "^("),
    ("^m3^o-1^m3^p0^m3^n0^m4^o-1^m4^p0^m4^n0^m5^o-1^m5^p0^m5^n0^m6^o-1^m6^p0^m6^n0^m7^o-1^m7^p0^m7^n0^m8^o-1^m8^p0^m8^n0^m9^o-1^m9^p0^m9^n0^m10^o-1^m10^p0^m10^n0", "^)"),
    ("^m5^o-1^m5^p0^m5^n0^m6^o-1^m6^p0^m6^n0^m7^o-1^m7^p0^m7^n0^m8^o-1^m8^p0^m8^n0^m9^o-1^m9^p0^m9^n0^m10^o-1^m10^p0^m10^n0", "^$"),
    ("^A0^B0^C130^D130^q", "^@"),
    (r#"0^u0.4^t1"^"#, "^~"),
    ("0^Q1", "^!"),
    ("0^R", "^."),
    ("0^S", "^,"),
    ("0^Q-", "^*"),
    ("0^Q", "^-"),
    (r#"" /><water x=""#, "^+"),
    (r#"" forteam=""#, "^;"),
    ("^Ttrue", "^:"),
    ("true", "^?"),
    ("false", "^<"),
    ("^m2^o-1^m2^p0^m2^n0^)", "^>"),
    ("pistol", "^/"),
    ("rifle", "^#"),
    ("shotgun", "^%"),
    ("real_", "^&"),
    ("", "<q."),
];

/// Expands every token, applying the table from index 82 down to 0.
pub fn decode(encoded: &str) -> String {
    QPACK_TABLE
        .iter()
        .rev()
        .fold(encoded.to_string(), |text, (expansion, token)| {
            if text.contains(token) {
                text.replace(token, expansion)
            } else {
                text
            }
        })
}

/// Attribute value in the record view. Values that parse as an integer are
/// kept as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    fn parse(raw: &str) -> Self {
        let value = raw.trim_matches('"');
        match value.parse::<i64>() {
            Ok(number) => FieldValue::Int(number),
            Err(_) => FieldValue::Text(value.to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Loose key/value view of one decoded element.
///
/// Values containing spaces are cut at the first space; this view is meant for
/// quick inspection, use [`crate::MapDocument::import`] for exact data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QpackRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl QpackRecord {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

pub fn parse_records(decoded: &str) -> Vec<QpackRecord> {
    let normalized = decoded.replace(" />", "").replace("[eq]", "=");
    let records = normalized
        .split('<')
        .skip(1)
        .filter_map(|segment| {
            let mut tokens = segment.split_whitespace();
            let kind = tokens.next()?.to_string();
            let fields = tokens
                .map(|token| match token.split_once('=') {
                    Some((key, value)) => {
                        let value = value.split('=').next().unwrap_or_default();
                        (key.to_string(), FieldValue::parse(value))
                    }
                    None => (token.to_string(), FieldValue::Text(String::new())),
                })
                .collect();
            Some(QpackRecord { kind, fields })
        })
        .collect::<Vec<_>>();
    debug!(records = records.len(), "qpack_records_parsed");
    records
}

pub fn decode_records(encoded: &str) -> Vec<QpackRecord> {
    parse_records(&decode(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete_and_tokens_are_unique() {
        let mut tokens = QPACK_TABLE.iter().map(|(_, token)| *token).collect::<Vec<_>>();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), 83);
        assert_eq!(QPACK_TABLE[0], ("^", "[^]"));
        assert_eq!(QPACK_TABLE[82], ("", "<q."));
    }

    #[test]
    fn decoding_runs_from_last_entry_to_first() {
        assert_eq!(decode("^_"), r#"0" m="0" /><box x=""#);

        let ascending = QPACK_TABLE
            .iter()
            .fold("^_".to_string(), |text, (expansion, token)| {
                text.replace(token, expansion)
            });
        assert_eq!(ascending, "0^T0^3");
    }

    #[test]
    fn escaped_caret_and_marker_are_expanded_last() {
        assert_eq!(decode("a[^]b<q."), "a^b");
        assert_eq!(decode("^?^<"), "truefalse");
    }

    #[test]
    fn records_split_types_and_coerce_integers() {
        let decoded = r#"<box x="10" y="-20" w="300" h="20" m="0" /><door uid="d[eq]1" vis="true" loose />"#;
        let records = parse_records(decoded);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "box");
        assert_eq!(records[0].get("y"), Some(&FieldValue::Int(-20)));
        assert_eq!(records[1].kind, "door");
        assert_eq!(
            records[1].get("uid"),
            Some(&FieldValue::Text("d".to_string()))
        );
        assert_eq!(
            records[1].get("vis"),
            Some(&FieldValue::Text("true".to_string()))
        );
        assert_eq!(
            records[1].get("loose"),
            Some(&FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn records_serialize_as_flat_objects() {
        let records = parse_records(r#"<lamp x="1" flare="true" />"#);
        let json = serde_json::to_value(&records).expect("json");
        assert_eq!(
            json,
            serde_json::json!([{ "type": "lamp", "x": 1, "flare": "true" }])
        );
    }
}

//! Triggers: ordered action lists executed by the game.
//!
//! A trigger element holds at most ten action slots. Longer action lists are
//! written as several sibling elements sharing one uid, see [`split`].

mod builder;
mod opcode;
mod split;

use serde::Serialize;

use crate::error::MapError;
use crate::markup::AttributeReader;
use crate::model::{impl_named, impl_positioned, Entity, Kind, NamedEntity};

pub use builder::Operand;
pub use opcode::Opcode;
pub use split::{MAX_SLOTS, SPLIT_CHUNK_LEN};

/// Opcode written into unused slots.
pub const DO_NOTHING_OPCODE: i32 = -1;

/// The action that fills unused slots.
pub const DO_NOTHING: Action = Action {
    opcode: DO_NOTHING_OPCODE,
    args: Vec::new(),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub opcode: i32,
    /// `targetA` and `targetB`, in that order. Never more than two.
    pub args: Vec<String>,
}

impl Action {
    pub fn new(opcode: i32, args: Vec<String>) -> Self {
        Self { opcode, args }
    }

    pub fn do_nothing() -> Self {
        DO_NOTHING
    }

    pub fn known_opcode(&self) -> Option<Opcode> {
        Opcode::from_code(self.opcode)
    }

    pub fn is_do_nothing(&self) -> bool {
        self.opcode == DO_NOTHING_OPCODE
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Trigger {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub enabled: bool,
    pub maxcalls: i64,
    pub actions: Vec<Action>,
}

impl Trigger {
    fn read_slots(reader: &AttributeReader<'_, '_>) -> Result<Vec<Action>, MapError> {
        let mut actions = Vec::new();
        for slot in 1..=MAX_SLOTS {
            let type_attr = format!("actions_{slot}_type");
            match reader.raw(&type_attr) {
                Some(raw) if !raw.trim().is_empty() => {}
                _ => continue,
            }
            let opcode = reader.int32(&type_attr, DO_NOTHING_OPCODE)?;
            let target_a = reader.raw(&format!("actions_{slot}_targetA"));
            let target_b = reader.raw(&format!("actions_{slot}_targetB"));
            let args = match (target_a, target_b) {
                (None, None) => Vec::new(),
                (Some(a), None) => vec![a.to_string()],
                (a, Some(b)) => vec![a.unwrap_or("0").to_string(), b.to_string()],
            };
            actions.push(Action::new(opcode, args));
        }
        while actions.last().is_some_and(Action::is_do_nothing) {
            actions.pop();
        }
        Ok(actions)
    }
}

impl Entity for Trigger {
    fn kind(&self) -> Kind {
        Kind::Trigger
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            enabled: reader.boolean("enabled", false)?,
            maxcalls: reader.int("maxcalls", 0)?,
            actions: Self::read_slots(reader)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        split::render_trigger(self)
    }
}

impl NamedEntity for Trigger {
    const KIND: Kind = Kind::Trigger;

    fn with_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

impl_positioned!(Trigger);
impl_named!(Trigger);

#[cfg(test)]
mod tests {
    use roxmltree::Document;

    use super::*;
    use crate::error::SourceLocation;

    fn import_one(markup: &str) -> Trigger {
        let doc = Document::parse(markup).expect("parse");
        let reader = AttributeReader::new(
            doc.root_element(),
            Kind::Trigger,
            0,
            SourceLocation { line: 1, column: 1 },
        );
        Trigger::from_markup(&reader).expect("trigger")
    }

    #[test]
    fn import_keeps_present_slots_and_drops_padding() {
        let trigger = import_one(
            r#"<trigger uid="t" enabled="true" maxcalls="1"
                actions_1_type="99" actions_1_targetA="other"
                actions_2_type="100" actions_2_targetA="v" actions_2_targetB="5"
                actions_3_type="-1" actions_4_type="-1" actions_5_type="" />"#,
        );
        assert!(trigger.enabled);
        assert_eq!(trigger.maxcalls, 1);
        assert_eq!(
            trigger.actions,
            vec![
                Action::new(99, vec!["other".to_string()]),
                Action::new(100, vec!["v".to_string(), "5".to_string()]),
            ]
        );
    }

    #[test]
    fn target_b_without_target_a_fills_zero() {
        let trigger = import_one(r#"<trigger uid="t" actions_3_type="42" actions_3_targetB="1" />"#);
        assert_eq!(
            trigger.actions,
            vec![Action::new(42, vec!["0".to_string(), "1".to_string()])]
        );
    }

    #[test]
    fn interior_do_nothing_is_kept() {
        let trigger = import_one(
            r#"<trigger uid="t" actions_1_type="-1" actions_2_type="160" actions_2_targetA="msg" />"#,
        );
        assert_eq!(trigger.actions.len(), 2);
        assert_eq!(trigger.actions[0], DO_NOTHING);
        assert_eq!(Action::do_nothing(), Action::new(-1, Vec::new()));
        assert_eq!(trigger.actions[1].known_opcode(), Some(Opcode::GetMessage));
    }
}

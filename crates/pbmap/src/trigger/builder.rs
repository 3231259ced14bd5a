use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::error::MapError;
use crate::model::{ChatColor, Door, Named, Region, Timer};

use super::{Action, Opcode, Trigger};

/// Characters the game refuses in synchronized variable names.
const SYNC_RESERVED: [char; 5] = ['#', '&', ';', '|', '='];

/// Second argument of the builders that exist in a "by value" and a
/// "by variable" flavour. The variant picks the opcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Operand {
    Variable(String),
    Literal(String),
}

impl Operand {
    pub fn variable(name: impl Into<String>) -> Self {
        Operand::Variable(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Operand::Literal(text.into())
    }
}

macro_rules! literal_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Literal(value.to_string())
                }
            }
        )*
    };
}

literal_from_number!(i32, i64, u32, u64, usize, f64);

fn variable_name(operation: &'static str, name: &str) -> Result<String, MapError> {
    if name.is_empty() {
        return Err(MapError::invalid_argument(
            operation,
            name,
            "variable name is empty",
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(MapError::invalid_argument(
            operation,
            name,
            "variable name contains whitespace",
        ));
    }
    Ok(name.to_string())
}

fn entity_ref(operation: &'static str, entity: &impl Named) -> Result<String, MapError> {
    let uid = entity.uid();
    if uid.trim().is_empty() {
        return Err(MapError::invalid_argument(
            operation,
            uid,
            "referenced entity has no uid",
        ));
    }
    Ok(uid.to_string())
}

fn numeric(operation: &'static str, text: &str) -> Result<String, MapError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(text.trim().to_string()),
        _ => Err(MapError::invalid_argument(
            operation,
            text,
            "expected a number",
        )),
    }
}

fn operand(
    operation: &'static str,
    operand: Operand,
    by_value: Opcode,
    by_variable: Opcode,
    numeric_literal: bool,
) -> Result<(Opcode, String), MapError> {
    match operand {
        Operand::Variable(name) => Ok((by_variable, variable_name(operation, &name)?)),
        Operand::Literal(text) if numeric_literal => Ok((by_value, numeric(operation, &text)?)),
        Operand::Literal(text) => Ok((by_value, text)),
    }
}

impl Trigger {
    pub fn push_action(&mut self, opcode: i32, args: Vec<String>) -> Result<&mut Self, MapError> {
        if args.len() > 2 {
            return Err(MapError::invalid_argument(
                "push_action",
                args.join(", "),
                format!("an action takes at most 2 arguments, got {}", args.len()),
            ));
        }
        self.actions.push(Action::new(opcode, args));
        Ok(self)
    }

    fn emit(&mut self, opcode: Opcode, args: Vec<String>) -> Result<&mut Self, MapError> {
        self.push_action(opcode.code(), args)
    }

    pub fn do_nothing(&mut self) -> Result<&mut Self, MapError> {
        self.emit(Opcode::DoNothing, Vec::new())
    }

    pub fn move_door(&mut self, door: &Door, region: &Region) -> Result<&mut Self, MapError> {
        let args = vec![
            entity_ref("move_door", door)?,
            entity_ref("move_door", region)?,
        ];
        self.emit(Opcode::MoveDoorToRegion, args)
    }

    pub fn move_region(&mut self, region: &Region, target: &Region) -> Result<&mut Self, MapError> {
        let args = vec![
            entity_ref("move_region", region)?,
            entity_ref("move_region", target)?,
        ];
        self.emit(Opcode::MoveRegionToRegion, args)
    }

    pub fn change_speed(&mut self, door: &Door, speed: f64) -> Result<&mut Self, MapError> {
        let args = vec![
            entity_ref("change_speed", door)?,
            numeric("change_speed", &speed.to_string())?,
        ];
        self.emit(Opcode::ChangeDoorSpeed, args)
    }

    pub fn activate(&mut self, timer: &Timer) -> Result<&mut Self, MapError> {
        let args = vec![entity_ref("activate", timer)?];
        self.emit(Opcode::ActivateTimer, args)
    }

    pub fn deactivate(&mut self, timer: &Timer) -> Result<&mut Self, MapError> {
        let args = vec![entity_ref("deactivate", timer)?];
        self.emit(Opcode::DeactivateTimer, args)
    }

    pub fn send_chat_message(
        &mut self,
        text: impl Into<String>,
        color: ChatColor,
    ) -> Result<&mut Self, MapError> {
        self.emit(Opcode::ShowChatText, vec![text.into(), color.to_string()])
    }

    pub fn switch_level(&mut self, map_id: &str) -> Result<&mut Self, MapError> {
        if map_id.trim().is_empty() {
            return Err(MapError::invalid_argument(
                "switch_level",
                map_id,
                "level id is empty",
            ));
        }
        self.emit(Opcode::SwitchLevel, vec![map_id.to_string()])
    }

    /// Executes another trigger. Use the uid form to call `self`.
    pub fn execute(&mut self, target: &Trigger) -> Result<&mut Self, MapError> {
        let uid = entity_ref("execute", target)?;
        self.emit(Opcode::ExecuteTrigger, vec![uid])
    }

    pub fn execute_uid(&mut self, uid: &str) -> Result<&mut Self, MapError> {
        if uid.trim().is_empty() {
            return Err(MapError::invalid_argument(
                "execute",
                uid,
                "referenced entity has no uid",
            ));
        }
        self.emit(Opcode::ExecuteTrigger, vec![uid.to_string()])
    }

    pub fn register_chat_listener(&mut self, listener: &Trigger) -> Result<&mut Self, MapError> {
        let uid = entity_ref("register_chat_listener", listener)?;
        self.emit(Opcode::RegisterChatListener, vec![uid])
    }

    pub fn set_variable(
        &mut self,
        name: &str,
        value: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("set_variable", name)?;
        let (opcode, arg) = operand(
            "set_variable",
            value.into(),
            Opcode::SetVariableToValue,
            Opcode::SetVariableToVariable,
            false,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn set_variable_if_undefined(
        &mut self,
        name: &str,
        value: impl fmt::Display,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("set_variable_if_undefined", name)?;
        self.emit(
            Opcode::SetVariableIfUndefined,
            vec![target, value.to_string()],
        )
    }

    pub fn add(&mut self, name: &str, amount: impl Into<Operand>) -> Result<&mut Self, MapError> {
        let target = variable_name("add", name)?;
        let (opcode, arg) = operand(
            "add",
            amount.into(),
            Opcode::AddValue,
            Opcode::AddVariable,
            true,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn random_float(
        &mut self,
        name: &str,
        upper: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("random_float", name)?;
        let (opcode, arg) = operand(
            "random_float",
            upper.into(),
            Opcode::RandomFloat,
            Opcode::RandomFloatByVariable,
            true,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn random_int(
        &mut self,
        name: &str,
        upper: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("random_int", name)?;
        let (opcode, arg) = operand(
            "random_int",
            upper.into(),
            Opcode::RandomInt,
            Opcode::RandomIntByVariable,
            true,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn continue_equals(
        &mut self,
        name: &str,
        other: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("continue_equals", name)?;
        let (opcode, arg) = operand(
            "continue_equals",
            other.into(),
            Opcode::ContinueIfEqualsValue,
            Opcode::ContinueIfEqualsVariable,
            false,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn continue_not_equals(
        &mut self,
        name: &str,
        other: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("continue_not_equals", name)?;
        let (opcode, arg) = operand(
            "continue_not_equals",
            other.into(),
            Opcode::ContinueIfNotEqualsValue,
            Opcode::ContinueIfNotEqualsVariable,
            false,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn skip_if_not_equals(
        &mut self,
        name: &str,
        value: impl fmt::Display,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("skip_if_not_equals", name)?;
        self.emit(
            Opcode::SkipNextIfNotEquals,
            vec![target, value.to_string()],
        )
    }

    pub fn contains(
        &mut self,
        name: &str,
        needle: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("contains", name)?;
        let (opcode, arg) = operand(
            "contains",
            needle.into(),
            Opcode::ContainsString,
            Opcode::ContainsVariable,
            false,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn concatenate(&mut self, name: &str, suffix_var: &str) -> Result<&mut Self, MapError> {
        let args = vec![
            variable_name("concatenate", name)?,
            variable_name("concatenate", suffix_var)?,
        ];
        self.emit(Opcode::ConcatenateVariable, args)
    }

    pub fn replace_vars(
        &mut self,
        name: &str,
        source: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("replace_vars", name)?;
        let (opcode, arg) = operand(
            "replace_vars",
            source.into(),
            Opcode::ReplaceVarsInText,
            Opcode::ReplaceVarsInVariable,
            false,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn send_request(&mut self, url_var: &str, response_var: &str) -> Result<&mut Self, MapError> {
        let args = vec![
            variable_name("send_request", url_var)?,
            variable_name("send_request", response_var)?,
        ];
        self.emit(Opcode::RequestWebpage, args)
    }

    pub fn get_current(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.single_variable("get_current", Opcode::GetCurrentSlot, name)
    }

    pub fn get_initiator(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.single_variable("get_initiator", Opcode::GetInitiatorSlot, name)
    }

    pub fn get_killer(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.single_variable("get_killer", Opcode::GetKillerSlot, name)
    }

    pub fn get_talker(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.single_variable("get_talker", Opcode::GetTalkerSlot, name)
    }

    pub fn get_message(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.single_variable("get_message", Opcode::GetMessage, name)
    }

    pub fn get_login(&mut self, name: &str, slot: impl Into<Operand>) -> Result<&mut Self, MapError> {
        let target = variable_name("get_login", name)?;
        let (opcode, arg) = operand(
            "get_login",
            slot.into(),
            Opcode::GetLoginBySlot,
            Opcode::GetLoginBySlotVariable,
            true,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn get_display(
        &mut self,
        name: &str,
        slot: impl Into<Operand>,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name("get_display", name)?;
        let (opcode, arg) = operand(
            "get_display",
            slot.into(),
            Opcode::GetDisplayBySlot,
            Opcode::GetDisplayBySlotVariable,
            true,
        )?;
        self.emit(opcode, vec![target, arg])
    }

    pub fn sync(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.sync_variable(Opcode::SyncOverride, name)
    }

    pub fn sync_defined(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.sync_variable(Opcode::SyncDefined, name)
    }

    pub fn sync_max(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.sync_variable(Opcode::SyncMax, name)
    }

    pub fn sync_min(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.sync_variable(Opcode::SyncMin, name)
    }

    pub fn sync_longest(&mut self, name: &str) -> Result<&mut Self, MapError> {
        self.sync_variable(Opcode::SyncLongest, name)
    }

    fn single_variable(
        &mut self,
        operation: &'static str,
        opcode: Opcode,
        name: &str,
    ) -> Result<&mut Self, MapError> {
        let target = variable_name(operation, name)?;
        self.emit(opcode, vec![target])
    }

    /// The game will not synchronize names with reserved characters; this
    /// only warns, the action is still appended.
    fn sync_variable(&mut self, opcode: Opcode, name: &str) -> Result<&mut Self, MapError> {
        let target = variable_name("sync", name)?;
        let reserved = reserved_characters(&target);
        if !reserved.is_empty() {
            warn!(
                trigger = %self.uid,
                variable = %target,
                reserved = %reserved,
                "sync_variable_reserved_characters"
            );
        }
        self.emit(opcode, vec![target])
    }
}

fn reserved_characters(name: &str) -> String {
    SYNC_RESERVED
        .iter()
        .filter(|ch| name.contains(**ch))
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

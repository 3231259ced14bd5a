use serde::Serialize;

/// Trigger action operations understood by the game.
///
/// Only the operations the builder can emit are listed; imported triggers may
/// still carry any other numeric code in [`super::Action::opcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    DoNothing,
    MoveDoorToRegion,
    ChangeDoorSpeed,
    MoveRegionToRegion,
    ActivateTimer,
    DeactivateTimer,
    ShowChatText,
    SwitchLevel,
    ExecuteTrigger,
    SetVariableToValue,
    SetVariableIfUndefined,
    AddValue,
    AddVariable,
    RandomFloat,
    RandomInt,
    ContinueIfEqualsVariable,
    ContinueIfNotEqualsVariable,
    ContinueIfEqualsValue,
    ContinueIfNotEqualsValue,
    SkipNextIfNotEquals,
    SetVariableToVariable,
    GetCurrentSlot,
    ContainsString,
    ContainsVariable,
    ConcatenateVariable,
    RegisterChatListener,
    GetTalkerSlot,
    GetMessage,
    RequestWebpage,
    GetInitiatorSlot,
    GetKillerSlot,
    GetLoginBySlot,
    GetDisplayBySlot,
    GetLoginBySlotVariable,
    GetDisplayBySlotVariable,
    SyncOverride,
    SyncDefined,
    SyncMax,
    SyncMin,
    SyncLongest,
    ReplaceVarsInVariable,
    ReplaceVarsInText,
    RandomFloatByVariable,
    RandomIntByVariable,
}

impl Opcode {
    const TABLE: [(Opcode, i32, &'static str); 44] = [
        (Opcode::DoNothing, -1, "do nothing"),
        (Opcode::MoveDoorToRegion, 0, "move movable A to region B"),
        (Opcode::ChangeDoorSpeed, 1, "change movable A speed to value B"),
        (Opcode::MoveRegionToRegion, 2, "move region A to region B"),
        (Opcode::ActivateTimer, 25, "activate timer A"),
        (Opcode::DeactivateTimer, 26, "deactivate timer A"),
        (Opcode::ShowChatText, 42, "show text A in chat with color B"),
        (Opcode::SwitchLevel, 50, "complete mission and switch to level A"),
        (Opcode::ExecuteTrigger, 99, "execute trigger A"),
        (Opcode::SetVariableToValue, 100, "set variable A to value B"),
        (
            Opcode::SetVariableIfUndefined,
            101,
            "set variable A to value B if A is not defined",
        ),
        (Opcode::AddValue, 102, "add value B to variable A"),
        (Opcode::AddVariable, 104, "add variable B to variable A"),
        (Opcode::RandomFloat, 106, "set variable A to a random float in 0..B"),
        (Opcode::RandomInt, 107, "set variable A to a random integer in 0..B-1"),
        (
            Opcode::ContinueIfEqualsVariable,
            112,
            "continue only if variable A equals variable B",
        ),
        (
            Opcode::ContinueIfNotEqualsVariable,
            113,
            "continue only if variable A does not equal variable B",
        ),
        (
            Opcode::ContinueIfEqualsValue,
            116,
            "continue only if variable A equals value B",
        ),
        (
            Opcode::ContinueIfNotEqualsValue,
            117,
            "continue only if variable A does not equal value B",
        ),
        (
            Opcode::SkipNextIfNotEquals,
            123,
            "skip next action if variable A does not equal value B",
        ),
        (Opcode::SetVariableToVariable, 125, "set variable A to variable B"),
        (Opcode::GetCurrentSlot, 137, "set variable A to the current player slot"),
        (Opcode::ContainsString, 149, "set variable A to 1 if it contains text B"),
        (
            Opcode::ContainsVariable,
            150,
            "set variable A to 1 if it contains the value of variable B",
        ),
        (Opcode::ConcatenateVariable, 152, "append variable B to variable A"),
        (
            Opcode::RegisterChatListener,
            156,
            "set trigger A as player chat receiver",
        ),
        (Opcode::GetTalkerSlot, 159, "set variable A to the talking player slot"),
        (Opcode::GetMessage, 160, "set variable A to the text being said"),
        (
            Opcode::RequestWebpage,
            169,
            "request webpage in variable A, store response in variable B",
        ),
        (Opcode::GetInitiatorSlot, 180, "set variable A to the initiator slot"),
        (Opcode::GetKillerSlot, 181, "set variable A to the killer slot"),
        (Opcode::GetLoginBySlot, 184, "set variable A to the login of slot B"),
        (
            Opcode::GetDisplayBySlot,
            185,
            "set variable A to the display name of slot B",
        ),
        (
            Opcode::GetLoginBySlotVariable,
            187,
            "set variable A to the login of the slot in variable B",
        ),
        (
            Opcode::GetDisplayBySlotVariable,
            188,
            "set variable A to the display name of the slot in variable B",
        ),
        (Opcode::SyncOverride, 223, "synchronize variable A, overriding"),
        (Opcode::SyncDefined, 224, "synchronize variable A by defined value"),
        (Opcode::SyncMax, 225, "synchronize variable A by maximum value"),
        (Opcode::SyncMin, 226, "synchronize variable A by minimum value"),
        (Opcode::SyncLongest, 227, "synchronize variable A by longest text"),
        (
            Opcode::ReplaceVarsInVariable,
            325,
            "replace variables in variable B, store into variable A",
        ),
        (
            Opcode::ReplaceVarsInText,
            326,
            "replace variables in text B, store into variable A",
        ),
        (
            Opcode::RandomFloatByVariable,
            327,
            "set variable A to a random float in 0..variable B",
        ),
        (
            Opcode::RandomIntByVariable,
            328,
            "set variable A to a random integer in 0..variable B - 1",
        ),
    ];

    fn entry(self) -> (Opcode, i32, &'static str) {
        Self::TABLE
            .iter()
            .copied()
            .find(|(opcode, _, _)| *opcode == self)
            .unwrap_or((Opcode::DoNothing, -1, "do nothing"))
    }

    pub fn code(self) -> i32 {
        self.entry().1
    }

    pub fn describe(self) -> &'static str {
        self.entry().2
    }

    pub fn from_code(code: i32) -> Option<Opcode> {
        Self::TABLE
            .iter()
            .find(|(_, candidate, _)| *candidate == code)
            .map(|(opcode, _, _)| *opcode)
    }

    pub fn is_sync(self) -> bool {
        matches!(
            self,
            Opcode::SyncOverride
                | Opcode::SyncDefined
                | Opcode::SyncMax
                | Opcode::SyncMin
                | Opcode::SyncLongest
        )
    }
}

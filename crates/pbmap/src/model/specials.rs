use std::fmt;

use serde::Serialize;

use crate::error::MapError;

/// What makes a region fire its `use_target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegionActivation {
    Nothing,
    Button,
    ByCharNotInVehicle,
    ByCharInVehicle,
    ByChar,
    ByMovable,
    ByPlayer,
    ByAllHero,
    InvisibleButton,
    RedButton,
    BlueButton,
    InvisibleRedButton,
    InvisibleBlueButton,
    ByRedPlayer,
    ByBluePlayer,
    InvisibleButtonWithoutSound,
}

impl RegionActivation {
    const TABLE: [(RegionActivation, i64); 16] = [
        (RegionActivation::Nothing, -1),
        (RegionActivation::Button, 1),
        (RegionActivation::ByCharNotInVehicle, 2),
        (RegionActivation::ByCharInVehicle, 3),
        (RegionActivation::ByChar, 4),
        (RegionActivation::ByMovable, 5),
        (RegionActivation::ByPlayer, 6),
        (RegionActivation::ByAllHero, 7),
        (RegionActivation::InvisibleButton, 8),
        (RegionActivation::RedButton, 9),
        (RegionActivation::BlueButton, 10),
        (RegionActivation::InvisibleRedButton, 11),
        (RegionActivation::InvisibleBlueButton, 12),
        (RegionActivation::ByRedPlayer, 13),
        (RegionActivation::ByBluePlayer, 14),
        (RegionActivation::InvisibleButtonWithoutSound, 15),
    ];

    pub fn code(self) -> i64 {
        Self::TABLE
            .iter()
            .find(|(activation, _)| *activation == self)
            .map(|(_, code)| *code)
            .unwrap_or(-1)
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(activation, _)| *activation)
    }
}

/// Color of a chat message shown by a trigger: one of the five preset
/// indices or a `#rrggbb` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChatColor {
    Preset(u8),
    Hex(String),
}

impl ChatColor {
    pub const WHITE: ChatColor = ChatColor::Preset(0);

    pub fn parse(value: &str) -> Result<Self, MapError> {
        if let [digit @ b'0'..=b'4'] = value.as_bytes() {
            return Ok(ChatColor::Preset(digit - b'0'));
        }
        let is_hex = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|ch| ch.is_ascii_hexdigit());
        if is_hex {
            Ok(ChatColor::Hex(value.to_string()))
        } else {
            Err(MapError::invalid_argument(
                "chat color",
                value,
                "expected 0-4 or #RRGGBB",
            ))
        }
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatColor::Preset(index) => write!(f, "{index}"),
            ChatColor::Hex(hex) => f.write_str(hex),
        }
    }
}

/// Values accepted in the `mark` attribute of an engine mark.
pub mod engine_marks {
    pub const CHANGE_SKY: &str = "sky";
    pub const SHADOW_MAP_SIZE: &str = "shadowmap_size";
    pub const CASUAL_MODE: &str = "casual";
    pub const NO_BASE_NOISE: &str = "nobase";
    pub const ALT_GAME: &str = "game2";
    pub const STRICT_CASUAL_MODE: &str = "strict_casual";
    pub const NO_AUTO_REVIVE: &str = "no_auto_revive";
    pub const FORCE_RAGDOLL_DISAPPEARANCE: &str = "meat";
    pub const MARINE_WEAPONS: &str = "hero1_guns";
    pub const PROXY_WEAPONS: &str = "hero2_guns";
    pub const PROXY_WEAPONS_NO_NADE: &str = "hero2_guns_nonades";
    pub const PROXY_WEAPONS_ONLY_NADES: &str = "hero2_guns_nades";
    pub const NO_PSI: &str = "nopsi";
    pub const GAME_SCALE: &str = "gamescale";
    pub const HE_NADES_COUNT: &str = "he_nades_count";
    pub const PORT_NADES_COUNT: &str = "port_nades_count";
    pub const SH_NADES_COUNT: &str = "sh_nades_count";
    pub const SNOW: &str = "snow";
    pub const WATER_COLOR: &str = "watercolor";
    pub const ACID_COLOR: &str = "acidcolor";
    pub const WATER_TITLE: &str = "watertitle";
    pub const ACID_TITLE: &str = "acidtitle";
    pub const SLOTS_ON_SPAWN: &str = "dm_slots_on_spawn";
    pub const MAX_GUNS_ON_SPAWN: &str = "dm_max_guns_on_spawn";
    pub const TRIGGER_ERROR_REPORTING: &str = "level_errors";
    pub const VAR_SYNC_ACTIONS: &str = "var_sync";
    pub const NO_LIGHT_BREAK: &str = "no_light_break";
    pub const NAIVE_HIT_CONFIRMATION: &str = "naive_hit_confirmation";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapErrorCode;

    #[test]
    fn region_activation_codes_round_trip() {
        assert_eq!(RegionActivation::Nothing.code(), -1);
        assert_eq!(RegionActivation::InvisibleButtonWithoutSound.code(), 15);
        assert_eq!(RegionActivation::from_code(6), Some(RegionActivation::ByPlayer));
        assert_eq!(RegionActivation::from_code(0), None);
        assert_eq!(RegionActivation::from_code(16), None);
    }

    #[test]
    fn chat_colors_accept_presets_and_hex() {
        assert_eq!(ChatColor::parse("3").expect("preset"), ChatColor::Preset(3));
        assert_eq!(
            ChatColor::parse("#A0ff1C").expect("hex").to_string(),
            "#A0ff1C"
        );
        for bad in ["5", "", "#12345", "#GGGGGG", "red", "00"] {
            let err = ChatColor::parse(bad).expect_err(bad);
            assert_eq!(err.code(), MapErrorCode::InvalidArgumentShape);
        }
    }
}

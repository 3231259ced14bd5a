use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CharacterRole {
    Enemy,
    Player,
}

/// Closed catalog of map object kinds.
///
/// Declaration order (and therefore `Ord`) is the catalog order used by export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Kind {
    Door,
    Region,
    Timer,
    Vehicle,
    Box,
    Water,
    Decoration,
    Song,
    Lamp,
    Barrel,
    Gun,
    Pusher,
    Background,
    Character(CharacterRole),
    EngineMark,
    Trigger,
    Image,
}

impl Kind {
    pub const ALL: [Kind; 18] = [
        Kind::Door,
        Kind::Region,
        Kind::Timer,
        Kind::Vehicle,
        Kind::Box,
        Kind::Water,
        Kind::Decoration,
        Kind::Song,
        Kind::Lamp,
        Kind::Barrel,
        Kind::Gun,
        Kind::Pusher,
        Kind::Background,
        Kind::Character(CharacterRole::Enemy),
        Kind::Character(CharacterRole::Player),
        Kind::EngineMark,
        Kind::Trigger,
        Kind::Image,
    ];

    pub const ENEMY: Kind = Kind::Character(CharacterRole::Enemy);
    pub const PLAYER: Kind = Kind::Character(CharacterRole::Player);

    /// Element name written on export.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Door => "door",
            Kind::Region => "region",
            Kind::Timer => "timer",
            Kind::Vehicle => "vehicle",
            Kind::Box => "box",
            Kind::Water => "water",
            Kind::Decoration => "decor",
            Kind::Song => "song",
            Kind::Lamp => "lamp",
            Kind::Barrel => "barrel",
            Kind::Gun => "gun",
            Kind::Pusher => "pusher",
            Kind::Background => "bg",
            Kind::Character(CharacterRole::Enemy) => "actor",
            Kind::Character(CharacterRole::Player) => "player",
            Kind::EngineMark => "inf",
            Kind::Trigger => "trigger",
            Kind::Image => "image",
        }
    }

    /// Extra element names accepted on import. The map server still uses these.
    pub fn tag_aliases(self) -> &'static [&'static str] {
        match self {
            Kind::Pusher => &["pushf"],
            Kind::Character(CharacterRole::Enemy) => &["enemy"],
            _ => &[],
        }
    }

    pub fn matches_tag(self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(self.tag())
            || self
                .tag_aliases()
                .iter()
                .any(|alias| tag.eq_ignore_ascii_case(alias))
    }

    pub fn from_tag(tag: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.matches_tag(tag))
    }

    pub fn is_named(self) -> bool {
        self.uid_prefix().is_some()
    }

    /// Prefix of generated uids, `None` for kinds without a uid.
    pub fn uid_prefix(self) -> Option<&'static str> {
        match self {
            Kind::Box | Kind::Water | Kind::Background | Kind::EngineMark | Kind::Image => None,
            named => Some(named.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_catalog() {
        let mut sorted = Kind::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Kind::ALL.to_vec());
    }

    #[test]
    fn tags_match_case_insensitively_and_through_aliases() {
        assert_eq!(Kind::from_tag("DOOR"), Some(Kind::Door));
        assert_eq!(Kind::from_tag("pushf"), Some(Kind::Pusher));
        assert_eq!(Kind::from_tag("Enemy"), Some(Kind::ENEMY));
        assert_eq!(Kind::from_tag("actor"), Some(Kind::ENEMY));
        assert_eq!(Kind::from_tag("player"), Some(Kind::PLAYER));
        assert_eq!(Kind::from_tag("decoration"), None);
    }

    #[test]
    fn only_five_kinds_are_unnamed() {
        let unnamed = Kind::ALL
            .iter()
            .filter(|kind| !kind.is_named())
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(
            unnamed,
            vec![
                Kind::Box,
                Kind::Water,
                Kind::Background,
                Kind::EngineMark,
                Kind::Image
            ]
        );
        assert_eq!(Kind::Decoration.uid_prefix(), Some("decor"));
        assert_eq!(Kind::ENEMY.uid_prefix(), Some("actor"));
    }
}

//! Map object kinds other than triggers.
//!
//! Each `from_markup` reads the attribute names its `render` writes, so
//! exported markup re-imports to an equal value.

use serde::Serialize;

use crate::error::MapError;
use crate::markup::{AttributeReader, ElementBuilder};

use super::entity::{impl_named, impl_positioned, Entity, NamedEntity};
use super::kind::{CharacterRole, Kind};
use super::naming::UidSequencer;
use super::specials::RegionActivation;

fn single(element: ElementBuilder) -> Result<Vec<String>, MapError> {
    Ok(vec![element.finish()?])
}

/// Movable wall.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Door {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub vis: bool,
    pub moving: bool,
    pub tarx: i64,
    pub tary: i64,
    pub maxspeed: f64,
    pub attach: Option<String>,
}

impl Door {
    fn to_element(&self) -> ElementBuilder {
        ElementBuilder::new(Kind::Door.tag())
            .attr("uid", &self.uid)
            .attr("vis", self.vis)
            .attr("x", self.x)
            .attr("y", self.y)
            .attr("w", self.w)
            .attr("h", self.h)
            .attr("moving", self.moving)
            .attr("tarx", self.tarx)
            .attr("tary", self.tary)
            .reference("attach", self.attach.as_deref())
            .attr("maxspeed", self.maxspeed)
    }
}

impl Entity for Door {
    fn kind(&self) -> Kind {
        Kind::Door
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            w: reader.int("w", 0)?,
            h: reader.int("h", 0)?,
            vis: reader.boolean("vis", false)?,
            moving: reader.boolean("moving", false)?,
            tarx: reader.int("tarx", 0)?,
            tary: reader.int("tary", 0)?,
            maxspeed: reader.float("maxspeed", 0.0)?,
            attach: reader.reference("attach"),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(self.to_element())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub use_target: Option<String>,
    /// Activation code, see [`RegionActivation`].
    pub use_on: i64,
    pub attach: Option<String>,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            uid: String::new(),
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            use_target: None,
            use_on: RegionActivation::Nothing.code(),
            attach: None,
        }
    }
}

impl Region {
    pub fn activation(&self) -> Option<RegionActivation> {
        RegionActivation::from_code(self.use_on)
    }

    fn to_element(&self) -> ElementBuilder {
        ElementBuilder::new(Kind::Region.tag())
            .attr("uid", &self.uid)
            .attr("x", self.x)
            .attr("y", self.y)
            .attr("w", self.w)
            .attr("h", self.h)
            .reference("use_target", self.use_target.as_deref())
            .attr("use_on", self.use_on)
            .reference("attach", self.attach.as_deref())
    }
}

impl Entity for Region {
    fn kind(&self) -> Kind {
        Kind::Region
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            w: reader.int("w", 0)?,
            h: reader.int("h", 0)?,
            use_target: reader.reference("use_target"),
            use_on: reader.int("use_on", RegionActivation::Nothing.code())?,
            attach: reader.reference("attach"),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(self.to_element())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Timer {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub enabled: bool,
    pub maxcalls: i64,
    pub target: Option<String>,
    pub delay: f64,
}

impl Timer {
    fn to_element(&self) -> ElementBuilder {
        ElementBuilder::new(Kind::Timer.tag())
            .attr("uid", &self.uid)
            .attr("x", self.x)
            .attr("y", self.y)
            .attr("enabled", self.enabled)
            .attr("maxcalls", self.maxcalls)
            .reference("target", self.target.as_deref())
            .attr("delay", self.delay)
    }
}

impl Entity for Timer {
    fn kind(&self) -> Kind {
        Kind::Timer
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
            target: reader.reference("target"),
            delay: reader.float("delay", 0.0)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(self.to_element())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub tox: f64,
    pub toy: f64,
    /// `-1` faces left, `1` faces right.
    pub side: i64,
    pub hp_percent: f64,
    pub model: String,
}

impl Vehicle {
    pub const LEFT: i64 = -1;
    pub const RIGHT: i64 = 1;

    fn to_element(&self) -> ElementBuilder {
        ElementBuilder::new(Kind::Vehicle.tag())
            .attr("uid", &self.uid)
            .attr("x", self.x)
            .attr("y", self.y)
            .attr("tox", self.tox)
            .attr("toy", self.toy)
            .attr("side", self.side)
            .attr("hpp", self.hp_percent)
            .attr("model", &self.model)
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            uid: String::new(),
            x: 0,
            y: 0,
            tox: 0.0,
            toy: 0.0,
            side: Vehicle::RIGHT,
            hp_percent: 0.0,
            model: "veh_jeep".to_string(),
        }
    }
}

impl Entity for Vehicle {
    fn kind(&self) -> Kind {
        Kind::Vehicle
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        let defaults = Vehicle::default();
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            tox: reader.float("tox", 0.0)?,
            toy: reader.float("toy", 0.0)?,
            side: reader.int("side", defaults.side)?,
            hp_percent: reader.float("hpp", 0.0)?,
            model: reader.text("model", &defaults.model),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(self.to_element())
    }
}

/// Static wall block. Named `MapBox` to stay clear of `std::boxed::Box`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MapBox {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub m: i64,
}

impl Entity for MapBox {
    fn kind(&self) -> Kind {
        Kind::Box
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            w: reader.int("w", 0)?,
            h: reader.int("h", 0)?,
            m: reader.int("m", 0)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Box.tag())
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("w", self.w)
                .attr("h", self.h)
                .attr("m", self.m),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Water {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub damage: f64,
    pub friction: bool,
}

impl Entity for Water {
    fn kind(&self) -> Kind {
        Kind::Water
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            w: reader.int("w", 0)?,
            h: reader.int("h", 0)?,
            damage: reader.float("damage", 0.0)?,
            friction: reader.boolean("friction", false)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Water.tag())
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("w", self.w)
                .attr("h", self.h)
                .attr("damage", self.damage)
                .attr("friction", self.friction),
        )
    }
}

/// Server maps spell `u`, `v` and `attach` as `addx`, `addy` and `at`; those
/// spellings win on import when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Decoration {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub u: f64,
    pub v: f64,
    pub r: f64,
    pub sx: f64,
    pub sy: f64,
    pub f: i64,
    pub model: String,
    pub attach: Option<String>,
}

impl Entity for Decoration {
    fn kind(&self) -> Kind {
        Kind::Decoration
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            u: reader.float(reader.first_present(&["addx", "u"]), 0.0)?,
            v: reader.float(reader.first_present(&["addy", "v"]), 0.0)?,
            r: reader.float("r", 0.0)?,
            sx: reader.float("sx", 0.0)?,
            sy: reader.float("sy", 0.0)?,
            f: reader.int("f", 0)?,
            model: reader.text("model", ""),
            attach: reader.reference(reader.first_present(&["at", "attach"])),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Decoration.tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("u", self.u)
                .attr("v", self.v)
                .attr("r", self.r)
                .attr("sx", self.sx)
                .attr("sy", self.sy)
                .attr("f", self.f)
                .attr("model", &self.model)
                .reference("attach", self.attach.as_deref()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Song {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub url: String,
    pub volume: f64,
    pub looping: bool,
    /// Trigger executed when playback ends.
    pub callback: Option<String>,
}

impl Entity for Song {
    fn kind(&self) -> Kind {
        Kind::Song
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            url: reader.text("url", ""),
            volume: reader.float("volume", 0.0)?,
            looping: reader.boolean("loop", false)?,
            callback: reader.reference("callback"),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Song.tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("volume", self.volume)
                .attr("url", &self.url)
                .attr("loop", self.looping)
                .reference("callback", self.callback.as_deref()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Lamp {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub power: f64,
    pub flare: bool,
}

impl Entity for Lamp {
    fn kind(&self) -> Kind {
        Kind::Lamp
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            power: reader.float("power", 0.0)?,
            flare: reader.boolean("flare", false)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Lamp.tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("power", self.power)
                .attr("flare", self.flare),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Barrel {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub tox: f64,
    pub toy: f64,
    pub model: String,
}

impl Barrel {
    pub const DEFAULT_MODEL: &'static str = "bar_orange";
}

impl Default for Barrel {
    fn default() -> Self {
        Self {
            uid: String::new(),
            x: 0,
            y: 0,
            tox: 0.0,
            toy: 0.0,
            model: Barrel::DEFAULT_MODEL.to_string(),
        }
    }
}

impl Entity for Barrel {
    fn kind(&self) -> Kind {
        Kind::Barrel
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            tox: reader.float("tox", 0.0)?,
            toy: reader.float("toy", 0.0)?,
            model: reader.text("model", Barrel::DEFAULT_MODEL),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Barrel.tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("tox", self.tox)
                .attr("toy", self.toy)
                .attr("model", &self.model),
        )
    }
}

/// Weapon pickup.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Gun {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub model: String,
    pub upg: i64,
    /// Team allowed to pick it up.
    pub command: i64,
}

impl Entity for Gun {
    fn kind(&self) -> Kind {
        Kind::Gun
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            model: reader.text("model", ""),
            upg: reader.int("upg", 0)?,
            command: reader.int("command", 0)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Gun.tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("model", &self.model)
                .attr("upg", self.upg)
                .attr("command", self.command),
        )
    }
}

/// Force field that pushes and damages whatever enters it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Pusher {
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub tox: f64,
    pub toy: f64,
    pub stability_damage: f64,
    pub damage: f64,
    pub attach: Option<String>,
}

impl Entity for Pusher {
    fn kind(&self) -> Kind {
        Kind::Pusher
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            w: reader.int("w", 0)?,
            h: reader.int("h", 0)?,
            tox: reader.float("tox", 0.0)?,
            toy: reader.float("toy", 0.0)?,
            stability_damage: reader.float("stab", 0.0)?,
            damage: reader.float("damage", 0.0)?,
            attach: reader.reference("attach"),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Pusher.tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("w", self.w)
                .attr("h", self.h)
                .attr("tox", self.tox)
                .attr("toy", self.toy)
                .attr("stab", self.stability_damage)
                .attr("damage", self.damage)
                .reference("attach", self.attach.as_deref()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Background {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
    pub c: String,
    pub m: String,
    pub u: f64,
    pub v: f64,
    pub f: i64,
    pub attach: Option<String>,
    pub s: bool,
}

impl Entity for Background {
    fn kind(&self) -> Kind {
        Kind::Background
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            w: reader.int("w", 0)?,
            h: reader.int("h", 0)?,
            c: reader.text("c", ""),
            m: reader.text("m", ""),
            u: reader.float("u", 0.0)?,
            v: reader.float("v", 0.0)?,
            f: reader.int("f", 0)?,
            attach: reader.reference("a"),
            s: reader.boolean("s", false)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Background.tag())
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("w", self.w)
                .attr("h", self.h)
                .attr("c", &self.c)
                .attr("m", &self.m)
                .attr("u", self.u)
                .attr("v", self.v)
                .attr("f", self.f)
                .reference("a", self.attach.as_deref())
                .attr("s", self.s),
        )
    }
}

/// Player or enemy character. The role decides both tag and uid prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub role: CharacterRole,
    pub uid: String,
    pub x: i64,
    pub y: i64,
    pub tox: f64,
    pub toy: f64,
    pub hea: f64,
    pub hmax: f64,
    pub team: i64,
    pub side: i64,
    pub char: i64,
    pub botaction: i64,
    /// Trigger executed on death.
    pub ondeath: Option<String>,
    /// Vehicle the character starts in.
    pub incar: Option<String>,
}

impl Character {
    pub const LEFT: i64 = -1;
    pub const RIGHT: i64 = 1;

    pub fn with_uid(role: CharacterRole, uid: impl Into<String>) -> Self {
        Self {
            role,
            uid: uid.into(),
            x: 0,
            y: 0,
            tox: 0.0,
            toy: 0.0,
            hea: 0.0,
            hmax: 0.0,
            team: 0,
            side: 0,
            char: 0,
            botaction: 0,
            ondeath: None,
            incar: None,
        }
    }

    pub fn player(sequencer: &mut UidSequencer) -> Self {
        let uid = sequencer.next_uid(Kind::PLAYER).unwrap_or_default();
        Self::with_uid(CharacterRole::Player, uid)
    }

    pub fn enemy(sequencer: &mut UidSequencer) -> Self {
        let uid = sequencer.next_uid(Kind::ENEMY).unwrap_or_default();
        Self::with_uid(CharacterRole::Enemy, uid)
    }

    pub fn is_player(&self) -> bool {
        self.role == CharacterRole::Player
    }
}

impl Entity for Character {
    fn kind(&self) -> Kind {
        Kind::Character(self.role)
    }

    fn uid(&self) -> Option<&str> {
        Some(&self.uid)
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        let role = match reader.kind() {
            Kind::Character(role) => role,
            _ => CharacterRole::Enemy,
        };
        Ok(Self {
            role,
            uid: reader.uid()?,
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            tox: reader.float("tox", 0.0)?,
            toy: reader.float("toy", 0.0)?,
            hea: reader.float("hea", 0.0)?,
            hmax: reader.float("hmax", 0.0)?,
            team: reader.int("team", 0)?,
            side: reader.int("side", 0)?,
            char: reader.int("char", 0)?,
            botaction: reader.int("botaction", 0)?,
            ondeath: reader.reference("ondeath"),
            incar: reader.reference("incar"),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(self.kind().tag())
                .attr("uid", &self.uid)
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("tox", self.tox)
                .attr("toy", self.toy)
                .attr("hea", self.hea)
                .attr("hmax", self.hmax)
                .attr("team", self.team)
                .attr("side", self.side)
                .reference("incar", self.incar.as_deref())
                .attr("botaction", self.botaction)
                .reference("ondeath", self.ondeath.as_deref())
                .attr("char", self.char),
        )
    }
}

/// Engine flag (`<inf mark=... forteam=... />`), see [`super::specials::engine_marks`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EngineMark {
    pub x: i64,
    pub y: i64,
    pub modifier: String,
    pub parameter: String,
}

impl Entity for EngineMark {
    fn kind(&self) -> Kind {
        Kind::EngineMark
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            modifier: reader.text("mark", ""),
            parameter: reader.text("forteam", ""),
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::EngineMark.tag())
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("mark", &self.modifier)
                .attr("forteam", &self.parameter),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Image {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub id: i64,
}

impl Entity for Image {
    fn kind(&self) -> Kind {
        Kind::Image
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        Ok(Self {
            x: reader.int("x", 0)?,
            y: reader.int("y", 0)?,
            width: reader.int("width", 0)?,
            height: reader.int("height", 0)?,
            id: reader.int("id", 0)?,
        })
    }

    fn render(&self) -> Result<Vec<String>, MapError> {
        single(
            ElementBuilder::new(Kind::Image.tag())
                .attr("x", self.x)
                .attr("y", self.y)
                .attr("width", self.width)
                .attr("height", self.height)
                .attr("id", self.id),
        )
    }
}

impl_positioned!(
    Door, Region, Timer, Vehicle, MapBox, Water, Decoration, Song, Lamp, Barrel, Gun, Pusher,
    Background, Character, EngineMark, Image,
);

impl_named!(
    Door, Region, Timer, Vehicle, Decoration, Song, Lamp, Barrel, Gun, Pusher, Character,
);

macro_rules! impl_named_entity {
    ($($ty:ident => $kind:expr),* $(,)?) => {
        $(
            impl NamedEntity for $ty {
                const KIND: Kind = $kind;

                fn with_uid(uid: impl Into<String>) -> Self {
                    Self {
                        uid: uid.into(),
                        ..Self::default()
                    }
                }
            }
        )*
    };
}

impl_named_entity!(
    Door => Kind::Door,
    Region => Kind::Region,
    Timer => Kind::Timer,
    Vehicle => Kind::Vehicle,
    Decoration => Kind::Decoration,
    Song => Kind::Song,
    Lamp => Kind::Lamp,
    Barrel => Kind::Barrel,
    Gun => Kind::Gun,
    Pusher => Kind::Pusher,
);

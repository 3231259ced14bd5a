use serde::Serialize;

use crate::error::MapError;
use crate::markup::AttributeReader;
use crate::trigger::Trigger;

use super::kind::Kind;
use super::naming::UidSequencer;
use super::objects::{
    Background, Barrel, Character, Decoration, Door, EngineMark, Gun, Image, Lamp, MapBox, Pusher,
    Region, Song, Timer, Vehicle, Water,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

pub trait Positioned {
    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);
}

pub trait Named {
    fn uid(&self) -> &str;
    fn set_uid(&mut self, uid: String);
}

/// Behaviour shared by every map object kind.
pub trait Entity: Positioned {
    fn kind(&self) -> Kind;

    fn uid(&self) -> Option<&str> {
        None
    }

    fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError>
    where
        Self: Sized;

    /// Markup elements for this entity, in output order. Only triggers may
    /// produce more than one.
    fn render(&self) -> Result<Vec<String>, MapError>;
}

/// Named kinds whose type alone determines the kind.
pub trait NamedEntity: Entity + Named + Sized {
    const KIND: Kind;

    fn with_uid(uid: impl Into<String>) -> Self;

    /// Builds a default entity named from the sequencer's counter for this kind.
    fn new(sequencer: &mut UidSequencer) -> Self {
        let uid = sequencer.next_uid(Self::KIND).unwrap_or_default();
        Self::with_uid(uid)
    }
}

/// Typed access into a [`MapEntity`].
pub trait EntityVariant: Sized {
    fn downcast(entity: &MapEntity) -> Option<&Self>;
    fn downcast_mut(entity: &mut MapEntity) -> Option<&mut Self>;
}

macro_rules! impl_positioned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::model::Positioned for $ty {
                fn position(&self) -> $crate::model::Position {
                    $crate::model::Position { x: self.x, y: self.y }
                }

                fn set_position(&mut self, position: $crate::model::Position) {
                    self.x = position.x;
                    self.y = position.y;
                }
            }
        )*
    };
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::model::Named for $ty {
                fn uid(&self) -> &str {
                    &self.uid
                }

                fn set_uid(&mut self, uid: String) {
                    self.uid = uid;
                }
            }
        )*
    };
}

pub(crate) use impl_named;
pub(crate) use impl_positioned;

macro_rules! map_entities {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// One map object of any kind.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum MapEntity {
            $($variant($ty)),*
        }

        $(
            impl From<$ty> for MapEntity {
                fn from(value: $ty) -> Self {
                    MapEntity::$variant(value)
                }
            }

            impl EntityVariant for $ty {
                fn downcast(entity: &MapEntity) -> Option<&Self> {
                    match entity {
                        MapEntity::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                fn downcast_mut(entity: &mut MapEntity) -> Option<&mut Self> {
                    match entity {
                        MapEntity::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }
        )*

        impl MapEntity {
            pub fn kind(&self) -> Kind {
                match self {
                    $(MapEntity::$variant(value) => value.kind()),*
                }
            }

            pub fn uid(&self) -> Option<&str> {
                match self {
                    $(MapEntity::$variant(value) => Entity::uid(value)),*
                }
            }

            pub fn position(&self) -> Position {
                match self {
                    $(MapEntity::$variant(value) => value.position()),*
                }
            }

            pub fn set_position(&mut self, position: Position) {
                match self {
                    $(MapEntity::$variant(value) => value.set_position(position)),*
                }
            }

            pub fn render(&self) -> Result<Vec<String>, MapError> {
                match self {
                    $(MapEntity::$variant(value) => value.render()),*
                }
            }
        }
    };
}

map_entities! {
    Door(Door),
    Region(Region),
    Timer(Timer),
    Vehicle(Vehicle),
    Box(MapBox),
    Water(Water),
    Decoration(Decoration),
    Song(Song),
    Lamp(Lamp),
    Barrel(Barrel),
    Gun(Gun),
    Pusher(Pusher),
    Background(Background),
    Character(Character),
    EngineMark(EngineMark),
    Trigger(Trigger),
    Image(Image),
}

impl MapEntity {
    /// Builds the entity of `reader.kind()` from an imported element.
    pub fn from_markup(reader: &AttributeReader<'_, '_>) -> Result<Self, MapError> {
        let entity = match reader.kind() {
            Kind::Door => Door::from_markup(reader)?.into(),
            Kind::Region => Region::from_markup(reader)?.into(),
            Kind::Timer => Timer::from_markup(reader)?.into(),
            Kind::Vehicle => Vehicle::from_markup(reader)?.into(),
            Kind::Box => MapBox::from_markup(reader)?.into(),
            Kind::Water => Water::from_markup(reader)?.into(),
            Kind::Decoration => Decoration::from_markup(reader)?.into(),
            Kind::Song => Song::from_markup(reader)?.into(),
            Kind::Lamp => Lamp::from_markup(reader)?.into(),
            Kind::Barrel => Barrel::from_markup(reader)?.into(),
            Kind::Gun => Gun::from_markup(reader)?.into(),
            Kind::Pusher => Pusher::from_markup(reader)?.into(),
            Kind::Background => Background::from_markup(reader)?.into(),
            Kind::Character(_) => Character::from_markup(reader)?.into(),
            Kind::EngineMark => EngineMark::from_markup(reader)?.into(),
            Kind::Trigger => Trigger::from_markup(reader)?.into(),
            Kind::Image => Image::from_markup(reader)?.into(),
        };
        Ok(entity)
    }
}

mod entity;
mod kind;
mod naming;
mod objects;
mod specials;

pub(crate) use entity::{impl_named, impl_positioned};
pub use entity::{Entity, EntityVariant, MapEntity, Named, NamedEntity, Position, Positioned};
pub use kind::{CharacterRole, Kind};
pub use naming::UidSequencer;
pub use objects::{
    Background, Barrel, Character, Decoration, Door, EngineMark, Gun, Image, Lamp, MapBox, Pusher,
    Region, Song, Timer, Vehicle, Water,
};
pub use specials::{engine_marks, ChatColor, RegionActivation};

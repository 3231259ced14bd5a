pub mod document;
pub mod error;
pub mod io;
pub mod markup;
pub mod model;
pub mod qpack;
pub mod trigger;

pub use document::MapDocument;
pub use error::{MapError, MapErrorCode, SourceLocation};
#[cfg(feature = "online")]
pub use io::HttpMapFetcher;
pub use io::{
    dump_map_file, fetch_map_document, fetch_map_markup, fetch_map_records, load_map_file,
    read_map_text, write_map_text, MapFetcher, MapIoError,
};
pub use model::{
    engine_marks, Background, Barrel, Character, CharacterRole, ChatColor, Decoration, Door,
    EngineMark, Entity, EntityVariant, Gun, Image, Kind, Lamp, MapBox, MapEntity, Named,
    NamedEntity, Position, Positioned, Pusher, Region, RegionActivation, Song, Timer, UidSequencer,
    Vehicle, Water,
};
pub use qpack::{FieldValue, QpackRecord};
pub use trigger::{Action, Opcode, Operand, Trigger, DO_NOTHING, DO_NOTHING_OPCODE};

/// Environment variable overriding the map server endpoint.
pub const ENDPOINT_ENV_VAR: &str = "PBMAP_ENDPOINT";

//! An editable level: entities grouped by kind plus the uid sequencer that
//! names new ones.

mod export;
mod import;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::error::MapError;
use crate::model::{
    Character, Decoration, Door, EntityVariant, Gun, Kind, MapEntity, NamedEntity, Pusher, Region,
    UidSequencer, Vehicle,
};
use crate::trigger::Trigger;

#[derive(Debug, Clone, Default)]
pub struct MapDocument {
    by_kind: BTreeMap<Kind, Vec<MapEntity>>,
    sequencer: UidSequencer,
}

impl MapDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequencer(sequencer: UidSequencer) -> Self {
        Self {
            by_kind: BTreeMap::new(),
            sequencer,
        }
    }

    pub fn sequencer(&self) -> &UidSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut UidSequencer {
        &mut self.sequencer
    }

    /// Adds an entity after the existing ones of its kind.
    pub fn insert(&mut self, entity: impl Into<MapEntity>) -> &mut MapEntity {
        let entity = entity.into();
        let kind = entity.kind();
        if let Some(uid) = entity.uid() {
            self.sequencer.observe(kind, uid);
        }
        let list = self.by_kind.entry(kind).or_default();
        let index = list.len();
        list.push(entity);
        &mut list[index]
    }

    /// Builds a default entity named by this document's sequencer. The entity
    /// is not inserted.
    pub fn create<T: NamedEntity>(&mut self) -> T {
        T::new(&mut self.sequencer)
    }

    pub fn create_player(&mut self) -> Character {
        Character::player(&mut self.sequencer)
    }

    pub fn create_enemy(&mut self) -> Character {
        Character::enemy(&mut self.sequencer)
    }

    pub fn entities(&self, kind: Kind) -> &[MapEntity] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entities_mut(&mut self, kind: Kind) -> &mut [MapEntity] {
        match self.by_kind.get_mut(&kind) {
            Some(list) => list.as_mut_slice(),
            None => &mut [],
        }
    }

    /// All entities, by kind in catalog order, then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MapEntity> {
        self.by_kind.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.entities(kind).len()
    }

    /// Removes the first entity of `kind` with `uid`.
    pub fn remove(&mut self, kind: Kind, uid: &str) -> Result<MapEntity, MapError> {
        let list = self.by_kind.get_mut(&kind);
        let position = list
            .as_ref()
            .and_then(|list| list.iter().position(|entity| entity.uid() == Some(uid)));
        match (list, position) {
            (Some(list), Some(position)) => Ok(list.remove(position)),
            _ => Err(not_found(kind, uid)),
        }
    }

    pub fn find_by_uid(&self, kind: Kind, uid: &str) -> Result<&MapEntity, MapError> {
        self.entities(kind)
            .iter()
            .find(|entity| entity.uid() == Some(uid))
            .ok_or_else(|| not_found(kind, uid))
    }

    pub fn find_by_uid_mut(&mut self, kind: Kind, uid: &str) -> Result<&mut MapEntity, MapError> {
        self.entities_mut(kind)
            .iter_mut()
            .find(|entity| entity.uid() == Some(uid))
            .ok_or_else(|| not_found(kind, uid))
    }

    pub fn find<T: NamedEntity + EntityVariant>(&self, uid: &str) -> Result<&T, MapError> {
        self.find_by_uid(T::KIND, uid)
            .ok()
            .and_then(T::downcast)
            .ok_or_else(|| not_found(T::KIND, uid))
    }

    pub fn find_mut<T: NamedEntity + EntityVariant>(&mut self, uid: &str) -> Result<&mut T, MapError> {
        self.find_by_uid_mut(T::KIND, uid)
            .ok()
            .and_then(T::downcast_mut)
            .ok_or_else(|| not_found(T::KIND, uid))
    }

    fn find_character(&self, kind: Kind, uid: &str) -> Result<&Character, MapError> {
        self.find_by_uid(kind, uid)
            .ok()
            .and_then(Character::downcast)
            .ok_or_else(|| not_found(kind, uid))
    }

    pub fn find_trigger(&self, uid: &str) -> Result<&Trigger, MapError> {
        self.find(uid)
    }

    pub fn find_trigger_mut(&mut self, uid: &str) -> Result<&mut Trigger, MapError> {
        self.find_mut(uid)
    }

    pub fn find_door(&self, uid: &str) -> Result<&Door, MapError> {
        self.find(uid)
    }

    pub fn find_region(&self, uid: &str) -> Result<&Region, MapError> {
        self.find(uid)
    }

    pub fn find_pusher(&self, uid: &str) -> Result<&Pusher, MapError> {
        self.find(uid)
    }

    pub fn find_vehicle(&self, uid: &str) -> Result<&Vehicle, MapError> {
        self.find(uid)
    }

    pub fn find_decoration(&self, uid: &str) -> Result<&Decoration, MapError> {
        self.find(uid)
    }

    pub fn find_gun(&self, uid: &str) -> Result<&Gun, MapError> {
        self.find(uid)
    }

    pub fn find_enemy(&self, uid: &str) -> Result<&Character, MapError> {
        self.find_character(Kind::ENEMY, uid)
    }

    pub fn find_player(&self, uid: &str) -> Result<&Character, MapError> {
        self.find_character(Kind::PLAYER, uid)
    }
}

fn not_found(kind: Kind, uid: &str) -> MapError {
    MapError::LookupNotFound {
        kind,
        uid: uid.to_string(),
    }
}

impl FromIterator<MapEntity> for MapDocument {
    fn from_iter<I: IntoIterator<Item = MapEntity>>(iter: I) -> Self {
        let mut document = MapDocument::new();
        for entity in iter {
            document.insert(entity);
        }
        document
    }
}

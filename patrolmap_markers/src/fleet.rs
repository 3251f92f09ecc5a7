// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::entity::{Entity, same_entities};

/// An ordered, id-indexed list of entities fed by live updates.
///
/// `upsert` replaces an entity by id and moves it to the end, so the most
/// recently reported robot is drawn on top. The revision only changes when
/// the list actually changes, which lets hosts skip redundant redraws.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
    revision: u64,
}

impl Fleet {
    /// Creates an empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities in draw order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the fleet is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Monotonic change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    /// Inserts or replaces `entity`, moving it to the end.
    ///
    /// Returns `true` if the list changed.
    pub fn upsert(&mut self, entity: Entity) -> bool {
        if self.entities.last().is_some_and(|last| last.same_as(&entity)) {
            return false;
        }
        self.upsert_quiet(entity);
        self.bump();
        true
    }

    /// Upserts each entity in turn. Returns `true` if anything changed.
    pub fn upsert_all(&mut self, entities: impl IntoIterator<Item = Entity>) -> bool {
        entities
            .into_iter()
            .fold(false, |changed, entity| self.upsert(entity) | changed)
    }

    /// Replaces the whole list, as after a full refetch.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn replace_all(&mut self, entities: Vec<Entity>) -> bool {
        if same_entities(&self.entities, &entities) {
            return false;
        }
        self.entities.clear();
        self.index.clear();
        for entity in entities {
            self.upsert_quiet(entity);
        }
        self.bump();
        true
    }

    /// Removes the entity with `id`.
    pub fn remove(&mut self, id: &str) -> Option<Entity> {
        let old = self.index.remove(id)?;
        let entity = self.entities.remove(old);
        self.reindex_from(old);
        self.bump();
        Some(entity)
    }

    /// Removes every entity.
    pub fn clear(&mut self) -> bool {
        if self.entities.is_empty() {
            return false;
        }
        self.entities.clear();
        self.index.clear();
        self.bump();
        true
    }

    fn upsert_quiet(&mut self, entity: Entity) {
        if let Some(old) = self.index.get(&entity.id).copied() {
            self.entities.remove(old);
            self.reindex_from(old);
        }
        self.index.insert(entity.id.clone(), self.entities.len());
        self.entities.push(entity);
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, entity) in self.entities.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(&entity.id) {
                *slot = i;
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn robot(id: &str, x: f64) -> Entity {
        Entity::new(id, Point::new(x, 0.0), 0.0)
    }

    fn ids(fleet: &Fleet) -> Vec<&str> {
        fleet.entities().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn upsert_moves_to_end() {
        let mut fleet = Fleet::new();
        assert!(fleet.upsert(robot("a", 0.0)));
        assert!(fleet.upsert(robot("b", 0.0)));
        assert!(fleet.upsert(robot("c", 0.0)));
        assert!(fleet.upsert(robot("a", 5.0)));
        assert_eq!(ids(&fleet), ["b", "c", "a"]);
        assert_eq!(fleet.get("a").unwrap().position.x, 5.0);
        assert_eq!(fleet.get("c").unwrap().id, "c");
    }

    #[test]
    fn repeated_update_is_not_a_change() {
        let mut fleet = Fleet::new();
        fleet.upsert(robot("a", 0.0));
        let rev = fleet.revision();
        assert!(!fleet.upsert(robot("a", 0.0)));
        assert_eq!(fleet.revision(), rev);
    }

    #[test]
    fn replace_all_and_remove() {
        let mut fleet = Fleet::new();
        assert!(fleet.replace_all(vec![robot("a", 0.0), robot("b", 1.0)]));
        let rev = fleet.revision();
        assert!(!fleet.replace_all(vec![robot("a", 0.0), robot("b", 1.0)]));
        assert_eq!(fleet.revision(), rev);

        assert_eq!(fleet.remove("a").map(|e| e.id), Some("a".into()));
        assert!(fleet.remove("a").is_none());
        assert_eq!(ids(&fleet), ["b"]);
        assert_eq!(fleet.get("b").unwrap().position.x, 1.0);
        assert!(fleet.clear());
        assert!(!fleet.clear());
        assert!(fleet.is_empty());
    }

    #[test]
    fn replace_all_collapses_duplicates() {
        let mut fleet = Fleet::new();
        fleet.replace_all(vec![robot("a", 0.0), robot("b", 0.0), robot("a", 9.0)]);
        assert_eq!(ids(&fleet), ["b", "a"]);
        assert_eq!(fleet.get("a").unwrap().position.x, 9.0);
    }
}

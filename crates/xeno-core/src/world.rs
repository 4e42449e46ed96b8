use std::collections::HashMap;

use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};

/// The world graph. Owns every entity for the lifetime of the session and
/// tracks two explicit relations over them:
///
/// - `adjacency`: which areas can be reached from which (symmetric, deduped),
/// - `occupancy`: which entities are located at which area (bidirectional,
///   deliberately not deduped; wiring happens once during world building).
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
    areas: Vec<EntityId>,
    adjacency: HashMap<EntityId, Vec<EntityId>>,
    occupancy: HashMap<EntityId, Vec<EntityId>>,
    by_name_lower: HashMap<String, EntityId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the world. Returns the entity's ID.
    ///
    /// Names are indexed case-insensitively for destination lookup, so a
    /// duplicate name is rejected.
    pub fn add_entity(&mut self, entity: Entity) -> CoreResult<EntityId> {
        let name_lower = entity.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName(entity.name.clone()));
        }

        let id = entity.id;
        if entity.is_area() {
            self.areas.push(id);
        }
        self.by_name_lower.insert(name_lower, id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Add an area to the world. Errors if the entity is not an area.
    pub fn add_area(&mut self, entity: Entity) -> CoreResult<EntityId> {
        if !entity.is_area() {
            return Err(CoreError::NotAnArea(entity.name));
        }
        self.add_entity(entity)
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Get a reference to an entity by ID, erroring if it is absent.
    pub fn require(&self, id: EntityId) -> CoreResult<&Entity> {
        self.entities.get(&id).ok_or(CoreError::EntityNotFound(id))
    }

    /// Get a mutable reference to an entity by ID, erroring if it is absent.
    pub fn require_mut(&mut self, id: EntityId) -> CoreResult<&mut Entity> {
        self.entities
            .get_mut(&id)
            .ok_or(CoreError::EntityNotFound(id))
    }

    /// Find an entity by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.entities.get(id))
    }

    /// Find an entity ID by name (case-insensitive).
    pub fn find_id_by_name(&self, name: &str) -> Option<EntityId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// Connect two areas with a symmetric edge.
    ///
    /// Idempotent: each direction is membership-checked before insertion, so
    /// wiring the same pair twice leaves exactly one edge each way. Silently
    /// does nothing if either ID is absent, refers to a non-area, or the two
    /// IDs are equal: absent references are a world-building convenience,
    /// not an error.
    pub fn connect_areas(&mut self, a: EntityId, b: EntityId) {
        if a == b {
            return;
        }
        let both_areas = self.get(a).is_some_and(Entity::is_area)
            && self.get(b).is_some_and(Entity::is_area);
        if !both_areas {
            return;
        }

        let forward = self.adjacency.entry(a).or_default();
        if !forward.contains(&b) {
            forward.push(b);
        }
        let backward = self.adjacency.entry(b).or_default();
        if !backward.contains(&a) {
            backward.push(a);
        }
    }

    /// Record that two entities are located at/connected to each other.
    ///
    /// Inserts each side into the other's occupancy list unconditionally;
    /// unlike [`World::connect_areas`] there is no dedup check, since this is
    /// called once per pairing during world building. Silently does nothing
    /// if either ID is absent.
    pub fn connect_entities(&mut self, a: EntityId, b: EntityId) {
        if !self.entities.contains_key(&a) || !self.entities.contains_key(&b) {
            return;
        }
        self.occupancy.entry(a).or_default().push(b);
        self.occupancy.entry(b).or_default().push(a);
    }

    /// Entities located at/connected to the given entity, in insertion
    /// order. Unknown keys yield an empty slice, never an error.
    pub fn entities_at(&self, id: EntityId) -> &[EntityId] {
        self.occupancy.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Areas adjacent to the given area, in insertion order. Unknown keys
    /// yield an empty slice.
    pub fn adjacent_to(&self, id: EntityId) -> &[EntityId] {
        self.adjacency.get(&id).map_or(&[], Vec::as_slice)
    }

    /// All areas, in creation order.
    pub fn areas(&self) -> &[EntityId] {
        &self.areas
    }

    /// Non-defeated NPCs occupying the given area.
    pub fn live_npcs_at(&self, id: EntityId) -> Vec<EntityId> {
        self.entities_at(id)
            .iter()
            .copied()
            .filter(|eid| {
                self.entities
                    .get(eid)
                    .is_some_and(|e| e.is_npc() && !e.is_defeated())
            })
            .collect()
    }

    /// True while any NPC anywhere in the world is still standing.
    pub fn any_live_npc(&self) -> bool {
        self.entities
            .values()
            .any(|e| e.is_npc() && !e.is_defeated())
    }
}

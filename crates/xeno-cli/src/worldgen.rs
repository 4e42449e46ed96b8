//! The default world: four areas and three enemies.

use xeno_core::{CoreResult, Entity, World};

/// Build the default world.
///
/// Hometown is the safe starting area; Barren, Sea, and Volcano each hold
/// one enemy. Barren and Sea bridge Hometown to the Volcano.
pub fn default_world() -> CoreResult<World> {
    let mut world = World::new();

    let hometown = world.add_area(Entity::area("Hometown"))?;
    let barren = world.add_area(Entity::area("Barren"))?;
    let sea = world.add_area(Entity::area("Sea"))?;
    let volcano = world.add_area(Entity::area("Volcano"))?;

    let scorpion_king = world.add_entity(Entity::npc("Scorpion King", "Boss", 80))?;
    let kraken = world.add_entity(Entity::npc("Kraken", "Sea Monster", 60))?;
    let fire_dragon = world.add_entity(Entity::npc("Fire Dragon", "Dragon", 120))?;

    world.connect_entities(barren, scorpion_king);
    world.connect_entities(sea, kraken);
    world.connect_entities(volcano, fire_dragon);

    world.connect_areas(hometown, barren);
    world.connect_areas(hometown, sea);
    world.connect_areas(barren, sea);
    world.connect_areas(barren, volcano);
    world.connect_areas(sea, volcano);

    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hometown_is_first_and_safe() {
        let world = default_world().unwrap();
        let first = world.areas()[0];
        assert_eq!(world.get(first).unwrap().name, "Hometown");
        assert!(world.live_npcs_at(first).is_empty());
    }

    #[test]
    fn every_other_area_holds_one_enemy() {
        let world = default_world().unwrap();
        for name in ["Barren", "Sea", "Volcano"] {
            let id = world.find_id_by_name(name).unwrap();
            assert_eq!(world.live_npcs_at(id).len(), 1, "{name}");
        }
    }

    #[test]
    fn volcano_is_not_adjacent_to_hometown() {
        let world = default_world().unwrap();
        let hometown = world.find_id_by_name("Hometown").unwrap();
        let volcano = world.find_id_by_name("Volcano").unwrap();
        assert!(!world.adjacent_to(hometown).contains(&volcano));
        assert_eq!(world.adjacent_to(volcano).len(), 2);
    }
}

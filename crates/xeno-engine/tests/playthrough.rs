//! End-to-end scenarios driving a full session through `process`.

use xeno_core::{Entity, World};
use xeno_engine::{GameConfig, GameSession, Outcome, Phase};

/// Hometown -- Cave (Slime, 15 hp) -- Depths (Fire Dragon, 120 hp).
fn small_world() -> World {
    let mut world = World::new();
    let hometown = world.add_area(Entity::area("Hometown")).unwrap();
    let cave = world.add_area(Entity::area("Cave")).unwrap();
    let depths = world.add_area(Entity::area("Depths")).unwrap();

    let slime = world.add_entity(Entity::npc("Slime", "Minion", 15)).unwrap();
    let dragon = world
        .add_entity(Entity::npc("Fire Dragon", "Dragon", 120))
        .unwrap();
    world.connect_entities(cave, slime);
    world.connect_entities(depths, dragon);

    world.connect_areas(hometown, cave);
    world.connect_areas(cave, depths);
    world
}

#[test]
fn repeated_attacks_defeat_a_weak_npc_then_allow_moving() {
    let mut session =
        GameSession::at_area(small_world(), "Cave", GameConfig::default().with_seed(3)).unwrap();
    session.process("Kael").unwrap();
    assert_eq!(session.phase(), Phase::ActionMenu);

    // Each sweep lands at least 10 damage, so 15 hp falls within two swings.
    let mut defeated = false;
    for _ in 0..3 {
        let out = session.process("1").unwrap();
        if out.contains("Slime is defeated!") {
            assert!(out.contains("Choose the next area to explore:"));
            defeated = true;
            break;
        }
    }
    assert!(defeated);
    assert_eq!(session.phase(), Phase::AreaTransition);

    // The dragon still lives elsewhere, so the session goes on.
    let out = session.process("Hometown").unwrap();
    assert!(out.contains("Current Area: Hometown"));
    assert!(!session.is_over());
}

#[test]
fn clearing_the_last_npc_wins_regardless_of_area() {
    let mut world = small_world();
    let dragon = world.find_id_by_name("Fire Dragon").unwrap();
    world.get_mut(dragon).unwrap().take_damage(1000);

    let mut session =
        GameSession::at_area(world, "Cave", GameConfig::default().with_seed(3)).unwrap();
    session.process("Kael").unwrap();

    let mut won = false;
    for _ in 0..3 {
        let out = session.process("1").unwrap();
        if out.contains("Congratulations!") {
            won = true;
            break;
        }
    }
    assert!(won);
    assert_eq!(session.outcome(), Some(Outcome::Victory));
}

#[test]
fn retaliation_defeat_short_circuits_the_round() {
    let mut world = World::new();
    let pit = world.add_area(Entity::area("Pit")).unwrap();
    let ogre = world.add_entity(Entity::npc("Ogre", "Brute", 200)).unwrap();
    let troll = world.add_entity(Entity::npc("Troll", "Brute", 200)).unwrap();
    world.connect_entities(pit, ogre);
    world.connect_entities(pit, troll);

    let config = GameConfig::default().with_seed(9).with_player_health(1);
    let mut session = GameSession::new(world, config).unwrap();
    session.process("Kael").unwrap();

    // The first retaliator fells the player; the second never acts.
    let out = session.process("1").unwrap();
    assert!(out.contains("Ogre attacks Kael"));
    assert!(!out.contains("Troll attacks Kael"));
    assert!(out.contains("You have been defeated."));
    assert_eq!(session.outcome(), Some(Outcome::Defeat));
}

#[test]
fn player_may_flee_with_enemies_still_standing() {
    let mut session =
        GameSession::at_area(small_world(), "Depths", GameConfig::default().with_seed(5)).unwrap();
    session.process("Kael").unwrap();
    assert_eq!(session.phase(), Phase::ActionMenu);

    let out = session.process("4").unwrap();
    assert!(out.contains("Choose the next area to explore:"));

    let out = session.process("Cave").unwrap();
    assert!(out.contains("Current Area: Cave"));
    assert!(!session.is_over());
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let inputs = ["Kael", "Cave", "1", "1", "1"];
    let transcript = |seed: u64| -> Vec<String> {
        let mut session =
            GameSession::new(small_world(), GameConfig::default().with_seed(seed)).unwrap();
        inputs
            .iter()
            .map_while(|input| {
                if session.is_over() {
                    None
                } else {
                    Some(session.process(input).unwrap())
                }
            })
            .collect()
    };

    assert_eq!(transcript(11), transcript(11));
}

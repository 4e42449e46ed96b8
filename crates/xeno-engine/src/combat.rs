//! Combat resolution: the player's attack sweep and NPC retaliation.
//!
//! Both resolvers narrate what happened and report the facts the session
//! state machine branches on. All rolls go through the session's seeded RNG.

use rand::Rng;
use rand::rngs::StdRng;

use xeno_core::{AttackRoll, Entity, EntityId, World};

/// An action the player can pick from the turn menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Attack every live NPC in the current area.
    Attack,
    /// Raise the one-shot defense.
    Defend,
    /// Drink a health potion.
    UsePotion,
    /// Leave for another area, fleeing any remaining enemies.
    Move,
}

impl PlayerAction {
    /// Parse a menu choice ("1" through "4"). Anything else forfeits the turn.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Attack),
            "2" => Some(Self::Defend),
            "3" => Some(Self::UsePotion),
            "4" => Some(Self::Move),
            _ => None,
        }
    }
}

/// Outcome of the player's attack sweep.
#[derive(Debug)]
pub struct AttackReport {
    /// Rendered narration of the sweep.
    pub narration: String,
    /// True when no live NPC remains in the area afterwards.
    pub area_cleared: bool,
}

/// Outcome of the NPC retaliation round.
#[derive(Debug)]
pub struct RetaliationReport {
    /// Rendered narration of the round.
    pub narration: String,
    /// True when the player fell during the round.
    pub player_defeated: bool,
}

/// Sweep-attack every live NPC co-located with the player.
///
/// Per NPC a coin decides between the plain roll and the bonus form (whose
/// bonus is itself nonzero only half the time). Defeats are narrated as they
/// happen.
pub fn resolve_player_attack(
    world: &mut World,
    player: &Entity,
    area: EntityId,
    rng: &mut StdRng,
) -> AttackReport {
    let mut narration = String::new();

    for npc_id in world.live_npcs_at(area) {
        let roll = if rng.random_bool(0.5) {
            AttackRoll {
                base: player.attack_roll(rng),
                bonus: 0,
            }
        } else {
            player.attack_roll_with_bonus(rng)
        };

        let Some(npc) = world.get_mut(npc_id) else {
            continue;
        };
        npc.take_damage(roll.total());

        narration.push_str(&format!(
            "{} attacks {} with damage: {}",
            player.name,
            npc.name,
            roll.total()
        ));
        if roll.bonus > 0 {
            narration.push_str(&format!(" (Bonus damage: {})", roll.bonus));
        }
        narration.push('\n');

        if let Some(health) = npc.health() {
            narration.push_str(&format!("{}'s health: {health}\n", npc.name));
        }
        if npc.is_defeated() {
            narration.push_str(&format!("{} is defeated!\n", npc.name));
        }
    }

    let area_cleared = world.live_npcs_at(area).is_empty();
    AttackReport {
        narration,
        area_cleared,
    }
}

/// Every non-defeated occupant of the area strikes the player once.
///
/// Damage goes through `take_damage`, so a raised defense halves the first
/// hit and is consumed. The round short-circuits the moment the player
/// falls: remaining attackers do not act.
pub fn resolve_retaliation(
    world: &World,
    player: &mut Entity,
    area: EntityId,
    rng: &mut StdRng,
) -> RetaliationReport {
    let mut narration = String::new();
    let mut player_defeated = false;

    for id in world.entities_at(area) {
        let Some(attacker) = world.get(*id) else {
            continue;
        };
        if attacker.is_defeated() {
            continue;
        }

        let damage = attacker.attack_roll(rng);
        player.take_damage(damage);

        narration.push_str(&format!(
            "{} attacks {} with damage: {damage}\n",
            attacker.name, player.name
        ));
        if let Some(health) = player.health() {
            narration.push_str(&format!("{}'s health: {health}\n", player.name));
        }

        if player.is_defeated() {
            player_defeated = true;
            break;
        }
    }

    RetaliationReport {
        narration,
        player_defeated,
    }
}

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health restored by a single potion.
pub const POTION_HEAL: u32 = 20;

/// Unique identifier for every entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an entity, carrying the variant-specific state.
///
/// Player, NPC, and area share one contract (`attack_roll`, `take_damage`,
/// `defend`, `is_defeated`) dispatched by matching on this tag. Areas are
/// inert under all of it: they roll 0, ignore damage, and are never defeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The player character.
    Player {
        /// Current health. Never negative; 0 means defeated.
        health: u32,
        /// Health potions remaining.
        potions: u32,
        /// One-shot defense flag, consumed by the next hit taken.
        defending: bool,
    },
    /// A non-player character. Never defends, cannot use potions.
    Npc {
        /// Display-only role, e.g. "Boss" or "Sea Monster".
        role: String,
        /// Current health. Never negative; 0 means defeated.
        health: u32,
    },
    /// A location node in the world graph.
    Area,
}

/// A damage roll broken into its base and bonus parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    /// The base damage roll.
    pub base: u32,
    /// Flat bonus damage; zero roughly half the time.
    pub bonus: u32,
}

impl AttackRoll {
    /// Total damage dealt by this roll.
    pub fn total(self) -> u32 {
        self.base + self.bonus
    }
}

/// A game actor: the player, an NPC, or an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// Display name of the entity.
    pub name: String,
    /// The variant tag and its state.
    pub kind: EntityKind,
}

impl Entity {
    /// Create a player with full health and the given potion supply.
    pub fn player(name: impl Into<String>, health: u32, potions: u32) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind: EntityKind::Player {
                health,
                potions,
                defending: false,
            },
        }
    }

    /// Create a non-player character.
    pub fn npc(name: impl Into<String>, role: impl Into<String>, health: u32) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind: EntityKind::Npc {
                role: role.into(),
                health,
            },
        }
    }

    /// Create an area.
    pub fn area(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            kind: EntityKind::Area,
        }
    }

    /// Current health, if this entity has any (areas do not).
    pub fn health(&self) -> Option<u32> {
        match &self.kind {
            EntityKind::Player { health, .. } | EntityKind::Npc { health, .. } => Some(*health),
            EntityKind::Area => None,
        }
    }

    /// The NPC role, if this is an NPC.
    pub fn role(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Npc { role, .. } => Some(role),
            _ => None,
        }
    }

    /// Potions remaining, if this is the player.
    pub fn potions(&self) -> Option<u32> {
        match &self.kind {
            EntityKind::Player { potions, .. } => Some(*potions),
            _ => None,
        }
    }

    /// True if this entity is an area node.
    pub fn is_area(&self) -> bool {
        matches!(self.kind, EntityKind::Area)
    }

    /// True if this entity is an NPC.
    pub fn is_npc(&self) -> bool {
        matches!(self.kind, EntityKind::Npc { .. })
    }

    /// True if the one-shot defense flag is currently set.
    pub fn is_defending(&self) -> bool {
        matches!(
            self.kind,
            EntityKind::Player {
                defending: true,
                ..
            }
        )
    }

    /// Roll base attack damage: 10-20 for the player, 5-15 for an NPC,
    /// always 0 for an area.
    pub fn attack_roll(&self, rng: &mut StdRng) -> u32 {
        match &self.kind {
            EntityKind::Player { .. } => rng.random_range(10..=20),
            EntityKind::Npc { .. } => rng.random_range(5..=15),
            EntityKind::Area => 0,
        }
    }

    /// Roll an attack with possible bonus damage.
    ///
    /// Only the player rolls bonuses: a flat 5-10 with 50% probability,
    /// otherwise 0. NPCs and areas always roll a zero bonus.
    pub fn attack_roll_with_bonus(&self, rng: &mut StdRng) -> AttackRoll {
        let base = self.attack_roll(rng);
        let bonus = match &self.kind {
            EntityKind::Player { .. } if rng.random_bool(0.5) => rng.random_range(5..=10),
            _ => 0,
        };
        AttackRoll { base, bonus }
    }

    /// Apply incoming damage, clamped at a health floor of 0.
    ///
    /// A defending player takes half the amount (integer division) and the
    /// flag is cleared: the defense is consumed by this hit regardless of
    /// its source. Areas ignore damage entirely.
    pub fn take_damage(&mut self, amount: u32) {
        match &mut self.kind {
            EntityKind::Player {
                health, defending, ..
            } => {
                let amount = if *defending {
                    *defending = false;
                    amount / 2
                } else {
                    amount
                };
                *health = health.saturating_sub(amount);
            }
            EntityKind::Npc { health, .. } => {
                *health = health.saturating_sub(amount);
            }
            EntityKind::Area => {}
        }
    }

    /// Set the one-shot defense flag. Idempotent: two calls in a row still
    /// leave a single charge. No-op for NPCs and areas.
    pub fn defend(&mut self) {
        if let EntityKind::Player { defending, .. } = &mut self.kind {
            *defending = true;
        }
    }

    /// True once health has been clamped to 0. Always false for areas.
    pub fn is_defeated(&self) -> bool {
        match self.health() {
            Some(health) => health == 0,
            None => false,
        }
    }

    /// Drink a potion, restoring [`POTION_HEAL`] health (no upper cap).
    ///
    /// Returns the new health, or `None` when no potions remain. Depletion
    /// is reported by the caller, never an error.
    pub fn use_potion(&mut self) -> Option<u32> {
        match &mut self.kind {
            EntityKind::Player {
                health, potions, ..
            } if *potions > 0 => {
                *potions -= 1;
                *health += POTION_HEAL;
                Some(*health)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntityKind::Player { health, .. } => {
                write!(f, "Player: {}, Health: {health}", self.name)
            }
            EntityKind::Npc { role, health } => {
                write!(f, "NPC: {}, Role: {role}, Health: {health}", self.name)
            }
            EntityKind::Area => write!(f, "Area: {}", self.name),
        }
    }
}

//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible dice rolls.
    pub seed: u64,
    /// Starting player health.
    pub player_health: u32,
    /// Starting health potion count.
    pub potions: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player_health: 100,
            potions: 3,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting player health.
    pub fn with_player_health(mut self, health: u32) -> Self {
        self.player_health = health;
        self
    }

    /// Set the starting potion count.
    pub fn with_potions(mut self, potions: u32) -> Self {
        self.potions = potions;
        self
    }
}

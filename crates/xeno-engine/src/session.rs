//! Game session management.
//!
//! `GameSession` is a turn-based state machine driven entirely through
//! [`GameSession::process`]: the caller feeds it one line of player input
//! and prints whatever text comes back. The session owns the world, the
//! player entity, and a seeded RNG, so identical worlds, seeds, and inputs
//! replay identically.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use xeno_core::{Entity, EntityId, World};

use crate::combat::{self, PlayerAction};
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every NPC was defeated, or the player exited while still standing.
    Victory,
    /// The player's health reached zero.
    Defeat,
}

/// The state the session is currently in; decides how input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player's name.
    AwaitingName,
    /// Waiting for an action-menu choice (1-4).
    ActionMenu,
    /// Waiting for a destination area name (or "exit").
    AreaTransition,
    /// Terminal state; further input is an error.
    GameOver(Outcome),
}

/// An interactive game session.
pub struct GameSession {
    world: World,
    config: GameConfig,
    /// The player is created and owned by the session, not the world graph.
    player: Option<Entity>,
    current_area: EntityId,
    phase: Phase,
    rng: StdRng,
}

impl GameSession {
    /// Create a session starting in the first area added to the world.
    pub fn new(world: World, config: GameConfig) -> EngineResult<Self> {
        let start = world.areas().first().copied().ok_or(EngineError::NoAreas)?;
        Ok(Self::with_start(world, start, config))
    }

    /// Create a session starting in a named area.
    pub fn at_area(world: World, area_name: &str, config: GameConfig) -> EngineResult<Self> {
        let start = world
            .find_id_by_name(area_name)
            .filter(|id| world.get(*id).is_some_and(Entity::is_area))
            .ok_or_else(|| EngineError::AreaNotFound(area_name.to_string()))?;
        Ok(Self::with_start(world, start, config))
    }

    fn with_start(world: World, start: EntityId, config: GameConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            world,
            config,
            player: None,
            current_area: start,
            phase: Phase::AwaitingName,
            rng,
        }
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world being played.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player entity, once the name has been given.
    pub fn player(&self) -> Option<&Entity> {
        self.player.as_ref()
    }

    /// The area the player is currently in.
    pub fn current_area(&self) -> EntityId {
        self.current_area
    }

    /// The current phase of the session.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The final outcome, if the session has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// True once the session has reached its terminal state.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The greeting and name prompt shown before the first input.
    pub fn opening(&self) -> String {
        "Welcome to Xeno RPG!\nWhat is your name?".to_string()
    }

    /// Process one line of player input and return the text to display.
    ///
    /// In-game mistakes (bad menu choices, unknown destinations) come back
    /// as rendered messages; `Err` only marks input fed to a finished
    /// session.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        match self.phase {
            Phase::AwaitingName => self.handle_name(input),
            Phase::ActionMenu => self.handle_action(input),
            Phase::AreaTransition => self.handle_transition(input),
            Phase::GameOver(_) => Err(EngineError::SessionOver),
        }
    }

    // -----------------------------------------------------------------------
    // Phase handlers
    // -----------------------------------------------------------------------

    fn handle_name(&mut self, input: &str) -> EngineResult<String> {
        let name = input.trim();
        if name.is_empty() {
            return Ok("What is your name?".to_string());
        }

        self.player = Some(Entity::player(
            name,
            self.config.player_health,
            self.config.potions,
        ));

        let mut out = format!("Hello, {name}! Let's start the game.\n\n");
        out.push_str(&self.enter_area());
        Ok(out)
    }

    fn handle_action(&mut self, input: &str) -> EngineResult<String> {
        let Some(action) = PlayerAction::parse(input) else {
            return Ok(format!(
                "Invalid choice. You lose your turn.\n\n{}",
                self.action_menu()
            ));
        };

        if self.in_hometown() && action != PlayerAction::Move {
            return Ok(format!(
                "Invalid choice. You can only move to a different area.\n\n{}",
                self.action_menu()
            ));
        }

        match action {
            PlayerAction::Attack => self.resolve_attack_round(),
            PlayerAction::Defend => {
                let Some(player) = self.player.as_mut() else {
                    return Err(EngineError::NoPlayer);
                };
                player.defend();
                let line = format!("{} is defending.\n", player.name);
                Ok(format!("{line}\n{}", self.action_menu()))
            }
            PlayerAction::UsePotion => {
                let Some(player) = self.player.as_mut() else {
                    return Err(EngineError::NoPlayer);
                };
                let line = match player.use_potion() {
                    Some(health) => format!(
                        "{} uses a health potion. Health restored!\nCurrent health: {health}\n",
                        player.name
                    ),
                    None => "No health potions left.\n".to_string(),
                };
                Ok(format!("{line}\n{}", self.action_menu()))
            }
            PlayerAction::Move => {
                // Fleeing is allowed; remaining enemies stay where they are.
                if self.world.any_live_npc() {
                    self.phase = Phase::AreaTransition;
                    Ok(self.transition_prompt())
                } else {
                    self.phase = Phase::GameOver(Outcome::Victory);
                    Ok(game_over_banner(Outcome::Victory))
                }
            }
        }
    }

    fn resolve_attack_round(&mut self) -> EngineResult<String> {
        let Some(player) = self.player.as_ref() else {
            return Err(EngineError::NoPlayer);
        };
        let attack =
            combat::resolve_player_attack(&mut self.world, player, self.current_area, &mut self.rng);
        let mut out = attack.narration;

        let Some(player) = self.player.as_mut() else {
            return Err(EngineError::NoPlayer);
        };
        let retaliation =
            combat::resolve_retaliation(&self.world, player, self.current_area, &mut self.rng);
        out.push_str(&retaliation.narration);

        if retaliation.player_defeated {
            self.phase = Phase::GameOver(Outcome::Defeat);
            out.push('\n');
            out.push_str(&game_over_banner(Outcome::Defeat));
            return Ok(out);
        }

        out.push('\n');
        if !attack.area_cleared {
            out.push_str(&self.action_menu());
        } else if self.world.any_live_npc() {
            self.phase = Phase::AreaTransition;
            out.push_str(&self.transition_prompt());
        } else {
            self.phase = Phase::GameOver(Outcome::Victory);
            out.push_str(&game_over_banner(Outcome::Victory));
        }
        Ok(out)
    }

    fn handle_transition(&mut self, input: &str) -> EngineResult<String> {
        let choice = input.trim();
        if choice.eq_ignore_ascii_case("exit") {
            let outcome = if self.player.as_ref().is_some_and(Entity::is_defeated) {
                Outcome::Defeat
            } else {
                Outcome::Victory
            };
            self.phase = Phase::GameOver(outcome);
            return Ok(game_over_banner(outcome));
        }

        let destination = self
            .world
            .adjacent_to(self.current_area)
            .iter()
            .copied()
            .find(|id| {
                self.world
                    .get(*id)
                    .is_some_and(|a| a.name.eq_ignore_ascii_case(choice))
            });

        let mut out = String::new();
        match destination {
            Some(id) => self.current_area = id,
            None => {
                // Intentional fallback, not an error: an unrecognized name
                // sends the player to a random area from the global list.
                out.push_str(&format!(
                    "Unknown area '{choice}'. Moving to a random area instead.\n\n"
                ));
                let areas = self.world.areas();
                if !areas.is_empty() {
                    self.current_area = areas[self.rng.random_range(0..areas.len())];
                }
            }
        }

        out.push_str(&self.enter_area());
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Arrive in the current area: render it, then pick the next phase.
    ///
    /// The global victory check runs here, so a world with no NPC left
    /// standing ends the session no matter which area the player is in.
    fn enter_area(&mut self) -> String {
        let mut out = self.area_view();
        out.push('\n');

        if !self.world.any_live_npc() {
            self.phase = Phase::GameOver(Outcome::Victory);
            out.push_str(&game_over_banner(Outcome::Victory));
        } else if self.world.live_npcs_at(self.current_area).is_empty() {
            // Nothing to fight here; skip combat and offer the move prompt.
            self.phase = Phase::AreaTransition;
            out.push_str(&self.transition_prompt());
        } else {
            self.phase = Phase::ActionMenu;
            out.push_str(&self.action_menu());
        }
        out
    }

    fn area_view(&self) -> String {
        let mut out = format!("Current Area: {}\n", self.current_area_name());
        out.push_str("Entities in this area:\n");
        for id in self.world.entities_at(self.current_area) {
            if let Some(entity) = self.world.get(*id) {
                out.push_str(&format!("{entity}\n"));
            }
        }
        out
    }

    fn action_menu(&self) -> String {
        let mut out = String::from("Choose your action:\n");
        if !self.in_hometown() {
            out.push_str("  1. Attack\n");
            out.push_str("  2. Defend\n");
            out.push_str("  3. Use Health Potion\n");
        }
        out.push_str("  4. Move to a different area\n");
        out.push_str("Enter your choice (1-4):");
        out
    }

    fn transition_prompt(&self) -> String {
        let adjacent: Vec<&str> = self
            .world
            .adjacent_to(self.current_area)
            .iter()
            .filter_map(|id| self.world.get(*id))
            .map(|a| a.name.as_str())
            .collect();

        let mut out = String::from("Choose the next area to explore:\n");
        out.push_str(&format!("Adjacent areas: {}\n", adjacent.join(", ")));
        out.push_str("Enter the name of the area ('exit' to end the game):");
        out
    }

    fn current_area_name(&self) -> &str {
        self.world
            .get(self.current_area)
            .map_or("", |a| a.name.as_str())
    }

    fn in_hometown(&self) -> bool {
        self.current_area_name() == "Hometown"
    }
}

/// The terminal banner for a finished session.
fn game_over_banner(outcome: Outcome) -> String {
    let line = match outcome {
        Outcome::Defeat => "You have been defeated. Better luck next time!",
        Outcome::Victory => "Congratulations! You have defeated all enemies and won the game!",
    };
    format!("Game Over!\n{line}")
}

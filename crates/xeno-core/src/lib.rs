//! Core types for Xeno: entities, areas, and the world graph.
//!
//! This crate defines the data model the turn engine runs against. Entities
//! are a tagged sum type (player, NPC, area) sharing one combat contract,
//! and a [`World`] owns every entity while tracking area adjacency and
//! occupancy as separate relations. All dice rolls take a caller-supplied
//! seedable RNG, so nothing in here touches global randomness.

/// Entity types, identifiers, and the combat contract.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The world graph that owns entities and their relations.
pub mod world;

/// Re-export core entity types.
pub use entity::{AttackRoll, Entity, EntityId, EntityKind, POTION_HEAL};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the world graph.
pub use world::World;

use crate::entity::EntityId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying a world.
///
/// Graph wiring (`connect_areas`, `connect_entities`) never errors: absent
/// references are silently ignored there.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity ID does not exist in the world.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An entity with the same name already exists.
    #[error("entity already exists: \"{0}\"")]
    DuplicateName(String),

    /// An area was required but the entity is a player or NPC.
    #[error("not an area: \"{0}\"")]
    NotAnArea(String),
}

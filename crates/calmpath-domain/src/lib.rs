// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod check_in;
pub mod habit;
pub mod profile;
pub mod shared;
pub mod technique;

// Re-exports for convenience
pub use shared::{CheckInId, DomainError, HabitId, TechniqueId, UserId};

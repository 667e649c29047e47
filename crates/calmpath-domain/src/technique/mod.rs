mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{Technique, VoteKind};
pub use repository::TechniqueRepository;

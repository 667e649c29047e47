mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::UserProfile;
pub use repository::UserProfileRepository;

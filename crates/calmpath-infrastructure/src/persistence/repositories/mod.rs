mod check_in_repo;
mod habit_repo;
mod profile_repo;
mod technique_repo;

pub use check_in_repo::DocStoreCheckInRepository;
pub use habit_repo::DocStoreHabitRepository;
pub use profile_repo::DocStoreUserProfileRepository;
pub use technique_repo::DocStoreTechniqueRepository;

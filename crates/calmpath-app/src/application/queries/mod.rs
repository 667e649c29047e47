mod anxiety_queries;
mod habit_queries;
mod profile_queries;
mod technique_queries;


pub use anxiety_queries::AnxietyQueries;
pub use habit_queries::HabitQueries;
pub use profile_queries::ProfileQueries;
pub use technique_queries::TechniqueQueries;

mod record_check_in_handler;
mod toggle_habit_handler;
mod update_profile_handler;
mod vote_technique_handler;


pub use record_check_in_handler::RecordCheckInCommandHandler;
pub use toggle_habit_handler::ToggleHabitCommandHandler;
pub use update_profile_handler::UpdateProfileCommandHandler;
pub use vote_technique_handler::VoteTechniqueCommandHandler;

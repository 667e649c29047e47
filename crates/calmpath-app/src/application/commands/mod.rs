pub mod command_handler;
pub mod handlers;

mod check_in_commands;
mod profile_commands;
mod technique_commands;

pub use check_in_commands::{RecordCheckInCommand, RecordCheckInResult};
pub use profile_commands::{
    AvatarUpload, ToggleHabitCommand, ToggleHabitResult, UpdateProfileCommand,
};
pub use technique_commands::VoteTechniqueCommand;

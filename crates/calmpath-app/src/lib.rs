pub mod application;

pub use application::services::AppState;

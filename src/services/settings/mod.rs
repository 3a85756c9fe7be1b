// Settings service
// Loads and saves the planner's TOML settings file

mod service;

pub use service::SettingsService;

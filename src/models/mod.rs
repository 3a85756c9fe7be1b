// Module exports for models

pub mod date_key;
pub mod event;
pub mod settings;
pub mod time_of_day;

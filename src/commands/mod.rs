// Command handlers for the CLI

pub mod events;
pub mod month;

// Service module exports

pub mod calendar;
pub mod database;
pub mod event;
pub mod settings;
pub mod storage;

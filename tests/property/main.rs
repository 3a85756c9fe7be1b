// Property-based tests for the scheduling core
// Run with random months, times and event sequences

mod grid_properties;
mod store_properties;

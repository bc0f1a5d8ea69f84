// Reusable library API; the CLI in main.rs is a thin wrapper around it
pub mod bounds;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod loader;
pub mod log;
pub mod matcher;
pub mod report;
pub mod search;

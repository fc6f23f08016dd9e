pub mod completions;
pub mod config;
pub mod progress;
pub mod show;

pub mod config;
pub mod project;

// Re-export commonly used functions for convenience
pub use config::Config;
pub use project::config_dir;

pub mod config;
pub mod logging;
pub mod profile;

// Re-export commonly used types for convenience.
pub use config::{AppConfig, CheckSettings};
pub use profile::{load_descriptor, Apparatus, ProfileDescriptor, RoundingPolicy};

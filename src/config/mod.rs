//! Configuration module for Mes Dépenses
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DepensesPaths;
pub use settings::Settings;

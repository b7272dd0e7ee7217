pub mod artifacts;
pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod preflight;
pub mod prompt;
pub mod report;
pub mod search;
pub mod session;
pub mod setup;

// Re-export commonly used types
pub use config::Config;
pub use error::{ArtifactError, CatalogError, SetupError};
pub use session::{RunState, SetupOutcome, SetupSession};

//! Exit code constants for the git-setup CLI.
//!
//! - 0: Setup finished (possibly with warnings), or documentation printed
//! - 1: Setup failed: a bootstrap step, the prompt layer, or preflight
//! - 2: Invalid command-line usage (reported by clap)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Fatal failure during a run.
pub const FAILURE: i32 = 1;

/// Invalid command-line usage.
pub const USAGE: i32 = 2;

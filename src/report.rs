//! Console output for a setup run.
//!
//! Steps are blue, successes green, warnings yellow, errors red on stderr.
//! There is no machine-readable output.

use colored::*;

use crate::session::{SetupOutcome, SetupSession, Warning};

/// A step about to run
pub fn step(message: &str) {
    println!("{}", message.blue());
}

/// A step that finished
pub fn success(message: &str) {
    println!("{}", format!("✨ {message}").green());
}

/// Informational line that is neither progress nor a problem
pub fn info(message: &str) {
    println!("{}", message.dimmed());
}

/// A non-fatal failure
pub fn warning(warning: &Warning) {
    eprintln!(
        "{} {}",
        format!("Warning: {} failed", warning.step).yellow(),
        format!("[{}] {}", warning.kind, warning.message).yellow()
    );
}

/// A fatal failure
pub fn error(message: &str) {
    eprintln!("{} {}", "Error setting up repository:".red().bold(), message.red());
}

/// What to do after a finished setup. Skips add/commit when the run already committed.
pub fn next_steps(session: &SetupSession) {
    println!("{}", "\nNext steps:".yellow());
    let mut n = 1;
    if !session.initial_commit {
        println!("{n}. Add your files: git add .");
        println!("{}. Make your first commit: git commit -m \"Initial commit\"", n + 1);
        n += 2;
    }
    println!(
        "{n}. Push to remote: git push -u {} {}",
        session.remote_name, session.branch_name
    );
}

/// Final summary for an outcome
pub fn outcome(outcome: &SetupOutcome, banner: &str) {
    match outcome {
        SetupOutcome::CompletedWithWarnings { session, warnings } => {
            success(banner);
            if !warnings.is_empty() {
                println!(
                    "{}",
                    format!("Finished with {} warning(s):", warnings.len()).yellow()
                );
                for w in warnings {
                    println!("  {} {w}", "-".yellow());
                }
            }
            next_steps(session);
        }
        SetupOutcome::Aborted { error: err, .. } => {
            error(&err.to_string());
        }
    }
}

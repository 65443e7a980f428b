//! Command execution for the gatekeeper.

/// The single run-check workflow: sync labels, validate the description,
/// and report a commit status.
pub mod run_check;

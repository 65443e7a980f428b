//! Pure decision logic for gating PR checks.
//!
//! Nothing in this module talks to the network. The driver in
//! `command::run_check` feeds it a PR snapshot and acts on the results.

/// Line-oriented parser for the PR description template.
pub mod description;

/// Label and author-trust policy deciding whether checks may run.
pub mod eligibility;

/// Computes label add/remove sets from the resolved changelog category.
pub mod labels;

/// Shared types for check verdicts and label deltas.
pub mod types;

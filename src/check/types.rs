//! Shared data types for the check decision functions.
use serde::Serialize;
use std::fmt;

/// Commit status states understood by the forge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Pending,
    Success,
    Failure,
}

impl StatusState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusState::Pending => "pending",
            StatusState::Success => "success",
            StatusState::Failure => "failure",
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
/// Outcome of the eligibility decision.
pub struct Verdict {
    /// Whether automated checks should run for this PR.
    pub can_run: bool,
    /// Human-readable reason, used as the status description.
    pub reason: String,
    /// Status state to report when checks are skipped.
    pub state: StatusState,
}

#[derive(Debug, Clone)]
/// Result of parsing the PR description.
///
/// `error` is `None` on success. On failure the partially parsed category is
/// still returned so label sync can proceed.
pub struct ParsedDescription {
    pub category: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Labels to add and remove, computed once per invocation.
pub struct LabelDelta {
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl LabelDelta {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

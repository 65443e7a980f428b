//! Request and snapshot types exchanged with the forge.
use std::collections::HashSet;

use crate::check::types::StatusState;

#[derive(Debug, Clone)]
/// Read-only snapshot of a pull request, taken once per invocation.
pub struct PrSnapshot {
    pub number: u64,
    /// Head commit the status is attached to.
    pub sha: String,
    pub body: String,
    pub labels: HashSet<String>,
    pub user_login: String,
    /// Ids of the public organizations the author belongs to.
    pub user_org_ids: Vec<u64>,
    /// Whether the diff touches any submodule path.
    pub has_submodule_changes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to add or remove labels on a pull request.
pub struct LabelsRequest {
    pub pr_number: u64,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to create a commit status on the PR head.
pub struct CommitStatusRequest {
    pub sha: String,
    pub state: StatusState,
    pub description: String,
    pub target_url: String,
}

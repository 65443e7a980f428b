//! Reads the pull-request number from the Actions event payload.
//!
//! When `--pr-number` isn't given, the number comes from the JSON file named
//! by `GITHUB_EVENT_PATH`. Both `pull_request` events (number nested under
//! `pull_request`) and the top-level `number` field are understood.
use color_eyre::eyre::{WrapErr, eyre};
use serde::Deserialize;
use std::{env, fs, path::Path};

use crate::result::Result;

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct Event {
    number: Option<u64>,
    pull_request: Option<EventPullRequest>,
}

/// Parse the PR number out of an event payload file.
pub fn pr_number_from_event(path: &Path) -> Result<u64> {
    let content = fs::read_to_string(path).wrap_err_with(|| {
        format!("failed to read event payload: {}", path.display())
    })?;

    let event: Event = serde_json::from_str(&content)
        .wrap_err("failed to parse event payload")?;

    event
        .pull_request
        .map(|pr| pr.number)
        .or(event.number)
        .ok_or(eyre!("event payload does not reference a pull request"))
}

/// Parse the PR number from the file named by `GITHUB_EVENT_PATH`.
pub fn pr_number_from_env() -> Result<u64> {
    let path = env::var("GITHUB_EVENT_PATH")
        .map_err(|_| eyre!("must set --pr-number or GITHUB_EVENT_PATH"))?;

    pr_number_from_event(Path::new(&path))
}

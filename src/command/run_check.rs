//! The run-check workflow.
//!
//! Fetches the PR snapshot, syncs classification labels, validates the
//! description against the template, and reports a single commit status.
//! API calls happen in a fixed order: add labels, remove labels, status.
use log::*;

use crate::{
    check::{description, eligibility, labels, types::StatusState},
    config::DOCUMENTATION_LABELS,
    forge::{
        request::{CommitStatusRequest, LabelsRequest},
        traits::Forge,
    },
    result::Result,
};

/// Final outcome of the run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Checks proceed normally (exit 0).
    Proceed,
    /// Checks are skipped or the description is invalid (exit 1).
    Blocked,
}

/// Run the gatekeeper for one pull request.
pub async fn execute(
    forge: &dyn Forge,
    pr_number: u64,
    run_url: &str,
    template_url: &str,
) -> Result<Gate> {
    let pr = forge.get_pr_snapshot(pr_number).await?;

    info!("got labels: {:?}", pr.labels);

    let verdict =
        eligibility::evaluate(&pr.labels, &pr.user_login, &pr.user_org_ids);

    let parsed = description::check_description(&pr.body)?;

    let delta =
        labels::compute_delta(&parsed.category, &pr.labels, pr.has_submodule_changes);

    info!(
        "change labels: add {:?}, remove {:?}",
        delta.add, delta.remove
    );

    if !delta.add.is_empty() {
        forge
            .add_labels(LabelsRequest {
                pr_number: pr.number,
                labels: delta.add,
            })
            .await?;
    }

    if !delta.remove.is_empty() {
        forge
            .remove_labels(LabelsRequest {
                pr_number: pr.number,
                labels: delta.remove,
            })
            .await?;
    }

    if let Some(report) = parsed.error {
        println!(
            "::error ::Cannot run, PR description does not match the template: {report}"
        );
        info!(
            "PR body doesn't match the template: (start)\n{}\n(end)\nReason: {report}",
            pr.body
        );

        forge
            .set_commit_status(CommitStatusRequest {
                sha: pr.sha,
                state: StatusState::Failure,
                description: report,
                target_url: template_url.to_string(),
            })
            .await?;

        return Ok(Gate::Blocked);
    }

    if !verdict.can_run {
        println!("::notice ::Cannot run");

        forge
            .set_commit_status(CommitStatusRequest {
                sha: pr.sha,
                state: verdict.state,
                description: verdict.reason,
                target_url: run_url.to_string(),
            })
            .await?;

        return Ok(Gate::Blocked);
    }

    if DOCUMENTATION_LABELS.iter().any(|l| pr.labels.contains(*l)) {
        println!("::notice ::Can run, but it's a documentation PR, skipping");

        forge
            .set_commit_status(CommitStatusRequest {
                sha: pr.sha,
                state: StatusState::Success,
                description: "Skipping checks for documentation".to_string(),
                target_url: run_url.to_string(),
            })
            .await?;

        return Ok(Gate::Proceed);
    }

    println!("::notice ::Can run");

    forge
        .set_commit_status(CommitStatusRequest {
            sha: pr.sha,
            state: StatusState::Pending,
            description: verdict.reason,
            target_url: run_url.to_string(),
        })
        .await?;

    Ok(Gate::Proceed)
}

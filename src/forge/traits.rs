//! Traits related to the remote forge.
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::request::{CommitStatusRequest, LabelsRequest, PrSnapshot},
    result::Result,
};

/// Narrow interface over the forge API. Tests inject `MockForge` here.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    async fn get_pr_snapshot(&self, pr_number: u64) -> Result<PrSnapshot>;
    async fn add_labels(&self, req: LabelsRequest) -> Result<()>;
    async fn remove_labels(&self, req: LabelsRequest) -> Result<()>;
    async fn set_commit_status(&self, req: CommitStatusRequest) -> Result<()>;
}

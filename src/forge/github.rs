//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashSet;

use crate::{
    config::CHECK_NAME,
    forge::{
        config::RemoteConfig,
        request::{CommitStatusRequest, LabelsRequest, PrSnapshot},
        traits::Forge,
    },
    result::Result,
};

/// GitHub caps status descriptions at 140 characters; stay one short the
/// way the Actions UI expects.
const STATUS_DESCRIPTION_LIMIT: usize = 139;

/// Page size for the PR file listing.
const FILES_PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
struct OrgSummary {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct PrFile {
    filename: String,
}

/// GitHub forge implementation using Octocrab for label, status, and PR
/// snapshot interactions.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = config.api_base_uri();
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }

    async fn get_file_content(&self, path: &str) -> Result<Option<String>> {
        let result = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .get_content()
            .path(path)
            .send()
            .await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                info!("no file found for path: {path}");
                Ok(None)
            }
            Err(err) => Err(err.into()),
            Ok(mut data) => {
                let items = data.take_items();

                if items.is_empty() {
                    info!("no file found for path: {path}");
                    return Ok(None);
                }

                Ok(items[0].decoded_content())
            }
        }
    }

    async fn get_user_org_ids(&self, login: &str) -> Result<Vec<u64>> {
        if login.is_empty() {
            return Ok(vec![]);
        }

        let endpoint = format!("{}/users/{login}/orgs", self.base_uri);
        let orgs: Vec<OrgSummary> =
            self.instance.get(endpoint, None::<&()>).await?;

        Ok(orgs.into_iter().map(|o| o.id).collect())
    }

    async fn get_changed_files(&self, pr_number: u64) -> Result<Vec<String>> {
        let mut files: Vec<String> = vec![];
        let mut page = 1usize;

        loop {
            let endpoint = format!(
                "{}/repos/{}/{}/pulls/{pr_number}/files?per_page={FILES_PAGE_SIZE}&page={page}",
                self.base_uri, self.config.owner, self.config.repo
            );
            let chunk: Vec<PrFile> =
                self.instance.get(endpoint, None::<&()>).await?;
            let chunk_len = chunk.len();

            files.extend(chunk.into_iter().map(|f| f.filename));

            if chunk_len < FILES_PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(files)
    }

    async fn has_submodule_changes(
        &self,
        changed_files: &[String],
    ) -> Result<bool> {
        let Some(content) = self.get_file_content(".gitmodules").await? else {
            return Ok(false);
        };

        let submodule_paths = parse_gitmodule_paths(&content);

        Ok(changed_files.iter().any(|file| {
            submodule_paths
                .iter()
                .any(|p| file == p || file.starts_with(&format!("{p}/")))
        }))
    }
}

/// Clip a status description to the wire limit.
fn clip_status_description(description: &str) -> String {
    description.chars().take(STATUS_DESCRIPTION_LIMIT).collect()
}

/// Extract the `path` entries from a `.gitmodules` file.
fn parse_gitmodule_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix("path")?;
            let value = rest.trim_start().strip_prefix('=')?;
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        })
        .collect()
}

#[async_trait]
impl Forge for Github {
    async fn get_pr_snapshot(&self, pr_number: u64) -> Result<PrSnapshot> {
        let pr = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await?;

        let labels: HashSet<String> = pr
            .labels
            .unwrap_or_default()
            .iter()
            .map(|l| l.name.clone())
            .collect();

        let user_login = pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_default();

        let user_org_ids = self.get_user_org_ids(&user_login).await?;

        let changed_files = self.get_changed_files(pr_number).await?;
        debug!("PR {pr_number} changed files: {changed_files:?}");

        let has_submodule_changes =
            self.has_submodule_changes(&changed_files).await?;

        Ok(PrSnapshot {
            number: pr_number,
            sha: pr.head.sha,
            body: pr.body.unwrap_or_default(),
            labels,
            user_login,
            user_org_ids,
            has_submodule_changes,
        })
    }

    async fn add_labels(&self, req: LabelsRequest) -> Result<()> {
        info!("adding labels {:?} to PR {}", req.labels, req.pr_number);

        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(req.pr_number, &req.labels)
            .await?;

        Ok(())
    }

    async fn remove_labels(&self, req: LabelsRequest) -> Result<()> {
        info!("removing labels {:?} from PR {}", req.labels, req.pr_number);

        for label in req.labels.iter() {
            self.instance
                .issues(&self.config.owner, &self.config.repo)
                .remove_label(req.pr_number, label)
                .await?;
        }

        Ok(())
    }

    async fn set_commit_status(&self, req: CommitStatusRequest) -> Result<()> {
        let endpoint = format!(
            "{}/repos/{}/{}/statuses/{}",
            self.base_uri, self.config.owner, self.config.repo, req.sha
        );

        let description = clip_status_description(&req.description);

        info!(
            "setting status on {}: state: {}, description: {description}",
            req.sha, req.state
        );

        let body = serde_json::json!({
            "context": CHECK_NAME,
            "description": description,
            "state": req.state,
            "target_url": req.target_url,
        });

        let _: serde_json::Value =
            self.instance.post(endpoint, Some(&body)).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_long_status_descriptions() {
        let long = "x".repeat(200);
        let clipped = clip_status_description(&long);

        assert_eq!(clipped.chars().count(), STATUS_DESCRIPTION_LIMIT);
        assert_eq!(clipped, "x".repeat(STATUS_DESCRIPTION_LIMIT));
    }

    #[test]
    fn short_status_descriptions_pass_through() {
        assert_eq!(
            clip_status_description("Changelog category is empty"),
            "Changelog category is empty"
        );
        assert_eq!(clip_status_description(""), "");
    }

    #[test]
    fn parses_gitmodule_paths() {
        let content = r#"[submodule "contrib/poco"]
	path = contrib/poco
	url = https://github.com/acme/poco
[submodule "contrib/zlib"]
	path=contrib/zlib
	url = https://github.com/acme/zlib
"#;

        assert_eq!(
            parse_gitmodule_paths(content),
            vec!["contrib/poco".to_string(), "contrib/zlib".to_string()]
        );
    }

    #[test]
    fn ignores_non_path_lines() {
        let content = "[submodule \"x\"]\n\turl = https://example.com/x\n";
        assert!(parse_gitmodule_paths(content).is_empty());

        // a bare "path" key with no value is not a submodule path
        assert!(parse_gitmodule_paths("path =\n").is_empty());
    }
}

//! CLI argument parsing and remote configuration.
use clap::Parser;
use color_eyre::eyre::eyre;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{event, forge::config::RemoteConfig, result::Result};

/// CLI arguments for the gatekeeper run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// GitHub repository URL (https://github.com/owner/repo). Falls back to
    /// GITHUB_SERVER_URL + GITHUB_REPOSITORY.
    pub github_repo: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long)]
    /// Pull request number. Falls back to the GITHUB_EVENT_PATH payload.
    pub pr_number: Option<u64>,

    #[arg(long, default_value = "")]
    /// Link used as the status target url. Falls back to the current
    /// workflow run url.
    pub run_url: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure the remote repository connection from CLI arguments and
    /// the Actions environment.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let mut repo_url = self.github_repo.clone();

        if repo_url.is_empty()
            && let Ok(repo) = env::var("GITHUB_REPOSITORY")
        {
            repo_url = format!("{}/{repo}", server_url());
        }

        if repo_url.is_empty() {
            return Err(eyre!("must configure a github repo"));
        }

        let parsed = GitUrl::parse(&repo_url)?;

        validate_scheme(parsed.scheme)?;

        let mut token = self.github_token.to_string();

        if token.is_empty()
            && let Some(parsed_token) = parsed.token
        {
            token = parsed_token;
        }

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(eyre!("must set github token"));
        }

        let host = parsed
            .host
            .ok_or(eyre!("unable to parse host from github repo"))?;

        let owner = parsed
            .owner
            .ok_or(eyre!("unable to parse owner from github repo"))?;

        Ok(RemoteConfig {
            host,
            scheme: parsed.scheme.to_string(),
            owner,
            repo: parsed.name,
            token: SecretString::from(token),
        })
    }

    /// Resolve the pull request number from the flag or the event payload.
    pub fn get_pr_number(&self) -> Result<u64> {
        if let Some(number) = self.pr_number {
            return Ok(number);
        }

        event::pr_number_from_env()
    }

    /// Resolve the status target url for the current workflow run.
    pub fn get_run_url(&self) -> String {
        if !self.run_url.is_empty() {
            return self.run_url.clone();
        }

        match (env::var("GITHUB_REPOSITORY"), env::var("GITHUB_RUN_ID")) {
            (Ok(repo), Ok(run_id)) => {
                format!("{}/{repo}/actions/runs/{run_id}", server_url())
            }
            _ => String::new(),
        }
    }
}

fn server_url() -> String {
    env::var("GITHUB_SERVER_URL")
        .unwrap_or_else(|_| "https://github.com".to_string())
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(eyre!(
            "only http and https schemes are supported for repo urls"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(repo: &str, token: &str) -> Args {
        Args {
            github_repo: repo.into(),
            github_token: token.into(),
            pr_number: Some(1),
            run_url: "".into(),
            debug: false,
        }
    }

    #[test]
    fn gets_github_remote() {
        let cli_args =
            args("https://github.com/github_owner/github_repo", "token");

        let remote = cli_args.get_remote().unwrap();

        assert_eq!(remote.host, "github.com");
        assert_eq!(remote.owner, "github_owner");
        assert_eq!(remote.repo, "github_repo");
        assert_eq!(remote.scheme, "https");
    }

    #[test]
    fn only_supports_http_and_https_schemes() {
        let cli_args = args("git@github.com:owner/repo", "token");

        assert!(cli_args.get_remote().is_err());
    }

    #[test]
    fn explicit_pr_number_wins() {
        let cli_args = args("https://github.com/o/r", "token");

        assert_eq!(cli_args.get_pr_number().unwrap(), 1);
    }

    #[test]
    fn explicit_run_url_wins() {
        let mut cli_args = args("https://github.com/o/r", "token");
        cli_args.run_url = "https://example.com/run/9".into();

        assert_eq!(cli_args.get_run_url(), "https://example.com/run/9");
    }
}

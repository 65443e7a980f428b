//! Configuration for the remote forge connection.
use secrecy::SecretString;

/// Remote repository connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    /// Base URI of the REST API for this host.
    pub fn api_base_uri(&self) -> String {
        format!("{}://api.{}", self.scheme, self.host)
    }

    /// Link to the repository's PR template, used as the target url on
    /// description-validation failures.
    pub fn pr_template_url(&self) -> String {
        format!(
            "{}://{}/{}/{}/blob/master/.github/PULL_REQUEST_TEMPLATE.md?plain=1",
            self.scheme, self.host, self.owner, self.repo
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> RemoteConfig {
        RemoteConfig {
            host: "github.com".into(),
            scheme: "https".into(),
            owner: "acme".into(),
            repo: "widgets".into(),
            token: SecretString::from("secret".to_string()),
        }
    }

    #[test]
    fn builds_api_base_uri() {
        assert_eq!(test_config().api_base_uri(), "https://api.github.com");
    }

    #[test]
    fn builds_pr_template_url() {
        assert_eq!(
            test_config().pr_template_url(),
            "https://github.com/acme/widgets/blob/master/.github/PULL_REQUEST_TEMPLATE.md?plain=1"
        );
    }
}

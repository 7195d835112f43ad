use anyhow::{Result, anyhow};
use std::str::FromStr;

/// Owner and name of a GitHub repository.
///
/// [`GitHubRepo::new`] does not validate anything; a malformed pair surfaces later as a
/// 404 from the API. Only the `owner/repo` command-line form is checked.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// The releases listing endpoint under `api_url`.
    pub fn releases_url(&self, api_url: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            api_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(GitHubRepo::new(owner, repo))
            }
            _ => Err(anyhow!("Invalid repository format. Expected 'owner/repo'.")),
        }
    }
}

use anyhow::Result;

use crate::catalog::ReleaseCatalog;
use crate::github::{GitHubRepo, PageQuery, ReleaseSource};

use super::config::Config;
use super::print_listing;

/// Print the release count and the release table of `repo_str`.
#[tracing::instrument(skip(config))]
pub fn list<S: ReleaseSource>(config: Config<S>, repo_str: &str, query: PageQuery) -> Result<()> {
    let repo = repo_str.parse::<GitHubRepo>()?;
    let mut catalog = ReleaseCatalog::new(repo, config.source);

    let listing = catalog.list_releases(query)?;
    print_listing(&listing);
    Ok(())
}

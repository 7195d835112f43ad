use anyhow::Result;
use std::path::Path;

use crate::catalog::ReleaseCatalog;
use crate::github::{GitHubRepo, PageQuery, ReleaseSource};

use super::config::Config;
use super::print_listing;

/// List the releases of `repo_str`, then extract the tarball of `tag` (or `latest`)
/// under `out_dir`.
#[tracing::instrument(skip(config))]
pub fn download<S: ReleaseSource>(
    config: Config<S>,
    repo_str: &str,
    tag: &str,
    out_dir: &Path,
    query: PageQuery,
) -> Result<()> {
    let repo = repo_str.parse::<GitHubRepo>()?;
    let mut catalog = ReleaseCatalog::new(repo, config.source);

    let listing = catalog.list_releases(query)?;
    print_listing(&listing);

    let fetcher = catalog.fetcher()?;
    let release = fetcher.resolve(tag)?;
    println!("Downloading Release: {}", release.tag);
    println!("Trying: {}", release.tarball_url);

    let download = fetcher.fetch(&release, out_dir)?;
    println!("Extracted at: {}", download.path.display());
    Ok(())
}

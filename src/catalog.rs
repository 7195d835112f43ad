//! Release listing for one repository, cached for the lifetime of the catalog.

use anyhow::{Result, bail};
use log::{debug, info};
use std::path::Path;

use crate::fetcher::{Download, LookupError, ReleaseFetcher};
use crate::github::{GitHubRepo, PageQuery, ReleaseSource};
use crate::release::Snapshot;

/// Where the catalog is in its fetch lifecycle.
///
/// `Fetched` is terminal: once a listing succeeds, the snapshot is never refetched or
/// modified. A failed listing leaves nothing cached, so the next call asks the API again.
/// An empty but successful listing still counts as `Fetched`.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    NotFetched,
    Fetched(Snapshot),
    FetchFailed(String),
}

/// The result of [`ReleaseCatalog::list_releases`].
#[derive(Debug)]
pub struct Listing<'a> {
    pub snapshot: &'a Snapshot,
    /// `false` when the snapshot came from the cache
    pub fetched: bool,
}

pub struct ReleaseCatalog<S> {
    repo: GitHubRepo,
    source: S,
    state: CatalogState,
}

impl<S: ReleaseSource> ReleaseCatalog<S> {
    pub fn new(repo: GitHubRepo, source: S) -> Self {
        Self {
            repo,
            source,
            state: CatalogState::NotFetched,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// The cached snapshot, if a listing has succeeded.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.state {
            CatalogState::Fetched(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// List the repository's releases.
    ///
    /// The first successful call hits the API; later calls return the cached snapshot
    /// and ignore `query`.
    #[tracing::instrument(skip(self))]
    pub fn list_releases(&mut self, query: PageQuery) -> Result<Listing<'_>> {
        let fetched = if matches!(self.state, CatalogState::Fetched(_)) {
            debug!("Using cached releases of {}", self.repo);
            false
        } else {
            let snapshot = self.fetch(&query)?;
            info!("Found {} releases of {}", snapshot.len(), self.repo);
            self.state = CatalogState::Fetched(snapshot);
            true
        };

        match &self.state {
            CatalogState::Fetched(snapshot) => Ok(Listing { snapshot, fetched }),
            state => bail!("Release catalog of {} is in state {:?}", self.repo, state),
        }
    }

    fn fetch(&mut self, query: &PageQuery) -> Result<Snapshot> {
        match self.source.list_releases(&self.repo, query) {
            Ok(releases) => Ok(Snapshot::from_releases(releases)),
            Err(e) => {
                self.state = CatalogState::FetchFailed(format!("{:#}", e));
                Err(e)
            }
        }
    }

    /// A fetcher over the cached snapshot. Does not fetch on its own; fails with
    /// [`LookupError::EmptyCatalog`] until a listing has succeeded.
    pub fn fetcher(&self) -> Result<ReleaseFetcher<'_, S>, LookupError> {
        self.snapshot()
            .map(|snapshot| ReleaseFetcher::new(snapshot, &self.source))
            .ok_or(LookupError::EmptyCatalog)
    }

    /// Resolve `tag_name` (or `"latest"`) against the cached snapshot and extract that
    /// release's tarball under `out_dir`.
    pub fn download_release(&self, out_dir: &Path, tag_name: &str) -> Result<Download> {
        self.fetcher()?.download_release(out_dir, tag_name)
    }
}

//! Tag resolution and archive download against a cached release snapshot.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::archive::extract_tar_gz;
use crate::github::ReleaseSource;
use crate::release::Snapshot;

/// Tag alias for the first release in API order. It does not compare dates.
pub const LATEST: &str = "latest";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No releases available; list the releases first")]
    EmptyCatalog,

    #[error("The first release has no tag name, cannot resolve 'latest'")]
    MissingTag,

    #[error("No release with tag '{tag}'")]
    TagNotFound { tag: String },

    #[error("Release '{tag}' has no tarball URL")]
    MissingTarball { tag: String },
}

/// A tag matched to the archive that will be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    pub tag: String,
    pub tarball_url: String,
    /// Other records sharing `tag` that were passed over
    pub duplicates: usize,
}

/// A finished download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub tag: String,
    pub url: String,
    /// Absolute directory the archive was extracted into
    pub path: PathBuf,
    pub entries: usize,
}

pub struct ReleaseFetcher<'a, S> {
    snapshot: &'a Snapshot,
    source: &'a S,
}

impl<'a, S: ReleaseSource> ReleaseFetcher<'a, S> {
    pub fn new(snapshot: &'a Snapshot, source: &'a S) -> Self {
        Self { snapshot, source }
    }

    /// Find the tarball for `tag_name`.
    ///
    /// [`LATEST`] stands for the tag of the first record. When several records share
    /// a tag, the first one wins, a warning is logged and the others are counted in
    /// [`ResolvedRelease::duplicates`].
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, tag_name: &str) -> Result<ResolvedRelease, LookupError> {
        if self.snapshot.is_empty() {
            return Err(LookupError::EmptyCatalog);
        }

        let tag = if tag_name == LATEST {
            let first = self.snapshot.first().ok_or(LookupError::EmptyCatalog)?;
            let tag = first.tag_name.clone().ok_or(LookupError::MissingTag)?;
            debug!("Resolved '{}' to {}", LATEST, tag);
            tag
        } else {
            tag_name.to_string()
        };

        let matches = self.snapshot.find_by_tag(&tag);
        let record = match matches.as_slice() {
            [] => return Err(LookupError::TagNotFound { tag }),
            [record] => *record,
            [record, ..] => {
                warn!(
                    "{} releases are tagged {}, using the first one (id {:?})",
                    matches.len(),
                    tag,
                    record.id
                );
                *record
            }
        };

        match &record.tarball_url {
            Some(url) => Ok(ResolvedRelease {
                tarball_url: url.clone(),
                duplicates: matches.len() - 1,
                tag,
            }),
            None => Err(LookupError::MissingTarball { tag }),
        }
    }

    /// Stream `release`'s tarball and extract it under `out_dir`.
    ///
    /// The response status is checked before anything is written, so a failed
    /// request leaves `out_dir` untouched.
    #[tracing::instrument(skip(self))]
    pub fn fetch(&self, release: &ResolvedRelease, out_dir: &Path) -> Result<Download> {
        let path = std::path::absolute(out_dir)
            .with_context(|| format!("Failed to resolve output directory {:?}", out_dir))?;

        info!(
            "Downloading release {} from {}...",
            release.tag, release.tarball_url
        );
        let reader = self.source.open_archive(&release.tarball_url)?;
        let entries = extract_tar_gz(reader, &path)?;

        Ok(Download {
            tag: release.tag.clone(),
            url: release.tarball_url.clone(),
            path,
            entries,
        })
    }

    /// [`resolve`](Self::resolve) followed by [`fetch`](Self::fetch).
    pub fn download_release(&self, out_dir: &Path, tag_name: &str) -> Result<Download> {
        let release = self.resolve(tag_name)?;
        self.fetch(&release, out_dir)
    }
}

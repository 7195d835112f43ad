//! Normalized release rows and the snapshot that holds them.

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;

use crate::github;

/// One row of the release table.
///
/// Any field the API left out stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Primary lookup key for downloads
    pub tag_name: Option<String>,
    pub created_at: Option<NaiveDate>,
    pub published_at: Option<NaiveDate>,
    pub tarball_url: Option<String>,
    /// Carried through for display; downloads always use `tarball_url`
    pub zipball_url: Option<String>,
}

impl From<github::Release> for ReleaseRecord {
    fn from(release: github::Release) -> Self {
        Self {
            id: release.id,
            name: release.name,
            tag_name: release.tag_name,
            created_at: release.created_at.as_deref().and_then(parse_date),
            published_at: release.published_at.as_deref().and_then(parse_date),
            tarball_url: release.tarball_url,
            zipball_url: release.zipball_url,
        }
    }
}

/// Reduce an ISO 8601 timestamp to its UTC calendar date.
///
/// `2021-09-10T14:23:00Z` becomes `2021-09-10`. Unparseable input is logged and
/// treated as absent.
pub fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(datetime) => Some(datetime.with_timezone(&Utc).date_naive()),
        Err(e) => {
            warn!("Ignoring malformed timestamp {:?}: {}", timestamp, e);
            None
        }
    }
}

/// The columns shown by a release listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow<'a> {
    pub id: Option<u64>,
    pub name: Option<&'a str>,
    pub tag_name: Option<&'a str>,
    pub published_at: Option<NaiveDate>,
}

/// Releases in the order the API returned them (newest first by GitHub convention).
/// Never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<ReleaseRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<ReleaseRecord>) -> Self {
        Self { records }
    }

    pub fn from_releases(releases: Vec<github::Release>) -> Self {
        Self::new(releases.into_iter().map(ReleaseRecord::from).collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ReleaseRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&ReleaseRecord> {
        self.records.first()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&ReleaseRecord>
    where
        P: Fn(&ReleaseRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(*r)).collect()
    }

    /// Every record carrying `tag`, in snapshot order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&ReleaseRecord> {
        self.filter(|r| r.tag_name.as_deref() == Some(tag))
    }

    /// Project onto the listing columns.
    pub fn select_listing(&self) -> Vec<ListingRow<'_>> {
        self.records
            .iter()
            .map(|r| ListingRow {
                id: r.id,
                name: r.name.as_deref(),
                tag_name: r.tag_name.as_deref(),
                published_at: r.published_at,
            })
            .collect()
    }
}

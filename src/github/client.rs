use anyhow::Result;
use log::debug;
use std::io::Read;

use crate::http::HttpClient;

use super::repo::GitHubRepo;
use super::types::Release;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// `per_page` / `page` parameters of the releases listing.
///
/// Unset values are left out of the request; the API may ignore or cap the ones that
/// are sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn new(per_page: Option<u32>, page: Option<u32>) -> Self {
        Self { per_page, page }
    }

    fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

/// Where release metadata and release archives come from.
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseSource {
    /// Fetch one page of releases, in the order the API returns them.
    fn list_releases(&self, repo: &GitHubRepo, query: &PageQuery) -> Result<Vec<Release>>;

    /// Open a streaming read of a release archive. Fails before any of the body is
    /// read if the server answers with a non-success status.
    fn open_archive(&self, url: &str) -> Result<Box<dyn Read + Send>>;
}

pub struct GitHub {
    pub http_client: HttpClient,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl ReleaseSource for GitHub {
    #[tracing::instrument(skip(self, repo, query))]
    fn list_releases(&self, repo: &GitHubRepo, query: &PageQuery) -> Result<Vec<Release>> {
        let url = repo.releases_url(&self.api_url);
        debug!("Fetching releases of {} from {}...", repo, url);

        self.http_client
            .get_json_with_query(&url, &query.to_query())
    }

    #[tracing::instrument(skip(self))]
    fn open_archive(&self, url: &str) -> Result<Box<dyn Read + Send>> {
        let response = self.http_client.get_stream(url)?;
        Ok(Box::new(response))
    }
}

use anyhow::Result;
use log::debug;
use reqwest::blocking::Client;

use crate::github::{GitHub, ReleaseSource};
use crate::http::HttpClient;

/// User agent sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("ghrd/", env!("GHRD_VERSION"));

pub struct Config<S: ReleaseSource> {
    pub source: S,
}

impl Config<GitHub> {
    /// Build the HTTP client and the GitHub release source. `api_url` falls back to
    /// the public GitHub API.
    pub fn new(api_url: Option<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let github = GitHub::new(HttpClient::new(client), api_url);
        debug!("Using GitHub API at {}", github.api_url());

        Ok(Self { source: github })
    }
}

use serde::Deserialize;

/// One element of the `GET /repos/{owner}/{repo}/releases` response.
///
/// Every field is optional; fields the API sends that are not listed here are ignored.
#[derive(Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    /// ISO 8601 timestamp, e.g. `2021-09-10T14:23:00Z`
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub tarball_url: Option<String>,
    #[serde(default)]
    pub zipball_url: Option<String>,
}

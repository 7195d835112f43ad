mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GitHub, PageQuery, ReleaseSource};
pub use repo::GitHubRepo;
pub use types::Release;

#[cfg(test)]
pub use client::MockReleaseSource;

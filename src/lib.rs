pub mod archive;
pub mod catalog;
pub mod commands;
pub mod fetcher;
pub mod github;
pub mod http;
pub mod release;
pub mod table;

pub use catalog::{CatalogState, Listing, ReleaseCatalog};
pub use fetcher::{Download, LATEST, LookupError, ReleaseFetcher, ResolvedRelease};
pub use github::{GitHub, GitHubRepo, PageQuery, ReleaseSource};
pub use http::TransportError;
pub use release::{ReleaseRecord, Snapshot};

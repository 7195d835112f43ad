//! Streaming extraction of gzip-compressed tar archives.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs;
use std::io::Read;
use std::path::Path;
use tar::Archive;

/// Decompress and unpack a `.tar.gz` stream under `extract_to`, creating the
/// directory if needed. Entry paths are kept as they are inside the archive.
///
/// Entries that would land outside `extract_to` are skipped. Nothing is cleaned up if
/// extraction fails halfway. Returns the number of files, directories and links
/// written; pax global headers are metadata and are neither written nor counted.
#[tracing::instrument(skip(reader))]
pub fn extract_tar_gz<R: Read>(reader: R, extract_to: &Path) -> Result<usize> {
    debug!("Extracting tar.gz stream to {:?}...", extract_to);

    fs::create_dir_all(extract_to)
        .with_context(|| format!("Failed to create directory {:?}", extract_to))?;

    let mut archive = Archive::new(GzDecoder::new(reader));
    let mut unpacked = 0;

    for entry in archive
        .entries()
        .context("Failed to read tar.gz archive")?
    {
        let mut entry = entry.context("Failed to read entry from tar.gz archive")?;
        let path = entry.path()?.into_owned();

        // GitHub tarballs open with a pax_global_header carrying the commit id.
        if entry.header().entry_type().is_pax_global_extensions() {
            debug!("Skipping pax global header {:?}", path);
            continue;
        }

        if entry
            .unpack_in(extract_to)
            .with_context(|| format!("Failed to extract {:?}", path))?
        {
            debug!("Extracted {:?}", path);
            unpacked += 1;
        } else {
            debug!("Skipping entry outside the target directory: {:?}", path);
        }
    }

    info!("Extraction complete ({} entries).", unpacked);
    Ok(unpacked)
}

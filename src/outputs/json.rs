//! JSON persistence for one result set.
//!
//! Mirrors the transcript's save step: serialize the posts prettily, write
//! one file, print the confirmation. The boolean return keeps write failures
//! from interrupting the comparison run.

use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write posts to `path` as pretty-printed JSON, overwriting any existing
/// file.
///
/// Non-ASCII text is written as-is; serde_json does not escape it. Prints
/// the save confirmation and returns `true` on success. Serialization and
/// I/O failures are logged and reported as `false`; no partial-write
/// cleanup is attempted.
#[instrument(level = "info", skip(posts), fields(path = %path.display()))]
pub async fn save_posts<R: Serialize>(posts: &[R], path: &Path) -> bool {
    let json = match serde_json::to_string_pretty(posts) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Failed to serialize posts");
            return false;
        }
    };

    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write posts file");
        return false;
    }

    println!("✓ Data saved to {}", path.display());
    info!("Wrote posts file");
    true
}

//! Scans workspace sources and counts translation key usage.
use std::path::Path;

use crate::config::FileMatcher;
use crate::indexer::types::IndexerError;
use crate::input::source::{
    ProgrammingLanguage,
    SourceUsage,
};
use crate::syntax::analyze_source;

/// Scans every source file matched by `matcher`, in path order.
///
/// # Errors
/// Fails on the first file that cannot be read or parsed.
pub fn scan_source_usage(
    matcher: &FileMatcher,
    trans_fn_names: &[String],
) -> Result<SourceUsage, IndexerError> {
    tracing::debug!(workspace_path = %matcher.workspace_root().display(), "Scanning sources");

    let mut usage = SourceUsage::new();
    let files = matcher.source_files();
    for file in &files {
        scan_file(file, trans_fn_names, &mut usage)?;
    }

    tracing::debug!(files = files.len(), keys = usage.len(), "Finished scanning sources");
    for key in usage.keys() {
        tracing::debug!(%key, count = usage.count(key), "Key usage");
    }
    Ok(usage)
}

/// Adds the keys used by one file to `usage`.
fn scan_file(
    file_path: &Path,
    trans_fn_names: &[String],
    usage: &mut SourceUsage,
) -> Result<(), IndexerError> {
    let Some(language) = ProgrammingLanguage::from_path(file_path) else {
        tracing::warn!("Unsupported source file {:?}, skipping", file_path);
        return Ok(());
    };

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| IndexerError::Read { path: file_path.to_path_buf(), source })?;

    let calls = analyze_source(&content, language, trans_fn_names)
        .map_err(|source| IndexerError::Analyze { path: file_path.to_path_buf(), source })?;

    tracing::debug!(file = %file_path.display(), calls = calls.len(), "Analyzed source file");
    for call in calls {
        usage.record(call.key);
    }

    Ok(())
}

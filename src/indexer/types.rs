//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::syntax::analyzer::types::AnalyzerError;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Error when failing to read a file
    #[error("Failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error when a source file cannot be analyzed
    #[error("Failed to parse {}: {source}", .path.display())]
    Analyze {
        path: PathBuf,
        #[source]
        source: AnalyzerError,
    },
}

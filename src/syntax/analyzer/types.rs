//! Types for the analyzer module

use thiserror::Error;

use crate::types::SourcePosition;

/// A translation function call with a literal key, e.g. `t("hello.world")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransFnCall {
    /// Callee name as written (`t`, `T`, ...)
    pub trans_fn_name: String,
    /// Decoded literal value of the first argument
    pub key: String,
    /// Position of the key argument (0-indexed)
    pub position: SourcePosition,
}

/// A syntax node as seen by the extractor.
///
/// Every node of the tree falls into exactly one of these shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Marker call whose first argument is a string literal.
    CallWithLiteralArg(TransFnCall),
    /// Marker call whose first argument is anything else, or missing.
    CallWithOtherArg {
        trans_fn_name: String,
        position: SourcePosition,
    },
    /// Any other node.
    Other,
}

/// Defines errors that may occur during the analysis process
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Error when failing to set the language for the parser
    #[error("Failed to set language for parser: {0}")]
    LanguageSetup(#[from] tree_sitter::LanguageError),
    /// Error when the parser gives up on the source
    #[error("Failed to parse source code")]
    ParseFailed,
    /// Error when the source contains a syntax error
    #[error("Syntax error at {position}")]
    Syntax { position: SourcePosition },
}

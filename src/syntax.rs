pub mod analyzer;

use crate::input::source::ProgrammingLanguage;
use crate::syntax::analyzer::types::{
    AnalyzerError,
    TransFnCall,
};

/// Analyzes a source file and extracts the translation keys it uses.
///
/// # Errors
/// Returns `AnalyzerError` when the file cannot be parsed.
pub fn analyze_source(
    text: &str,
    language: ProgrammingLanguage,
    trans_fn_names: &[String],
) -> Result<Vec<TransFnCall>, AnalyzerError> {
    let tree_sitter_lang = language.tree_sitter_language();
    analyzer::extractor::analyze_trans_fn_calls(text, &tree_sitter_lang, trans_fn_names)
}

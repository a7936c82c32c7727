//! Extracts calls to translation functions from a source file using Tree-sitter.

use std::string::ToString;

use tree_sitter::{
    Language,
    Node,
    Parser,
};

use crate::syntax::analyzer::types::{
    AnalyzerError,
    SyntaxNode,
    TransFnCall,
};
use crate::types::SourcePosition;

/// Extracts text content from a tree-sitter node
fn extract_node_text(node: Node<'_>, source_bytes: &[u8]) -> Option<String> {
    node.utf8_text(source_bytes).ok().map(ToString::to_string)
}

/// Visits every node of the tree in document order.
fn walk_tree<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

/// Finds the first `ERROR` or missing node of a tree that reported errors.
fn first_error_position(root: Node<'_>) -> SourcePosition {
    let mut found: Option<SourcePosition> = None;
    walk_tree(root, |node| {
        if found.is_none() && (node.is_error() || node.is_missing()) {
            found = Some(node.start_position().into());
        }
    });
    found.unwrap_or_else(|| root.start_position().into())
}

/// Extracts translation function calls with a literal key.
///
/// Calls whose callee is not a bare identifier listed in `trans_fn_names`
/// are ignored. Calls with a non-literal first argument are skipped.
///
/// # Errors
/// Returns `AnalyzerError` if:
/// - Language setup fails
/// - Source code parsing fails
/// - The syntax tree contains an error node
pub fn analyze_trans_fn_calls(
    source: &str,
    language: &Language,
    trans_fn_names: &[String],
) -> Result<Vec<TransFnCall>, AnalyzerError> {
    let mut parser = Parser::new();
    parser.set_language(language)?;
    let tree = parser.parse(source, None).ok_or(AnalyzerError::ParseFailed)?;
    let root_node = tree.root_node();

    if root_node.has_error() {
        return Err(AnalyzerError::Syntax { position: first_error_position(root_node) });
    }

    let source_bytes = source.as_bytes();
    let mut calls = Vec::new();

    walk_tree(root_node, |node| match classify_node(node, source_bytes, trans_fn_names) {
        SyntaxNode::CallWithLiteralArg(call) => calls.push(call),
        SyntaxNode::CallWithOtherArg { trans_fn_name, position } => {
            tracing::debug!(%position, %trans_fn_name, "Skipping call without a literal key");
        }
        SyntaxNode::Other => {}
    });

    Ok(calls)
}

/// Sorts a node into one of the shapes the extractor cares about.
fn classify_node(node: Node<'_>, source_bytes: &[u8], trans_fn_names: &[String]) -> SyntaxNode {
    if node.kind() != "call_expression" {
        return SyntaxNode::Other;
    }

    let Some(function) = node.child_by_field_name("function") else {
        return SyntaxNode::Other;
    };
    if function.kind() != "identifier" {
        return SyntaxNode::Other;
    }
    let Some(trans_fn_name) = extract_node_text(function, source_bytes) else {
        return SyntaxNode::Other;
    };
    if !trans_fn_names.contains(&trans_fn_name) {
        return SyntaxNode::Other;
    }

    let literal = node
        .child_by_field_name("arguments")
        .and_then(first_argument)
        .and_then(|arg| string_literal_value(arg, source_bytes).map(|key| (arg, key)));

    match literal {
        Some((arg, key)) => SyntaxNode::CallWithLiteralArg(TransFnCall {
            trans_fn_name,
            key,
            position: arg.start_position().into(),
        }),
        None => SyntaxNode::CallWithOtherArg {
            trans_fn_name,
            position: node.start_position().into(),
        },
    }
}

/// Returns the first argument of a call.
///
/// A tagged template (`` t`key` ``) is its own single argument.
fn first_argument(arguments: Node<'_>) -> Option<Node<'_>> {
    if arguments.kind() == "template_string" {
        return Some(arguments);
    }

    let mut cursor = arguments.walk();
    arguments.named_children(&mut cursor).find(|child| child.kind() != "comment")
}

/// Decodes a string literal, or a template literal without substitutions.
fn string_literal_value(node: Node<'_>, source_bytes: &[u8]) -> Option<String> {
    match node.kind() {
        "string" | "template_string" => {}
        _ => return None,
    }

    let mut value = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let text = child.utf8_text(source_bytes).ok()?;
        match child.kind() {
            "template_substitution" => return None,
            "escape_sequence" => value.push_str(&decode_escape(text)),
            _ => value.push_str(text),
        }
    }

    Some(value)
}

/// Decodes one JavaScript escape sequence (`\n`, `\x41`, `\u{1F600}`, `\101`).
///
/// Sequences that do not decode to a scalar value are kept verbatim.
fn decode_escape(sequence: &str) -> String {
    let Some(body) = sequence.strip_prefix('\\') else {
        return sequence.to_string();
    };
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return sequence.to_string();
    };
    let rest = chars.as_str();

    let decoded = match first {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        '0'..='7' => u32::from_str_radix(body, 8).ok().and_then(char::from_u32),
        // line continuation
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => return String::new(),
        'x' | 'u' => {
            let hex = rest.trim_start_matches('{').trim_end_matches('}');
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        }
        other => Some(other),
    };

    decoded.map_or_else(|| sequence.to_string(), |c| c.to_string())
}

//! Common types and utilities for brst commands.

use std::path::Path;

use brsc_lex::{Literal, Token};
use brsc_util::Diagnostic;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BrstError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token dump formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: `line:col KIND text [= literal]`
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

// ============================================================================
// Token rendering
// ============================================================================

/// A token as it appears in JSON output.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    /// Lexeme name, e.g. `Identifier`
    pub kind: String,
    /// Exact source text
    pub text: &'a str,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    /// Typed literal value, `null` for tokens without one
    pub literal: Option<Value>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.to_string(),
            text: &token.text,
            line: token.line,
            column: token.column(),
            literal: token.literal.as_ref().map(literal_value),
        }
    }
}

/// Converts a literal into a JSON value.
///
/// Floats go through their shortest decimal form so `0.1` prints as `0.1`
/// rather than the widened `f64` expansion.
pub fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::String(s) => Value::from(s.as_str()),
        Literal::Integer(v) => Value::from(*v),
        Literal::LongInteger(v) => Value::from(*v),
        Literal::Float(v) => Value::from(v.to_string().parse::<f64>().unwrap_or(f64::from(*v))),
        Literal::Double(v) => Value::from(*v),
    }
}

/// Formats one token as a line of text output.
///
/// A newline token's text is shown as `\n` to keep one token per line.
pub fn token_line(token: &Token) -> String {
    let text = token.text.replace('\n', "\\n");
    let mut line = format!("{}:{} {} {}", token.line, token.column(), token.kind, text);
    if let Some(literal) = &token.literal {
        line.push_str(&format!(" = {}", literal));
    }
    line
}

/// Renders every diagnostic against its source, prefixed with the file name.
pub fn render_diagnostics(path: &Path, source: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}: {}", path.display(), d.render(source)))
        .collect()
}

// ============================================================================
// Path Utilities
// ============================================================================

/// Reads a source file, rejecting paths that are not regular files.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(BrstError::Validation(format!(
            "not a readable file: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

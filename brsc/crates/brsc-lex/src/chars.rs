//! Character classification used by the scanner.
//!
//! BrightScript names are ASCII only, so none of these predicates consult
//! Unicode tables.

/// Checks if a character can start an identifier: `[A-Za-z_]`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a type designator that may end an identifier
/// (`name$`, `count%`, `ratio!`, `total#`, `big&`).
#[inline]
pub fn is_type_designator(c: char) -> bool {
    matches!(c, '$' | '%' | '!' | '#' | '&')
}

/// Checks if a character is whitespace that never produces a token.
///
/// `\r` is included so CRLF line endings yield a single newline token.
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

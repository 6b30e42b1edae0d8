//! Token type definitions.
//!
//! A [`Token`] pairs a [`Lexeme`] (what kind of thing was scanned) with the
//! exact source text, an optional typed [`Literal`] value and its location.

use std::fmt;
use std::sync::LazyLock;

use brsc_util::Span;
use rustc_hash::FxHashMap;

/// Every kind of lexical unit the scanner can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lexeme {
    // === Structure ===
    /// End of input. Always the last token, exactly once.
    Eof,
    /// A `\n` in the source. Statements are newline terminated.
    Newline,

    // === Punctuation ===
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `;`
    Semicolon,

    // === Arithmetic ===
    /// `^`
    Caret,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `\` (integer division)
    Backslash,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    // === Assignment ===
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    StarEqual,
    /// `/=`
    SlashEqual,
    /// `\=`
    BackslashEqual,
    /// `<<=`
    LeftShiftEqual,
    /// `>>=`
    RightShiftEqual,

    // === Bit shifts ===
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,

    // === Comparison ===
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `=` (both assignment and equality)
    Equal,
    /// `<>`
    LessGreater,

    // === Literals ===
    /// `"text"`
    String,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer, `&` suffix
    LongInteger,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,

    /// Any name that is not a reserved word
    Identifier,

    // === Reserved words ===
    /// `and`
    And,
    /// `box`
    Box,
    /// `dim`
    Dim,
    /// `each`
    Each,
    /// `else`
    Else,
    /// `elseif`
    ElseIf,
    /// `end`
    End,
    /// `endfunction`
    EndFunction,
    /// `endfor`
    EndFor,
    /// `endif`
    EndIf,
    /// `endsub`
    EndSub,
    /// `endwhile`
    EndWhile,
    /// `exit`
    Exit,
    /// `exitfor`
    ExitFor,
    /// `exitwhile`
    ExitWhile,
    /// `false`
    False,
    /// `for`
    For,
    /// `foreach`
    ForEach,
    /// `function`
    Function,
    /// `goto`
    Goto,
    /// `if`
    If,
    /// `in`
    In,
    /// `invalid`
    Invalid,
    /// `let`
    Let,
    /// `mod` (remainder operator)
    Mod,
    /// `next`
    Next,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `print`, also `?`
    Print,
    /// `return`
    Return,
    /// `step`
    Step,
    /// `stop`
    Stop,
    /// `sub`
    Sub,
    /// `then`
    Then,
    /// `to`
    To,
    /// `true`
    True,
    /// `while`
    While,
}

impl Lexeme {
    /// Whether tokens of this kind carry a [`Literal`].
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Lexeme::String | Lexeme::Integer | Lexeme::LongInteger | Lexeme::Float | Lexeme::Double
        )
    }

    /// Whether this kind comes from the reserved-word table.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.values().any(|kw| kw == self)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A typed literal value attached to a literal-bearing token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Decoded string contents, without quotes and with `""` collapsed
    String(String),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    LongInteger(i64),
    /// Single precision float
    Float(f32),
    /// Double precision float
    Double(f64),
}

impl Literal {
    /// The token kind that carries this literal.
    pub const fn lexeme(&self) -> Lexeme {
        match self {
            Literal::String(_) => Lexeme::String,
            Literal::Integer(_) => Lexeme::Integer,
            Literal::LongInteger(_) => Lexeme::LongInteger,
            Literal::Float(_) => Lexeme::Float,
            Literal::Double(_) => Lexeme::Double,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Integer(v) => write!(f, "{}", v),
            Literal::LongInteger(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::Double(v) => write!(f, "{}", v),
        }
    }
}

/// A scanned token.
///
/// Tokens are built once by the lexer and never mutated. The constructors
/// keep `kind` and `literal` consistent: a literal is present exactly when
/// the kind is literal-bearing.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: Lexeme,
    /// The exact source text consumed for this token.
    pub text: String,
    /// Typed value for literal-bearing kinds.
    pub literal: Option<Literal>,
    /// 1-based line the token starts on.
    pub line: u32,
    /// Byte range and start position.
    pub span: Span,
}

impl Token {
    /// Build a token that carries no literal.
    pub fn new(kind: Lexeme, text: impl Into<String>, span: Span) -> Self {
        debug_assert!(!kind.is_literal(), "{:?} tokens need a literal", kind);
        Self {
            kind,
            text: text.into(),
            literal: None,
            line: span.line,
            span,
        }
    }

    /// Build a literal-bearing token. The kind follows from the literal.
    pub fn literal(literal: Literal, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: literal.lexeme(),
            text: text.into(),
            literal: Some(literal),
            line: span.line,
            span,
        }
    }

    /// The synthetic end-of-input token.
    pub fn eof(span: Span) -> Self {
        Self::new(Lexeme::Eof, "", span)
    }

    /// Column the token starts at (1-based).
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

/// Reserved words, keyed by their lower-case spelling.
///
/// `rem` is absent: it starts a comment and never reaches the
/// identifier matcher as a whole word.
static KEYWORDS: LazyLock<FxHashMap<&'static str, Lexeme>> = LazyLock::new(|| {
    [
        ("and", Lexeme::And),
        ("box", Lexeme::Box),
        ("dim", Lexeme::Dim),
        ("each", Lexeme::Each),
        ("else", Lexeme::Else),
        ("elseif", Lexeme::ElseIf),
        ("end", Lexeme::End),
        ("endfunction", Lexeme::EndFunction),
        ("endfor", Lexeme::EndFor),
        ("endif", Lexeme::EndIf),
        ("endsub", Lexeme::EndSub),
        ("endwhile", Lexeme::EndWhile),
        ("exit", Lexeme::Exit),
        ("exitfor", Lexeme::ExitFor),
        ("exitwhile", Lexeme::ExitWhile),
        ("false", Lexeme::False),
        ("for", Lexeme::For),
        ("foreach", Lexeme::ForEach),
        ("function", Lexeme::Function),
        ("goto", Lexeme::Goto),
        ("if", Lexeme::If),
        ("in", Lexeme::In),
        ("invalid", Lexeme::Invalid),
        ("let", Lexeme::Let),
        ("mod", Lexeme::Mod),
        ("next", Lexeme::Next),
        ("not", Lexeme::Not),
        ("or", Lexeme::Or),
        ("print", Lexeme::Print),
        ("return", Lexeme::Return),
        ("step", Lexeme::Step),
        ("stop", Lexeme::Stop),
        ("sub", Lexeme::Sub),
        ("then", Lexeme::Then),
        ("to", Lexeme::To),
        ("true", Lexeme::True),
        ("while", Lexeme::While),
    ]
    .into_iter()
    .collect()
});

/// Looks up a reserved word, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use brsc_lex::{keyword_from_ident, Lexeme};
///
/// assert_eq!(keyword_from_ident("EndIf"), Some(Lexeme::EndIf));
/// assert_eq!(keyword_from_ident("endiff"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<Lexeme> {
    KEYWORDS.get(text.to_ascii_lowercase().as_str()).copied()
}

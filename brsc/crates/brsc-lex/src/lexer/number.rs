//! Numeric literal lexing.
//!
//! BrightScript has four numeric types and infers which one a literal
//! denotes from its shape:
//!
//! | exponent | suffix | point | digits | kind        |
//! |----------|--------|-------|--------|-------------|
//! | any      | `!`    | any   | any    | Float       |
//! | `e`      | `&`    | any   | any    | Float       |
//! | -        | `&`    | yes   | any    | Float       |
//! | `d`      | `&`    | any   | any    | Double      |
//! | -        | `&`    | no    | any    | LongInteger |
//! | `d`      | -, `#` | any   | any    | Double      |
//! | `e`, -   | `#`    | any   | any    | Double      |
//! | `e`      | -      | any   | any    | Float       |
//! | -        | -      | yes   | any    | Float       |
//! | -        | -      | no    | >= 10  | Double      |
//! | -        | -      | no    | < 10   | Integer     |
//!
//! The scanning half ([`Lexer::lex_number`]) only measures that shape; the
//! decision lives in [`NumberShape::classify`] so it can be tested on its own.

use crate::error::{LexError, LexResult};
use crate::token::{Literal, Token};
use crate::Lexer;

/// Integer-part digit count from which an undecorated literal is a Double.
const DOUBLE_DIGIT_THRESHOLD: usize = 10;

/// Which exponent marker a literal used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExponentMarker {
    /// `e` / `E`: single precision exponent
    Single,
    /// `d` / `D`: double precision exponent
    Double,
}

/// Trailing type designator of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSuffix {
    /// `#`
    Double,
    /// `!`
    Float,
    /// `&`
    Long,
}

impl TypeSuffix {
    /// Maps a designator character to its suffix.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(TypeSuffix::Double),
            '!' => Some(TypeSuffix::Float),
            '&' => Some(TypeSuffix::Long),
            _ => None,
        }
    }
}

/// The four numeric representations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericKind {
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    LongInteger,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
}

/// Everything about a scanned numeric literal that decides its kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberShape {
    /// Whether a decimal point was consumed.
    pub has_point: bool,
    /// Exponent marker, if any.
    pub exponent: Option<ExponentMarker>,
    /// Trailing type designator, if any.
    pub suffix: Option<TypeSuffix>,
    /// Number of digits before any decimal point (leading zeros included).
    pub digits: usize,
}

impl NumberShape {
    /// Picks the numeric kind for this shape. Every shape has one.
    ///
    /// # Example
    ///
    /// ```
    /// use brsc_lex::{ExponentMarker, NumberShape, NumericKind};
    ///
    /// let shape = NumberShape {
    ///     has_point: true,
    ///     exponent: Some(ExponentMarker::Double),
    ///     suffix: None,
    ///     digits: 1,
    /// };
    /// assert_eq!(shape.classify(), NumericKind::Double);
    /// ```
    pub fn classify(&self) -> NumericKind {
        match (self.exponent, self.suffix) {
            (_, Some(TypeSuffix::Float)) => NumericKind::Float,
            (Some(ExponentMarker::Single), Some(TypeSuffix::Long)) => NumericKind::Float,
            (None, Some(TypeSuffix::Long)) if self.has_point => NumericKind::Float,
            (Some(ExponentMarker::Double), Some(TypeSuffix::Long)) => NumericKind::Double,
            (None, Some(TypeSuffix::Long)) => NumericKind::LongInteger,
            (Some(ExponentMarker::Double), _) | (_, Some(TypeSuffix::Double)) => {
                NumericKind::Double
            },
            (Some(ExponentMarker::Single), None) => NumericKind::Float,
            (None, None) if self.has_point => NumericKind::Float,
            (None, None) if self.digits >= DOUBLE_DIGIT_THRESHOLD => NumericKind::Double,
            (None, None) => NumericKind::Integer,
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// Consumes the longest run of the form
    /// `digits [. digits] [(e|E|d|D) [+|-] digits] [# | ! | &]` and
    /// computes its value in the representation [`NumberShape::classify`]
    /// picks. A `.` is only taken when a digit follows it.
    pub fn lex_number(&mut self) -> LexResult<Token> {
        let mut shape = NumberShape {
            digits: self.eat_digits(),
            ..NumberShape::default()
        };

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits();
            shape.has_point = true;
        }

        shape.exponent = match self.cursor.current_char() {
            'e' | 'E' => Some(ExponentMarker::Single),
            'd' | 'D' => Some(ExponentMarker::Double),
            _ => None,
        };
        if shape.exponent.is_some() {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if self.eat_digits() == 0 {
                return Err(self.malformed("exponent has no digits"));
            }
        }

        shape.suffix = TypeSuffix::from_char(self.cursor.current_char());
        if shape.suffix.is_some() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance_while(|c| c.is_ascii_digit() || c == '.');
            let bare_fraction =
                shape.has_point && shape.exponent.is_none() && shape.suffix.is_none();
            let reason = if bare_fraction {
                "more than one decimal point"
            } else {
                "unexpected '.' after numeric literal"
            };
            return Err(self.malformed(reason));
        }

        let literal = self.number_value(shape.classify())?;
        Ok(self.make_literal(literal))
    }

    /// Consumes a run of ASCII digits and returns how many there were.
    fn eat_digits(&mut self) -> usize {
        let start = self.cursor.position();
        self.cursor.advance_while(|c| c.is_ascii_digit());
        self.cursor.position() - start
    }

    /// Computes the value of the literal just scanned.
    fn number_value(&self, kind: NumericKind) -> LexResult<Literal> {
        let digits = self.token_text().trim_end_matches(['#', '!', '&']);

        match kind {
            NumericKind::Integer => digits
                .parse::<i32>()
                .map(Literal::Integer)
                .map_err(|_| self.malformed("integer literal out of range")),
            NumericKind::LongInteger => digits
                .parse::<i64>()
                .map(Literal::LongInteger)
                .map_err(|_| self.malformed("long integer literal out of range")),
            NumericKind::Float => match digits.replace(['d', 'D'], "e").parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(Literal::Float(value)),
                _ => Err(self.malformed("float literal is not finite")),
            },
            NumericKind::Double => match digits.replace(['d', 'D'], "e").parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Literal::Double(value)),
                _ => Err(self.malformed("double literal is not finite")),
            },
        }
    }

    fn malformed(&self, reason: &'static str) -> LexError {
        LexError::MalformedNumber {
            text: self.token_text().to_string(),
            reason,
            line: self.token_line(),
            column: self.token_column(),
        }
    }
}

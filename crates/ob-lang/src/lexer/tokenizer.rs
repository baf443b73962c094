use ob_core::error::{Error, Result};
use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use super::winnow::{digits, identifier, symbol, ws};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Begin,
    End,
    Module,
    Procedure,
    Return,
}

impl Keyword {
    fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "BEGIN" => Some(Self::Begin),
            "END" => Some(Self::End),
            "MODULE" => Some(Self::Module),
            "PROCEDURE" => Some(Self::Procedure),
            "RETURN" => Some(Self::Return),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Integer,
    LeftParen,
    RightParen,
    Asterisk,
    Period,
    Colon,
    Semicolon,
    Keyword(Keyword),
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Set for [`TokenKind::Integer`] only.
    pub int_value: Option<i32>,
    pub span: Span,
}

impl Token {
    pub fn end_of_input(at: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            lexeme: String::new(),
            int_value: None,
            span: Span { start: at, end: at },
        }
    }

    /// Text used when the token shows up in a diagnostic.
    pub fn describe(&self) -> &str {
        match self.kind {
            TokenKind::EndOfInput => "end of input",
            _ => &self.lexeme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Word,
    Number,
    Symbol(char),
}

/// Splits `source` into tokens. The result always ends with an
/// [`TokenKind::EndOfInput`] token.
pub fn lex(source: &str) -> Result<Vec<Token>> {
    let mut input = source;
    let mut tokens = Vec::new();
    loop {
        let before = input;
        ws.parse_next(&mut input)
            .map_err(|_| Error::UnexpectedToken(unterminated_comment(before)))?;
        let start = source.len() - input.len();
        if input.is_empty() {
            tokens.push(Token::end_of_input(start));
            return Ok(tokens);
        }
        let shape = match token_shape.parse_next(&mut input) {
            Ok(shape) => shape,
            Err(_) => {
                let ch = input.chars().next().unwrap_or_default();
                return Err(Error::UnknownCharacter(ch));
            }
        };
        let end = source.len() - input.len();
        let lexeme = &source[start..end];
        let (kind, int_value) = match shape {
            Shape::Word => match Keyword::from_lexeme(lexeme) {
                Some(keyword) => (TokenKind::Keyword(keyword), None),
                None => (TokenKind::Ident, None),
            },
            Shape::Number => (TokenKind::Integer, Some(integer_value(lexeme)?)),
            Shape::Symbol(ch) => (symbol_kind(ch), None),
        };
        tokens.push(Token {
            kind,
            lexeme: lexeme.to_string(),
            int_value,
            span: Span { start, end },
        });
    }
}

fn token_shape(input: &mut &str) -> ModalResult<Shape> {
    alt((
        identifier.map(|_| Shape::Word),
        digits.map(|_| Shape::Number),
        symbol.map(Shape::Symbol),
    ))
    .parse_next(input)
}

fn symbol_kind(ch: char) -> TokenKind {
    match ch {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '*' => TokenKind::Asterisk,
        '.' => TokenKind::Period,
        ':' => TokenKind::Colon,
        _ => TokenKind::Semicolon,
    }
}

/// Decimal value of `digits`; must fit a signed 32-bit integer.
fn integer_value(digits: &str) -> Result<i32> {
    let mut value: i32 = 0;
    for (idx, ch) in digits.char_indices() {
        let digit = ch as i32 - '0' as i32;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::NumericOverflow(digits[..=idx].to_string()))?;
    }
    Ok(value)
}

fn unterminated_comment(rest: &str) -> String {
    match rest.find("(*") {
        Some(at) => rest[at..].chars().take(12).collect(),
        None => "(*".to_string(),
    }
}

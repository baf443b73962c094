use ob_core::error::{Error, Result};

use super::tokenizer::{lex, Token, TokenKind};

/// Pull-style view over a lexed token stream.
///
/// The cursor never moves past the trailing end-of-input token.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(source: &str) -> Result<Self> {
        Ok(Self::from_tokens(lex(source)?))
    }

    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfInput) {
            let at = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::end_of_input(at));
        }
        Self { tokens, pos: 0 }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn text(&self) -> &str {
        &self.current().lexeme
    }

    pub fn int_value(&self) -> Option<i32> {
        self.current().int_value
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub fn at_end(&self) -> bool {
        self.is(TokenKind::EndOfInput)
    }

    pub fn advance(&mut self) -> &Token {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        self.current()
    }

    pub fn expect(&self, kind: TokenKind) -> Result<()> {
        if self.is(kind) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    pub fn consume(&mut self, kind: TokenKind) -> Result<&Token> {
        self.expect(kind)?;
        Ok(self.advance())
    }

    /// Consumes an identifier and returns its text.
    pub fn expect_ident(&mut self) -> Result<String> {
        self.expect(TokenKind::Ident)?;
        let name = self.text().to_string();
        self.advance();
        Ok(name)
    }

    pub fn unexpected(&self) -> Error {
        Error::UnexpectedToken(self.current().describe().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    #[test]
    fn consume_checks_and_advances() {
        let mut cursor = TokenCursor::new("MODULE T;").unwrap();
        cursor.consume(TokenKind::Keyword(Keyword::Module)).unwrap();
        assert_eq!(cursor.expect_ident().unwrap(), "T");
        assert_eq!(
            cursor.consume(TokenKind::Period).unwrap_err(),
            Error::UnexpectedToken(";".into())
        );
        cursor.consume(TokenKind::Semicolon).unwrap();
        assert!(cursor.at_end());
    }

    #[test]
    fn advance_stops_at_end_of_input() {
        let mut cursor = TokenCursor::new("x").unwrap();
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(
            cursor.expect(TokenKind::Ident).unwrap_err(),
            Error::UnexpectedToken("end of input".into())
        );
    }

    #[test]
    fn from_tokens_appends_end_of_input() {
        let cursor = TokenCursor::from_tokens(Vec::new());
        assert!(cursor.at_end());
    }

    #[test]
    fn integer_tokens_carry_values() {
        let cursor = TokenCursor::new("17").unwrap();
        assert!(cursor.is(TokenKind::Integer));
        assert_eq!(cursor.int_value(), Some(17));
        assert_eq!(cursor.text(), "17");
    }
}

use ob_core::error::{Error, Result};
use ob_core::system::INTEGER_REPR;
use ob_core::DeclId;
use tracing::debug;

use super::Parser;
use crate::lexer::{Keyword, TokenKind};

/// Name of the synthetic procedure holding a module's initialization body.
pub const INIT_PROCEDURE: &str = "_init";

/// A procedure whose header is already in the IR but whose body is not.
///
/// The only way to get rid of one is [`Parser::parse_body`], which writes the
/// single `ret` line and closes the function.
#[must_use]
#[derive(Debug)]
pub struct OpenProcedure {
    id: DeclId,
    name: String,
    return_type: Option<DeclId>,
}

impl OpenProcedure {
    pub fn id(&self) -> DeclId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Parser {
    /// Registers a procedure and writes its function header.
    ///
    /// Every check runs before the header is written, so a failed call
    /// leaves the IR untouched.
    pub fn create_procedure(
        &mut self,
        name: &str,
        parent: Option<DeclId>,
        exported: bool,
        return_type: Option<DeclId>,
    ) -> Result<OpenProcedure> {
        let id = self
            .table
            .create_procedure(name, parent, exported, return_type)?;
        let linkage = self.table.linkage_name(id);
        let representation = self.table.representation(return_type).to_string();
        self.ir.define(&representation, &linkage);
        debug!(procedure = %linkage, returns = %representation, "emitted prologue");
        Ok(OpenProcedure {
            id,
            name: name.to_string(),
            return_type,
        })
    }

    /// `PROCEDURE name [*] [()] [: Type] ; body END name ;`
    pub fn parse_procedure(&mut self, parent: DeclId) -> Result<DeclId> {
        self.cursor
            .consume(TokenKind::Keyword(Keyword::Procedure))?;
        let name = self.cursor.expect_ident()?;
        let exported = self.cursor.is(TokenKind::Asterisk);
        if exported {
            self.cursor.advance();
        }
        if self.cursor.is(TokenKind::LeftParen) {
            self.cursor.advance();
            self.cursor.consume(TokenKind::RightParen)?;
        }
        let return_type = if self.cursor.is(TokenKind::Colon) {
            self.cursor.advance();
            Some(self.parse_type(Some(parent))?)
        } else {
            None
        };

        let open = self.create_procedure(&name, Some(parent), exported, return_type)?;
        self.cursor.consume(TokenKind::Semicolon)?;
        let id = self.parse_body(open)?;

        self.cursor.consume(TokenKind::Keyword(Keyword::End))?;
        self.expect_closing_name("procedure", &name)?;
        self.cursor.consume(TokenKind::Semicolon)?;
        Ok(id)
    }

    /// Module initialization body: no header, no closing name.
    pub fn parse_init(&mut self, module: DeclId) -> Result<DeclId> {
        let open = self.create_procedure(INIT_PROCEDURE, Some(module), true, None)?;
        self.parse_body(open)
    }

    /// `[BEGIN] [RETURN [integer]]`, then closes the function.
    pub fn parse_body(&mut self, open: OpenProcedure) -> Result<DeclId> {
        if self.cursor.is(TokenKind::Keyword(Keyword::Begin)) {
            self.cursor.advance();
        }
        if self.cursor.is(TokenKind::Keyword(Keyword::Return)) {
            self.cursor.advance();
            if let Some(value) = self.cursor.int_value() {
                let representation = self.table.representation(open.return_type);
                if representation != INTEGER_REPR {
                    return Err(Error::WrongReturnType(open.name));
                }
                self.ir.ret(INTEGER_REPR, value);
                self.cursor.advance();
                return Ok(open.id);
            }
        }
        if let Some(ty) = open.return_type {
            return Err(Error::MissingReturnValue {
                procedure: open.name,
                ty: self.table[ty].name().to_string(),
            });
        }
        self.ir.ret_void();
        Ok(open.id)
    }

    /// Checks the identifier after `END` against `expected` and consumes it.
    pub(crate) fn expect_closing_name(&mut self, kind: &'static str, expected: &str) -> Result<()> {
        self.cursor.expect(TokenKind::Ident)?;
        if self.cursor.text() != expected {
            return Err(Error::NameMismatch {
                kind,
                expected: expected.to_string(),
                found: self.cursor.text().to_string(),
            });
        }
        self.cursor.advance();
        Ok(())
    }
}

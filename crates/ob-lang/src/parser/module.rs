use ob_core::error::Result;
use ob_core::DeclId;
use tracing::debug;

use super::Parser;
use crate::lexer::{Keyword, TokenKind};

impl Parser {
    /// `MODULE name ; {procedure} body END name .`
    ///
    /// The module is registered in `parent`, which is normally the
    /// predeclared SYSTEM module.
    pub fn parse_module(&mut self, parent: Option<DeclId>) -> Result<DeclId> {
        self.cursor.consume(TokenKind::Keyword(Keyword::Module))?;
        let name = self.cursor.expect_ident()?;
        self.cursor.consume(TokenKind::Semicolon)?;
        let module = self.table.create_module(&name, parent)?;

        while self.cursor.is(TokenKind::Keyword(Keyword::Procedure)) {
            self.parse_procedure(module)?;
        }
        self.parse_init(module)?;

        self.cursor.consume(TokenKind::Keyword(Keyword::End))?;
        self.expect_closing_name("module", &name)?;
        self.cursor.consume(TokenKind::Period)?;
        debug!(module = %name, decls = self.table.len(), "parsed module");
        Ok(module)
    }
}

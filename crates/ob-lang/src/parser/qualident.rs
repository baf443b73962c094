use ob_core::error::{Error, Result};
use ob_core::DeclId;

use super::Parser;
use crate::lexer::TokenKind;

/// Outcome of resolving a possibly qualified identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub decl: DeclId,
    /// Source spelling, `Name` or `Module.Name`.
    pub spelling: String,
}

impl Parser {
    /// Resolves `Name` through `scope` and its enclosing scopes, or
    /// `Module.Name` where `Name` is looked up in `Module` alone.
    pub fn parse_qualified_ident(&mut self, scope: Option<DeclId>) -> Result<Resolved> {
        let Some(scope) = scope else {
            return Err(Error::NoScope(self.cursor.current().describe().to_string()));
        };
        let name = self.cursor.expect_ident()?;
        let found = self
            .table
            .lookup(scope, &name)?
            .ok_or_else(|| Error::NotFound(name.clone()))?;

        if self.table[found].is_module() && self.cursor.is(TokenKind::Period) {
            self.cursor.advance();
            let member = self.cursor.expect_ident()?;
            let inner = self.table.lookup_local(found, &member)?.ok_or_else(|| {
                Error::NotFoundInModule {
                    name: member.clone(),
                    module: name.clone(),
                }
            })?;
            return Ok(Resolved {
                decl: inner,
                spelling: format!("{}.{}", name, member),
            });
        }

        Ok(Resolved {
            decl: found,
            spelling: name,
        })
    }
}

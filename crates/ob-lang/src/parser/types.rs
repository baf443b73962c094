use ob_core::error::{Error, Result};
use ob_core::DeclId;

use super::Parser;

impl Parser {
    /// Parses a type reference and checks that it names a TYPE.
    pub fn parse_type(&mut self, scope: Option<DeclId>) -> Result<DeclId> {
        let resolved = self.parse_qualified_ident(scope)?;
        match self.table[resolved.decl].as_type() {
            Some(_) => Ok(resolved.decl),
            None => Err(Error::NotAType(resolved.spelling)),
        }
    }
}

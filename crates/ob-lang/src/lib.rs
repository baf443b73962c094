//! Front end for the module language: lexing, parsing and name resolution
//! over a [`DeclTable`], producing textual IR.

use ob_core::{DeclId, DeclTable, IrBuffer, Predeclared};
use tracing::info;

pub mod lexer;
pub mod parser;

pub use lexer::{lex, Keyword, Token, TokenCursor, TokenKind};
pub use ob_core::{Error, Result};
pub use parser::Parser;

/// Target triple written at the top of the IR when none is configured.
pub const DEFAULT_TARGET_TRIPLE: &str = "x86_64-pc-linux-gnu";

#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub target_triple: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            target_triple: DEFAULT_TARGET_TRIPLE.to_string(),
        }
    }
}

/// A fully compiled translation unit.
#[derive(Debug)]
pub struct Compilation {
    pub table: DeclTable,
    pub module: DeclId,
    pub ir: IrBuffer,
}

/// Compiles one module. Either the whole unit resolves and its IR is
/// returned, or the first error is.
pub fn compile(
    source: &str,
    predeclared: &Predeclared,
    options: &CompileOptions,
) -> Result<Compilation> {
    let cursor = TokenCursor::new(source)?;
    let table = predeclared.instantiate();
    let ir = IrBuffer::with_target(&options.target_triple);
    let mut parser = Parser::new(cursor, table, ir);

    let module = parser.parse_module(Some(predeclared.system()))?;
    if !parser.cursor().at_end() {
        return Err(parser.cursor().unexpected());
    }

    let (table, ir) = parser.into_parts();
    info!(module = %table[module].name(), "compiled module");
    Ok(Compilation { table, module, ir })
}

//! Recursive-descent parser.
//!
//! Parsing and name resolution happen in a single pass: each parse function
//! creates declarations in the [`DeclTable`] as soon as their header is read
//! and resolves every identifier it meets against the scopes built so far.

use ob_core::{DeclTable, IrBuffer};

use crate::lexer::TokenCursor;

mod module;
mod procedure;
mod qualident;
mod types;

pub use procedure::{OpenProcedure, INIT_PROCEDURE};
pub use qualident::Resolved;

/// State of one compilation pass.
#[derive(Debug)]
pub struct Parser {
    cursor: TokenCursor,
    table: DeclTable,
    ir: IrBuffer,
}

impl Parser {
    pub fn new(cursor: TokenCursor, table: DeclTable, ir: IrBuffer) -> Self {
        Self { cursor, table, ir }
    }

    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }

    pub fn table(&self) -> &DeclTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DeclTable {
        &mut self.table
    }

    pub fn ir(&self) -> &IrBuffer {
        &self.ir
    }

    pub fn into_parts(self) -> (DeclTable, IrBuffer) {
        (self.table, self.ir)
    }
}

//! The predeclared `SYSTEM` module.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::decl::{DeclId, DeclTable};
use crate::error::Result;

pub const SYSTEM: &str = "SYSTEM";
pub const INTEGER: &str = "INTEGER";
pub const INTEGER_REPR: &str = "i32";
pub const VOID_REPR: &str = "void";

/// Built-in declarations every compilation starts from.
#[derive(Debug, Clone)]
pub struct Predeclared {
    table: DeclTable,
    system: DeclId,
}

static SHARED: OnceCell<Predeclared> = OnceCell::new();

impl Predeclared {
    pub fn new() -> Result<Self> {
        let mut table = DeclTable::new();
        let system = table.create_module(SYSTEM, None)?;
        table.insert(system, system)?;
        table.create_type(INTEGER, Some(system), INTEGER_REPR)?;
        debug!(decls = table.len(), "built predeclared environment");
        Ok(Self { table, system })
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> Result<&'static Predeclared> {
        SHARED.get_or_try_init(Predeclared::new)
    }

    pub fn system(&self) -> DeclId {
        self.system
    }

    pub fn table(&self) -> &DeclTable {
        &self.table
    }

    /// Fresh declaration table for one compilation, seeded with the built-ins.
    /// Declarations added to it never reach `self`.
    pub fn instantiate(&self) -> DeclTable {
        self.table.clone()
    }
}

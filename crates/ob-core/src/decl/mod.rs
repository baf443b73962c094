//! Declaration tree.
//!
//! Every declaration of a compilation lives in one [`DeclTable`]. Children are
//! owned by the table and registered by name in the scope of their parent; the
//! parent link is a plain [`DeclId`] so it never keeps anything alive.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

mod table;

pub use table::DeclTable;

/// Index of a declaration inside its [`DeclTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(u32);

impl DeclId {
    /// `None` once `index` no longer fits a `u32`.
    pub(crate) fn from_raw(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name to child mapping of a scope-bearing declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    entries: BTreeMap<String, DeclId>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<DeclId> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DeclId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Returns `false` and leaves the scope untouched if `name` is taken.
    fn insert(&mut self, name: &str, id: DeclId) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), id);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// How the type is spelled in the emitted IR, e.g. `i32`.
    pub representation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
    pub ty: Option<DeclId>,
    pub exported: bool,
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureDecl {
    pub scope: Scope,
    pub exported: bool,
    /// `None` when the procedure returns nothing.
    pub return_type: Option<DeclId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Module(Scope),
    Procedure(ProcedureDecl),
    Type(TypeDecl),
    Variable(VariableDecl),
}

impl DeclKind {
    /// Keyword used for this kind in diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclKind::Module(_) => "MODULE",
            DeclKind::Procedure(_) => "PROCEDURE",
            DeclKind::Type(_) => "TYPE",
            DeclKind::Variable(_) => "VAR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    name: String,
    parent: Option<DeclId>,
    kind: DeclKind,
}

impl Decl {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &DeclKind {
        &self.kind
    }

    pub fn is_module(&self) -> bool {
        matches!(self.kind, DeclKind::Module(_))
    }

    pub fn as_type(&self) -> Option<&TypeDecl> {
        match &self.kind {
            DeclKind::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableDecl> {
        match &self.kind {
            DeclKind::Variable(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_procedure(&self) -> Option<&ProcedureDecl> {
        match &self.kind {
            DeclKind::Procedure(proc) => Some(proc),
            _ => None,
        }
    }

    /// The nested namespace, for modules and procedures.
    pub fn scope(&self) -> Option<&Scope> {
        match &self.kind {
            DeclKind::Module(scope) => Some(scope),
            DeclKind::Procedure(proc) => Some(&proc.scope),
            DeclKind::Type(_) | DeclKind::Variable(_) => None,
        }
    }

    fn scope_mut(&mut self) -> Option<&mut Scope> {
        match &mut self.kind {
            DeclKind::Module(scope) => Some(scope),
            DeclKind::Procedure(proc) => Some(&mut proc.scope),
            DeclKind::Type(_) | DeclKind::Variable(_) => None,
        }
    }
}

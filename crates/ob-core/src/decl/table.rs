use std::ops::Index;

use itertools::Itertools;
use tracing::{debug, trace};

use super::{Decl, DeclId, DeclKind, ProcedureDecl, Scope, TypeDecl, VariableDecl};
use crate::error::{Error, Result};
use crate::system::VOID_REPR;

/// Arena owning every declaration of one compilation.
///
/// Declarations are never removed, so a [`DeclId`] handed out by a table stays
/// valid for the lifetime of that table. Indexing with an id minted by another
/// table panics; [`DeclTable::get`] is the non-panicking variant.
#[derive(Debug, Clone, Default)]
pub struct DeclTable {
    decls: Vec<Decl>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn get(&self, id: DeclId) -> Option<&Decl> {
        self.decls.get(id.index())
    }

    /// Parent of `id`. A link that no longer resolves reads as no parent.
    pub fn parent(&self, id: DeclId) -> Option<DeclId> {
        let parent = self.get(id)?.parent?;
        self.get(parent).map(|_| parent)
    }

    /// Creates a module. Root modules pass `None` as parent.
    pub fn create_module(&mut self, name: &str, parent: Option<DeclId>) -> Result<DeclId> {
        let kind = DeclKind::Module(Scope::new());
        match parent {
            Some(parent) => self.attach(name, parent, kind),
            None => {
                debug!(module = name, "created root module");
                self.alloc(name, None, kind)
            }
        }
    }

    pub fn create_type(
        &mut self,
        name: &str,
        parent: Option<DeclId>,
        representation: &str,
    ) -> Result<DeclId> {
        let kind = DeclKind::Type(TypeDecl {
            representation: representation.to_string(),
        });
        self.attach_required(name, parent, kind)
    }

    pub fn create_variable(
        &mut self,
        name: &str,
        parent: Option<DeclId>,
        ty: Option<DeclId>,
        exported: bool,
        mutable: bool,
    ) -> Result<DeclId> {
        let kind = DeclKind::Variable(VariableDecl {
            ty,
            exported,
            mutable,
        });
        self.attach_required(name, parent, kind)
    }

    /// Registers a procedure. Only exported procedures are supported.
    pub fn create_procedure(
        &mut self,
        name: &str,
        parent: Option<DeclId>,
        exported: bool,
        return_type: Option<DeclId>,
    ) -> Result<DeclId> {
        let Some(parent) = parent else {
            return Err(Error::NoParent {
                kind: "PROCEDURE",
                name: name.to_string(),
            });
        };
        if !exported {
            return Err(Error::UnsupportedUnexported(name.to_string()));
        }
        let kind = DeclKind::Procedure(ProcedureDecl {
            scope: Scope::new(),
            exported,
            return_type,
        });
        self.attach(name, parent, kind)
    }

    /// Registers the existing declaration `child` in the scope of `parent`
    /// under the child's own name.
    ///
    /// `parent` must be the child's own parent, or the child itself for a
    /// module that lists itself.
    pub fn insert(&mut self, parent: DeclId, child: DeclId) -> Result<()> {
        let name = self[child].name.clone();
        if parent != child && self[child].parent != Some(parent) {
            return Err(Error::CannotInsert {
                name,
                decl: self[parent].name.clone(),
            });
        }
        self.check_insertable(parent, &name)?;
        let scope_name = self[parent].name.clone();
        if let Some(scope) = self.decls[parent.index()].scope_mut() {
            scope.insert(&name, child);
        }
        debug!(name = %name, scope = %scope_name, "inserted declaration");
        Ok(())
    }

    /// Resolves `name` in `scope`, then in each enclosing scope.
    ///
    /// `Ok(None)` means the name is unknown; the caller decides how to report it.
    pub fn lookup(&self, scope: DeclId, name: &str) -> Result<Option<DeclId>> {
        let mut current = Some(scope);
        let mut first = true;
        while let Some(id) = current {
            let decl = &self[id];
            let Some(entries) = decl.scope() else {
                if first {
                    return Err(Error::CannotLookup {
                        name: name.to_string(),
                        decl: decl.name.clone(),
                    });
                }
                return Ok(None);
            };
            trace!(name, scope = %decl.name, "lookup");
            if let Some(found) = entries.get(name) {
                return Ok(Some(found));
            }
            first = false;
            current = self.parent(id);
        }
        Ok(None)
    }

    /// Resolves `name` in `scope` only, without consulting enclosing scopes.
    pub fn lookup_local(&self, scope: DeclId, name: &str) -> Result<Option<DeclId>> {
        let decl = &self[scope];
        match decl.scope() {
            Some(entries) => Ok(entries.get(name)),
            None => Err(Error::CannotLookup {
                name: name.to_string(),
                decl: decl.name.clone(),
            }),
        }
    }

    /// Prefixes `suffix` with the names of `id` and all its ancestors up to
    /// the nearest module, joined by underscores.
    pub fn mangle(&self, id: DeclId, suffix: &str) -> String {
        let mut current = id;
        let mut result = suffix.to_string();
        loop {
            let decl = &self[current];
            result = format!("{}_{}", decl.name, result);
            if decl.is_module() {
                return result;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return result,
            }
        }
    }

    /// Linkage name of the declaration itself: its parent's mangling of its
    /// name, or the bare name for modules and parentless declarations.
    pub fn linkage_name(&self, id: DeclId) -> String {
        let decl = &self[id];
        if decl.is_module() {
            return decl.name.clone();
        }
        match self.parent(id) {
            Some(parent) => self.mangle(parent, &decl.name),
            None => decl.name.clone(),
        }
    }

    /// Dotted path from the outermost ancestor, for diagnostics and logs.
    pub fn path(&self, id: DeclId) -> String {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            chain.push(parent);
            current = parent;
        }
        chain.iter().rev().map(|id| self[*id].name.as_str()).join(".")
    }

    /// Backend representation of a type reference; absent means `void`.
    pub fn representation(&self, ty: Option<DeclId>) -> &str {
        ty.and_then(|id| self.get(id))
            .and_then(Decl::as_type)
            .map(|ty| ty.representation.as_str())
            .unwrap_or(VOID_REPR)
    }

    fn alloc(&mut self, name: &str, parent: Option<DeclId>, kind: DeclKind) -> Result<DeclId> {
        let id = DeclId::from_raw(self.decls.len())
            .ok_or_else(|| Error::TableFull(name.to_string()))?;
        self.decls.push(Decl {
            name: name.to_string(),
            parent,
            kind,
        });
        Ok(id)
    }

    fn attach_required(
        &mut self,
        name: &str,
        parent: Option<DeclId>,
        kind: DeclKind,
    ) -> Result<DeclId> {
        match parent {
            Some(parent) => self.attach(name, parent, kind),
            None => Err(Error::NoParent {
                kind: kind.keyword(),
                name: name.to_string(),
            }),
        }
    }

    /// Validates first so that a rejected declaration leaves no trace.
    fn attach(&mut self, name: &str, parent: DeclId, kind: DeclKind) -> Result<DeclId> {
        self.check_insertable(parent, name)?;
        let keyword = kind.keyword();
        let id = self.alloc(name, Some(parent), kind)?;
        self.insert(parent, id)?;
        debug!(kind = keyword, path = %self.path(id), "created declaration");
        Ok(id)
    }

    fn check_insertable(&self, parent: DeclId, name: &str) -> Result<()> {
        let decl = &self[parent];
        match decl.scope() {
            None => Err(Error::CannotInsert {
                name: name.to_string(),
                decl: decl.name.clone(),
            }),
            Some(scope) if scope.contains(name) => Err(Error::DuplicateName {
                name: name.to_string(),
                scope: decl.name.clone(),
            }),
            Some(_) => Ok(()),
        }
    }
}

impl Index<DeclId> for DeclTable {
    type Output = Decl;

    fn index(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }
}

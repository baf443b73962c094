use miette::Diagnostic;
use std::result;
use thiserror::Error;

/// Wraps a name in single quotes for diagnostics.
pub fn quote(name: &str) -> String {
    format!("'{}'", name)
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no parent for {kind} {}", quote(.name))]
    #[diagnostic(code(ob::no_parent))]
    NoParent { kind: &'static str, name: String },

    #[error("element {} inserted twice into {}", quote(.name), quote(.scope))]
    #[diagnostic(
        code(ob::duplicate_name),
        help("names must be unique within one scope")
    )]
    DuplicateName { name: String, scope: String },

    #[error("{} not found", quote(.0))]
    #[diagnostic(code(ob::not_found))]
    NotFound(String),

    #[error("{} not found in {}", quote(.name), quote(.module))]
    #[diagnostic(
        code(ob::not_found_in_module),
        help("qualified names are only looked up in the named module")
    )]
    NotFoundInModule { name: String, module: String },

    #[error("{} is not a TYPE", quote(.0))]
    #[diagnostic(code(ob::not_a_type))]
    NotAType(String),

    #[error("cannot look up {} in {}", quote(.name), quote(.decl))]
    #[diagnostic(code(ob::cannot_lookup))]
    CannotLookup { name: String, decl: String },

    #[error("cannot insert {} into {}", quote(.name), quote(.decl))]
    #[diagnostic(code(ob::cannot_insert))]
    CannotInsert { name: String, decl: String },

    #[error("no scope to resolve {}", quote(.0))]
    #[diagnostic(code(ob::no_scope))]
    NoScope(String),

    #[error("{kind} name {} does not match END {}", quote(.expected), quote(.found))]
    #[diagnostic(code(ob::name_mismatch))]
    NameMismatch {
        kind: &'static str,
        expected: String,
        found: String,
    },

    #[error("procedure {} must be exported", quote(.0))]
    #[diagnostic(
        code(ob::unsupported_unexported),
        help("mark the procedure with '*' after its name")
    )]
    UnsupportedUnexported(String),

    #[error("procedure {} must return a value of type {}", quote(.procedure), quote(.ty))]
    #[diagnostic(code(ob::missing_return_value))]
    MissingReturnValue { procedure: String, ty: String },

    #[error("procedure {} cannot return an INTEGER", quote(.0))]
    #[diagnostic(code(ob::wrong_return_type))]
    WrongReturnType(String),

    #[error("not expected {}", quote(.0))]
    #[diagnostic(code(ob::unexpected_token))]
    UnexpectedToken(String),

    #[error("INTEGER too big: {}", quote(.0))]
    #[diagnostic(code(ob::numeric_overflow))]
    NumericOverflow(String),

    #[error("unknown char '{0}'")]
    #[diagnostic(code(ob::unknown_character))]
    UnknownCharacter(char),

    #[error("too many declarations to register {}", quote(.0))]
    #[diagnostic(code(ob::table_full))]
    TableFull(String),
}

pub type Result<T> = result::Result<T, Error>;

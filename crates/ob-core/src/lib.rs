pub mod decl;
pub mod error;
pub mod ir;
pub mod system;

pub use decl::{Decl, DeclId, DeclKind, DeclTable};
pub use ir::IrBuffer;
pub use system::Predeclared;

pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;

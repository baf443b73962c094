//! Command-line driver: reads one module, writes its IR.

pub mod cli;
pub mod compile;
pub mod diagnostics;

pub mod error {
    use miette::Diagnostic;
    use thiserror::Error;

    #[derive(Error, Debug, Diagnostic)]
    pub enum CliError {
        #[error("IO error: {0}")]
        #[diagnostic(code(obc::io))]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        #[diagnostic(code(obc::config), help("check obc.toml for correct syntax and values"))]
        Config(String),

        #[error(transparent)]
        #[diagnostic(transparent)]
        Compile(#[from] ob_core::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};

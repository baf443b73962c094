use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use ob_core::Predeclared;
use ob_lang::CompileOptions;
use tracing::{debug, info};

use crate::cli::CliConfig;
use crate::Result;

#[derive(Debug, Clone, Default, Args)]
pub struct CompileArgs {
    /// Read the module from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the IR to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured target triple
    #[arg(long)]
    pub target: Option<String>,
}

/// Compiles one translation unit. Nothing is written unless the whole unit
/// compiles.
pub fn compile_command(args: &CompileArgs, config: &CliConfig) -> Result<()> {
    let source = read_source(args)?;
    let options = CompileOptions {
        target_triple: args
            .target
            .clone()
            .unwrap_or_else(|| config.target.triple.clone()),
    };
    debug!(bytes = source.len(), target = %options.target_triple, "compiling");

    let predeclared = Predeclared::shared()?;
    let compiled = ob_lang::compile(&source, predeclared, &options)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, compiled.ir.as_str())?;
            info!(path = %path.display(), "wrote IR");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(compiled.ir.as_str().as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_source(args: &CompileArgs) -> Result<String> {
    match &args.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

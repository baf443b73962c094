//! obc: compiles one module from stdin to textual IR on stdout.
//!
//! # Usage
//!
//! ```bash
//! obc < FnTest.Mod > FnTest.ll
//! obc --input FnTest.Mod --output FnTest.ll --target aarch64-apple-darwin
//! ```

use clap::{Parser, ValueEnum};
use ob_cli::{
    cli::CliConfig,
    compile::{compile_command, CompileArgs},
    diagnostics::{render_cli_error, setup_error_reporting},
    Result,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "obc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compiles a module from stdin to IR on stdout"
)]
struct Cli {
    #[command(flatten)]
    compile: CompileArgs,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format);

    if let Err(e) = run(&cli) {
        render_cli_error(e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    setup_error_reporting(config.diagnostics.template)?;
    compile_command(&cli.compile, &config)
}

fn setup_logging(verbose: u8, quiet: bool, log_level: Option<LogLevel>, log_format: LogFormat) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries the IR
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }
}

//! Diagnostic and error reporting utilities

use crate::cli::DiagnosticTemplate;
use crate::{CliError, Result};

/// Install the miette report handler matching the configured template.
pub fn setup_error_reporting(template: DiagnosticTemplate) -> Result<()> {
    miette::set_hook(Box::new(move |_| -> Box<dyn miette::ReportHandler> {
        match template {
            DiagnosticTemplate::Pretty => Box::new(
                miette::MietteHandlerOpts::new()
                    .terminal_links(false)
                    .unicode(true)
                    .context_lines(3)
                    .build(),
            ),
            DiagnosticTemplate::Plain => Box::new(miette::NarratableReportHandler::new()),
        }
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// Print `error` to stderr through the installed report handler.
pub fn render_cli_error(error: CliError) {
    eprintln!("{:?}", miette::Report::new(error));
}

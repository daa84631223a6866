//! Initiator CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use initiator::cli::{Cli, CommandDispatcher};
use initiator::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr, which the full-screen wizard leaves alone.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("initiator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("initiator=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Initiator starting with args: {:?}", cli);

    let output_mode = OutputMode::from_quiet(cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }
    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some();

    let mut ui = create_ui(true, output_mode);
    let dispatcher = CommandDispatcher::new(cli.catalog.clone(), no_color);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

//! gtnlint CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use gtnlint::cli::{Cli, CommandDispatcher};
use gtnlint::config::{find_project_root, load_project_config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for errors that stop the whole run, such as a bad config file.
const EXIT_RUN_FAILED: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gtnlint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gtnlint=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gtnlint starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    // Determine project root
    let project_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_project_root(&cwd).unwrap_or(cwd)
    });

    let stderr = std::io::stderr();
    let config = match load_project_config(&project_root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(stderr.lock(), "Error: {}", e);
            return ExitCode::from(EXIT_RUN_FAILED);
        }
    };

    let dispatcher = CommandDispatcher::new(project_root, config)
        .with_color(!cli.no_color && console::colors_enabled());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let code = match dispatcher.dispatch(&cli, &mut out, &mut err) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            ExitCode::from(EXIT_RUN_FAILED)
        }
    };
    let _ = out.flush();
    code
}

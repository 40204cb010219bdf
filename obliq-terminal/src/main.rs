/// obliq Terminal Demo - Orthogonal vs Oblique Projection
///
/// Prints projection measurements and comparison reports.
/// Usage:
///   obliq-terminal                 run the built-in demonstration scenarios
///   obliq-terminal <config.json>   run one experiment from a JSON file
///
/// Log verbosity follows `RUST_LOG` (default `obliq_terminal=info`).
use std::env;
use std::io::stdout;
use std::path::PathBuf;

use obliq_terminal::{load_config, ReportApp, TerminalError};
use tracing::info;

fn main() -> Result<(), TerminalError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "obliq_terminal=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = ReportApp::default();
    let mut stdout = stdout().lock();

    match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!(path = %path.display(), "loading experiment config");
            let config = load_config(&path)?;
            app.run_experiment(&mut stdout, &config)
        }
        None => {
            info!("running demonstration scenarios");
            app.run_demo(&mut stdout)
        }
    }
}

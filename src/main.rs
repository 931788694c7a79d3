mod config; // scenario settings, layered from files and the environment
mod scenario; // runs the geometry queries over a scenario

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Vantage scenario probe started.");

    let path = std::env::args().nth(1);
    let settings = config::load_settings(path.as_deref())?;

    match scenario::evaluate(&settings) {
        Ok(report) => {
            report.log();
            Ok(())
        }
        Err(e) => {
            error!("Scenario evaluation failed: {:#}", e);
            Err(e)
        }
    }
}

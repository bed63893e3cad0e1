//! a compact host resource dashboard.

use {
    std::{fs::OpenOptions, sync::Mutex},
    vitals::{App, Config, State},
};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    match App::new().run() {
        Ok(State::Errored(error)) => {
            // the error has already been shown; the dashboard simply stopped.
            tracing::info!(%error, "exiting after a failed sample");
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(error) => {
            tracing::error!(%error, "dashboard failed");
            Err(error.into())
        }
    }
}

/// installs a subscriber writing to the configured log file.
///
/// the dashboard owns the terminal, so nothing is logged unless a file was given.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| anyhow::anyhow!("opening log file {}: {error}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

// Entrypoint for the CLI application.
// - Keeps `main` small: resolve the config and hand it to the UI flow.
// - Every failure stage surfaces as one typed error, printed here.

use vision_cli::{config::AppConfig, ui};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Paths and endpoint come from the environment, falling back to the
    // fixed relative paths. See `config::AppConfig::from_env`.
    let config = AppConfig::from_env();

    // Run the interactive flow. This call blocks until the response is
    // printed or a stage fails.
    ui::run(&config)?;
    Ok(())
}

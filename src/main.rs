use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use basket::config::Config;
use basket::console::StdConsole;
use basket::logging::init_tracing;
use basket::session::Session;

/// Interactive shopping list.
#[derive(Debug, Parser)]
#[command(name = "basket", version)]
struct Cli {
    /// Path to the config file (default: <config dir>/basket/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Never clear the screen between menus
    #[arg(long)]
    no_clear: bool,

    /// Don't wait for enter after printing the list
    #[arg(long)]
    no_pause: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let config = apply_overrides(config, &cli);

    if let Some(log_path) = init_tracing(&config.logging) {
        tracing::info!(log = %log_path.display(), config = %config_path.display(), "logging started");
    }

    let console = StdConsole::new(config.display.clear_screen);
    let mut session = Session::new(console, config.display);
    session.run().context("terminal I/O failed")?;
    Ok(())
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if cli.no_clear {
        config.display.clear_screen = false;
    }
    if cli.no_pause {
        config.display.pause_after_print = false;
    }
    config
}

//! Swagtree CLI Binary Entry Point

use clap::Parser;
use swagtree_cli::{load_config, run, SwagtreeCli};

fn main() -> anyhow::Result<()> {
    let cli = SwagtreeCli::parse();
    let config = load_config(cli.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.command, config, &mut out)
}

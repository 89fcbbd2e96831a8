use anyhow::Context;
use clap::Parser;
use clinic_registry::utils::logger;
use clinic_registry::{CliConfig, Console, Session};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let limits = config
        .load_limits()
        .with_context(|| match &config.config {
            Some(path) => format!("failed to load limits from '{}'", path.display()),
            None => "failed to build default limits".to_string(),
        })?;
    tracing::debug!("Validation limits: {:?}", limits);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(console, limits);

    if let Err(e) = session.run() {
        tracing::error!("Session aborted: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

//! Lingo Engine host
//!
//! Main application entry point. Loads the configured catalog and either
//! resolves `context source [args...]` from the command line or prints
//! catalog statistics.

use anyhow::{bail, Context as _};
use tracing::{info, warn};

use lingo_engine::{
    config::Settings,
    resolver::Arg,
    services::Translator,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("Failed to load settings")?;
    settings.validate()?;

    // Initialize logging; the guard flushes file output on exit
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", lingo_engine::info());

    let path = match &settings.catalog.path {
        Some(path) => path.clone(),
        None => bail!("No catalog configured; set catalog.path or LINGO_CATALOG__PATH"),
    };

    info!(path = %path, "Reading catalog...");
    let raw = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read catalog {}", path))?;

    let translator = Translator::from_settings(&settings);
    let index = translator
        .load(&raw)
        .with_context(|| format!("Failed to load catalog {}", path))?;
    let stats = index.catalog().stats();
    translator.activate(index);

    let mut cli = std::env::args().skip(1);
    match (cli.next(), cli.next()) {
        (Some(context), Some(source)) => {
            let args: Vec<Arg> = cli.map(Arg::from).collect();
            let resolved = translator.resolve_detailed(&context, &source, None, &args, None);
            if resolved.is_fallback() {
                warn!(origin = ?resolved.origin, "Served source text");
            }
            println!("{}", resolved.text);
        }
        (Some(_), None) => bail!("Usage: lingo-engine [<context> <source> [args...]]"),
        _ => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    logging::log_diagnostics(&translator.diagnostics());
    translator.deactivate();

    Ok(())
}

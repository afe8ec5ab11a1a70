use std::str::FromStr;

use tracing::Level;

mod app;
mod config;
mod core;
mod models;
mod utils;

#[tokio::main]
async fn main() {
    let _ = dotenvy::from_path("./.env");
    let config = config::Config::init().expect("Failed to initialize configuration");
    init_logging(&config);

    let source = match core::catalog::source_from_config(&config.catalog) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Catalog source configuration error: {e}");
            return;
        }
    };

    // Nothing is interactive until the single load attempt has resolved.
    let catalog = core::catalog::load_catalog(source.as_ref()).await;
    let session = core::session::Session::new(catalog);

    let mut repl = app::Repl::new(session, &config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    if let Err(e) = repl.run(stdin).await {
        tracing::error!("{e}");
    }
}

fn init_logging(config: &crate::config::Config) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .init();
}

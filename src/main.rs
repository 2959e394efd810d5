use anyhow::Result;
use convertist::config::Config;
use convertist::currency::{HttpRateFeed, RateFeed};
use convertist::{logger, ui};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = match args.next() {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "--help" | "-h" => {
                println!("Usage: convertist [--generate-config [PATH]]");
                return Ok(());
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    let config = Config::load()?;
    logger::setup_logging(&config.logging)?;

    let feed: Arc<dyn RateFeed> = Arc::new(HttpRateFeed::new(
        config.currency.rates_url.clone(),
        config.currency.history_url.clone(),
        config.currency.request_timeout(),
    ));

    // Run the TUI application
    ui::run_app(&config, feed).await?;

    Ok(())
}

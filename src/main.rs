use sitecheck::checker::config::CheckerConfig;
use sitecheck::checker::runner;

const CONFIG_PATH: &str = "sitecheck.yaml";

/// Diagnostic helper: fetch robots.txt and sitemap.xml from one site
/// root and print a qualitative verdict for each. Always exits 0; a
/// failed fetch is part of the diagnosis, not a program failure.
#[tokio::main]
async fn main() {
    let config = CheckerConfig::load_or_default(CONFIG_PATH);

    if let Err(e) = config.init_logging() {
        eprintln!("Could not initialize logging: {}", e);
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return;
    }

    if let Err(e) = runner::run_check(&config).await {
        eprintln!("Check could not run: {}", e);
    }
}

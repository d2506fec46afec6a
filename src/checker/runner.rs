use url::Url;

use super::config::CheckerConfig;
use super::errors::{CheckError, CheckResult};
use super::fetcher::{self, Echo};
use super::logging::CheckLogger;
use super::robots::{self, RobotsVerdict};
use super::sitemap::{self, SitemapVerdict};

/// Outcome of one full run: per-file verdicts, absent when the fetch
/// came back empty and analysis was skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub robots: Option<RobotsVerdict>,
    pub sitemap: Option<SitemapVerdict>,
}

/// Run the whole check: fetch robots.txt, analyze it, fetch
/// sitemap.xml, analyze it. Strictly sequential; the two pipelines
/// share nothing beyond execution order, and no fetch failure is fatal.
pub async fn run_check(config: &CheckerConfig) -> CheckResult<CheckReport> {
    // Validate up front; the fetcher concatenates the raw string so a
    // typo would otherwise only surface as two failed fetches.
    Url::parse(&config.base_url)
        .map_err(|e| CheckError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;

    let mut logger = CheckLogger::new();
    let mut report = CheckReport::default();

    println!("Checking crawl configuration for: {}", config.base_url);

    logger.start_operation("robots.txt");
    let robots_content =
        fetcher::check_well_known(&client, &config.base_url, "robots.txt", Echo::Full).await;
    logger.end_operation("robots.txt", robots_content.is_some());

    if let Some(content) = &robots_content {
        report.robots = Some(robots::report_robots(content));
    }

    logger.start_operation("sitemap.xml");
    let sitemap_content = fetcher::check_well_known(
        &client,
        &config.base_url,
        "sitemap.xml",
        Echo::Preview(config.sitemap_preview_chars),
    )
    .await;
    logger.end_operation("sitemap.xml", sitemap_content.is_some());

    if let Some(content) = &sitemap_content {
        report.sitemap = Some(sitemap::report_sitemap(content));
    }

    logger.log_final_summary();

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_check_rejects_malformed_base_url() {
        let mut config = CheckerConfig::default();
        config.base_url = "not a url".to_string();

        match run_check(&config).await {
            Err(CheckError::InvalidUrl(msg)) => assert!(msg.contains("not a url")),
            other => panic!("Expected InvalidUrl, got {:?}", other),
        }
    }
}

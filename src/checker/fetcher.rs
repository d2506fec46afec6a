use log::{debug, info};
use url::Url;

use super::errors::{CheckError, FetchError};

/// How much of a fetched body to echo back to the console.
#[derive(Debug, Clone, Copy)]
pub enum Echo {
    /// Print the whole body (robots.txt files are short)
    Full,
    /// Print only the first N characters (sitemaps can be huge)
    Preview(usize),
}

/// Build the URL of a well-known file as literal `base + "/" + file`.
///
/// Whatever path the base URL carries stays in front of the file name,
/// and a base with a trailing slash produces a double slash. Crude, but
/// exactly what this checker has always done.
pub fn well_known_url(base: &str, file: &str) -> Result<Url, CheckError> {
    let target = Url::parse(&format!("{}/{}", base, file))?;
    Ok(target)
}

/// First `max_chars` characters of a body, always with a trailing
/// `...` whether or not anything was cut (matching the tool's
/// long-standing console output).
fn preview(body: &str, max_chars: usize) -> String {
    let head: String = body.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Issue one GET and return the body text exactly as received.
///
/// Only a 200 counts as success; any other status is an error, and
/// transport failures (DNS, connection, timeout) surface as
/// `FetchError::Transport`. No retries, no explicit timeout: a
/// non-responsive server stalls the run on the client's defaults.
pub async fn fetch_text(client: &reqwest::Client, target: &Url) -> Result<String, FetchError> {
    let response = client
        .get(target.clone())
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    debug!("GET {} -> {}", target, status);

    if status.as_u16() != 200 {
        return Err(FetchError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))
}

/// Fetch boundary: any failure becomes one diagnostic line plus an
/// absent result, so the caller just skips analysis when input is gone.
pub async fn check_well_known(
    client: &reqwest::Client,
    base: &str,
    file: &str,
    echo: Echo,
) -> Option<String> {
    let target = match well_known_url(base, file) {
        Ok(url) => url,
        Err(e) => {
            println!("Could not build URL for {}: {}", file, e);
            return None;
        }
    };

    info!("Fetching: {}", target);

    match fetch_text(client, &target).await {
        Ok(body) => {
            match echo {
                Echo::Full => {
                    println!("{} exists. Contents:\n{}", file, body);
                }
                Echo::Preview(max_chars) => {
                    println!(
                        "{} exists. Contents (first {} characters):\n{}",
                        file,
                        max_chars,
                        preview(&body, max_chars)
                    );
                }
            }
            Some(body)
        }
        Err(FetchError::Status(code)) => {
            println!("{} does not exist or is not accessible. Status code: {}", file, code);
            None
        }
        Err(FetchError::Transport(msg)) => {
            println!("Error while fetching {}: {}", file, msg);
            None
        }
    }
}

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::warn;

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;

/// Fetch a problem page, retrying transient upstream failures with
/// exponential backoff.
///
/// Note the judge is a hash-routed single-page app: the served HTML may lack
/// the rendered problem body, in which case parsing a browser-saved copy is
/// the reliable path.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    for attempt in 0..MAX_RETRIES {
        match fetch_once(client, url).await {
            Ok(body) => return Ok(body),
            Err(e) if is_transient(&e) => {
                let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
                warn!(
                    "Fetch failed for {} (attempt {}/{}), backing off {:.1}s: {}",
                    url,
                    attempt + 1,
                    MAX_RETRIES,
                    backoff.as_secs_f64(),
                    e
                );
                tokio::time::sleep(backoff).await;
            }
            Err(e) => return Err(e),
        }
    }

    fetch_once(client, url).await
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url} failed"))?;

    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("GET {} returned {}", url, status);
    }

    resp.text()
        .await
        .with_context(|| format!("Failed to read body of {url}"))
}

fn is_transient(e: &anyhow::Error) -> bool {
    let msg = e.to_string();
    msg.contains("429")
        || msg.contains("500")
        || msg.contains("502")
        || msg.contains("503")
        || msg.contains("timed out")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_statuses_are_retried() {
        assert!(is_transient(&anyhow::anyhow!("GET x returned 429 Too Many Requests")));
        assert!(is_transient(&anyhow::anyhow!("GET x returned 503 Service Unavailable")));
        assert!(is_transient(&anyhow::anyhow!("operation timed out")));
    }

    #[test]
    fn permanent_failures_are_not() {
        assert!(!is_transient(&anyhow::anyhow!("GET x returned 404 Not Found")));
        assert!(!is_transient(&anyhow::anyhow!("relative URL without a base")));
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use url::Url;

/// Which hostnames this grabber claims and how their problem URLs look.
/// Handed to the parser explicitly so the pipeline carries no process-wide
/// site table.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// hostname → short site code, used as the task group and name prefix.
    pub domains: BTreeMap<String, String>,
    /// Problem-page patterns in glob form, `*` matching any run of characters.
    pub patterns: Vec<String>,
}

impl SiteConfig {
    /// Built-in FortunaOJ configuration.
    pub fn fortuna() -> Self {
        SiteConfig {
            domains: BTreeMap::from([("gmoj.net".to_string(), "GMOJ".to_string())]),
            patterns: vec![
                "https://gmoj.net/*/#contest/show/*/*".to_string(),
                "https://gmoj.net/*/#main/show/*".to_string(),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config {}", path.display()))?;
        let config: SiteConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid site config {}", path.display()))?;
        Ok(config)
    }

    /// Site code for a problem URL, by hostname.
    pub fn code_for_url(&self, url: &str) -> Option<&str> {
        let parsed = Url::parse(url).ok()?;
        let host = parsed.host_str()?;
        self.domains.get(host).map(String::as_str)
    }

    /// Code to fall back to when a URL's hostname is unknown or absent.
    pub fn default_code(&self) -> &str {
        self.domains.values().next().map(String::as_str).unwrap_or("OJ")
    }

    /// Whether `url` matches any configured problem-page pattern.
    pub fn matches_url(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| glob_matches(p, url))
    }
}

fn glob_matches(pattern: &str, url: &str) -> bool {
    let escaped: Vec<String> = pattern.split('*').map(|part| regex::escape(part)).collect();
    let anchored = format!("^{}$", escaped.join(".*"));
    Regex::new(&anchored).map(|re| re.is_match(url)).unwrap_or(false)
}

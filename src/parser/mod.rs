pub mod classify;
pub mod dom;
pub mod samples;
pub mod segment;
pub mod task;

use tracing::info;

use crate::site::SiteConfig;
use dom::PageFacts;
use task::Task;

/// Outcome of one parse invocation.
#[derive(Debug)]
pub struct Parsed {
    pub task: Task,
    /// The page links a direct sample download; the pre blocks may not hold
    /// the complete data, so the user should grab the archive as well.
    pub download_advisory: bool,
    /// Structural oddities worth surfacing: count mismatches, unpaired
    /// blocks, name-resolution misses. Never fatal.
    pub diagnostics: Vec<String>,
}

/// Parse one problem page: DOM facts → per-block segmentation → positional
/// pairing → task assembly. Malformed content degrades (unrecognized lines
/// are dropped, pairing truncates); nothing here returns an error.
pub fn parse_problem(site: &SiteConfig, url: &str, html: &str) -> Parsed {
    let mut diagnostics = Vec::new();

    let facts = PageFacts::collect(html);

    let group = match site.code_for_url(url) {
        Some(code) => code.to_string(),
        None => {
            let fallback = site.default_code().to_string();
            if url.starts_with("http") {
                diagnostics.push(format!(
                    "Hostname of {url} is not in the site table; using {fallback}"
                ));
            }
            fallback
        }
    };

    let (tests, pair_diags) = samples::pair_samples(&facts.sample_blocks);
    diagnostics.extend(pair_diags);
    if tests.is_empty() {
        diagnostics.push("No sample tests recognized on this page".to_string());
    }

    let (name, name_diag) = task::resolve_name(&group, &facts);
    diagnostics.extend(name_diag);

    let download_advisory = facts.download_id.is_some();

    info!("Parsed {}: {} sample tests", name, tests.len());

    Parsed {
        task: Task {
            name,
            group,
            url: url.to_string(),
            tests,
        },
        download_advisory,
        diagnostics,
    }
}

// ── Tests ──

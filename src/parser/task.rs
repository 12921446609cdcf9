use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::dom::PageFacts;

static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// One sample test as the judge tool expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

/// The problem object shipped to local judge tools.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub group: String,
    pub url: String,
    pub tests: Vec<TestCase>,
}

/// Resolve the problem's display name from the collected page hints.
///
/// Priority: the header filename label (minus its ".in" suffix), then the
/// sample-download id when there is no limits link, then the id embedded in
/// the limits link. A page carrying none of the three keeps the bare site
/// code, with a diagnostic.
pub fn resolve_name(site_code: &str, facts: &PageFacts) -> (String, Option<String>) {
    if let Some(label) = &facts.header_filename {
        return (label.replacen(".in", "", 1), None);
    }

    match &facts.limits_href {
        None => match &facts.download_id {
            Some(id) => (format!("{site_code}{id}"), None),
            None => (
                site_code.to_string(),
                Some("No filename label, limits link, or download link found".to_string()),
            ),
        },
        Some(href) => match DIGITS_RE.find(href) {
            Some(m) => (format!("{}{}", site_code, m.as_str()), None),
            None => (
                site_code.to_string(),
                Some(format!("Limits link carries no problem id: {href}")),
            ),
        },
    }
}

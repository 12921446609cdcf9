use std::sync::LazyLock;

use regex::Regex;

use super::classify::is_prose_line;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br\s*/?>").unwrap());

/// Split one pre block's inner markup into logical data segments.
///
/// Lines arrive `<br>`-delimited. A prose line closes the current run (and is
/// itself discarded); consecutive data lines coalesce, each contributing its
/// text plus a newline. A block that is entirely prose yields nothing.
pub fn segment_block(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for line in BR_RE.split(raw) {
        if is_prose_line(line) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Rewrite non-breaking spaces (the U+00A0 character and the literal entity)
/// to ordinary spaces. Sample inputs must match the grader byte for byte.
/// Idempotent.
pub fn normalize_nbsp(text: &str) -> String {
    text.replace('\u{00A0}', " ").replace("&nbsp;", " ")
}

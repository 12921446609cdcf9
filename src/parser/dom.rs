use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

static PRE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("pre:not(.sh_sourceCode)").unwrap());
static FILENAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".label.label-info.header-filename").unwrap());
static LIMITS_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#link_limits").unwrap());
static DOWNLOAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"showdownload/(\d+)").unwrap());

/// Everything the pipeline needs out of one problem page, collected in a
/// single DOM pass: the candidate sample blocks plus the name hints.
#[derive(Debug)]
pub struct PageFacts {
    /// Inner markup of each non-highlighted `pre`, in document order.
    /// Highlighted source listings reuse the tag (class `sh_sourceCode`) and
    /// are never sample data.
    pub sample_blocks: Vec<String>,
    /// Text of the header filename label, e.g. "count.in".
    pub header_filename: Option<String>,
    /// Target of the limits link, which embeds the problem id.
    pub limits_href: Option<String>,
    /// Numeric id of the first sample-download link anywhere in the page.
    pub download_id: Option<String>,
}

impl PageFacts {
    pub fn collect(html: &str) -> Self {
        let doc = Html::parse_document(html);

        let sample_blocks = doc.select(&PRE_SEL).map(|el| el.inner_html()).collect();

        let header_filename = doc
            .select(&FILENAME_SEL)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let limits_href = doc
            .select(&LIMITS_SEL)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string);

        let download_id = DOWNLOAD_RE.captures(html).map(|c| c[1].to_string());

        PageFacts {
            sample_blocks,
            header_filename,
            limits_href,
            download_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_pre_blocks_in_document_order() {
        let html = "<html><body><pre>1 2</pre><p>x</p><pre>3</pre></body></html>";
        let facts = PageFacts::collect(html);
        assert_eq!(facts.sample_blocks, vec!["1 2", "3"]);
    }

    #[test]
    fn highlighted_source_is_excluded() {
        let html = r#"<pre>in</pre><pre class="sh_sourceCode">int main(){}</pre><pre>out</pre>"#;
        let facts = PageFacts::collect(html);
        assert_eq!(facts.sample_blocks, vec!["in", "out"]);
    }

    #[test]
    fn br_markup_survives_inside_blocks() {
        let html = "<pre>5 3<br>7 2</pre>";
        let facts = PageFacts::collect(html);
        assert_eq!(facts.sample_blocks, vec!["5 3<br>7 2"]);
    }

    #[test]
    fn header_filename_label() {
        let html = r#"<span class="label label-info header-filename"> count.in </span>"#;
        let facts = PageFacts::collect(html);
        assert_eq!(facts.header_filename.as_deref(), Some("count.in"));
    }

    #[test]
    fn limits_href_and_download_id() {
        let html = r##"<a id="link_limits" href="#main/limits/3689">限制</a>
                       <a href="#main/showdownload/4102">下载</a>"##;
        let facts = PageFacts::collect(html);
        assert_eq!(facts.limits_href.as_deref(), Some("#main/limits/3689"));
        assert_eq!(facts.download_id.as_deref(), Some("4102"));
    }

    #[test]
    fn absent_hints_are_none() {
        let facts = PageFacts::collect("<html><body><p>nothing here</p></body></html>");
        assert!(facts.sample_blocks.is_empty());
        assert!(facts.header_filename.is_none());
        assert!(facts.limits_href.is_none());
        assert!(facts.download_id.is_none());
    }
}

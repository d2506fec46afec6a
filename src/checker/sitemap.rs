/// Verdict of the sitemap.xml format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapVerdict {
    /// A `<urlset` element was found
    LooksValid,
    /// No `<urlset` element anywhere in the document
    SuspectFormat,
}

/// Check whether the document looks like a sitemap.
///
/// Substring check only, no XML parsing. Sitemap index files
/// (`<sitemapindex>`) carry no `<urlset` root and come back as
/// `SuspectFormat`.
pub fn analyze_sitemap(content: &str) -> SitemapVerdict {
    if content.contains("<urlset") {
        SitemapVerdict::LooksValid
    } else {
        SitemapVerdict::SuspectFormat
    }
}

/// Check and print the verdict for the operator.
pub fn report_sitemap(content: &str) -> SitemapVerdict {
    let verdict = analyze_sitemap(content);
    match verdict {
        SitemapVerdict::LooksValid => {
            println!("sitemap.xml format looks correct.");
        }
        SitemapVerdict::SuspectFormat => {
            println!("Warning: sitemap.xml may not be formatted correctly; check its contents.");
        }
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlset_document_looks_valid() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc></url>
</urlset>"#;
        assert_eq!(analyze_sitemap(content), SitemapVerdict::LooksValid);
    }

    #[test]
    fn test_non_xml_document_is_suspect() {
        assert_eq!(analyze_sitemap("<html><body>404</body></html>"), SitemapVerdict::SuspectFormat);
        assert_eq!(analyze_sitemap(""), SitemapVerdict::SuspectFormat);
    }

    // Index files are real sitemaps, but recognizing them is out of
    // scope; they intentionally read as suspect.
    #[test]
    fn test_sitemapindex_is_flagged_as_suspect() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://example.com/sitemap-1.xml</loc></sitemap>
</sitemapindex>"#;
        assert_eq!(analyze_sitemap(content), SitemapVerdict::SuspectFormat);
    }

    #[test]
    fn test_report_returns_same_verdict() {
        assert_eq!(report_sitemap("<urlset>"), SitemapVerdict::LooksValid);
    }
}

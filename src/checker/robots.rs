/// Verdict of the robots.txt heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsVerdict {
    /// `Disallow: /` seen somewhere in the file
    BlocksEverything,
    /// No `Disallow:` directive at all
    NoRestrictions,
    /// Some `Disallow:` directives, but not a bare `Disallow: /`
    HasRestrictions,
}

/// Classify robots.txt content with literal substring checks.
///
/// First match wins. This is a crude heuristic, not a
/// robots-exclusion-protocol parser: comments, `Allow` overrides and
/// per-agent groups are invisible to it, and an empty `Disallow:` value
/// still counts as a restriction because the directive name is present.
pub fn analyze_robots(content: &str) -> RobotsVerdict {
    if content.contains("Disallow: /") {
        RobotsVerdict::BlocksEverything
    } else if !content.contains("Disallow:") {
        RobotsVerdict::NoRestrictions
    } else {
        RobotsVerdict::HasRestrictions
    }
}

/// Classify and print the verdict for the operator.
pub fn report_robots(content: &str) -> RobotsVerdict {
    let verdict = analyze_robots(content);
    match verdict {
        RobotsVerdict::BlocksEverything => {
            println!("Warning: robots.txt may be blocking all search engine crawlers!");
        }
        RobotsVerdict::NoRestrictions => {
            println!("robots.txt sets no restrictions, which is good.");
        }
        RobotsVerdict::HasRestrictions => {
            println!("robots.txt has some restrictions; review them to make sure they are intended.");
        }
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disallow_slash_blocks_everything() {
        let content = "User-agent: *\nDisallow: /\n";
        assert_eq!(analyze_robots(content), RobotsVerdict::BlocksEverything);
    }

    #[test]
    fn test_disallow_slash_wins_regardless_of_other_content() {
        let content = "# comment\nUser-agent: Googlebot\nAllow: /public\nDisallow: /\nSitemap: https://example.com/sitemap.xml\n";
        assert_eq!(analyze_robots(content), RobotsVerdict::BlocksEverything);
    }

    #[test]
    fn test_no_disallow_means_no_restrictions() {
        let content = "User-agent: *\nSitemap: https://example.com/sitemap.xml\n";
        assert_eq!(analyze_robots(content), RobotsVerdict::NoRestrictions);
    }

    #[test]
    fn test_path_disallow_means_some_restrictions() {
        let content = "User-agent: *\nDisallow:/admin\n";
        assert_eq!(analyze_robots(content), RobotsVerdict::HasRestrictions);
    }

    // The substring check cannot tell "Disallow: /" from
    // "Disallow: /admin"; any path disallow written with a space reads
    // as a full block. Known misclassification of the heuristic.
    #[test]
    fn test_spaced_path_disallow_reads_as_full_block() {
        let content = "User-agent: *\nDisallow: /admin\n";
        assert_eq!(analyze_robots(content), RobotsVerdict::BlocksEverything);
    }

    #[test]
    fn test_empty_file_means_no_restrictions() {
        assert_eq!(analyze_robots(""), RobotsVerdict::NoRestrictions);
    }

    // An empty Disallow value actually permits everything, but the
    // substring heuristic only sees the directive name. Pinned so the
    // branch order never changes silently.
    #[test]
    fn robots_empty_disallow_value_still_counts_as_restriction() {
        let content = "User-agent: *\nDisallow:\n";
        assert_eq!(analyze_robots(content), RobotsVerdict::HasRestrictions);
    }

    #[test]
    fn test_report_returns_same_verdict() {
        assert_eq!(report_robots("Disallow: /"), RobotsVerdict::BlocksEverything);
    }
}

//! core::changelog::document
//!
//! Ordered-line representation of the changelog with cheap structural
//! queries.
//!
//! # Design
//!
//! The document is a flat `Vec<String>` of lines. Structure (sections,
//! heading blocks, entry runs) is never cached: views are computed on demand
//! as `(start, end)` index pairs and discarded once the edit is done. This
//! keeps every query total over arbitrary line sequences - a document this
//! tool did not produce degrades to "no section found", which the merge
//! engine handles by appending a fresh one.
//!
//! Line-ending policy: content is split on line boundaries at parse time and
//! re-joined with `\n` plus exactly one trailing newline at render time, so a
//! parse/render round trip of well-formed content is byte-identical.

/// Prefix that starts a release section line.
const SECTION_PREFIX: &str = "## [";

/// A contiguous span of lines belonging to one release section.
///
/// `header` is the index of the `## [...]` line; `end` is the index one past
/// the last line of the section (the next section header, or document end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub header: usize,
    pub end: usize,
}

/// An ordered sequence of changelog lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Parse file content into lines.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Render the document back to file content.
    ///
    /// Lines are joined with `\n` and a single trailing newline is always
    /// implied, never duplicated.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrow the line at `idx`.
    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    /// Append a line at the end of the document.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Insert a line before index `idx`.
    pub fn insert(&mut self, idx: usize, line: impl Into<String>) {
        self.lines.insert(idx, line.into());
    }

    /// Locate the section whose header line matches `header` exactly.
    ///
    /// Matching is a full-line string comparison: the caller supplies the
    /// canonical `## [X.Y.Z] - YYYY-MM-DD` text and there is no fuzzy
    /// matching of version or date. Returns the first match; the tool never
    /// creates duplicate sections, and pre-existing duplicates from a stale
    /// run are left alone.
    pub fn section(&self, header: &str) -> Option<Section> {
        let idx = self.lines.iter().position(|line| line == header)?;
        Some(Section {
            header: idx,
            end: self.section_end(idx),
        })
    }

    /// Scan forward from just after a section header to the section's end.
    fn section_end(&self, header_idx: usize) -> usize {
        let mut idx = header_idx + 1;
        while idx < self.lines.len() && !self.lines[idx].starts_with(SECTION_PREFIX) {
            idx += 1;
        }
        idx
    }

    /// Locate a `### <Heading>` line inside a section.
    ///
    /// The scan stops at the section boundary, so a heading belonging to a
    /// later section can never match. Heading comparison tolerates
    /// surrounding whitespace. First match wins.
    pub fn heading_in(&self, section: &Section, heading: &str) -> Option<usize> {
        self.lines[section.header + 1..section.end]
            .iter()
            .position(|line| line.trim() == heading)
            .map(|offset| section.header + 1 + offset)
    }

    /// Find the insertion point after the last entry of a heading block.
    ///
    /// Scans forward from the line after the heading while each line is
    /// blank or an entry bullet (`- ` after trimming); returns the first
    /// index that violates that condition. New entries inserted here land
    /// after every existing entry, never before.
    pub fn entry_run_end(&self, heading_idx: usize) -> usize {
        let mut idx = heading_idx + 1;
        while idx < self.lines.len() {
            let trimmed = self.lines[idx].trim();
            if !trimmed.is_empty() && !trimmed.starts_with("- ") {
                break;
            }
            idx += 1;
        }
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Changelog

## [1.8.0] - 2024-12-01
### Added
- **[ Types ]** new List type
- **[ Utils ]** sorting helpers

### Fixed
- **( Scripts )** off-by-one in bump

## [1.7.2] - 2024-10-15
### Fixed
- **[ Types ]** dangling iterator
";

    fn doc() -> Document {
        Document::parse(SAMPLE)
    }

    mod parse_render {
        use super::*;

        #[test]
        fn round_trip_is_byte_identical() {
            assert_eq!(doc().render(), SAMPLE);
        }

        #[test]
        fn render_implies_single_trailing_newline() {
            let without = Document::parse("# Changelog");
            assert_eq!(without.render(), "# Changelog\n");
            // A trailing newline in the input is not duplicated.
            let with = Document::parse("# Changelog\n");
            assert_eq!(with.render(), "# Changelog\n");
        }

        #[test]
        fn empty_content_renders_single_newline() {
            let empty = Document::parse("");
            assert!(empty.is_empty());
            assert_eq!(empty.render(), "\n");
        }
    }

    mod section {
        use super::*;

        #[test]
        fn finds_section_by_exact_header() {
            let d = doc();
            let section = d.section("## [1.8.0] - 2024-12-01").unwrap();
            assert_eq!(section.header, 2);
            // Ends at the 1.7.2 header line.
            assert_eq!(d.line(section.end), "## [1.7.2] - 2024-10-15");
        }

        #[test]
        fn last_section_ends_at_document_end() {
            let d = doc();
            let section = d.section("## [1.7.2] - 2024-10-15").unwrap();
            assert_eq!(section.end, d.len());
        }

        #[test]
        fn no_fuzzy_matching() {
            let d = doc();
            // Same version, different date: not a match.
            assert!(d.section("## [1.8.0] - 2024-12-02").is_none());
            assert!(d.section("## [1.8.0]").is_none());
        }
    }

    mod heading {
        use super::*;

        #[test]
        fn finds_heading_within_section() {
            let d = doc();
            let section = d.section("## [1.8.0] - 2024-12-01").unwrap();
            let idx = d.heading_in(&section, "### Added").unwrap();
            assert_eq!(d.line(idx), "### Added");
        }

        #[test]
        fn heading_of_later_section_never_matches() {
            let d = doc();
            let section = d.section("## [1.8.0] - 2024-12-01").unwrap();
            // "### Fixed" exists in this section too, but check one that
            // exists only below the boundary.
            let later = d.section("## [1.7.2] - 2024-10-15").unwrap();
            assert!(d.heading_in(&section, "### Removed").is_none());
            assert!(d.heading_in(&later, "### Fixed").is_some());
        }

        #[test]
        fn heading_match_tolerates_whitespace() {
            let d = Document::parse("## [1.0.0] - 2025-01-01\n  ### Added  \n- **[ A ]** x\n");
            let section = d.section("## [1.0.0] - 2025-01-01").unwrap();
            assert_eq!(d.heading_in(&section, "### Added"), Some(1));
        }
    }

    mod entry_run {
        use super::*;

        #[test]
        fn run_ends_after_last_entry() {
            let d = doc();
            let section = d.section("## [1.8.0] - 2024-12-01").unwrap();
            let heading = d.heading_in(&section, "### Added").unwrap();
            let end = d.entry_run_end(heading);
            // Two entries plus the separating blank line are consumed; the
            // run stops at "### Fixed".
            assert_eq!(d.line(end), "### Fixed");
        }

        #[test]
        fn run_over_empty_block_is_heading_plus_one() {
            let d = Document::parse("## [1.0.0] - 2025-01-01\n### Added\n### Fixed\n- x\n");
            let section = d.section("## [1.0.0] - 2025-01-01").unwrap();
            let heading = d.heading_in(&section, "### Added").unwrap();
            assert_eq!(d.entry_run_end(heading), heading + 1);
        }

        #[test]
        fn run_at_document_end() {
            let d = doc();
            let section = d.section("## [1.7.2] - 2024-10-15").unwrap();
            let heading = d.heading_in(&section, "### Fixed").unwrap();
            assert_eq!(d.entry_run_end(heading), d.len());
        }
    }
}

//! core::changelog::merge
//!
//! The changelog merge engine.
//!
//! # Design
//!
//! A merge takes one formatted entry plus its (version, date, kind) target
//! and performs the minimal edit that files it correctly. Three insertion
//! cases, evaluated in order, each terminal:
//!
//! 1. No section for (version, date) - append a blank separator, the section
//!    header, the heading, and the entry at the end of the document. Total
//!    over any line sequence, including a freshly created file.
//! 2. Section exists but has no heading block for this kind - insert the
//!    heading plus entry directly after the section header, shifting
//!    existing heading blocks down. Newest kind first is a deterministic
//!    placement that avoids scanning to end-of-section.
//! 3. Section and heading block both exist - insert the entry at the end of
//!    the block's contiguous entry run, preserving arrival order.
//!
//! Merging never fails: structural edits are total, and the worst case falls
//! through to case 1.

use chrono::NaiveDate;

use crate::core::changelog::document::Document;
use crate::core::types::{ChangeKind, Version};

/// One merge operation: where the entry goes and what it says.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub version: Version,
    pub date: NaiveDate,
    pub kind: ChangeKind,
    /// Formatted entry text (module tag + message), without the `- ` bullet.
    pub entry: String,
}

/// Canonical section-header text for a version and date.
///
/// ```
/// use caretaker::core::changelog::section_header;
/// use caretaker::core::types::Version;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(
///     section_header(Version::new(1, 9, 0), date),
///     "## [1.9.0] - 2025-01-01"
/// );
/// ```
pub fn section_header(version: Version, date: NaiveDate) -> String {
    format!("## [{version}] - {}", date.format("%Y-%m-%d"))
}

/// Merge one entry into the document.
pub fn merge(doc: &mut Document, req: &MergeRequest) {
    let header = section_header(req.version, req.date);
    let heading = format!("### {}", req.kind.heading());
    let entry_line = format!("- {}", req.entry);

    let Some(section) = doc.section(&header) else {
        // Case 1: new dated section at the end of the document.
        doc.push("");
        doc.push(header);
        doc.push(heading);
        doc.push(entry_line);
        return;
    };

    match doc.heading_in(&section, &heading) {
        // Case 2: new heading block, first under the section header.
        None => {
            doc.insert(section.header + 1, heading);
            doc.insert(section.header + 2, entry_line);
        }
        // Case 3: append to the existing entry run.
        Some(heading_idx) => {
            doc.insert(doc.entry_run_end(heading_idx), entry_line);
        }
    }
}

//! Markdown formatting for records, pages, reports and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly. Report rows come
//! back from the archive as plain vectors, so they are wrapped in newtypes
//! here that render a markdown table. Result and status wrappers add the
//! confirmation line printed after a write.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │   Markdown      │
//! │  and Reports    │───▶│ Page formatting │───▶│   Output        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for records and import summaries
//! - [`collections`]: Paged listings
//! - [`reports`]: Report table wrappers
//! - [`results`]: Create results
//! - [`status`]: Success and error messages (OperationStatus)
//!
//! ## Usage
//!
//! ```rust
//! use zine_core::display::OperationStatus;
//!
//! let status = OperationStatus::failure("Event with ID 9 not found".to_string());
//! assert_eq!(status.to_string(), "Error: Event with ID 9 not found\n");
//! ```

pub mod collections;
pub mod models;
pub mod reports;
pub mod results;
pub mod status;

pub use reports::{
    LocationTotals, SourceRanking, SourcedEvents, TargetedCounts, Trend, TypeLocations,
    TypeTotals,
};
pub use results::CreateResult;
pub use status::OperationStatus;

use std::fmt;

/// Escapes a value for use inside a markdown table cell.
pub(crate) fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Cell text for an optional value; absent values render empty.
pub(crate) fn opt_cell(value: Option<&str>) -> String {
    value.map(cell).unwrap_or_default()
}

/// Writes a markdown table with a header row.
pub(crate) fn write_table(
    f: &mut fmt::Formatter<'_>,
    headers: &[&str],
    rows: impl IntoIterator<Item = Vec<String>>,
) -> fmt::Result {
    writeln!(f, "| {} |", headers.join(" | "))?;
    writeln!(
        f,
        "|{}|",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    )?;
    for row in rows {
        writeln!(f, "| {} |", row.join(" | "))?;
    }
    Ok(())
}

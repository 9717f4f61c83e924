//! Paged listings of events and publications.

use std::fmt;

use super::{cell, opt_cell, write_table};
use crate::models::{EventListing, Page, Publication};

impl<T> Page<T> {
    fn fmt_footer(&self, f: &mut fmt::Formatter<'_>, noun: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Page {} of {} ({} {noun} total)",
            self.page,
            self.total_pages().max(1),
            self.total_count
        )
    }
}

impl fmt::Display for Page<EventListing> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No events found.")?;
            return self.fmt_footer(f, "events");
        }

        write_table(
            f,
            &["ID", "Title", "Type", "Date", "City", "State", "Country", "Issue"],
            self.items.iter().map(|listing| {
                let event = &listing.event;
                let issue = match (listing.volume, listing.issue_number) {
                    (Some(volume), Some(issue)) => format!("Vol. {volume} No. {issue}"),
                    _ => String::new(),
                };
                vec![
                    event.id.to_string(),
                    cell(&event.title),
                    opt_cell(event.event_type.as_deref()),
                    opt_cell(event.event_date.as_deref()),
                    opt_cell(event.city.as_deref()),
                    opt_cell(event.state.as_deref()),
                    opt_cell(event.country.as_deref()),
                    issue,
                ]
            }),
        )?;
        self.fmt_footer(f, "events")
    }
}

impl fmt::Display for Page<Publication> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No publications found.")?;
            return self.fmt_footer(f, "publications");
        }

        write_table(
            f,
            &["ID", "Title", "Volume", "Issue", "Date", "Author/Org"],
            self.items.iter().map(|publication| {
                vec![
                    publication.id.to_string(),
                    cell(&publication.title),
                    publication.volume.to_string(),
                    publication.issue_number.to_string(),
                    opt_cell(publication.issue_date.as_deref()),
                    opt_cell(publication.author_org.as_deref()),
                ]
            }),
        )?;
        self.fmt_footer(f, "publications")
    }
}

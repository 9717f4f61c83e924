//! Display implementations for domain models.
//!
//! Single records render as a heading followed by a field list; absent and
//! empty fields are left out.

use std::fmt;

use crate::{
    importer::{ImportSummary, ResourceSummary},
    models::{CoverageRatio, EntityKind, Event, Publication, Record},
};

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Event => write!(f, "event"),
            EntityKind::Publication => write!(f, "publication"),
        }
    }
}

/// Writes `- **label**: value` when the value is present and non-empty.
fn field(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => writeln!(f, "- **{label}**: {value}"),
        _ => Ok(()),
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Stored spacing around commas is not preserved
        field(f, "Type", Some(&self.event_types().join(", ")))?;
        field(f, "Date", self.event_date.as_deref())?;
        field(f, "Venue", self.location.as_deref())?;
        field(f, "Address", self.address.as_deref())?;
        field(f, "City", self.city.as_deref())?;
        field(f, "State", self.state.as_deref())?;
        field(f, "Country", self.country.as_deref())?;
        field(f, "Source", self.source_publication.as_deref())?;
        if let Some(id) = self.publication_id {
            writeln!(f, "- **Publication ID**: {id}")?;
        }

        if let Some(desc) = self.description.as_deref().filter(|d| !d.trim().is_empty()) {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- **Volume**: {}", self.volume)?;
        writeln!(f, "- **Issue**: {}", self.issue_number)?;
        field(f, "Date", self.issue_date.as_deref())?;
        field(f, "Volume title", self.volume_title.as_deref())?;
        field(f, "Author/Org", self.author_org.as_deref())?;
        field(f, "Location", self.location.as_deref())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Event(event) => event.fmt(f),
            Record::Publication(publication) => publication.fmt(f),
        }
    }
}

/// Renders as `with_source/total (pp.pp%)`, e.g. `92/308 (29.87%)`.
impl fmt::Display for CoverageRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.2}%)",
            self.with_source,
            self.total,
            self.percentage()
        )
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} publications and {} events.",
            self.publications_imported, self.events_imported
        )?;
        write_warnings(f, &self.warnings)
    }
}

impl fmt::Display for ResourceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Staged {} resources.", self.resources_imported)?;
        write_warnings(f, &self.warnings)
    }
}

fn write_warnings(f: &mut fmt::Formatter<'_>, warnings: &[String]) -> fmt::Result {
    if warnings.is_empty() {
        return Ok(());
    }

    writeln!(f)?;
    writeln!(f, "## Warnings ({})", warnings.len())?;
    writeln!(f)?;
    for warning in warnings {
        writeln!(f, "- {warning}")?;
    }
    Ok(())
}

//! Table wrappers for report rows.

use std::fmt;

use super::{cell, opt_cell, write_table};
use crate::models::{
    LocationCount, SourceCount, SourcedEvent, TargetedCount, TrendPoint, TypeCount,
    TypeLocationCount,
};

/// Events with a real source, as returned by the join report.
#[derive(Debug, Clone)]
pub struct SourcedEvents(pub Vec<SourcedEvent>);

/// Source publications ranked by event count.
#[derive(Debug, Clone)]
pub struct SourceRanking(pub Vec<SourceCount>);

/// Event counts per type.
#[derive(Debug, Clone)]
pub struct TypeTotals(pub Vec<TypeCount>);

/// Per-type counts by year-month.
#[derive(Debug, Clone)]
pub struct Trend(pub Vec<TrendPoint>);

/// Per-type counts by location.
#[derive(Debug, Clone)]
pub struct TypeLocations(pub Vec<TypeLocationCount>);

/// Event counts by location.
#[derive(Debug, Clone)]
pub struct LocationTotals(pub Vec<LocationCount>);

/// Advertisement and protest-report counts by issue and city.
#[derive(Debug, Clone)]
pub struct TargetedCounts(pub Vec<TargetedCount>);

fn optional_number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

impl fmt::Display for SourcedEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events name a source publication.");
        }
        write_table(
            f,
            &["Title", "Type", "Date", "Source", "Volume", "Issue"],
            self.0.iter().map(|row| {
                vec![
                    cell(&row.title),
                    opt_cell(row.event_type.as_deref()),
                    opt_cell(row.event_date.as_deref()),
                    cell(&row.source_publication),
                    optional_number(row.volume),
                    optional_number(row.issue_number),
                ]
            }),
        )
    }
}

impl fmt::Display for SourceRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events name a source publication.");
        }
        write_table(
            f,
            &["Source", "Events"],
            self.0
                .iter()
                .map(|row| vec![cell(&row.source_publication), row.count.to_string()]),
        )
    }
}

impl fmt::Display for TypeTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No event types recorded.");
        }
        write_table(
            f,
            &["Type", "Events"],
            self.0
                .iter()
                .map(|row| vec![cell(&row.event_type), row.count.to_string()]),
        )
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No event types recorded.");
        }
        write_table(
            f,
            &["Month", "Type", "Events"],
            self.0.iter().map(|row| {
                vec![
                    row.month.clone().unwrap_or_else(|| "unknown".to_string()),
                    cell(&row.event_type),
                    row.count.to_string(),
                ]
            }),
        )
    }
}

impl fmt::Display for TypeLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No event types recorded.");
        }
        write_table(
            f,
            &["Type", "Location", "Events"],
            self.0.iter().map(|row| {
                vec![
                    cell(&row.event_type),
                    cell(&row.location),
                    row.count.to_string(),
                ]
            }),
        )
    }
}

impl fmt::Display for LocationTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events recorded.");
        }
        write_table(
            f,
            &["Location", "Events"],
            self.0
                .iter()
                .map(|row| vec![cell(&row.location), row.count.to_string()]),
        )
    }
}

impl fmt::Display for TargetedCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching events in the selected cities.");
        }
        write_table(
            f,
            &[
                "Publication",
                "Volume",
                "Issue",
                "City",
                "Event Advertisements",
                "Protest Reports",
            ],
            self.0.iter().map(|row| {
                vec![
                    cell(&row.publication_title),
                    row.volume.to_string(),
                    row.issue_number.to_string(),
                    cell(&row.city),
                    row.event_advertisements.to_string(),
                    row.protest_reports.to_string(),
                ]
            }),
        )
    }
}

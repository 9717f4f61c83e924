//! Row types produced by the report queries.

use serde::Serialize;

/// An event with a real source publication, joined to its issue.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SourcedEvent {
    pub title: String,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub source_publication: String,
    pub volume: Option<i64>,
    pub issue_number: Option<i64>,
}

/// Number of events attributed to one source publication.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceCount {
    pub source_publication: String,
    pub count: u64,
}

/// Share of events that name a real source publication.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CoverageRatio {
    /// Events with a non-empty, non-"NA" source publication
    pub with_source: u64,

    /// All events
    pub total: u64,
}

impl CoverageRatio {
    /// Fraction in `[0, 1]`; zero when there are no events.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.with_source as f64 / self.total as f64
        }
    }

    /// Percentage rounded to two decimals.
    pub fn percentage(&self) -> f64 {
        (self.ratio() * 10_000.0).round() / 100.0
    }
}

/// Number of events carrying one event type.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TypeCount {
    pub event_type: String,
    pub count: u64,
}

/// Events of one type within one year-month bucket.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub event_type: String,

    /// `YYYY-MM`, or `None` when the event date could not be parsed
    pub month: Option<String>,

    pub count: u64,
}

/// Events of one type at one composed location.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TypeLocationCount {
    pub event_type: String,
    pub location: String,
    pub count: u64,
}

/// Events at one composed location.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LocationCount {
    pub location: String,
    pub count: u64,
}

/// Advertisement and protest-report counts for one issue and city.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TargetedCount {
    pub publication_title: String,
    pub volume: i64,
    pub issue_number: i64,
    pub city: String,
    pub event_advertisements: u64,
    pub protest_reports: u64,
}

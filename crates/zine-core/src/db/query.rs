//! Parameterized query construction for filtered, sorted, paginated listings.
//!
//! Filter values only ever travel as bound parameters. Column names and sort
//! directions come from the closed [`EventSort`], [`PublicationSort`] and
//! [`SortOrder`] enums, never from caller text.

use rusqlite::ToSql;

use super::rows::PUBLICATION_COLUMNS;
use crate::models::{
    EventFilter, EventSort, PublicationFilter, PublicationSort, SortOrder, PAGE_SIZE,
};

/// Accumulates `WHERE` conditions and their bound values.
#[derive(Default)]
pub struct Conditions {
    clauses: Vec<&'static str>,
    values: Vec<Box<dyn ToSql>>,
}

impl Conditions {
    /// Adds a condition with no bound values.
    pub fn push_fixed(&mut self, clause: &'static str) {
        self.clauses.push(clause);
    }

    /// Adds a condition with one bound value per `?` in the clause.
    pub fn push(&mut self, clause: &'static str, values: Vec<Box<dyn ToSql>>) {
        self.clauses.push(clause);
        self.values.extend(values);
    }

    /// Renders ` WHERE a AND b`, or an empty string when unfiltered.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Borrowed view of the bound values, in clause order.
    pub fn values(&self) -> Vec<&dyn ToSql> {
        self.values.iter().map(|b| &**b).collect()
    }
}

/// Returns the trimmed filter value, or `None` when it is absent or blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Wraps a value in `%…%` for a substring `LIKE`, escaping wildcards.
pub fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

const EVENT_FROM: &str = "FROM events e LEFT JOIN publications p ON e.publication_id = p.pub_id";

const EVENT_LISTING_COLUMNS: &str = "e.event_id, e.publication_id, e.event_title, e.event_type, \
    e.event_date, e.location, e.address, e.city, e.state, e.country, e.description, \
    e.source_publication, p.pub_title, p.volume, p.issue_number";

/// Builds the conditions shared by the event page and count queries.
pub fn event_conditions(filter: &EventFilter) -> Conditions {
    let mut conditions = Conditions::default();

    // Untitled events are never listed
    conditions.push_fixed("e.event_title IS NOT NULL AND TRIM(e.event_title) != ''");

    if let Some(search) = present(&filter.search) {
        let pattern = like_pattern(search);
        conditions.push(
            "(e.event_title LIKE ? ESCAPE '\\' OR e.description LIKE ? ESCAPE '\\')",
            vec![Box::new(pattern.clone()), Box::new(pattern)],
        );
    }

    if let Some(event_type) = present(&filter.event_type) {
        conditions.push("e.event_type = ?", vec![Box::new(event_type.to_string())]);
    }

    if let Some(city) = present(&filter.city) {
        conditions.push("e.city LIKE ? ESCAPE '\\'", vec![Box::new(like_pattern(city))]);
    }

    if let Some(state) = present(&filter.state) {
        conditions.push("e.state LIKE ? ESCAPE '\\'", vec![Box::new(like_pattern(state))]);
    }

    if let Some(country) = present(&filter.country) {
        conditions.push(
            "e.country LIKE ? ESCAPE '\\'",
            vec![Box::new(like_pattern(country))],
        );
    }

    conditions
}

/// Page query for events; binds the conditions followed by `LIMIT`/`OFFSET`.
pub fn event_page_sql(conditions: &Conditions, sort: EventSort, order: SortOrder) -> String {
    format!(
        "SELECT {EVENT_LISTING_COLUMNS} {EVENT_FROM}{} ORDER BY {} {} LIMIT {PAGE_SIZE} OFFSET ?",
        conditions.where_clause(),
        sort.column(),
        order.as_sql(),
    )
}

/// Count query for events, identical in filtering to [`event_page_sql`].
pub fn event_count_sql(conditions: &Conditions) -> String {
    format!("SELECT COUNT(*) {EVENT_FROM}{}", conditions.where_clause())
}

/// Builds the conditions shared by the publication page and count queries.
pub fn publication_conditions(filter: &PublicationFilter) -> Conditions {
    let mut conditions = Conditions::default();

    if let Some(search) = present(&filter.search) {
        let pattern = like_pattern(search);
        conditions.push(
            "(pub_title LIKE ? ESCAPE '\\' OR volume_title LIKE ? ESCAPE '\\' \
             OR author_org LIKE ? ESCAPE '\\')",
            vec![
                Box::new(pattern.clone()),
                Box::new(pattern.clone()),
                Box::new(pattern),
            ],
        );
    }

    conditions
}

/// Page query for publications; binds the conditions followed by `OFFSET`.
pub fn publication_page_sql(
    conditions: &Conditions,
    sort: PublicationSort,
    order: SortOrder,
) -> String {
    format!(
        "SELECT {PUBLICATION_COLUMNS} FROM publications{} ORDER BY {} {} LIMIT {PAGE_SIZE} OFFSET ?",
        conditions.where_clause(),
        sort.column(),
        order.as_sql(),
    )
}

/// Count query for publications.
pub fn publication_count_sql(conditions: &Conditions) -> String {
    format!("SELECT COUNT(*) FROM publications{}", conditions.where_clause())
}

//! Read-only aggregate queries behind the reports.
//!
//! Grouped counts that do not involve event-type splitting run in SQL. The
//! type-split reports fetch the raw columns and tally them with the helpers in
//! [`crate::reports`].

use rusqlite::{params_from_iter, Row};

use super::rows::lenient_text;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{
        event::compose_location, CoverageRatio, LocationCount, SourceCount, SourcedEvent,
        TargetedCount, TrendPoint, TypeCount, TypeLocationCount,
    },
    reports::{tally_trend, tally_type_locations, tally_types},
};

/// An event names a real source when the column is non-empty and not `NA`.
const HAS_SOURCE: &str = "e.source_publication IS NOT NULL \
    AND TRIM(e.source_publication) != '' AND e.source_publication != 'NA'";

const LOCATION_EXPR: &str =
    "COALESCE(city, '') || ', ' || COALESCE(state, '') || ', ' || COALESCE(country, '')";

fn count_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

impl super::Database {
    /// Runs a query and collects every mapped row.
    fn collect_rows<T, P, F>(&self, sql: &str, params: P, map: F, context: &str) -> Result<Vec<T>>
    where
        P: rusqlite::Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare report query")?;

        let rows = stmt
            .query_map(params, map)
            .db_context(context)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context(context)?;
        Ok(rows)
    }

    /// Events with a real source publication, joined to their issue and
    /// ordered by event date.
    pub fn sourced_events(&self) -> Result<Vec<SourcedEvent>> {
        let sql = format!(
            "SELECT e.event_title, e.event_type, e.event_date, e.source_publication, \
             p.volume, p.issue_number \
             FROM events e LEFT JOIN publications p ON e.publication_id = p.pub_id \
             WHERE {HAS_SOURCE} ORDER BY e.event_date, e.event_id"
        );
        self.collect_rows(
            &sql,
            [],
            |row| {
                Ok(SourcedEvent {
                    title: row.get(0)?,
                    event_type: row.get(1)?,
                    event_date: lenient_text(row, 2)?,
                    source_publication: row.get(3)?,
                    volume: row.get(4)?,
                    issue_number: row.get(5)?,
                })
            },
            "Failed to query sourced events",
        )
    }

    /// Event counts per source publication, largest first.
    pub fn source_ranking(&self) -> Result<Vec<SourceCount>> {
        let sql = format!(
            "SELECT e.source_publication, COUNT(*) AS n FROM events e WHERE {HAS_SOURCE} \
             GROUP BY e.source_publication ORDER BY n DESC, e.source_publication"
        );
        self.collect_rows(
            &sql,
            [],
            |row| {
                Ok(SourceCount {
                    source_publication: row.get(0)?,
                    count: count_from_row(row, 1)?,
                })
            },
            "Failed to rank source publications",
        )
    }

    /// Events with a real source publication against all events.
    pub fn coverage_ratio(&self) -> Result<CoverageRatio> {
        let sql = format!(
            "SELECT COALESCE(SUM(CASE WHEN {HAS_SOURCE} THEN 1 ELSE 0 END), 0), COUNT(*) \
             FROM events e"
        );
        self.connection
            .query_row(&sql, [], |row| {
                Ok(CoverageRatio {
                    with_source: count_from_row(row, 0)?,
                    total: count_from_row(row, 1)?,
                })
            })
            .db_context("Failed to compute coverage ratio")
    }

    /// Event counts per individual category, with multi-type values split.
    pub fn event_type_totals(&self) -> Result<Vec<TypeCount>> {
        let types: Vec<Option<String>> = self.collect_rows(
            "SELECT event_type FROM events",
            [],
            |row| row.get(0),
            "Failed to query event types",
        )?;
        Ok(tally_types(types.iter().map(Option::as_deref)))
    }

    /// Event counts grouped by the stored `event_type` value as-is.
    pub fn event_type_totals_raw(&self) -> Result<Vec<TypeCount>> {
        self.collect_rows(
            "SELECT COALESCE(event_type, ''), COUNT(*) AS n FROM events \
             GROUP BY event_type ORDER BY n DESC, event_type",
            [],
            |row| {
                Ok(TypeCount {
                    event_type: row.get(0)?,
                    count: count_from_row(row, 1)?,
                })
            },
            "Failed to count event types",
        )
    }

    /// Split event-type counts per year-month of the event date.
    pub fn type_trend(&self) -> Result<Vec<TrendPoint>> {
        let rows: Vec<(Option<String>, Option<String>)> = self.collect_rows(
            "SELECT event_type, event_date FROM events",
            [],
            |row| Ok((row.get(0)?, lenient_text(row, 1)?)),
            "Failed to query event dates",
        )?;
        Ok(tally_trend(
            rows.iter()
                .map(|(types, date)| (types.as_deref(), date.as_deref())),
        ))
    }

    /// Split event-type counts per composed `"city, state, country"` label.
    pub fn type_location_counts(&self) -> Result<Vec<TypeLocationCount>> {
        let rows: Vec<(Option<String>, String)> = self.collect_rows(
            "SELECT event_type, city, state, country FROM events",
            [],
            |row| {
                let city: Option<String> = row.get(1)?;
                let state: Option<String> = row.get(2)?;
                let country: Option<String> = row.get(3)?;
                let location =
                    compose_location(city.as_deref(), state.as_deref(), country.as_deref());
                Ok((row.get(0)?, location))
            },
            "Failed to query event locations",
        )?;
        Ok(tally_type_locations(
            rows.iter()
                .map(|(types, location)| (types.as_deref(), location.clone())),
        ))
    }

    /// Event counts per composed location label.
    pub fn location_totals(&self) -> Result<Vec<LocationCount>> {
        self.collect_rows(
            &format!(
                "SELECT {LOCATION_EXPR} AS label, COUNT(*) AS n FROM events \
                 GROUP BY label ORDER BY n DESC, label"
            ),
            [],
            |row| {
                Ok(LocationCount {
                    location: row.get(0)?,
                    count: count_from_row(row, 1)?,
                })
            },
            "Failed to count event locations",
        )
    }

    /// Event advertisements and protest reports per issue, restricted to the
    /// given cities.
    ///
    /// Categories match by substring so multi-type values count toward every
    /// category they contain. An empty city list yields no rows.
    pub fn targeted_counts(&self, cities: &[String]) -> Result<Vec<TargetedCount>> {
        if cities.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; cities.len()].join(", ");
        let sql = format!(
            "SELECT p.pub_title, p.volume, p.issue_number, e.city, \
             SUM(CASE WHEN e.event_type LIKE '%Event Advertisement%' THEN 1 ELSE 0 END), \
             SUM(CASE WHEN e.event_type LIKE '%Protest Report%' THEN 1 ELSE 0 END) \
             FROM events e INNER JOIN publications p ON e.publication_id = p.pub_id \
             WHERE (e.event_type LIKE '%Event Advertisement%' \
                    OR e.event_type LIKE '%Protest Report%') \
             AND e.city IN ({placeholders}) \
             GROUP BY p.pub_id, p.pub_title, p.volume, p.issue_number, e.city \
             ORDER BY p.volume, p.issue_number, p.pub_id, e.city"
        );

        self.collect_rows(
            &sql,
            params_from_iter(cities.iter()),
            |row| {
                Ok(TargetedCount {
                    publication_title: row.get(0)?,
                    volume: row.get(1)?,
                    issue_number: row.get(2)?,
                    city: row.get(3)?,
                    event_advertisements: count_from_row(row, 4)?,
                    protest_reports: count_from_row(row, 5)?,
                })
            },
            "Failed to run targeted report",
        )
    }
}

//! Aggregation helpers for the report queries.
//!
//! Stored `event_type` values are comma-separated lists. Every type-split
//! report counts each trimmed category independently, so an event typed
//! `"Protest, March"` adds one to `Protest` and one to `March`. The plain
//! grouped count ([`crate::Database::event_type_totals_raw`]) does not split and
//! therefore gives different totals whenever multi-type rows exist.

use std::{collections::HashMap, hash::Hash};

use jiff::civil::Date;

use crate::models::{
    event::split_event_types, TrendPoint, TypeCount, TypeLocationCount,
};

/// Year-month bucket (`YYYY-MM`) of a stored date, or `None` if unparseable.
///
/// Anything after the first ten characters (a time of day, say) is ignored.
pub fn month_bucket(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let day_part = raw.get(..10).unwrap_or(raw);
    day_part
        .parse::<Date>()
        .ok()
        .map(|date| date.strftime("%Y-%m").to_string())
}

/// Counts keys and orders them by descending count, then ascending key.
fn ranked<K: Hash + Eq + Ord>(keys: impl IntoIterator<Item = K>) -> Vec<(K, u64)> {
    let mut counts: HashMap<K, u64> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    let mut ranked: Vec<(K, u64)> = counts.into_iter().collect();
    ranked.sort_by(|(a_key, a), (b_key, b)| b.cmp(a).then_with(|| a_key.cmp(b_key)));
    ranked
}

/// Type-split totals over raw `event_type` values.
pub fn tally_types<'a>(types: impl IntoIterator<Item = Option<&'a str>>) -> Vec<TypeCount> {
    let tokens = types
        .into_iter()
        .flatten()
        .flat_map(split_event_types)
        .map(str::to_string);

    ranked(tokens)
        .into_iter()
        .map(|(event_type, count)| TypeCount { event_type, count })
        .collect()
}

/// Type-split counts per year-month, ordered by month then type.
pub fn tally_trend<'a>(
    rows: impl IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
) -> Vec<TrendPoint> {
    let keys = rows.into_iter().flat_map(|(types, date)| {
        let month = date.and_then(month_bucket);
        types
            .map(split_event_types)
            .unwrap_or_default()
            .into_iter()
            .map(move |t| (month.clone(), t.to_string()))
    });

    let mut points: Vec<TrendPoint> = ranked(keys)
        .into_iter()
        .map(|((month, event_type), count)| TrendPoint {
            event_type,
            month,
            count,
        })
        .collect();
    points.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then_with(|| a.event_type.cmp(&b.event_type))
    });
    points
}

/// Type-split counts per composed location, descending by count.
pub fn tally_type_locations<'a>(
    rows: impl IntoIterator<Item = (Option<&'a str>, String)>,
) -> Vec<TypeLocationCount> {
    let keys = rows.into_iter().flat_map(|(types, location)| {
        types
            .map(split_event_types)
            .unwrap_or_default()
            .into_iter()
            .map(move |t| (t.to_string(), location.clone()))
    });

    ranked(keys)
        .into_iter()
        .map(|((event_type, location), count)| TypeLocationCount {
            event_type,
            location,
            count,
        })
        .collect()
}

//! Report operations. All are read-only.

use super::Archive;
use crate::{
    error::Result,
    models::{
        CoverageRatio, LocationCount, SourceCount, SourcedEvent, TargetedCount, TrendPoint,
        TypeCount, TypeLocationCount,
    },
    params::TargetedReport,
};

impl Archive {
    /// Events naming a real source publication, joined to their issue.
    pub async fn sourced_events(&self) -> Result<Vec<SourcedEvent>> {
        self.with_database(|db| db.sourced_events()).await
    }

    /// Event counts per source publication, largest first.
    pub async fn source_ranking(&self) -> Result<Vec<SourceCount>> {
        self.with_database(|db| db.source_ranking()).await
    }

    /// Share of events naming a real source publication.
    pub async fn coverage(&self) -> Result<CoverageRatio> {
        self.with_database(|db| db.coverage_ratio()).await
    }

    /// Totals per individual event type. With `split` false the stored values
    /// are grouped as-is instead.
    pub async fn event_type_totals(&self, split: bool) -> Result<Vec<TypeCount>> {
        self.with_database(move |db| {
            if split {
                db.event_type_totals()
            } else {
                db.event_type_totals_raw()
            }
        })
        .await
    }

    /// Per-type counts bucketed by year-month.
    pub async fn type_trend(&self) -> Result<Vec<TrendPoint>> {
        self.with_database(|db| db.type_trend()).await
    }

    /// Per-type counts at each composed location.
    pub async fn type_locations(&self) -> Result<Vec<TypeLocationCount>> {
        self.with_database(|db| db.type_location_counts()).await
    }

    /// Event counts at each composed location.
    pub async fn location_totals(&self) -> Result<Vec<LocationCount>> {
        self.with_database(|db| db.location_totals()).await
    }

    /// Advertisement and protest-report counts per issue in the given cities.
    pub async fn targeted(&self, params: &TargetedReport) -> Result<Vec<TargetedCount>> {
        let cities: Vec<String> = params
            .cities
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        self.with_database(move |db| db.targeted_counts(&cities))
            .await
    }
}

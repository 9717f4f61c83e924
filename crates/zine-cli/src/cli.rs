//! Command handlers
//!
//! Each handler calls the archive and renders the result as markdown, or as
//! JSON for `report --json`. Create and update failures are shown as an
//! `Error:` line and the command still succeeds; only a store that cannot be
//! opened ends the process with an error.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::json;
use zine_core::{
    display::{
        CreateResult, LocationTotals, OperationStatus, SourceRanking, SourcedEvents,
        TargetedCounts, Trend, TypeLocations, TypeTotals,
    },
    params::{PurgeEvents, RenameEventType},
    models::EntityKind,
    Archive, ListEvents,
};

use crate::{
    args::{CleanCommands, EventCommands, PublicationCommands, ReportCommands, ResourceCommands},
    renderer::TerminalRenderer,
};

const EVENT_LIST_HINT: &str = "Run `zines event list` to see all events.";
const PUBLICATION_LIST_HINT: &str = "Run `zines publication list` to see all publications.";

/// Binds the archive to the renderer for one invocation.
pub struct Cli {
    archive: Archive,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(archive: Archive, renderer: TerminalRenderer) -> Self {
        Self { archive, renderer }
    }

    /// Creates the schema, or drops and recreates it.
    pub async fn init(&self, reset: bool) -> Result<()> {
        if reset {
            self.archive
                .reset()
                .await
                .context("Failed to reset database")?;
            warn!("All tables dropped and recreated");
        }
        self.renderer.render_display(&OperationStatus::success(format!(
            "Database ready at {}",
            self.archive.database_path().display()
        )))
    }

    pub async fn import(&self, files: zine_core::ImportFiles) -> Result<()> {
        let summary = self
            .archive
            .import(&files)
            .await
            .context("Import failed")?;
        self.renderer.render_display(&summary)
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::List(args) => self.list_events(&args.into()).await,
            EventCommands::Add(args) => {
                let result = self.archive.create_event(&args.into()).await;
                self.render_create(result.map(CreateResult::new), EVENT_LIST_HINT)
            }
        }
    }

    pub async fn handle_publication_command(&self, command: PublicationCommands) -> Result<()> {
        match command {
            PublicationCommands::List(args) => {
                let page = self
                    .archive
                    .list_publications(&args.into())
                    .await
                    .context("Failed to list publications")?;
                self.renderer.render_display(&page)
            }
            PublicationCommands::Add(args) => {
                let result = self.archive.create_publication(&args.into()).await;
                self.render_create(result.map(CreateResult::new), PUBLICATION_LIST_HINT)
            }
        }
    }

    pub async fn list_events(&self, params: &ListEvents) -> Result<()> {
        let page = self
            .archive
            .list_events(params)
            .await
            .context("Failed to list events")?;
        self.renderer.render_display(&page)
    }

    pub async fn show(&self, params: zine_core::FetchRecord) -> Result<()> {
        let record = self
            .archive
            .fetch(&params)
            .await
            .context("Failed to fetch record")?;
        self.renderer.render_display(&record)
    }

    pub async fn edit(&self, params: zine_core::UpdateRecord) -> Result<()> {
        debug!(
            "Updating {} {} with {} fields",
            params.entity_type,
            params.id,
            params.fields.len()
        );
        let status = self
            .archive
            .update_status(&params)
            .await
            .context("Failed to open database")?;
        self.renderer.render_display(&status)?;
        self.renderer
            .render(&format!("\n{}\n", list_hint(&params.entity_type)))
    }

    /// Renders a created record, or the failure as a status line.
    fn render_create<T>(&self, result: zine_core::Result<T>, hint: &str) -> Result<()>
    where
        T: std::fmt::Display,
    {
        match result {
            Ok(created) => self.renderer.render_display(&created)?,
            Err(e) if e.is_fatal() => return Err(e).context("Failed to open database"),
            Err(e) => {
                warn!("Create failed: {e}");
                self.renderer
                    .render_display(&OperationStatus::failure(e.to_string()))?;
            }
        }
        self.renderer.render(&format!("\n{hint}\n"))
    }

    pub async fn handle_report_command(&self, command: ReportCommands, as_json: bool) -> Result<()> {
        let archive = &self.archive;
        match command {
            ReportCommands::Sources => {
                let rows = archive.sourced_events().await.context("Report failed")?;
                self.emit(as_json, serde_json::to_value(&rows)?, move || {
                    SourcedEvents(rows).to_string()
                })
            }
            ReportCommands::Ranking => {
                let rows = archive.source_ranking().await.context("Report failed")?;
                self.emit(as_json, serde_json::to_value(&rows)?, move || {
                    SourceRanking(rows).to_string()
                })
            }
            ReportCommands::Coverage => {
                let coverage = archive.coverage().await.context("Report failed")?;
                let value = json!({
                    "with_source": coverage.with_source,
                    "total": coverage.total,
                    "percentage": coverage.percentage(),
                });
                self.emit(as_json, value, || format!("Coverage: {coverage}\n"))
            }
            ReportCommands::Types { raw } => {
                let rows = archive
                    .event_type_totals(!raw)
                    .await
                    .context("Report failed")?;
                self.emit(as_json, serde_json::to_value(&rows)?, move || {
                    TypeTotals(rows).to_string()
                })
            }
            ReportCommands::Trend => {
                let rows = archive.type_trend().await.context("Report failed")?;
                self.emit(as_json, serde_json::to_value(&rows)?, move || {
                    Trend(rows).to_string()
                })
            }
            ReportCommands::Locations => {
                let by_type = archive.type_locations().await.context("Report failed")?;
                let totals = archive.location_totals().await.context("Report failed")?;
                let value = json!({ "by_type": by_type, "totals": totals });
                self.emit(as_json, value, move || {
                    format!(
                        "## Events by type and location\n\n{}\n## Events by location\n\n{}",
                        TypeLocations(by_type),
                        LocationTotals(totals)
                    )
                })
            }
            ReportCommands::Targeted(args) => {
                let rows = archive
                    .targeted(&args.into())
                    .await
                    .context("Report failed")?;
                self.emit(as_json, serde_json::to_value(&rows)?, move || {
                    TargetedCounts(rows).to_string()
                })
            }
        }
    }

    /// Prints `value` as JSON, or the markdown built by `markdown`.
    fn emit<F>(&self, as_json: bool, value: serde_json::Value, markdown: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        if as_json {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        } else {
            self.renderer.render(&markdown())
        }
    }

    pub async fn handle_resource_command(&self, command: ResourceCommands) -> Result<()> {
        match command {
            ResourceCommands::Import(args) => {
                let summary = self
                    .archive
                    .import_resources(&args.into())
                    .await
                    .context("Resource import failed")?;
                self.renderer.render_display(&summary)
            }
            ResourceCommands::Migrate(args) => {
                let params = args.into();
                let moved = self
                    .archive
                    .migrate_resources(&params)
                    .await
                    .context("Resource migration failed")?;
                self.renderer.render_display(&OperationStatus::success(format!(
                    "Moved {moved} resources into events"
                )))
            }
        }
    }

    pub async fn handle_clean_command(&self, command: CleanCommands) -> Result<()> {
        let message = match command {
            CleanCommands::Purge { from, to } => {
                let deleted = self
                    .archive
                    .purge_events(&PurgeEvents { from, to })
                    .await
                    .context("Purge failed")?;
                format!("Deleted {deleted} events with IDs {from} to {to}")
            }
            CleanCommands::Dedupe => {
                let deleted = self
                    .archive
                    .dedupe_events()
                    .await
                    .context("Dedupe failed")?;
                format!("Deleted {deleted} duplicate events")
            }
            CleanCommands::Retype { from, to } => {
                let renamed = self
                    .archive
                    .rename_event_type(&RenameEventType {
                        from: from.clone(),
                        to: to.clone(),
                    })
                    .await
                    .context("Rename failed")?;
                format!("Renamed '{from}' to '{to}' on {renamed} events")
            }
        };
        self.renderer
            .render_display(&OperationStatus::success(message))
    }
}

/// Listing hint for a record type as typed on the command line. Unknown types
/// fall back to the event listing.
fn list_hint(entity_type: &str) -> &'static str {
    match entity_type.parse::<EntityKind>() {
        Ok(EntityKind::Publication) => PUBLICATION_LIST_HINT,
        Ok(EntityKind::Event) | Err(_) => EVENT_LIST_HINT,
    }
}

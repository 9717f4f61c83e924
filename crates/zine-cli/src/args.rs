//! Command-line interface definitions using clap
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From` impls:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Archive
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use zine_core::{
    models::{EventFilter, EventSort, PublicationFilter, PublicationSort, SortOrder},
    params::{
        CreateEvent, CreatePublication, FetchRecord, ImportFiles, ImportResources, ListEvents,
        ListPublications, MigrateResources, TargetedReport, UpdateRecord,
    },
};

/// Archive of zine publications and the events they reported
///
/// Stores publications (issues) and events in a local SQLite database,
/// imports them from CSV, and runs the frequency, coverage, trend and
/// location reports over them.
#[derive(Parser)]
#[command(version, about, name = "zines")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/zines/zines.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the first page of events is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the database schema, or drop and recreate it with --reset
    Init {
        /// Drop every table first. All stored records are lost
        #[arg(long)]
        reset: bool,
    },
    /// Import publications and events from CSV files
    Import(ImportArgs),
    /// List and add events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// List and add publications
    #[command(alias = "p")]
    Publication {
        #[command(subcommand)]
        command: PublicationCommands,
    },
    /// Show one record
    Show(ShowArgs),
    /// Update one record; blank and omitted text fields are stored as NA
    Edit(EditArgs),
    /// Run a report
    #[command(alias = "r")]
    Report {
        /// Print rows as JSON instead of a table
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Stage resources and move them into events
    Resources {
        #[command(subcommand)]
        command: ResourceCommands,
    },
    /// Clean imported events
    Clean {
        #[command(subcommand)]
        command: CleanCommands,
    },
}

/// Import publications and events
#[derive(ClapArgs)]
pub struct ImportArgs {
    /// Publications CSV (pub_title, volume, issue_number, issue_year, ...)
    pub publications: PathBuf,
    /// Events CSV (event_title, event_type, event_year, ...)
    pub events: PathBuf,
}

impl From<ImportArgs> for ImportFiles {
    fn from(val: ImportArgs) -> Self {
        ImportFiles {
            publications: val.publications,
            events: val.events,
        }
    }
}

/// Search and list events
#[derive(ClapArgs)]
pub struct ListEventsArgs {
    /// Substring matched against title and description
    #[arg(short, long)]
    pub search: Option<String>,
    /// Exact event type
    #[arg(short = 't', long = "type")]
    pub event_type: Option<String>,
    /// Substring of the city
    #[arg(long)]
    pub city: Option<String>,
    /// Substring of the state
    #[arg(long)]
    pub state: Option<String>,
    /// Substring of the country
    #[arg(long)]
    pub country: Option<String>,
    /// Sort column: id, title, date, type, city, state, country or source
    #[arg(long, default_value = "id")]
    pub sort: EventSort,
    /// Sort order: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl From<ListEventsArgs> for ListEvents {
    fn from(val: ListEventsArgs) -> Self {
        ListEvents {
            filter: EventFilter {
                search: val.search,
                event_type: val.event_type,
                city: val.city,
                state: val.state,
                country: val.country,
            },
            sort: val.sort,
            order: val.order,
            page: val.page,
        }
    }
}

/// Add an event
#[derive(ClapArgs)]
pub struct AddEventArgs {
    /// Title of the event
    pub title: String,
    /// ID of the publication that reported the event
    #[arg(long)]
    pub publication_id: Option<u64>,
    /// Event type; separate several with commas
    #[arg(short = 't', long = "type")]
    pub event_type: Option<String>,
    /// Event date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Venue name
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Name of the reporting source
    #[arg(long)]
    pub source: Option<String>,
}

impl From<AddEventArgs> for CreateEvent {
    fn from(val: AddEventArgs) -> Self {
        CreateEvent {
            title: val.title,
            publication_id: val.publication_id,
            event_type: val.event_type,
            event_date: val.date,
            location: val.location,
            address: val.address,
            city: val.city,
            state: val.state,
            country: val.country,
            description: val.description,
            source_publication: val.source,
        }
    }
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Search and list events, ten per page
    #[command(alias = "ls")]
    List(ListEventsArgs),
    /// Add an event
    Add(AddEventArgs),
}

/// Search and list publications
#[derive(ClapArgs)]
pub struct ListPublicationsArgs {
    /// Substring matched against title, volume title and author/org
    #[arg(short, long)]
    pub search: Option<String>,
    /// Sort column: id, title, volume, issue or date
    #[arg(long, default_value = "id")]
    pub sort: PublicationSort,
    /// Sort order: asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl From<ListPublicationsArgs> for ListPublications {
    fn from(val: ListPublicationsArgs) -> Self {
        ListPublications {
            filter: PublicationFilter { search: val.search },
            sort: val.sort,
            order: val.order,
            page: val.page,
        }
    }
}

/// Add a publication
#[derive(ClapArgs)]
pub struct AddPublicationArgs {
    /// Title of the publication
    pub title: String,
    /// Volume number
    #[arg(long)]
    pub volume: i64,
    /// Issue number within the volume
    #[arg(long)]
    pub issue: i64,
    /// Issue date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub volume_title: Option<String>,
    /// Author or publishing organization
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
}

impl From<AddPublicationArgs> for CreatePublication {
    fn from(val: AddPublicationArgs) -> Self {
        CreatePublication {
            title: val.title,
            volume: val.volume,
            issue_number: val.issue,
            issue_date: val.date,
            volume_title: val.volume_title,
            author_org: val.author,
            location: val.location,
        }
    }
}

#[derive(Subcommand)]
pub enum PublicationCommands {
    /// Search and list publications, ten per page
    #[command(alias = "ls")]
    List(ListPublicationsArgs),
    /// Add a publication
    Add(AddPublicationArgs),
}

/// Show one record
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Record type: event or publication
    pub entity_type: String,
    /// ID of the record
    pub id: u64,
}

impl From<ShowArgs> for FetchRecord {
    fn from(val: ShowArgs) -> Self {
        FetchRecord {
            entity_type: val.entity_type,
            id: val.id,
        }
    }
}

/// Update one record
#[derive(ClapArgs)]
pub struct EditArgs {
    /// Record type: event or publication
    pub entity_type: String,
    /// ID of the record
    pub id: u64,
    /// Column value as name=value; repeat for each column
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,
}

impl From<EditArgs> for UpdateRecord {
    fn from(val: EditArgs) -> Self {
        UpdateRecord {
            entity_type: val.entity_type,
            id: val.id,
            fields: val.fields.into_iter().collect(),
        }
    }
}

/// Splits `name=value` at the first `=`. The value may be empty.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing column name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Restrict the targeted report to cities
#[derive(ClapArgs)]
pub struct TargetedArgs {
    /// City to include; repeat for several. Defaults to San Francisco and
    /// Los Angeles
    #[arg(long = "city")]
    pub cities: Vec<String>,
}

impl From<TargetedArgs> for TargetedReport {
    fn from(val: TargetedArgs) -> Self {
        if val.cities.is_empty() {
            TargetedReport::default()
        } else {
            TargetedReport { cities: val.cities }
        }
    }
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Events with a source publication, joined to their issue
    Sources,
    /// Source publications ranked by event count
    Ranking,
    /// Share of events that name a source publication
    Coverage,
    /// Event counts per type
    Types {
        /// Group stored values as-is instead of splitting on commas
        #[arg(long)]
        raw: bool,
    },
    /// Event type counts per month
    Trend,
    /// Event type counts per location, and location totals
    Locations,
    /// Event advertisements and protest reports per issue in chosen cities
    Targeted(TargetedArgs),
}

#[derive(Subcommand)]
pub enum ResourceCommands {
    /// Recreate the resources table from a CSV file
    Import(ImportResourcesArgs),
    /// Move one resource category into events
    Migrate(MigrateResourcesArgs),
}

#[derive(ClapArgs)]
pub struct ImportResourcesArgs {
    /// Resources CSV (resource_title, volume, issue, resource_type, ...)
    pub path: PathBuf,
}

impl From<ImportResourcesArgs> for ImportResources {
    fn from(val: ImportResourcesArgs) -> Self {
        ImportResources { path: val.path }
    }
}

#[derive(ClapArgs)]
pub struct MigrateResourcesArgs {
    /// Resource type to move, e.g. Courses
    pub category: String,
    /// Event type to assign; defaults to the category
    #[arg(long)]
    pub event_type: Option<String>,
}

impl From<MigrateResourcesArgs> for MigrateResources {
    fn from(val: MigrateResourcesArgs) -> Self {
        MigrateResources {
            category: val.category,
            event_type: val.event_type,
        }
    }
}

#[derive(Subcommand)]
pub enum CleanCommands {
    /// Delete events whose IDs fall in an inclusive range
    Purge {
        #[arg(long)]
        from: u64,
        #[arg(long)]
        to: u64,
    },
    /// Delete duplicate events, keeping the lowest ID
    Dedupe,
    /// Rename an exact event type value
    Retype {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("city=San Francisco"),
            Ok(("city".to_string(), "San Francisco".to_string()))
        );
        assert_eq!(
            parse_key_val("city="),
            Ok(("city".to_string(), String::new()))
        );
        assert_eq!(
            parse_key_val("description=a=b"),
            Ok(("description".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("city").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn test_list_args_parse_sort() {
        let args = Args::parse_from(["zines", "event", "list", "--sort", "date", "--order", "desc"]);
        let Some(Commands::Event {
            command: EventCommands::List(list),
        }) = args.command
        else {
            panic!("Expected event list");
        };
        let params = ListEvents::from(list);
        assert_eq!(params.sort, EventSort::Date);
        assert_eq!(params.order, SortOrder::Desc);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let result = Args::try_parse_from(["zines", "event", "list", "--sort", "1; DROP TABLE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_targeted_defaults_to_two_cities() {
        let params = TargetedReport::from(TargetedArgs { cities: vec![] });
        assert_eq!(params.cities, vec!["San Francisco", "Los Angeles"]);
    }
}

mod common;

use common::{create_test_db, seed_event, seed_publication, write_csv};
use tempfile::TempDir;
use zine_core::{
    params::{ImportFiles, MigrateResources, PurgeEvents, RenameEventType},
    ArchiveError, ErrorKind, EventFilter, ListEvents,
};

const PUBLICATIONS_CSV: &str = "\
pub_title,volume,issue_number,issue_year,issue_month,issue_day,volume_title,author_org,location
It Ain't Me Babe,5,3,1970,7,4,Summer,Women's Liberation,Berkeley
It Ain't Me Babe,5,4,1970,8,1,,Women's Liberation,Berkeley
Broken,not-a-number,1,1970,1,1,,,
";

const EVENTS_CSV: &str = "\
event_title,event_type,event_year,event_month,event_date,volume,issue_number,location,address,city,state,country,description,source_publication
Strike for Equality,\"Protest, March\",1970,8,26,5,3,City Hall,,San Francisco,CA,USA,Nationwide strike,Berkeley Barb
Lost event,Meeting,1970,9,1,9,9,,,Oakland,CA,USA,,
";

fn import_files(dir: &TempDir) -> ImportFiles {
    ImportFiles {
        publications: write_csv(dir, "pubs.csv", PUBLICATIONS_CSV),
        events: write_csv(dir, "events.csv", EVENTS_CSV),
    }
}

#[test]
fn test_import_links_events_by_volume_and_issue() {
    let (_temp_file, db) = create_test_db();
    let dir = TempDir::new().expect("Failed to create temp dir");

    let summary = db
        .import_csv(&import_files(&dir))
        .expect("Import should succeed");

    assert_eq!(summary.publications_imported, 2);
    assert_eq!(summary.events_imported, 1);
    assert_eq!(summary.warnings.len(), 2);
    assert!(summary.warnings[0].starts_with("Skipping publication row 3"));
    assert_eq!(
        summary.warnings[1],
        "No matching publication found for event: Lost event (Volume: 9, Issue: 9)"
    );

    let expected_pub = db
        .find_publication_by_issue(5, 3)
        .expect("Failed to look up")
        .expect("Publication (5, 3) should exist");
    let publication = db
        .get_publication(expected_pub)
        .expect("Failed to get publication")
        .expect("Publication should exist");
    assert_eq!(publication.issue_date.as_deref(), Some("1970-07-04"));
    assert_eq!(publication.volume_title.as_deref(), Some("Summer"));

    let page = db
        .list_events(&ListEvents::default())
        .expect("Failed to list events");
    assert_eq!(page.total_count, 1);
    let event = &page.items[0].event;
    assert_eq!(event.title, "Strike for Equality");
    assert_eq!(event.publication_id, Some(expected_pub));
    assert_eq!(event.event_date.as_deref(), Some("1970-08-26"));
    assert_eq!(event.event_type.as_deref(), Some("Protest, March"));
    assert_eq!(event.source_publication.as_deref(), Some("Berkeley Barb"));
}

#[test]
fn test_import_trims_padded_cells() {
    let (_temp_file, db) = create_test_db();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let files = ImportFiles {
        publications: write_csv(
            &dir,
            "pubs.csv",
            "pub_title,volume,issue_number,issue_year,issue_month,issue_day,volume_title,author_org,location\n\
             \" Tooth and Nail \", 2 , 1 ,1970,3,1,,,\" Berkeley \"\n",
        ),
        events: write_csv(
            &dir,
            "events.csv",
            "event_title,event_type,event_year,event_month,event_date,volume,issue_number,location,address,city,state,country,description,source_publication\n\
             Picket,Protest,1970,3,2, 2 , 1 ,,,\" Oakland \",CA,USA,,\n",
        ),
    };

    let summary = db.import_csv(&files).expect("Import should succeed");
    assert_eq!(summary.publications_imported, 1);
    assert_eq!(summary.events_imported, 1);

    let pub_id = db
        .find_publication_by_issue(2, 1)
        .expect("Failed to look up")
        .expect("Publication (2, 1) should exist");
    let publication = db
        .get_publication(pub_id)
        .expect("Failed to get publication")
        .expect("Publication should exist");
    assert_eq!(publication.title, "Tooth and Nail");
    assert_eq!(publication.location.as_deref(), Some("Berkeley"));

    let page = db
        .list_events(&ListEvents::default())
        .expect("Failed to list events");
    assert_eq!(page.items[0].event.city.as_deref(), Some("Oakland"));
}

#[test]
fn test_import_missing_file_is_csv_error() {
    let (_temp_file, db) = create_test_db();
    let dir = TempDir::new().expect("Failed to create temp dir");

    let err = db
        .import_csv(&ImportFiles {
            publications: dir.path().join("missing.csv"),
            events: dir.path().join("missing-too.csv"),
        })
        .expect_err("Missing file should fail");
    assert!(matches!(err, ArchiveError::Csv { .. }));
    assert_eq!(err.kind(), ErrorKind::Storage);
}

const RESOURCES_CSV: &str = "\
resource_title,volume,issue,resource_type,location,address,city,state,country,source_publication,description
Free clinic,5,3,\"Health, Organization\",Clinic,1 Main St,Berkeley,CA,USA,Babe,Walk-in care
Karate class,5,9,Courses,Gym,,Oakland,CA,USA,Babe,
Reading list,x,3,,,,,,,,
";

#[test]
fn test_import_resources_splits_types() {
    let (_temp_file, db) = create_test_db();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(&dir, "resources.csv", RESOURCES_CSV);

    let summary = db.import_resources(&path).expect("Import should succeed");

    assert_eq!(summary.resources_imported, 4);
    assert!(summary.warnings.is_empty());
    assert!(db.table_exists("resources").expect("Failed to inspect schema"));
    assert_eq!(db.count_resources("Health").expect("Failed to count"), 1);
    assert_eq!(db.count_resources("Organization").expect("Failed to count"), 1);
    assert_eq!(db.count_resources("NA").expect("Failed to count"), 1);

    // Importing again starts from an empty table
    let summary = db.import_resources(&path).expect("Import should succeed");
    assert_eq!(summary.resources_imported, 4);
    assert_eq!(db.count_resources("Courses").expect("Failed to count"), 1);
}

#[test]
fn test_migrate_resources_moves_rows() {
    let (_temp_file, mut db) = create_test_db();
    let pub_id = seed_publication(&db, 5, 3);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_csv(&dir, "resources.csv", RESOURCES_CSV);
    db.import_resources(&path).expect("Import should succeed");

    let moved = db
        .migrate_resources(&MigrateResources {
            category: "Organization".to_string(),
            event_type: Some("Meeting Advertisement".to_string()),
        })
        .expect("Migration should succeed");
    assert_eq!(moved, 1);
    assert_eq!(db.count_resources("Organization").expect("Failed to count"), 0);
    assert_eq!(db.count_resources("Health").expect("Failed to count"), 1);

    let page = db
        .list_events(&ListEvents {
            filter: EventFilter {
                event_type: Some("Meeting Advertisement".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .expect("Failed to list events");
    assert_eq!(page.total_count, 1);
    let event = &page.items[0].event;
    assert_eq!(event.title, "Free clinic");
    assert_eq!(event.publication_id, Some(pub_id));
    assert_eq!(event.event_date, None);

    // No publication (5, 9): the event is kept without a link
    let moved = db
        .migrate_resources(&MigrateResources {
            category: "Courses".to_string(),
            event_type: None,
        })
        .expect("Migration should succeed");
    assert_eq!(moved, 1);
    let page = db
        .list_events(&ListEvents {
            filter: EventFilter {
                event_type: Some("Courses".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .expect("Failed to list events");
    assert_eq!(page.items[0].event.publication_id, None);
}

#[test]
fn test_migrate_without_resources_table_fails() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .migrate_resources(&MigrateResources {
            category: "Courses".to_string(),
            event_type: None,
        })
        .expect_err("Migration needs staged resources");
    assert!(matches!(err, ArchiveError::Configuration { .. }));
}

#[test]
fn test_purge_events_by_range() {
    let (_temp_file, db) = create_test_db();
    let ids: Vec<u64> = (0..5)
        .map(|i| seed_event(&db, &format!("Event {i}"), None, None, None))
        .collect();

    let deleted = db
        .purge_events(&PurgeEvents {
            from: ids[1],
            to: ids[3],
        })
        .expect("Purge should succeed");
    assert_eq!(deleted, 3);
    assert_eq!(db.count_events().expect("Failed to count"), 2);
    assert!(db.get_event(ids[0]).expect("Failed to get").is_some());
    assert!(db.get_event(ids[2]).expect("Failed to get").is_none());

    let err = db
        .purge_events(&PurgeEvents { from: 9, to: 1 })
        .expect_err("Inverted range should fail");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_purge_rejects_ids_beyond_sqlite_range() {
    let (_temp_file, db) = create_test_db();
    seed_event(&db, "a", None, None, None);
    seed_event(&db, "b", None, None, None);

    let err = db
        .purge_events(&PurgeEvents {
            from: 1,
            to: u64::MAX,
        })
        .expect_err("Out-of-range bound should fail");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(db.count_events().expect("Failed to count"), 2);

    let deleted = db
        .purge_events(&PurgeEvents {
            from: 1,
            to: i64::MAX as u64,
        })
        .expect("Purge should succeed");
    assert_eq!(deleted, 2);
    assert_eq!(db.count_events().expect("Failed to count"), 0);
}

#[test]
fn test_dedupe_keeps_lowest_id() {
    let (_temp_file, db) = create_test_db();
    let first = seed_event(&db, "Rally", Some("Protest"), Some("Barb"), None);
    seed_event(&db, "Rally", Some("Protest"), Some("Barb"), None);
    seed_event(&db, "Rally", Some("Protest"), Some("Barb"), None);
    let other = seed_event(&db, "Rally", Some("Protest"), Some("Barb"), Some("Oakland"));

    let deleted = db.dedupe_events().expect("Dedupe should succeed");
    assert_eq!(deleted, 2);
    assert!(db.get_event(first).expect("Failed to get").is_some());
    assert!(db.get_event(other).expect("Failed to get").is_some());
    assert_eq!(db.count_events().expect("Failed to count"), 2);
}

#[test]
fn test_rename_event_type_is_exact() {
    let (_temp_file, db) = create_test_db();
    seed_event(&db, "a", Some("Advocacy"), None, None);
    seed_event(&db, "b", Some("Advocacy, Protest"), None, None);

    let renamed = db
        .rename_event_type(&RenameEventType {
            from: "Advocacy".to_string(),
            to: "Direct Advocacy".to_string(),
        })
        .expect("Rename should succeed");
    assert_eq!(renamed, 1);

    let totals = db.event_type_totals_raw().expect("Failed to count types");
    assert!(totals.iter().any(|t| t.event_type == "Direct Advocacy"));
    assert!(totals.iter().any(|t| t.event_type == "Advocacy, Protest"));
}

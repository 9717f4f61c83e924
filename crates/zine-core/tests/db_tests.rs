mod common;

use std::collections::BTreeMap;

use common::{create_test_db, seed_event, seed_publication};
use zine_core::{
    db::event_queries::NewEvent,
    models::{EventChanges, PublicationChanges, MISSING, MISSING_DATE},
    params::{CreateEvent, CreatePublication, ListPublications},
    ArchiveError, ErrorKind, EventFilter, EventSort, ListEvents, PublicationFilter, SortOrder,
};

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.table_exists("events").expect("Failed to inspect schema"));
    assert!(db.table_exists("publications").expect("Failed to inspect schema"));
    assert!(!db.table_exists("resources").expect("Failed to inspect schema"));
}

#[test]
fn test_reopening_keeps_existing_rows() {
    let (temp_file, db) = create_test_db();
    seed_publication(&db, 1, 1);
    drop(db);

    let db = zine_core::Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.count_publications().expect("Failed to count"), 1);
}

#[test]
fn test_create_then_fetch_event() {
    let (_temp_file, db) = create_test_db();
    let before = db.count_events().expect("Failed to count events");

    let event = db
        .create_event(&CreateEvent {
            title: "  Women's Strike for Equality ".to_string(),
            event_type: Some("Protest, March".to_string()),
            event_date: Some("1970-08-26".to_string()),
            city: Some("San Francisco".to_string()),
            ..Default::default()
        })
        .expect("Failed to create event");

    assert!(event.id > 0);
    assert_eq!(event.title, "Women's Strike for Equality");
    assert_eq!(event.event_type.as_deref(), Some("Protest, March"));
    assert_eq!(event.address.as_deref(), Some(""));
    assert_eq!(db.count_events().expect("Failed to count events"), before + 1);

    let fetched = db
        .get_event(event.id)
        .expect("Failed to get event")
        .expect("Event should exist");
    assert_eq!(fetched, event);
}

#[test]
fn test_blank_title_writes_nothing() {
    let (_temp_file, db) = create_test_db();

    let result = db.create_event(&CreateEvent {
        title: "   ".to_string(),
        ..Default::default()
    });
    assert!(matches!(result, Err(ArchiveError::InvalidInput { .. })));

    let result = db.create_publication(&CreatePublication {
        title: String::new(),
        volume: 1,
        issue_number: 1,
        ..Default::default()
    });
    assert!(matches!(result, Err(ArchiveError::InvalidInput { .. })));

    assert_eq!(db.count_events().expect("Failed to count events"), 0);
    assert_eq!(db.count_publications().expect("Failed to count"), 0);
}

#[test]
fn test_event_with_unknown_publication_is_lookup_error() {
    let (_temp_file, db) = create_test_db();

    let err = db
        .create_event(&CreateEvent {
            title: "Orphan".to_string(),
            publication_id: Some(404),
            ..Default::default()
        })
        .expect_err("Foreign key should be enforced");
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_eq!(db.count_events().expect("Failed to count events"), 0);
}

#[test]
fn test_list_events_pages_and_total() {
    let (_temp_file, db) = create_test_db();
    for day in 1..=15 {
        let date = format!("1970-03-{day:02}");
        db.insert_event(&NewEvent {
            title: "Protest",
            event_type: Some("Protest"),
            event_date: Some(&date),
            ..Default::default()
        })
        .expect("Failed to insert event");
    }

    let mut params = ListEvents {
        filter: EventFilter {
            event_type: Some("Protest".to_string()),
            ..Default::default()
        },
        sort: EventSort::Date,
        order: SortOrder::Asc,
        page: 1,
    };
    let first = db.list_events(&params).expect("Failed to list page 1");
    params.page = 2;
    let second = db.list_events(&params).expect("Failed to list page 2");
    params.page = 3;
    let third = db.list_events(&params).expect("Failed to list page 3");

    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 5);
    assert!(third.is_empty());
    assert_eq!(first.total_count, 15);
    assert_eq!(second.total_count, 15);
    assert_eq!(third.total_count, 15);
    assert_eq!(
        first.items[0].event.event_date.as_deref(),
        Some("1970-03-01")
    );
    assert_eq!(
        second.items[4].event.event_date.as_deref(),
        Some("1970-03-15")
    );
}

#[test]
fn test_list_events_excludes_untitled_rows() {
    let (_temp_file, db) = create_test_db();
    seed_event(&db, "Teach-in", Some("Meeting"), None, None);
    seed_event(&db, "", Some("Meeting"), None, None);
    seed_event(&db, "   ", Some("Meeting"), None, None);

    let page = db
        .list_events(&ListEvents::default())
        .expect("Failed to list events");
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].event.title, "Teach-in");
}

#[test]
fn test_list_events_filters() {
    let (_temp_file, db) = create_test_db();
    let pub_id = seed_publication(&db, 2, 3);
    db.insert_event(&NewEvent {
        publication_id: Some(pub_id),
        title: "Abortion repeal rally",
        event_type: Some("Protest"),
        city: Some("San Francisco"),
        state: Some("CA"),
        description: Some("March on City Hall"),
        ..Default::default()
    })
    .expect("Failed to insert event");
    seed_event(&db, "Childcare meeting", Some("Meeting"), None, Some("Los Angeles"));

    let search = |filter: EventFilter| {
        db.list_events(&ListEvents {
            filter,
            ..Default::default()
        })
        .expect("Failed to list events")
    };

    let by_description = search(EventFilter {
        search: Some("city hall".to_string()),
        ..Default::default()
    });
    assert_eq!(by_description.total_count, 1);
    assert_eq!(by_description.items[0].publication_title.as_deref(), Some("It Ain't Me Babe"));
    assert_eq!(by_description.items[0].volume, Some(2));
    assert_eq!(by_description.items[0].issue_number, Some(3));

    let by_city = search(EventFilter {
        city: Some("angeles".to_string()),
        ..Default::default()
    });
    assert_eq!(by_city.total_count, 1);
    assert_eq!(by_city.items[0].event.title, "Childcare meeting");
    assert_eq!(by_city.items[0].publication_title, None);

    // Type matches exactly, not by substring
    let by_type = search(EventFilter {
        event_type: Some("Prot".to_string()),
        ..Default::default()
    });
    assert_eq!(by_type.total_count, 0);

    let wildcard = search(EventFilter {
        search: Some("%".to_string()),
        ..Default::default()
    });
    assert_eq!(wildcard.total_count, 0);
}

#[test]
fn test_list_events_sort_desc() {
    let (_temp_file, db) = create_test_db();
    seed_event(&db, "Alpha", None, None, None);
    seed_event(&db, "Charlie", None, None, None);
    seed_event(&db, "Bravo", None, None, None);

    let page = db
        .list_events(&ListEvents {
            sort: EventSort::Title,
            order: SortOrder::Desc,
            ..Default::default()
        })
        .expect("Failed to list events");
    let titles: Vec<&str> = page.items.iter().map(|l| l.event.title.as_str()).collect();
    assert_eq!(titles, vec!["Charlie", "Bravo", "Alpha"]);
}

#[test]
fn test_list_publications_search() {
    let (_temp_file, db) = create_test_db();
    db.create_publication(&CreatePublication {
        title: "Tooth and Nail".to_string(),
        volume: 1,
        issue_number: 1,
        author_org: Some("Bay Area Women's Liberation".to_string()),
        ..Default::default()
    })
    .expect("Failed to create publication");
    seed_publication(&db, 1, 2);

    let page = db
        .list_publications(&ListPublications {
            filter: PublicationFilter {
                search: Some("liberation".to_string()),
            },
            ..Default::default()
        })
        .expect("Failed to list publications");
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].title, "Tooth and Nail");
}

#[test]
fn test_update_event_normalizes_blanks() {
    let (_temp_file, db) = create_test_db();
    let pub_id = seed_publication(&db, 1, 1);
    let id = db
        .insert_event(&NewEvent {
            publication_id: Some(pub_id),
            title: "Picket",
            city: Some("Berkeley"),
            ..Default::default()
        })
        .expect("Failed to insert event");

    let mut fields = BTreeMap::new();
    fields.insert("event_title".to_string(), " Picket line ".to_string());
    fields.insert("event_date".to_string(), "".to_string());
    fields.insert("city".to_string(), "\t".to_string());
    let changes = EventChanges::from_fields(&fields).expect("Fields should be valid");

    let event = db.update_event(id, &changes).expect("Failed to update event");
    assert_eq!(event.title, "Picket line");
    assert_eq!(event.event_date.as_deref(), Some(MISSING_DATE));
    assert_eq!(event.city.as_deref(), Some(MISSING));
    assert_eq!(event.source_publication.as_deref(), Some(MISSING));
    // Not supplied, so the link is kept
    assert_eq!(event.publication_id, Some(pub_id));
}

#[test]
fn test_update_missing_rows_are_not_found() {
    let (_temp_file, db) = create_test_db();

    let changes = EventChanges::from_fields(&BTreeMap::new()).expect("Empty fields are valid");
    assert!(matches!(
        db.update_event(7, &changes),
        Err(ArchiveError::EventNotFound { id: 7 })
    ));

    let changes =
        PublicationChanges::from_fields(&BTreeMap::new()).expect("Empty fields are valid");
    assert!(matches!(
        db.update_publication(8, &changes),
        Err(ArchiveError::PublicationNotFound { id: 8 })
    ));
}

#[test]
fn test_update_publication_keeps_unsupplied_numbers() {
    let (_temp_file, db) = create_test_db();
    let id = seed_publication(&db, 3, 7);

    let mut fields = BTreeMap::new();
    fields.insert("pub_title".to_string(), "Renamed".to_string());
    fields.insert("issue_number".to_string(), "8".to_string());
    let changes = PublicationChanges::from_fields(&fields).expect("Fields should be valid");

    let publication = db
        .update_publication(id, &changes)
        .expect("Failed to update publication");
    assert_eq!(publication.title, "Renamed");
    assert_eq!(publication.volume, 3);
    assert_eq!(publication.issue_number, 8);
    assert_eq!(publication.issue_date.as_deref(), Some(MISSING_DATE));
    assert_eq!(publication.location.as_deref(), Some(MISSING));
}

#[test]
fn test_find_publication_by_issue_prefers_lowest_id() {
    let (_temp_file, db) = create_test_db();
    let first = seed_publication(&db, 5, 3);
    seed_publication(&db, 5, 3);

    assert_eq!(
        db.find_publication_by_issue(5, 3).expect("Failed to look up"),
        Some(first)
    );
    assert_eq!(db.find_publication_by_issue(5, 4).expect("Failed to look up"), None);
}

#[test]
fn test_reset_drops_all_rows() {
    let (_temp_file, mut db) = create_test_db();
    seed_publication(&db, 1, 1);
    seed_event(&db, "Rally", None, None, None);
    db.recreate_resources_table()
        .expect("Failed to create resources table");

    db.reset().expect("Failed to reset database");

    assert_eq!(db.count_events().expect("Failed to count"), 0);
    assert_eq!(db.count_publications().expect("Failed to count"), 0);
    assert!(!db.table_exists("resources").expect("Failed to inspect schema"));
}

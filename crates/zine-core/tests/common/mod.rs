#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::{NamedTempFile, TempDir};
use zine_core::{
    db::{event_queries::NewEvent, publication_queries::NewPublication},
    Archive, ArchiveBuilder, Database,
};

/// Helper function to create a test archive
pub async fn create_test_archive() -> (TempDir, Archive) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let archive = ArchiveBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create archive");
    (temp_dir, archive)
}

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Writes a CSV fixture into the directory and returns its path.
pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write CSV fixture");
    path
}

/// Inserts a publication for `(volume, issue)` and returns its ID.
pub fn seed_publication(db: &Database, volume: i64, issue: i64) -> u64 {
    db.insert_publication(&NewPublication {
        title: "It Ain't Me Babe",
        volume,
        issue_number: issue,
        issue_date: Some("1970-01-15"),
        ..Default::default()
    })
    .expect("Failed to seed publication")
}

/// Inserts an event with the given type, source and city.
pub fn seed_event(
    db: &Database,
    title: &str,
    event_type: Option<&str>,
    source: Option<&str>,
    city: Option<&str>,
) -> u64 {
    db.insert_event(&NewEvent {
        title,
        event_type,
        source_publication: source,
        city,
        ..Default::default()
    })
    .expect("Failed to seed event")
}

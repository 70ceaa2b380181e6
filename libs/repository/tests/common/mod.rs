#![allow(dead_code)]

use entity::prelude::*;
use repository::{DatabaseConfig, Repository};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

/// Fresh, migrated in-memory store. A single connection keeps every query on
/// the same SQLite database.
pub async fn create_test_repository() -> Repository {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
    };

    Repository::new("sqlite::memory:", &config).await.unwrap()
}

/// File-backed store plus a second, raw connection to the same file for
/// writing rows the repository itself would never produce. Keep the
/// `TempDir` alive for the duration of the test.
pub async fn create_file_repository(
) -> (Repository, DatabaseConnection, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let repository = Repository::new(&url, &DatabaseConfig::default())
        .await
        .unwrap();
    let raw = Database::connect(&url).await.unwrap();

    (repository, raw, dir)
}

pub async fn insert_raw_prompt(raw: &DatabaseConnection, tags: &str) {
    raw.execute_unprepared(&format!(
        "INSERT INTO prompt (title, content, tags, project_id, created_at) \
         VALUES ('raw', 'raw', '{}', NULL, '2026-01-01 00:00:00')",
        tags
    ))
    .await
    .unwrap();
}

pub fn draft(title: &str, content: &str, tags: &[&str]) -> PromptDraft {
    PromptDraft {
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        project_id: None,
    }
}

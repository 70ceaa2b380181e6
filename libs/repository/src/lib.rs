use migration::Migrator;
use migration::MigratorTrait;
use project::ProjectRepository;
use prompt::PromptRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Deserialize;
use tracing::info;

use crate::response::{IntoResponse, Response};

mod active_models;
pub mod project;
pub mod prompt;
mod response;

/// Handle to the data store. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct Repository {
    pub project: ProjectRepository,
    pub prompt: PromptRepository,
    db: DatabaseConnection,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{}: {}", message, source)]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("prompt {id} has malformed tags: {source}")]
    InvalidTags {
        id: i32,
        source: serde_json::Error,
    },
}

impl Repository {
    /// Connects to `db_url` and brings the schema up to date before
    /// returning.
    pub async fn new(
        db_url: &str,
        config: &DatabaseConfig,
    ) -> Response<Repository> {
        let db = init_db(db_url, config).await?;

        Ok(Repository {
            project: ProjectRepository::new(db.clone()),
            prompt: PromptRepository::new(db.clone()),
            db,
        })
    }

    pub async fn close(self) -> Response<()> {
        info!(task = "close database");
        self.db.close().await.into_response("in database close")
    }
}

async fn init_db(
    db_url: &str,
    config: &DatabaseConfig,
) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    info!(task = "database ready");

    Ok(db)
}

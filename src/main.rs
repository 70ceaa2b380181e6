use repository::Repository;
use shuttle_runtime::{Error, SecretStore, Secrets};
use tracing_subscriber::EnvFilter;

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
    #[shuttle_shared_db::Postgres(local_uri = "{secrets.LOCAL_DATABASE_URL}")]
    conn_string: String,
) -> shuttle_axum::ShuttleAxum {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(task = "start prompt library");

    let config_name = match secret_store.get("CONFIG") {
        Some(config) => format!("Config{}.toml", config),
        None => "Config.toml".to_string(),
    };
    let config = util::load_config::<api::Config>(&config_name)
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    let repository = Repository::new(&conn_string, &config.database)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(api::router(repository).into())
}

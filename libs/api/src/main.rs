use anyhow::Context;
use api::{serve, Config};
use repository::Repository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let secrets = util::load_env()?;
    let conn_string = secrets
        .get("LOCAL_DATABASE_URL")
        .and_then(|value| value.as_str())
        .context("LOCAL_DATABASE_URL was not found")?;

    let config_name = match secrets.get("CONFIG").and_then(|v| v.as_str()) {
        Some(config) => format!("Config{}.toml", config),
        None => "Config.toml".to_string(),
    };
    let config: Config = util::load_config(&config_name)?;

    // migrations run inside `new`, before the listener is bound
    let repository = Repository::new(conn_string, &config.database)
        .await
        .context("failed to open repository")?;

    serve(repository.clone(), &config).await?;

    repository.close().await?;

    Ok(())
}

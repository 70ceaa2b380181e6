use std::net::{Ipv4Addr, SocketAddr};

use axum::{
    http::{header, Method},
    routing::{get, put},
    Router,
};
use repository::{DatabaseConfig, Repository};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod not_found;
pub mod ping;
pub mod project;
pub mod prompt;
mod response;
mod util;

pub use response::{ApiError, ErrorResp};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        ping::get_ping,
        project::get_projects,
        project::post_project,
        prompt::get_prompts,
        prompt::post_prompt,
        prompt::put_prompt,
        prompt::delete_prompt,
    ),
    components(schemas(
        project::request::PostProjectReq,
        project::response::ProjectResp,
        prompt::request::PromptReq,
        prompt::response::PromptResp,
        prompt::response::MessageResp,
        ErrorResp,
    )),
    tags(
        (name = "prompts", description = "Prompt library management API")
    )
)]
pub struct ApiDoc;

/// Builds the HTTP surface over an already migrated repository.
pub fn router(repository: Repository) -> Router {
    // projects
    let project_router = Router::new()
        .route("/", get(project::get_projects).post(project::post_project))
        .with_state(repository.clone());

    // prompts
    let prompt_router = Router::new()
        .route("/", get(prompt::get_prompts).post(prompt::post_prompt))
        .route("/:id", put(prompt::put_prompt).delete(prompt::delete_prompt))
        .with_state(repository);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/ping", get(ping::get_ping))
        .nest("/api/projects", project_router)
        .nest("/api/prompts", prompt_router)
        .fallback(not_found::get_404)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serves until Ctrl-C or SIGTERM, letting in-flight requests finish.
pub async fn serve(
    repository: Repository,
    config: &Config,
) -> anyhow::Result<()> {
    let address =
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    let listener = TcpListener::bind(&address).await?;

    info!(task = "start api serving", %address);

    axum::serve(listener, router(repository))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(task = "api serving stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(task = "ctrl-c handler", error = e.to_string());
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        ) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(
                    task = "sigterm handler",
                    error = e.to_string()
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(task = "shutdown signal received");
}

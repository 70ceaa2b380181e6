use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use repository::Repository;
use tracing::info;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiError;

use self::{request::PostProjectReq, response::ProjectResp};

/// List all projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "List all projects successfully",
            body = [ProjectResp]),
        (status = 500, description = "Store failure", body = crate::ErrorResp)
    )
)]
pub async fn get_projects(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<ProjectResp>>> {
    let projects =
        repo.project.find_all().await.into_response("list projects")?;

    Ok(Json(projects.into_iter().map(ProjectResp::from).collect()))
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = PostProjectReq,
    responses(
        (status = 201, description = "Create a project successfully",
            body = ProjectResp),
        (status = 500, description = "Store failure", body = crate::ErrorResp)
    )
)]
pub async fn post_project(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<Json<PostProjectReq>, ApiError>,
) -> ApiResponse<(StatusCode, Json<ProjectResp>)> {
    let project = repo
        .project
        .save(body.name)
        .await
        .into_response("create project")?;

    info!(task = "create project", id = project.id);

    Ok((StatusCode::CREATED, Json(project.into())))
}

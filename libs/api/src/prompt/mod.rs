use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use repository::Repository;
use tracing::info;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiError;

use self::{
    request::PromptReq,
    response::{MessageResp, PromptResp},
};

const PROMPT_NOT_FOUND: &str = "Prompt not found";

type PromptBody = WithRejection<Json<PromptReq>, ApiError>;
type PromptId = WithRejection<Path<i32>, ApiError>;

/// List all prompts, newest first
#[utoipa::path(
    get,
    path = "/api/prompts",
    responses(
        (status = 200, description = "List all prompts successfully",
            body = [PromptResp]),
        (status = 500, description = "Store failure", body = crate::ErrorResp)
    )
)]
pub async fn get_prompts(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<PromptResp>>> {
    let prompts =
        repo.prompt.find_all().await.into_response("list prompts")?;

    Ok(Json(prompts.into_iter().map(PromptResp::from).collect()))
}

/// Create a prompt
#[utoipa::path(
    post,
    path = "/api/prompts",
    request_body = PromptReq,
    responses(
        (status = 201, description = "Create a prompt successfully",
            body = PromptResp),
        (status = 500, description = "Store failure or unreadable body",
            body = crate::ErrorResp)
    )
)]
pub async fn post_prompt(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): PromptBody,
) -> ApiResponse<(StatusCode, Json<PromptResp>)> {
    let prompt = repo
        .prompt
        .save(body.into())
        .await
        .into_response("create prompt")?;

    info!(task = "create prompt", id = prompt.id);

    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Replace a prompt's title, content, tags and project
#[utoipa::path(
    put,
    path = "/api/prompts/{id}",
    request_body = PromptReq,
    responses(
        (status = 200, description = "Update a prompt successfully",
            body = PromptResp),
        (status = 404, description = "No prompt with this id",
            body = crate::ErrorResp),
        (status = 500, description = "Store failure or unreadable request",
            body = crate::ErrorResp)
    ),
    params(
        ("id" = i32, Path, description = "prompt id"),
    )
)]
pub async fn put_prompt(
    State(repo): State<Repository>,
    WithRejection(Path(id), _): PromptId,
    WithRejection(Json(body), _): PromptBody,
) -> ApiResponse<Json<PromptResp>> {
    let prompt = repo
        .prompt
        .update(id, body.into())
        .await
        .into_response("update prompt")?;

    let Some(prompt) = prompt else {
        return Err(ApiError::NotFound(PROMPT_NOT_FOUND.to_string()));
    };

    info!(task = "update prompt", id);

    Ok(Json(prompt.into()))
}

/// Delete a prompt
#[utoipa::path(
    delete,
    path = "/api/prompts/{id}",
    responses(
        (status = 200, description = "Delete a prompt successfully",
            body = MessageResp),
        (status = 404, description = "No prompt with this id",
            body = crate::ErrorResp),
        (status = 500, description = "Store failure or unreadable id",
            body = crate::ErrorResp)
    ),
    params(
        ("id" = i32, Path, description = "prompt id"),
    )
)]
pub async fn delete_prompt(
    State(repo): State<Repository>,
    WithRejection(Path(id), _): PromptId,
) -> ApiResponse<Json<MessageResp>> {
    let deleted = repo
        .prompt
        .delete(id)
        .await
        .into_response("delete prompt")?;

    if !deleted {
        return Err(ApiError::NotFound(PROMPT_NOT_FOUND.to_string()));
    }

    info!(task = "delete prompt", id);

    Ok(Json(MessageResp {
        message: "Prompt deleted".to_string(),
    }))
}

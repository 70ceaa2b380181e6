use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PromptResp {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(rename = "projectId")]
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<PromptEntity> for PromptResp {
    fn from(value: PromptEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            content: value.content,
            tags: value.tags,
            project_id: value.project_id,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MessageResp {
    pub message: String,
}

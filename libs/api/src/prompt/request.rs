use entity::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::util::request::falsy_id;

/// Body of both create and update. Update is a full replace, so a missing
/// `projectId` unassigns the prompt.
#[derive(Deserialize, ToSchema)]
pub struct PromptReq {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "projectId", default, deserialize_with = "falsy_id")]
    #[schema(value_type = Option<i32>)]
    pub project_id: Option<i32>,
}

impl From<PromptReq> for PromptDraft {
    fn from(value: PromptReq) -> Self {
        Self {
            title: value.title,
            content: value.content,
            tags: value.tags.unwrap_or_default(),
            project_id: value.project_id,
        }
    }
}

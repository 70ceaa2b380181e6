use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ProjectResp {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectEntity> for ProjectResp {
    fn from(value: ProjectEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
        }
    }
}

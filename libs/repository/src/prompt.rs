use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use crate::response::{IntoResponse, Response};
use crate::RepositoryError;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PromptRepository {
    db: DatabaseConnection,
}

impl PromptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TryFrom<prompt::Model> for PromptEntity {
    type Error = RepositoryError;

    fn try_from(value: prompt::Model) -> Result<Self, Self::Error> {
        let id = value.id;
        let tags = serde_json::from_value(value.tags)
            .map_err(|source| RepositoryError::InvalidTags { id, source })?;

        Ok(PromptEntity {
            id,
            title: value.title,
            content: value.content,
            tags,
            project_id: value.project_id,
            created_at: value.created_at.and_utc(),
        })
    }
}

impl From<PromptDraft> for prompt::ActiveModel {
    fn from(value: PromptDraft) -> Self {
        Self {
            id: ActiveValue::not_set(),
            title: ActiveValue::set(value.title),
            content: ActiveValue::set(value.content),
            tags: ActiveValue::set(value.tags.into()),
            project_id: ActiveValue::set(value.project_id),
            created_at: ActiveValue::not_set(),
        }
    }
}

impl PromptRepository {
    /// All prompts, newest first.
    pub async fn find_all(&self) -> Response<Vec<PromptEntity>> {
        let prompts = Prompt::find()
            .order_by_desc(prompt::Column::CreatedAt)
            .order_by_desc(prompt::Column::Id)
            .all(&self.db)
            .await
            .into_response("in prompt find all")?;

        prompts.into_iter().map(PromptEntity::try_from).collect()
    }

    pub async fn save(&self, draft: PromptDraft) -> Response<PromptEntity> {
        let mut model = prompt::ActiveModel::from(draft);
        model.created_at = ActiveValue::set(Utc::now().naive_utc());

        model
            .insert(&self.db)
            .await
            .into_response("in prompt save")?
            .try_into()
    }

    /// Overwrites every mutable field of prompt `id`. Returns `None` when no
    /// such prompt exists.
    pub async fn update(
        &self,
        id: i32,
        draft: PromptDraft,
    ) -> Response<Option<PromptEntity>> {
        let mut model = prompt::ActiveModel::from(draft);
        model.id = ActiveValue::unchanged(id);

        model
            .update(&self.db)
            .await
            .into_optional_response("in prompt update")?
            .map(PromptEntity::try_from)
            .transpose()
    }

    /// Returns `false` when there was nothing to delete.
    pub async fn delete(&self, id: i32) -> Response<bool> {
        let result = Prompt::delete_by_id(id)
            .exec(&self.db)
            .await
            .into_response("in prompt delete")?;

        Ok(result.rows_affected > 0)
    }
}

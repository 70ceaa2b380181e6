use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ProjectRepository {
    db: DatabaseConnection,
}

impl ProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<project::Model> for ProjectEntity {
    fn from(value: project::Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl ProjectRepository {
    /// All projects, newest first.
    pub async fn find_all(&self) -> Response<Vec<ProjectEntity>> {
        let projects = Project::find()
            .order_by_desc(project::Column::CreatedAt)
            .order_by_desc(project::Column::Id)
            .all(&self.db)
            .await
            .into_response("in project find all")?;

        Ok(projects.into_iter().map(ProjectEntity::from).collect())
    }

    pub async fn save(&self, name: String) -> Response<ProjectEntity> {
        let project = project::ActiveModel {
            id: ActiveValue::not_set(),
            name: ActiveValue::set(name),
            created_at: ActiveValue::set(Utc::now().naive_utc()),
        }
        .insert(&self.db)
        .await
        .into_response("in project save")?;

        Ok(project.into())
    }
}

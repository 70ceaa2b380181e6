use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct PostProjectReq {
    #[serde(default)]
    pub name: String,
}

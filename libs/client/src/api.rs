use async_trait::async_trait;
use entity::prelude::*;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    RequestBuilder, StatusCode,
};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Serialize,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status code: {status}, response: {body}")]
    Status { status: StatusCode, body: String },
}

impl ClientError {
    /// Whether the server answered at all.
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }
}

/// The calls the library makes against the prompt service.
#[async_trait]
pub trait PromptApi: Send + Sync {
    async fn list_prompts(&self) -> Result<Vec<PromptEntity>, ClientError>;

    async fn list_projects(&self) -> Result<Vec<ProjectEntity>, ClientError>;

    async fn create_project(
        &self,
        name: &str,
    ) -> Result<ProjectEntity, ClientError>;

    async fn create_prompt(
        &self,
        draft: &PromptDraft,
    ) -> Result<PromptEntity, ClientError>;

    async fn update_prompt(
        &self,
        id: i32,
        draft: &PromptDraft,
    ) -> Result<PromptEntity, ClientError>;

    async fn delete_prompt(&self, id: i32) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct NewProject<'a> {
    name: &'a str,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(
        config: &crate::ClientConfig,
    ) -> Result<Self, ClientError> {
        Self::new(&config.base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PromptApi for HttpClient {
    async fn list_prompts(&self) -> Result<Vec<PromptEntity>, ClientError> {
        self.send(self.client.get(self.url("/api/prompts"))).await
    }

    async fn list_projects(&self) -> Result<Vec<ProjectEntity>, ClientError> {
        self.send(self.client.get(self.url("/api/projects"))).await
    }

    async fn create_project(
        &self,
        name: &str,
    ) -> Result<ProjectEntity, ClientError> {
        self.send(
            self.client
                .post(self.url("/api/projects"))
                .json(&NewProject { name }),
        )
        .await
    }

    async fn create_prompt(
        &self,
        draft: &PromptDraft,
    ) -> Result<PromptEntity, ClientError> {
        self.send(self.client.post(self.url("/api/prompts")).json(draft))
            .await
    }

    async fn update_prompt(
        &self,
        id: i32,
        draft: &PromptDraft,
    ) -> Result<PromptEntity, ClientError> {
        self.send(
            self.client
                .put(self.url(&format!("/api/prompts/{}", id)))
                .json(draft),
        )
        .await
    }

    async fn delete_prompt(&self, id: i32) -> Result<(), ClientError> {
        let _: IgnoredAny = self
            .send(self.client.delete(self.url(&format!("/api/prompts/{}", id))))
            .await?;

        Ok(())
    }
}

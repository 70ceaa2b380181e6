use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "projectId", default)]
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// The mutable part of a prompt. Creating and updating both take a full
/// draft: a `None` project clears the assignment.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(rename = "projectId")]
    pub project_id: Option<i32>,
}

impl Prompt {
    /// Case-insensitive substring match over title, content and tags.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    pub fn apply(&mut self, draft: PromptDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.tags = draft.tags;
        self.project_id = draft.project_id;
    }
}

use entity::prelude::*;

use crate::improve::Improver;

/// Field values of the create/edit form. Tags are edited as one
/// comma-separated string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PromptForm {
    pub title: String,
    pub content: String,
    pub tags: String,
    pub project_id: Option<i32>,
    suggestion: Option<String>,
}

impl PromptForm {
    pub fn from_prompt(prompt: &PromptEntity) -> Self {
        Self {
            title: prompt.title.clone(),
            content: prompt.content.clone(),
            tags: prompt.tags.join(", "),
            project_id: prompt.project_id,
            suggestion: None,
        }
    }

    pub fn to_draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: parse_tags(&self.tags),
            project_id: self.project_id,
        }
    }

    /// Asks the improver for a rewrite of the current content. Blank content
    /// is left alone and `false` is returned.
    pub async fn request_improvement(&mut self, improver: &Improver) -> bool {
        if self.content.trim().is_empty() {
            return false;
        }

        self.suggestion = None;
        self.suggestion = Some(improver.improve(&self.content).await);

        true
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn accept_suggestion(&mut self) {
        if let Some(suggestion) = self.suggestion.take() {
            self.content = suggestion;
        }
    }

    pub fn discard_suggestion(&mut self) {
        self.suggestion = None;
    }
}

/// Splits on commas, trims, and drops empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

use entity::prelude::*;
use tracing::{error, info};

use crate::{
    api::{ClientError, PromptApi},
    filter::Filter,
    form::PromptForm,
};

pub const DELETE_QUESTION: &str =
    "Are you sure you want to delete this prompt?";

/// Interactive yes/no step in front of destructive actions.
pub trait Confirm {
    fn confirm(&self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, question: &str) -> bool {
        self(question)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(PromptEntity),
}

impl FormState {
    /// Field values the form starts from, `None` when it is closed.
    pub fn initial_fields(&self) -> Option<PromptForm> {
        match self {
            FormState::Closed => None,
            FormState::Creating => Some(PromptForm::default()),
            FormState::Editing(prompt) => Some(PromptForm::from_prompt(prompt)),
        }
    }
}

/// Everything the prompt list renders from. Collections are fetched once;
/// afterwards each mutation goes to the server first and the local copy is
/// only patched when the server accepted it.
pub struct Library<A> {
    api: A,
    prompts: Vec<PromptEntity>,
    projects: Vec<ProjectEntity>,
    search_query: String,
    selected_project_id: Option<i32>,
    form: FormState,
    loading: bool,
}

impl<A: PromptApi> Library<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            prompts: Vec::new(),
            projects: Vec::new(),
            search_query: String::new(),
            selected_project_id: None,
            form: FormState::Closed,
            loading: true,
        }
    }

    /// Fetches prompts and projects concurrently. A failed fetch is logged
    /// and leaves that collection empty.
    pub async fn load(&mut self) {
        self.loading = true;
        let (prompts, projects) =
            tokio::join!(self.api.list_prompts(), self.api.list_projects());

        self.prompts = prompts.unwrap_or_else(|e| {
            error!(task = "load prompts", error = e.to_string());
            Vec::new()
        });
        self.projects = projects.unwrap_or_else(|e| {
            error!(task = "load projects", error = e.to_string());
            Vec::new()
        });

        info!(
            task = "load",
            prompts = self.prompts.len(),
            projects = self.projects.len()
        );
        self.loading = false;
    }

    /// True until the first `load` finishes, and while a reload runs.
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn prompts(&self) -> &[PromptEntity] {
        &self.prompts
    }

    pub fn projects(&self) -> &[ProjectEntity] {
        &self.projects
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_lowercase();
    }

    pub fn select_project(&mut self, project_id: Option<i32>) {
        self.selected_project_id = project_id;
    }

    pub fn selected_project(&self) -> Option<&ProjectEntity> {
        let id = self.selected_project_id?;
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn filter(&self) -> Filter {
        Filter::new(&self.search_query, self.selected_project_id)
    }

    /// Prompts passing the current search and project selection, in
    /// collection order.
    pub fn visible_prompts(&self) -> Vec<&PromptEntity> {
        self.filter().apply(&self.prompts)
    }

    /// Text handed to the clipboard by the copy action.
    pub fn clipboard_text(&self, id: i32) -> Option<&str> {
        self.prompts
            .iter()
            .find(|prompt| prompt.id == id)
            .map(|prompt| prompt.content.as_str())
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn open_new(&mut self) {
        self.form = FormState::Creating;
    }

    /// Returns `false` when no loaded prompt has this id.
    pub fn open_edit(&mut self, id: i32) -> bool {
        match self.prompts.iter().find(|prompt| prompt.id == id) {
            Some(prompt) => {
                self.form = FormState::Editing(prompt.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    pub async fn create_project(
        &mut self,
        name: &str,
    ) -> Result<(), ClientError> {
        match self.api.create_project(name).await {
            Ok(project) => {
                self.projects.insert(0, project);
                Ok(())
            }
            Err(e) => {
                error!(task = "create project", error = e.to_string());
                Err(e)
            }
        }
    }

    /// Creates a prompt, or replaces the one being edited. The form closes
    /// once the server has answered, even with an error status; it stays
    /// open when the server could not be reached.
    pub async fn save_prompt(
        &mut self,
        draft: PromptDraft,
    ) -> Result<(), ClientError> {
        let editing = match &self.form {
            FormState::Editing(prompt) => Some(prompt.id),
            _ => None,
        };

        let result = match editing {
            Some(id) => self.api.update_prompt(id, &draft).await.map(|updated| {
                for prompt in self.prompts.iter_mut().filter(|p| p.id == id) {
                    *prompt = updated.clone();
                }
            }),
            None => self
                .api
                .create_prompt(&draft)
                .await
                .map(|created| self.prompts.insert(0, created)),
        };

        match result {
            Ok(()) => {
                self.form = FormState::Closed;
                Ok(())
            }
            Err(e) => {
                error!(task = "save prompt", error = e.to_string());
                if e.is_status() {
                    self.form = FormState::Closed;
                }
                Err(e)
            }
        }
    }

    /// Deletes after confirmation. `Ok(false)` means the user declined and
    /// nothing was sent.
    pub async fn delete_prompt(
        &mut self,
        id: i32,
        confirm: &impl Confirm,
    ) -> Result<bool, ClientError> {
        if !confirm.confirm(DELETE_QUESTION) {
            return Ok(false);
        }

        match self.api.delete_prompt(id).await {
            Ok(()) => {
                self.prompts.retain(|prompt| prompt.id != id);
                Ok(true)
            }
            Err(e) => {
                error!(task = "delete prompt", error = e.to_string());
                Err(e)
            }
        }
    }
}

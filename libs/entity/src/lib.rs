pub mod project;
pub mod prompt;

pub mod prelude {
    pub use crate::project::Project as ProjectEntity;
    pub use crate::prompt::Prompt as PromptEntity;
    pub use crate::prompt::PromptDraft;
}

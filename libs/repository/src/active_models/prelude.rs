pub use super::project::Entity as Project;
pub use super::prompt::Entity as Prompt;

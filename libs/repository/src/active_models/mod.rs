pub mod prelude;

pub mod project;
pub mod prompt;

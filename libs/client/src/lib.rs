//! Browser-side state of the prompt library: the in-memory collections, the
//! search and project filters, the edit form and its AI-improve stub, and the
//! HTTP client used to mutate the server.

use serde::Deserialize;

pub mod api;
pub mod filter;
pub mod form;
pub mod improve;
pub mod library;

pub use api::{ClientError, HttpClient, PromptApi};
pub use filter::Filter;
pub use form::PromptForm;
pub use improve::Improver;
pub use library::{Confirm, FormState, Library};

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_improve_delay_ms")]
    pub improve_delay_ms: u64,
}

fn default_improve_delay_ms() -> u64 {
    improve::DEFAULT_DELAY.as_millis() as u64
}

impl ClientConfig {
    pub fn improver(&self) -> Improver {
        Improver::new(std::time::Duration::from_millis(self.improve_delay_ms))
    }
}

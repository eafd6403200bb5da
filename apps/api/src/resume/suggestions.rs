//! Suggestion Client: turns tagged resume text into free-form advice.
//!
//! `AppState` holds an `Arc<dyn SuggestionClient>`; the Gemini-backed
//! implementation is the default, tests swap in a stub.
//! Implementations never fail: problems come back as explanatory text.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::resume::prompts::build_suggestion_prompt;

#[async_trait]
pub trait SuggestionClient: Send + Sync {
    async fn suggest(&self, resume_text: &str) -> String;

    /// Whether the backing service has credentials.
    fn is_configured(&self) -> bool;
}

pub struct GeminiSuggester {
    llm: LlmClient,
}

impl GeminiSuggester {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SuggestionClient for GeminiSuggester {
    async fn suggest(&self, resume_text: &str) -> String {
        let prompt = build_suggestion_prompt(resume_text);
        flatten_suggestions(self.llm.generate(&prompt).await)
    }

    fn is_configured(&self) -> bool {
        self.llm.is_configured()
    }
}

fn flatten_suggestions(result: Result<String, LlmError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Error calling Gemini API: {e}");
            format!("Error generating suggestions: {e}. Please check your API key and try again.")
        }
    }
}

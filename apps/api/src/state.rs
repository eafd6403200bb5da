use std::sync::Arc;

use crate::config::Config;
use crate::resume::suggestions::SuggestionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable suggestion backend. Default: `GeminiSuggester`.
    pub suggester: Arc<dyn SuggestionClient>,
}

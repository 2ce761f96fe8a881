use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is a stateless client — concurrent requests share nothing
/// mutable.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileStore,
    /// Pluggable generative provider. Default: GeminiClient; tests inject mocks.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}

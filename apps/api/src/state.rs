use std::sync::Arc;

use crate::chat::ChatClient;
use crate::config::Config;
use crate::models::college::{College, CutoffRecord};
use crate::upstream::UpstreamClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both datasets are built once at startup and immutable for
/// the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// The synthetic directory served by `/api/v1/colleges*`.
    pub colleges: Arc<Vec<College>>,
    /// Cutoff snapshot rows served by `/api/v1/predict*`. Empty when no
    /// snapshot file was found.
    pub cutoffs: Arc<Vec<CutoffRecord>>,
    pub upstream: UpstreamClient,
    /// `None` when `GEMINI_API_KEY` is unset.
    pub chat: Option<ChatClient>,
    pub config: Config,
}

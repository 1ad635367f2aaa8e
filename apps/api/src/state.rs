use crate::config::Config;
use crate::pipeline::FormatPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; each upload runs an independent pipeline.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: FormatPipeline,
    pub config: Config,
}

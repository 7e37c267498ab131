use std::sync::Arc;

use crate::analysis::tagger::SkillTagger;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill tagger. Default: LexicalTagger.
    pub tagger: Arc<dyn SkillTagger>,
}

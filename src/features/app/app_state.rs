use std::sync::Arc;

use crate::features::ai::{AiProvider, AiService};

pub struct AppState {
    pub(crate) ai: AiService,
}

impl AppState {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self {
            ai: AiService::new(provider),
        }
    }
}

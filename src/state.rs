use std::sync::Arc;

use crate::{config::Config, db::Repository};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<dyn Repository> {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

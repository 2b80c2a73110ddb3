use axum::extract::FromRef;
use std::sync::Arc;

use crate::config::Settings;
use crate::database::MenuItemRepository;
use crate::odata::MetadataProvider;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn MenuItemRepository>,
    pub metadata: Arc<MetadataProvider>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, repository: Arc<dyn MenuItemRepository>) -> Self {
        let metadata = Arc::new(MetadataProvider::new(settings.odata.metadata_path.clone()));

        Self {
            repository,
            metadata,
            settings: Arc::new(settings),
        }
    }
}

impl FromRef<AppState> for Arc<dyn MenuItemRepository> {
    fn from_ref(state: &AppState) -> Self {
        state.repository.clone()
    }
}

impl FromRef<AppState> for Arc<MetadataProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.metadata.clone()
    }
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

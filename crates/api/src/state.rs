use std::sync::Arc;

use modelcat_core::session::EditorSession;
use modelcat_sync::DatasetClient;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The single editing session: working copy plus loaded snapshot.
    pub session: Arc<RwLock<EditorSession>>,
    /// Client for the canonical dataset.
    pub dataset: Arc<DatasetClient>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let dataset = DatasetClient::new(config.dataset_url.clone());
        Self {
            session: Arc::new(RwLock::new(EditorSession::new())),
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }

    /// Fetch the dataset and load it into the session.
    ///
    /// On failure the session is left untouched and the error returned.
    pub async fn sync_dataset(&self) -> Result<usize, modelcat_sync::SyncError> {
        let companies = self.dataset.fetch_dataset().await?;
        let count = companies.len();
        self.session.write().await.load(companies);
        Ok(count)
    }
}

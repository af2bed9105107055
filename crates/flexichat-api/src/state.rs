//! Application state wiring the engine to its infrastructure.
//!
//! AppState holds the one [`ChatEngine`] instance shared by the CLI and the
//! REST API. The engine performs a read-modify-persist sequence per call
//! with no isolation, so access is serialized behind a tokio mutex.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use flexichat_core::engine::ChatEngine;
use flexichat_core::similarity::SimilarityIndex;
use flexichat_infra::config::load_global_config;
use flexichat_infra::record::JsonRecordStore;
use flexichat_infra::resolve_data_dir;
use flexichat_infra::similarity::LexicalSimilarityIndex;
use flexichat_types::config::GlobalConfig;

/// The engine pinned to its concrete store implementation.
pub type ConcreteEngine = ChatEngine<JsonRecordStore>;

/// Shared application state for CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<ConcreteEngine>>,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// config, and bring up the engine over the JSON record store.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let store = JsonRecordStore::new(data_dir.join("memory.json"));
        let similarity: Option<Box<dyn SimilarityIndex>> =
            Some(Box::new(LexicalSimilarityIndex::new()));
        let engine = ChatEngine::init(store, &config, similarity).await?;

        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
            config,
            data_dir,
        })
    }
}

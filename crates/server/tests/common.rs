//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port, backed by a temporary
//! SQLite database and an `httpmock::MockServer` standing in for the
//! completion API.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use ayni::{
    providers::{
        ai::openai::{CompletionSettings, OpenAiProvider},
        db::storage::FarmStore,
    },
    ChatClientBuilder,
};
use ayni_server::{router::create_router, state::AppState};
use ayni_test_utils::TestSetup;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use std::net::SocketAddr;
use tempfile::NamedTempFile;
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the mock completion API listens on.
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub db: TestSetup,
    _db_file: NamedTempFile,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server backed by a fresh temporary database.
    pub async fn spawn() -> Result<Self> {
        let db_file = NamedTempFile::new()?;
        let db_path = db_file
            .path()
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("temp path is not UTF-8"))?
            .to_string();
        let db = TestSetup::at(&db_path).await?;
        let store = Box::new(db.provider.clone());
        Self::spawn_with_store(db, db_file, store).await
    }

    /// Spawns the server with a custom store, keeping `db` for seeding helpers.
    pub async fn spawn_with_store(
        db: TestSetup,
        db_file: NamedTempFile,
        store: Box<dyn FarmStore>,
    ) -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let ai_provider = OpenAiProvider::new(
            mock_server.url(COMPLETIONS_PATH),
            Some("sk-test".to_string()),
            CompletionSettings::default(),
        )?;
        let chat_client = ChatClientBuilder::new()
            .ai_provider(Box::new(ai_provider))
            .store(store)
            .build()?;
        let app_state = AppState::new(chat_client);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            db,
            _db_file: db_file,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts a JSON body to `/chat`.
    pub async fn post_chat(&self, body: serde_json::Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}/chat", self.address))
            .json(&body)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked.
            let _ = tx.send(());
        }
    }
}

use anyhow::Result;
use ayni::errors::{DataAccessError, UpstreamError};
use ayni::providers::ai::AiProvider;
use ayni::providers::db::{sqlite::SqliteProvider, storage::FarmStore};
use ayni::types::{CropRecord, Instruction, SaleRecord, UserId};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// --- Test Setup ---

/// A helper struct to manage database creation for each test.
pub struct TestSetup {
    pub provider: SqliteProvider,
}

impl TestSetup {
    /// Creates a new, isolated in-memory database and initializes the schema.
    pub async fn new() -> Result<Self> {
        Self::at(":memory:").await
    }

    /// Opens (or creates) a database at `db_path` and initializes the schema.
    pub async fn at(db_path: &str) -> Result<Self> {
        let provider = SqliteProvider::new(db_path).await?;
        provider.initialize_schema().await?;
        Ok(Self { provider })
    }

    /// Inserts a user and returns its id.
    pub async fn add_user(&self, id: UserId, username: &str) -> Result<UserId> {
        self.provider
            .initialize_with_data(&format!(
                "INSERT INTO users (id, username) VALUES ({id}, '{username}')"
            ))
            .await?;
        Ok(id)
    }

    /// Inserts a sale for `user_id`. `None` values are stored as NULL.
    pub async fn add_sale(
        &self,
        user_id: UserId,
        name: &str,
        quantity: Option<i64>,
        unit_price: Option<f64>,
        description: Option<&str>,
    ) -> Result<()> {
        let quantity = quantity.map_or("NULL".to_string(), |q| q.to_string());
        let unit_price = unit_price.map_or("NULL".to_string(), |p| p.to_string());
        let description = description.map_or("NULL".to_string(), |d| format!("'{d}'"));
        self.provider
            .initialize_with_data(&format!(
                "INSERT INTO sales (name, quantity, unit_price, description, user_id) \
                 VALUES ('{name}', {quantity}, {unit_price}, {description}, {user_id})"
            ))
            .await?;
        Ok(())
    }

    /// Runs raw seed statements separated by `;`.
    pub async fn seed(&self, sql: &str) -> Result<()> {
        self.provider.initialize_with_data(sql).await?;
        Ok(())
    }
}

// --- Mock AI Provider ---

/// A completion provider that records every call and replays a canned answer.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    response: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<(Vec<Instruction>, String)>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a provider that answers every call with `response`.
    pub fn replying(response: &str) -> Self {
        let provider = Self::new();
        provider.set_response(response);
        provider
    }

    pub fn set_response(&self, response: &str) {
        *self.response.lock().unwrap() = Some(response.to_string());
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(Vec<Instruction>, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(
        &self,
        instructions: &[Instruction],
        user_message: &str,
    ) -> Result<String, UpstreamError> {
        self.calls
            .lock()
            .unwrap()
            .push((instructions.to_vec(), user_message.to_string()));

        match self.response.lock().unwrap().clone() {
            Some(response) => Ok(response),
            None => Err(UpstreamError::Api {
                status: 500,
                body: "MockAiProvider: no response programmed".to_string(),
            }),
        }
    }
}

// --- Unreachable Store ---

/// A store whose every query fails as if the database were down.
///
/// Counts the calls it receives so tests can assert whether the database was
/// touched at all.
#[derive(Clone, Debug, Default)]
pub struct UnreachableStore {
    calls: Arc<Mutex<usize>>,
}

impl UnreachableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn fail<T>(&self) -> Result<T, DataAccessError> {
        *self.calls.lock().unwrap() += 1;
        Err(DataAccessError::Connection(
            "connection refused".to_string(),
        ))
    }
}

#[async_trait]
impl FarmStore for UnreachableStore {
    fn name(&self) -> &str {
        "Unreachable"
    }

    async fn find_user_id(&self, _username: &str) -> Result<Option<UserId>, DataAccessError> {
        self.fail()
    }

    async fn recent_crops(
        &self,
        _user_id: UserId,
        _limit: u32,
    ) -> Result<Vec<CropRecord>, DataAccessError> {
        self.fail()
    }

    async fn recent_sales(
        &self,
        _user_id: UserId,
        _limit: u32,
    ) -> Result<Vec<SaleRecord>, DataAccessError> {
        self.fail()
    }
}

use crate::{
    errors::DataAccessError,
    providers::db::storage::FarmStore,
    types::{CropRecord, SaleRecord, UserId},
};
use async_trait::async_trait;
use std::fmt::{self, Debug};
use tracing::{debug, info};
use turso::{params, Connection, Database, Row, Value as TursoValue};

pub mod sql;

/// A provider for reading farm records from a SQLite database using Turso.
///
/// This provider holds a `Database` instance and opens one connection per
/// query; the connection is released when it goes out of scope, whether the
/// query succeeded or not. When cloned, it shares the same underlying database.
#[derive(Clone)]
pub struct SqliteProvider {
    /// The Turso database instance. It's cloneable and thread-safe.
    pub db: Database,
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` from a file path or in-memory.
    ///
    /// # Arguments
    ///
    /// * `db_path`: The path to the SQLite database file. Use ":memory:" for a unique,
    ///   isolated in-memory database. To share an in-memory database across multiple
    ///   `SqliteProvider` instances (e.g., in tests), create one provider and
    ///   then `.clone()` it.
    pub async fn new(db_path: &str) -> Result<Self, DataAccessError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| DataAccessError::Connection(e.to_string()))?;

        Ok(Self { db })
    }

    fn connect(&self) -> Result<Connection, DataAccessError> {
        self.db
            .connect()
            .map_err(|e| DataAccessError::Connection(e.to_string()))
    }

    /// A helper for tests to pre-populate data by executing multiple SQL statements.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), DataAccessError> {
        let conn = self.connect()?;

        for statement in init_sql.split(';').filter(|s| !s.trim().is_empty()) {
            conn.execute(statement, ())
                .await
                .map_err(|e| DataAccessError::Query(e.to_string()))?;
        }
        Ok(())
    }

    /// Ensures that the `users`, `products`, `crops` and `sales` tables exist.
    /// This function is idempotent.
    pub async fn initialize_schema(&self) -> Result<(), DataAccessError> {
        let conn = self.connect()?;

        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ())
                .await
                .map_err(|e| DataAccessError::Query(e.to_string()))?;
        }
        info!("Farm schema is ready.");
        Ok(())
    }
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

impl AsRef<Database> for SqliteProvider {
    fn as_ref(&self) -> &Database {
        &self.db
    }
}

/// Renders a column value as display text. NULL and blobs are treated as absent.
fn turso_value_to_text(v: TursoValue) -> Option<String> {
    match v {
        TursoValue::Null | TursoValue::Blob(_) => None,
        TursoValue::Integer(i) => Some(i.to_string()),
        TursoValue::Real(f) => Some(f.to_string()),
        TursoValue::Text(s) => Some(s),
    }
}

/// Reads a numeric column. Text columns holding a number are accepted too.
fn turso_value_to_f64(v: TursoValue) -> Option<f64> {
    match v {
        TursoValue::Integer(i) => Some(i as f64),
        TursoValue::Real(f) => Some(f),
        TursoValue::Text(s) => s.trim().parse().ok(),
        TursoValue::Null | TursoValue::Blob(_) => None,
    }
}

fn text_at(row: &Row, idx: usize) -> Result<Option<String>, DataAccessError> {
    row.get_value(idx)
        .map(turso_value_to_text)
        .map_err(|e| DataAccessError::Query(e.to_string()))
}

#[async_trait]
impl FarmStore for SqliteProvider {
    fn name(&self) -> &str {
        "SQLite"
    }

    async fn find_user_id(&self, username: &str) -> Result<Option<UserId>, DataAccessError> {
        debug!(username = %username, "--> Resolving user id");
        let conn = self.connect()?;

        let mut rows = conn
            .query(sql::FIND_USER_ID_SQL, params![username.to_string()])
            .await
            .map_err(|e| DataAccessError::Query(e.to_string()))?;

        let row = rows
            .next()
            .await
            .map_err(|e| DataAccessError::Query(e.to_string()))?;

        match row {
            Some(row) => match row
                .get_value(0)
                .map_err(|e| DataAccessError::Query(e.to_string()))?
            {
                TursoValue::Integer(id) => Ok(Some(id)),
                other => Err(DataAccessError::Query(format!(
                    "Unexpected user id value: {other:?}"
                ))),
            },
            None => Ok(None),
        }
    }

    async fn recent_crops(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<CropRecord>, DataAccessError> {
        let query = sql::recent_crops(limit);
        debug!(user_id, limit, "--> Fetching recent crops");
        let conn = self.connect()?;

        let mut rows = conn
            .query(&query, params![user_id])
            .await
            .map_err(|e| DataAccessError::Query(e.to_string()))?;

        let mut crops = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DataAccessError::Query(e.to_string()))?
        {
            crops.push(CropRecord {
                crop_name: text_at(&row, 0)?,
                watering_days: text_at(&row, 1)?,
                fertilize_crop: text_at(&row, 2)?,
                pest_cleanup_days: text_at(&row, 3)?,
                pick_up_weed: text_at(&row, 4)?,
                oxygenate_crop: text_at(&row, 5)?,
                make_crop_line: text_at(&row, 6)?,
                make_crop_hole: text_at(&row, 7)?,
                product_name: text_at(&row, 8)?,
                recommended_cultivation_depth: text_at(&row, 9)?,
                recommended_cultivation_distance: text_at(&row, 10)?,
                recommended_growing_climate: text_at(&row, 11)?,
                recommended_growing_season: text_at(&row, 12)?,
                recommended_soil_type: text_at(&row, 13)?,
            });
        }

        debug!(user_id, count = crops.len(), "<-- Fetched crops");
        Ok(crops)
    }

    async fn recent_sales(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<SaleRecord>, DataAccessError> {
        let query = sql::recent_sales(limit);
        debug!(user_id, limit, "--> Fetching recent sales");
        let conn = self.connect()?;

        let mut rows = conn
            .query(&query, params![user_id])
            .await
            .map_err(|e| DataAccessError::Query(e.to_string()))?;

        let mut sales = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DataAccessError::Query(e.to_string()))?
        {
            let unit_price = row
                .get_value(2)
                .map(turso_value_to_f64)
                .map_err(|e| DataAccessError::Query(e.to_string()))?;
            sales.push(SaleRecord {
                name: text_at(&row, 0)?,
                quantity: text_at(&row, 1)?,
                unit_price,
                description: text_at(&row, 3)?,
            });
        }

        debug!(user_id, count = sales.len(), "<-- Fetched sales");
        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_values_drop_trailing_zero() {
        assert_eq!(turso_value_to_text(TursoValue::Real(30.0)), Some("30".into()));
        assert_eq!(turso_value_to_text(TursoValue::Real(2.5)), Some("2.5".into()));
    }

    #[test]
    fn test_null_is_absent() {
        assert_eq!(turso_value_to_text(TursoValue::Null), None);
        assert_eq!(turso_value_to_f64(TursoValue::Null), None);
    }

    #[test]
    fn test_numeric_text_price_is_parsed() {
        assert_eq!(turso_value_to_f64(TursoValue::Text("12.50".into())), Some(12.5));
        assert_eq!(turso_value_to_f64(TursoValue::Text("n/a".into())), None);
    }
}

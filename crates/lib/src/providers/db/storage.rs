use crate::{
    errors::DataAccessError,
    types::{CropRecord, SaleRecord, UserId},
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The number of most recent rows fetched for a context paragraph.
pub const RECENT_ROWS_LIMIT: u32 = 5;

/// Read-only access to the farm records owned by registered users.
///
/// Every query that returns crops or sales is scoped by `user_id`;
/// implementations must never return rows belonging to another user.
#[async_trait]
pub trait FarmStore: Send + Sync + DynClone + Debug {
    /// Returns the name of the storage provider (e.g., "SQLite").
    fn name(&self) -> &str;

    /// Looks up the identifier of the user with the given username.
    async fn find_user_id(&self, username: &str) -> Result<Option<UserId>, DataAccessError>;

    /// Returns the user's most recent crops (by crop id, descending) joined with
    /// their associated product, if any.
    async fn recent_crops(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<CropRecord>, DataAccessError>;

    /// Returns the user's most recent sales (by sale id, descending).
    async fn recent_sales(
        &self,
        user_id: UserId,
        limit: u32,
    ) -> Result<Vec<SaleRecord>, DataAccessError>;
}

dyn_clone::clone_trait_object!(FarmStore);

//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `ayni-server`.

pub mod chat;
pub mod general;

pub use chat::*;
pub use general::*;

use super::{errors::AppError, state::AppState};

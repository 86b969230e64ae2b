//! # Providers
//!
//! External collaborators of the chat flow: the relational store holding the
//! user's records and the completion API that writes the reply.

pub mod ai;
pub mod db;

//! FIFA World Cup Table API Library
//!
//! Stores tournament teams behind a small CRUD HTTP API: domain
//! validation, the application service, storage adapters and the
//! axum transport layer.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

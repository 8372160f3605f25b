//! # Gatherly Shared Library
//!
//! This crate contains the types and business logic shared between the
//! Gatherly API server and its tooling.
//!
//! ## Module Organization
//!
//! - `models`: Database models and data structures
//! - `auth`: Password hashing, JWT tokens, and the request auth context
//! - `db`: Connection pool and migration runner
//! - `mail`: Outbound email (SMTP or stub transport)

pub mod auth;
pub mod db;
pub mod mail;
pub mod models;

/// Current version of the Gatherly shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

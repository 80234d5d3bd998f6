//! Playpen - a SQL playground engine over a shared SQLite store.
//!
//! This library exposes the core modules for use in integration tests.

pub mod db;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod query;
pub mod safety;

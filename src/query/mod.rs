//! Guarded query execution over the shared store.

mod executor;

pub use executor::QueryExecutor;

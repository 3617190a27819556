//! Read-only stores over the clinic tables
//!
//! Each store follows these patterns:
//! - Fixed column projection, no `SELECT *`
//! - Filter values are bound parameters, never concatenated into SQL
//! - One statement per call, no transactions
//!
//! Handlers depend on the store traits, not on sqlx, so the HTTP layer can
//! be exercised against `MemoryStore`.

pub mod patients;
pub mod providers;
pub mod memory;

use async_trait::async_trait;

use crate::models::{Patient, Provider};

pub use memory::MemoryStore;
pub use patients::PatientRepo;
pub use providers::ProviderRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the `patients` table
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Every patient row.
    async fn list(&self) -> Result<Vec<Patient>, DbError>;

    /// Patients whose `first_name` equals `first_name` exactly.
    async fn by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, DbError>;
}

/// Read access to the `providers` table
#[async_trait]
pub trait ProviderStore: Send + Sync {
    /// Every provider row.
    async fn list(&self) -> Result<Vec<Provider>, DbError>;

    /// Providers whose `provider_specialty` equals `specialty` exactly.
    async fn by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, DbError>;
}

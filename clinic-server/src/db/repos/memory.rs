//! In-memory store for testing
//!
//! Implements both store traits over plain vectors. Can be told to fail
//! every query, and counts the queries it receives.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DbError, PatientStore, ProviderStore};
use crate::models::{Patient, Provider};

/// In-memory patients/providers store
#[derive(Debug, Default)]
pub struct MemoryStore {
    patients: Vec<Patient>,
    providers: Vec<Provider>,
    failure: Option<String>,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    pub fn with_providers(mut self, providers: Vec<Provider>) -> Self {
        self.providers = providers;
        self
    }

    /// Make every query return `DbError::Unavailable` with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Number of queries served so far (including failed ones).
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), DbError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(DbError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PatientStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Patient>, DbError> {
        self.begin()?;
        Ok(self.patients.clone())
    }

    async fn by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, DbError> {
        self.begin()?;
        Ok(self
            .patients
            .iter()
            .filter(|p| p.first_name == first_name)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProviderStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Provider>, DbError> {
        self.begin()?;
        Ok(self.providers.clone())
    }

    async fn by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, DbError> {
        self.begin()?;
        Ok(self
            .providers
            .iter()
            .filter(|p| p.provider_specialty == specialty)
            .cloned()
            .collect())
    }
}

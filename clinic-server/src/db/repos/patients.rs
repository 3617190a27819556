//! Patient repository

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{DbError, PatientStore};
use crate::models::Patient;

const LIST_PATIENTS: &str = r#"
    SELECT patient_id, first_name, last_name, date_of_birth
    FROM patients
    ORDER BY patient_id
"#;

const PATIENTS_BY_FIRST_NAME: &str = r#"
    SELECT patient_id, first_name, last_name, date_of_birth
    FROM patients
    WHERE first_name = ?
    ORDER BY patient_id
"#;

/// Patient repository backed by a MySQL pool
#[derive(Clone)]
pub struct PatientRepo {
    pool: MySqlPool,
}

impl PatientRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientStore for PatientRepo {
    async fn list(&self) -> Result<Vec<Patient>, DbError> {
        let rows = sqlx::query_as::<_, Patient>(LIST_PATIENTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, DbError> {
        let rows = sqlx::query_as::<_, Patient>(PATIENTS_BY_FIRST_NAME)
            .bind(first_name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::pool::create_pool;

    // Integration tests require a real database with a `patients` table
    // Run with: DB_NAME=... DB_USER=... DB_PASS=... cargo test -p clinic-server -- --ignored

    #[test]
    fn filter_query_binds_first_name() {
        assert!(PATIENTS_BY_FIRST_NAME.contains("WHERE first_name = ?"));
        assert!(!LIST_PATIENTS.contains('?'));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_and_filter_agree() {
        let config = DbConfig::from_env().expect("DB_NAME required");
        let pool = create_pool(&config).await.expect("pool creation failed");
        let repo = PatientRepo::new(pool);

        let all = repo.list().await.expect("list failed");
        if let Some(first) = all.first() {
            let matching = repo
                .by_first_name(&first.first_name)
                .await
                .expect("filter failed");
            assert!(matching.iter().all(|p| p.first_name == first.first_name));
            assert!(matching.contains(first));
        }
    }
}

//! Provider repository

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{DbError, ProviderStore};
use crate::models::Provider;

const LIST_PROVIDERS: &str = r#"
    SELECT provider_id, first_name, last_name, provider_specialty
    FROM providers
    ORDER BY provider_id
"#;

const PROVIDERS_BY_SPECIALTY: &str = r#"
    SELECT provider_id, first_name, last_name, provider_specialty
    FROM providers
    WHERE provider_specialty = ?
    ORDER BY provider_id
"#;

/// Provider repository backed by a MySQL pool
#[derive(Clone)]
pub struct ProviderRepo {
    pool: MySqlPool,
}

impl ProviderRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProviderStore for ProviderRepo {
    async fn list(&self) -> Result<Vec<Provider>, DbError> {
        let rows = sqlx::query_as::<_, Provider>(LIST_PROVIDERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, DbError> {
        let rows = sqlx::query_as::<_, Provider>(PROVIDERS_BY_SPECIALTY)
            .bind(specialty)
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

    #[test]
    fn filter_query_binds_specialty() {
        assert!(PROVIDERS_BY_SPECIALTY.contains("WHERE provider_specialty = ?"));
        assert!(!LIST_PROVIDERS.contains('?'));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_specialty_is_empty() {
        let config = DbConfig::from_env().expect("DB_NAME required");
        let pool = create_pool(&config).await.expect("pool creation failed");
        let repo = ProviderRepo::new(pool);

        let rows = repo
            .by_specialty("no-such-specialty'; DROP TABLE providers; --")
            .await
            .expect("filter failed");
        assert!(rows.is_empty());
    }
}

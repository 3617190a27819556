//! Provider record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the `providers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Provider {
    pub provider_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub provider_specialty: String,
}

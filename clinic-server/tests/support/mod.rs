use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use clinic_server::db::MemoryStore;
use clinic_server::models::{Patient, Provider};
use clinic_server::{build_router, AppState, ServerConfig};
use tower::ServiceExt as _;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), store.clone());
        let router = build_router(state, &ServerConfig::default());
        Self { router, store }
    }

    /// Issue a GET and return status plus decoded JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }
}

pub fn patient(id: i64, first: &str, last: &str, dob: (i32, u32, u32)) -> Patient {
    Patient {
        patient_id: id,
        first_name: first.into(),
        last_name: last.into(),
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
    }
}

pub fn provider(id: i64, first: &str, last: &str, specialty: &str) -> Provider {
    Provider {
        provider_id: id,
        first_name: first.into(),
        last_name: last.into(),
        provider_specialty: specialty.into(),
    }
}

pub fn seeded() -> MemoryStore {
    MemoryStore::new()
        .with_patients(vec![
            patient(1, "Ann", "Lee", (1990, 1, 1)),
            patient(2, "Bob", "Stone", (1985, 6, 30)),
            patient(3, "Ann", "Kim", (2001, 12, 9)),
        ])
        .with_providers(vec![
            provider(10, "Maya", "Cruz", "Cardiology"),
            provider(11, "Omar", "Haddad", "Pediatrics"),
            provider(12, "Ines", "Moreau", "Cardiology"),
        ])
}

//! Domain models
//!
//! Records are read-only mirrors of the external schema. Request input is
//! validated when building a `FilterValue`; invalid input returns
//! ValidationError, not panic.

pub mod validation;
pub mod filter;
pub mod patient;
pub mod provider;

pub use validation::ValidationError;
pub use filter::FilterValue;
pub use patient::Patient;
pub use provider::Provider;

//! Database layer - connection pool and read-only stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no shared global connection
//! - Pool handle is injected into the stores, stores into the router state
//! - Parameterized statements only

pub mod pool;
pub mod repos;

pub use pool::{connect_or_lazy, create_pool, create_pool_with_options, ping, PoolSettings};
pub use repos::*;

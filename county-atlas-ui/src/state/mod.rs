//! State Management
//!
//! Signal-backed stores for the two dashboard slices.

pub mod store;

pub use store::{provide_stores, CountyStore, StatsStore};

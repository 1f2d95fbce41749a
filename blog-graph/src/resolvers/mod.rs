//! Resolvers over the [`EntityStore`](crate::store::EntityStore).
//!
//! Every resolver is a plain function of the store, an optional parent record
//! and typed arguments. Walking the selection tree is left to the executor.
pub mod fields;
pub mod mutation;
pub mod query;

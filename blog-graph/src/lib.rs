//! An in-memory GraphQL engine for users, posts and comments.
//!
//! The [`store`] holds normalized records, the [`resolvers`] derive relations
//! and enforce write-time invariants, and the [`schema`] exposes both through
//! async-graphql.
#![warn(unreachable_pub)]

pub mod configuration;
pub mod error;
mod executable;
mod http_server;
pub mod resolvers;
pub mod schema;
pub mod store;
mod subscriber;

pub use configuration::Configuration;
pub use executable::main;
pub use http_server::HttpServer;
pub use schema::build_schema;
pub use schema::BlogSchema;
pub use store::EntityStore;

//! # Bramble - a minimal in-memory GraphQL blog API
//!
//! Bramble serves users, posts, and comments from plain in-memory
//! collections over GraphQL. It exists as a learning exercise: the
//! interesting part is the relational integrity the mutations enforce
//! (cascading deletes, referential validation, publication gating),
//! not the transport.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server with the sample dataset
//! bramble serve
//!
//! # Run a query from the CLI
//! bramble query '{ users { id name email } }'
//!
//! # Run a mutation
//! bramble query 'mutation { deleteUser(userId: "2") { name } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (User, Post, Comment)
//! - [`store`]: The in-memory store and its integrity rules
//! - [`server`]: Axum HTTP server exposing the schema

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bramble.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BrambleError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and mutating the store.
pub mod graphql;

/// Data models: `User`, `Post`, `Comment`.
pub mod model;

/// The in-memory store.
///
/// Owns the three entity collections and all integrity rules.
pub mod store;

/// Axum HTTP server exposing the GraphQL schema.
pub mod server;

pub mod logging;

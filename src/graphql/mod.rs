//! GraphQL schema and resolvers for bramble.
//!
//! Query and mutation roots sit over the in-memory [`Store`](crate::store::Store);
//! relationship fields (`Post.author`, `User.posts`, ...) are resolved lazily
//! per request with plain linear scans.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bramble serve --port 4000
//!
//! # Print the schema SDL
//! bramble schema
//!
//! # Execute a document against the seeded sample data
//! bramble query '{ users { id name } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `posts`, `comments`
//! - **Mutations**: `createUser`, `createPost`, `createComment`,
//!   `deleteUser`, `deletePost`, `deleteComment`

mod schema;
mod types;

pub use schema::{AppState, BrambleSchema, MutationRoot, QueryRoot, build_schema};
pub use types::*;

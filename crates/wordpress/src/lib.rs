//! Typed WPGraphQL client for the Vitrine WordPress backend.
//!
//! # Architecture
//!
//! - Uses `graphql-client` crate for type-safe GraphQL queries: the schema
//!   mirror lives in `graphql/schema.graphql`, the query documents in
//!   `graphql/queries/`, and the bindings are regenerated from both on every
//!   build
//! - WordPress is source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for API responses (TTL from config)
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_wordpress::{WordPressClient, WordPressConfig};
//!
//! let config = WordPressConfig::from_env()?;
//! let client = WordPressClient::new(&config);
//!
//! // Home page content
//! let celebridades = client.celebridades_home().await?;
//! let portfolio = client.portfolio_home().await?;
//!
//! // Project detail page
//! let projeto = client.projeto_by_slug("loja-conceito-sp").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod cursor;
pub mod types;

mod client;
mod error;

pub use client::WordPressClient;
pub use config::{ConfigError, WordPressConfig};
pub use error::{GraphQLError, GraphQLErrorLocation, WordPressError};
pub use types::*;

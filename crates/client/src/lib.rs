//! Shoplite Client - Typed HTTP client for the remote storefront API.
//!
//! # Architecture
//!
//! - The remote service is the source of truth - every state change is an
//!   endpoint call followed by a fresh fetch, never a local mutation
//! - One request core ([`ApiClient`]) owns header injection, JSON
//!   serialization, and status-code classification; endpoints are thin
//!   typed wrappers over it
//! - The bearer token lives in an explicit [`TokenStore`] session object
//!   passed at construction, not process-global state
//! - No retries, no request dedup, no cancellation: a failed request
//!   surfaces its [`ApiError`] immediately and retries are a caller decision
//!
//! # Example
//!
//! ```rust,ignore
//! use shoplite_client::{ApiClient, ApiConfig, ProductQuery, ProductSort};
//!
//! let client = ApiClient::new(&ApiConfig::from_env()?);
//!
//! let user = client.login("ada@example.com", "hunter2!").await?;
//!
//! let page = client
//!     .products(&ProductQuery {
//!         sort: ProductSort::PriceAsc,
//!         page: Some(1),
//!         ..ProductQuery::default()
//!     })
//!     .await?;
//!
//! let line = client.add_to_cart(page.data[0].id, 1).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
pub mod error;
mod query;
pub mod token;

pub use client::{ApiClient, NewOrder, PAYMENT_CASH_ON_DELIVERY};
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, FieldErrors};
pub use query::{ProductQuery, ProductSort};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};

//! Shoplite Core - Shared types and pure storefront logic.
//!
//! This crate provides the types and derivations shared by every Shoplite
//! component:
//! - `client` - Typed HTTP client for the remote storefront API
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain entities, newtype IDs, and the pagination envelope
//! - [`cart`] - Cart aggregation (item count and total amount)
//! - [`pagination`] - Page-window derivation for pagination controls

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod pagination;
pub mod types;

pub use types::*;

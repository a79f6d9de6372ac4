//! Domain types for the Shoplite storefront.
//!
//! Every entity is a value-like snapshot of remote state. This layer never
//! mutates an entity in place; state changes happen by calling an endpoint
//! and replacing local state with a freshly fetched result.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod order;
pub mod page;
pub mod user;

pub use cart::CartItem;
pub use catalog::{Category, Product};
pub use id::*;
pub use order::{Order, OrderItem};
pub use page::Paginated;
pub use user::User;

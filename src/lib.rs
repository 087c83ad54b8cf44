//! Order flow and back-office logic for a custom photo-album storefront.
//!
//! The two core pieces are the album [`compute_price`](domain::pricing::compute_price)
//! calculator and the multi-step [`CheckoutStepMachine`](domain::checkout::CheckoutStepMachine).
//! Rendering, HTTP and persistence belong to the caller.

pub mod config;
pub mod domain;
pub mod media;
pub mod serde_helpers;

pub use config::{ApiEndpoints, StorefrontConfig};

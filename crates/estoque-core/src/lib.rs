//! # Estoque Core
//!
//! Core types, errors, and utilities shared by the Estoque TI crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page-based pagination for history listings
//! - [`serde`]: Deserialization helpers for query strings
//!
//! # Example
//!
//! ```ignore
//! use estoque_core::errors::AppError;
//! use estoque_core::pagination::{PaginationMeta, PaginationParams};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Item not found"));
//!
//! let params = PaginationParams::default();
//! let meta = PaginationMeta::new(42, &params);
//! ```

pub mod errors;
pub mod pagination;
pub mod serde;

pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams};

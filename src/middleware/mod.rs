//! Request extractors for authentication and per-module access.
//!
//! - [`auth`]: bearer token extraction ([`auth::AuthUser`], [`auth::MaybeAuthUser`])
//! - [`access`]: access gates that resolve the caller's permissions on
//!   every request and reject with 403
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::access::RequireEstoqueEdit;
//!
//! async fn update_item(
//!     RequireEstoqueEdit(auth_user): RequireEstoqueEdit,
//! ) -> Result<impl IntoResponse, AppError> {
//!     // Only runs when the caller is an admin or has can_edit_estoque
//! }
//! ```

pub mod access;
pub mod auth;

//! Access resolution: who is an administrator and what everyone else may do.
//!
//! - [`store`]: the role/permission store seam and its Postgres implementation
//! - [`resolver`]: the stateless resolution algorithm
//! - [`session`]: a client-side holder that discards stale resolutions

pub mod controller;
pub mod resolver;
pub mod router;
pub mod session;
pub mod store;

pub use resolver::{AccessError, Lookup, resolve};
pub use router::init_access_router;
pub use session::{AccessPhase, AccessSession, AccessSnapshot, ResolutionTicket};
pub use store::{AccessStore, PgAccessStore};

//! Backing maps for scopestore
//!
//! This crate implements the mapping facilities stores delegate to:
//! - [`RequestMap`]: private, request-lifetime bindings
//! - [`SessionRegistry`] / [`SessionMap`]: session-lifetime bindings shared
//!   across the requests of one session

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod request;
pub mod session;
pub mod shard;

pub use request::RequestMap;
pub use session::{SessionMap, SessionRegistry};
pub use shard::Shard;

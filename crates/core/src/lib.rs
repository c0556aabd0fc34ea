//! Core types for scopestore
//!
//! This crate defines the pieces shared by every store scope:
//! - [`Value`]: the dynamically typed value held by a binding
//! - [`SessionId`] / [`RequestId`]: scope identities
//! - [`StoreError`]: the error kinds of the store contract
//! - [`Store`] / [`Backing`]: the contract and the seam to backing maps

#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use traits::{Backing, Store};
pub use types::{RequestId, SessionId};
pub use value::Value;

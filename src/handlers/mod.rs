//! HTTP handlers for curtain CRUD.

pub mod curtain;
pub use curtain::*;

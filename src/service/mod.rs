//! CurtainService: the five record operations over an injected store.

mod crud;
mod validation;
pub use crud::CurtainService;
pub use validation::RecordValidator;

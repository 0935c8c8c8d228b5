//! Curtain store: inventory REST backend for curtains on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Curtain, CurtainId};
pub use routes::{app, common_routes_with_ready, curtain_routes, openapi_routes, ApiDoc};
pub use service::CurtainService;
pub use state::AppState;
pub use store::{ensure_curtain_table, ensure_database_exists, CurtainStore, MemoryCurtainStore, PgCurtainStore};

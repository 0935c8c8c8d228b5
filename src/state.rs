//! Shared application state for all routes.

use crate::service::CurtainService;
use crate::store::CurtainStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub curtains: CurtainService,
}

impl AppState {
    pub fn new(store: Arc<dyn CurtainStore>) -> Self {
        AppState {
            curtains: CurtainService::new(store),
        }
    }
}

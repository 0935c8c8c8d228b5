//! Curtain CRUD on top of a `CurtainStore`.

use crate::error::AppError;
use crate::model::{Curtain, CurtainId};
use crate::service::RecordValidator;
use crate::store::CurtainStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct CurtainService {
    store: Arc<dyn CurtainStore>,
}

impl CurtainService {
    pub fn new(store: Arc<dyn CurtainStore>) -> Self {
        CurtainService { store }
    }

    pub fn store(&self) -> &Arc<dyn CurtainStore> {
        &self.store
    }

    /// Every stored curtain, ordered by id.
    pub async fn list(&self) -> Result<Vec<Curtain>, AppError> {
        self.store.list().await
    }

    pub async fn get(&self, id: CurtainId) -> Result<Curtain, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("curtain {}", id)))
    }

    /// Insert the posted record. An absent payload is an invalid argument; a
    /// duplicate id is left to the store, which reports a conflict.
    pub async fn create(&self, curtain: Option<Curtain>) -> Result<Curtain, AppError> {
        let curtain = curtain.ok_or_else(|| AppError::InvalidArgument("curtain payload is required".into()))?;
        let curtain = RecordValidator::normalize(curtain)?;
        let stored = self.store.insert(&curtain).await?;
        tracing::info!(id = stored.id, "curtain created");
        Ok(stored)
    }

    /// Replace the record at `id` with `curtain`. The path id and payload id must agree.
    ///
    /// When the store reports that nothing was written, the record is looked up
    /// again: gone means not found, still present means the conflict is fatal.
    pub async fn update(&self, id: CurtainId, curtain: Curtain) -> Result<(), AppError> {
        if id != curtain.id {
            return Err(AppError::BadRequest(format!(
                "path id {} does not match payload id {}",
                id, curtain.id
            )));
        }
        let curtain = RecordValidator::normalize(curtain)?;
        match self.store.replace(&curtain).await {
            Ok(()) => {
                tracing::info!(id, "curtain updated");
                Ok(())
            }
            Err(AppError::ConcurrencyConflict(msg)) => {
                if !self.store.exists(id).await? {
                    return Err(AppError::NotFound(format!("curtain {}", id)));
                }
                tracing::warn!(id, "update conflict on existing curtain");
                Err(AppError::ConcurrencyConflict(msg))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: CurtainId) -> Result<(), AppError> {
        if self.store.get(id).await?.is_none() {
            return Err(AppError::NotFound(format!("curtain {}", id)));
        }
        self.store.remove(id).await?;
        tracing::info!(id, "curtain deleted");
        Ok(())
    }
}

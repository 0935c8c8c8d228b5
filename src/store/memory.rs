//! In-memory curtain store with the same conflict semantics as PostgreSQL.

use super::CurtainStore;
use crate::error::AppError;
use crate::model::{Curtain, CurtainId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct MemoryCurtainStore {
    rows: RwLock<BTreeMap<CurtainId, Curtain>>,
}

impl MemoryCurtainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `records`; a later record replaces an earlier one with the same id.
    pub fn with_records(records: impl IntoIterator<Item = Curtain>) -> Self {
        let rows = records.into_iter().map(|c| (c.id, c)).collect();
        MemoryCurtainStore {
            rows: RwLock::new(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<CurtainId, Curtain>>, AppError> {
        self.rows
            .read()
            .map_err(|_| AppError::Internal("curtain store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<CurtainId, Curtain>>, AppError> {
        self.rows
            .write()
            .map_err(|_| AppError::Internal("curtain store lock poisoned".into()))
    }
}

#[async_trait]
impl CurtainStore for MemoryCurtainStore {
    async fn list(&self) -> Result<Vec<Curtain>, AppError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn get(&self, id: CurtainId) -> Result<Option<Curtain>, AppError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn exists(&self, id: CurtainId) -> Result<bool, AppError> {
        Ok(self.read()?.contains_key(&id))
    }

    async fn insert(&self, curtain: &Curtain) -> Result<Curtain, AppError> {
        let mut rows = self.write()?;
        if rows.contains_key(&curtain.id) {
            return Err(AppError::Conflict(format!("curtain {} already exists", curtain.id)));
        }
        rows.insert(curtain.id, curtain.clone());
        Ok(curtain.clone())
    }

    async fn replace(&self, curtain: &Curtain) -> Result<(), AppError> {
        let mut rows = self.write()?;
        match rows.get_mut(&curtain.id) {
            Some(row) => {
                *row = curtain.clone();
                Ok(())
            }
            None => Err(AppError::ConcurrencyConflict(format!(
                "update of curtain {} affected no rows",
                curtain.id
            ))),
        }
    }

    async fn remove(&self, id: CurtainId) -> Result<(), AppError> {
        match self.write()?.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::ConcurrencyConflict(format!(
                "delete of curtain {} affected no rows",
                id
            ))),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryCurtainStore::with_records([
            Curtain::new(5, "Blackout Navy", dec!(1500.00)),
            Curtain::new(2, "Sheer White", dec!(800.00)),
        ]);
        let ids: Vec<_> = store.list().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_a_conflict() {
        let store = MemoryCurtainStore::with_records([Curtain::new(1, "Velvet Red", dec!(1200.00))]);
        let err = store
            .insert(&Curtain::new(1, "Other", dec!(1.00)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.get(1).await.unwrap().unwrap().name, "Velvet Red");
    }

    #[tokio::test]
    async fn writes_to_missing_rows_report_conflicts() {
        let store = MemoryCurtainStore::new();
        let err = store
            .replace(&Curtain::new(9, "Ghost", dec!(1.00)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConcurrencyConflict(_)));
        assert!(matches!(
            store.remove(9).await.unwrap_err(),
            AppError::ConcurrencyConflict(_)
        ));
        assert!(store.is_empty());
    }
}

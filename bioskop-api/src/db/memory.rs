//! In-memory repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use shared::models::{Bioskop, BioskopInput};
use tokio::sync::RwLock;

use super::{BioskopRepository, RepoResult};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Bioskop>,
    last_id: i64,
}

/// [`BioskopRepository`] kept in process memory
///
/// Ids start at 1 and are never reused, like a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryBioskopRepository {
    table: RwLock<Table>,
}

impl MemoryBioskopRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BioskopRepository for MemoryBioskopRepository {
    async fn find_all(&self) -> RepoResult<Vec<Bioskop>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Bioskop>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, data: &BioskopInput) -> RepoResult<Bioskop> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let row = Bioskop::from_input(table.last_id, data.clone());
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, data: &BioskopInput) -> RepoResult<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Bioskop::from_input(id, data.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}

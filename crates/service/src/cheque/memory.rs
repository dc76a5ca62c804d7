use async_trait::async_trait;
use chrono::{DurationRound, TimeDelta, Utc};
use tokio::sync::RwLock;

use models::cheque;
use crate::{cheque::{ChequeRepository, NewCheque}, errors::ServiceError};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: Vec<cheque::Model>,
}

/// Process-local cheque store with the same observable behavior as the
/// database-backed one: ids only ever grow, timestamps have microsecond
/// precision and listings are newest first.
#[derive(Default)]
pub struct InMemoryChequeRepository {
    inner: RwLock<Table>,
}

impl InMemoryChequeRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl ChequeRepository for InMemoryChequeRepository {
    async fn create(&self, input: NewCheque) -> Result<cheque::Model, ServiceError> {
        let now = Utc::now();
        // match PostgreSQL timestamptz precision
        let created_at = now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now);

        let mut table = self.inner.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Db("cheque id sequence exhausted".into()))?;
        let row = cheque::Model {
            id: table.last_id,
            cheque_number: input.cheque_number,
            manager_approved: input.manager_approved,
            created_at,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<cheque::Model>, ServiceError> {
        let table = self.inner.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<cheque::Model, ServiceError> {
        let table = self.inner.read().await;
        table
            .rows
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Cheque"))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let mut table = self.inner.write().await;
        let pos = table
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("Cheque"))?;
        table.rows.remove(pos);
        Ok(())
    }

    async fn clear(&self) -> Result<u64, ServiceError> {
        let mut table = self.inner.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }
}

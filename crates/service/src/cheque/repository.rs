use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::cheque;
use crate::{cheque::NewCheque, db::cheque_service, errors::ServiceError};

/// Storage seam for cheque records.
///
/// `get` and `delete` report a missing id as [`ServiceError::NotFound`].
#[async_trait]
pub trait ChequeRepository: Send + Sync {
    async fn create(&self, input: NewCheque) -> Result<cheque::Model, ServiceError>;
    async fn list(&self) -> Result<Vec<cheque::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<cheque::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    async fn clear(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmChequeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmChequeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ChequeRepository for SeaOrmChequeRepository {
    async fn create(&self, input: NewCheque) -> Result<cheque::Model, ServiceError> {
        cheque_service::create_cheque(&self.db, &input).await
    }

    async fn list(&self) -> Result<Vec<cheque::Model>, ServiceError> {
        cheque_service::list_cheques(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<cheque::Model, ServiceError> {
        cheque_service::get_cheque(&self.db, id).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        cheque_service::delete_cheque(&self.db, id).await
    }

    async fn clear(&self) -> Result<u64, ServiceError> {
        cheque_service::clear_cheques(&self.db).await
    }
}

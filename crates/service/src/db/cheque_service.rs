use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::{debug, info};

use models::cheque;
use crate::{cheque::NewCheque, errors::ServiceError};

/// Create a cheque; insert and re-select share one transaction.
pub async fn create_cheque(db: &DatabaseConnection, input: &NewCheque) -> Result<cheque::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = cheque::create(&txn, &input.cheque_number, input.manager_approved).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = created.id, cheque_number = %created.cheque_number, manager_approved = created.manager_approved, "created cheque");
    Ok(created)
}

/// All cheques, newest first. Equal timestamps fall back to id order.
pub async fn list_cheques(db: &DatabaseConnection) -> Result<Vec<cheque::Model>, ServiceError> {
    let rows = cheque::Entity::find()
        .order_by_desc(cheque::Column::CreatedAt)
        .order_by_desc(cheque::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(count = rows.len(), "listed cheques");
    Ok(rows)
}

/// Get cheque by id.
pub async fn get_cheque(db: &DatabaseConnection, id: i32) -> Result<cheque::Model, ServiceError> {
    cheque::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("Cheque"))
}

/// Delete one cheque. Absent ids are `NotFound`, including a row removed
/// concurrently between the existence check and the delete.
pub async fn delete_cheque(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    get_cheque(db, id).await?;
    let res = cheque::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Cheque"));
    }
    info!(id, "deleted cheque");
    Ok(())
}

/// Delete every cheque; returns how many rows were removed.
pub async fn clear_cheques(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let res = cheque::Entity::delete_many()
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(removed = res.rows_affected, "cleared cheques");
    Ok(res.rows_affected)
}

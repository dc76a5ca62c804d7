use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A stored cheque. `id` and `created_at` are assigned on insert and never change.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cheques")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cheque_number: String,
    pub manager_approved: bool,
    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a cheque stamped with the current UTC time, then read the row back
/// by its generated id so the caller sees exactly what the store holds.
///
/// Pass a transaction to keep the insert and the re-select in one context.
pub async fn create<C>(db: &C, cheque_number: &str, manager_approved: bool) -> Result<Model, ModelError>
where
    C: ConnectionTrait,
{
    let am = ActiveModel {
        cheque_number: Set(cheque_number.to_string()),
        manager_approved: Set(manager_approved),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let res = Entity::insert(am).exec(db).await?;
    Entity::find_by_id(res.last_insert_id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::Db(format!("cheque {} missing right after insert", res.last_insert_id)))
}

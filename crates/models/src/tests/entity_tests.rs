use chrono::{TimeZone, Utc};
use sea_orm::{DbBackend, EntityTrait, QueryOrder, QueryTrait, Schema};

use crate::cheque;

#[test]
fn model_serializes_all_four_fields() {
    let m = cheque::Model {
        id: 7,
        cheque_number: "CHQ-2026-001".into(),
        manager_approved: true,
        created_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["id"], 7);
    assert_eq!(v["cheque_number"], "CHQ-2026-001");
    assert_eq!(v["manager_approved"], true);
    assert_eq!(v["created_at"], "2026-01-15T12:00:00Z");
    assert_eq!(v.as_object().unwrap().len(), 4);
}

#[test]
fn create_table_statement_is_idempotent_and_serial() {
    let schema = Schema::new(DbBackend::Postgres);
    let mut table = schema.create_table_from_entity(cheque::Entity);
    table.if_not_exists();
    let sql = DbBackend::Postgres.build(&table).to_string();
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"cheques\""), "{sql}");
    assert!(sql.to_lowercase().contains("serial"), "{sql}");
    assert!(sql.contains("PRIMARY KEY"), "{sql}");
    assert!(!sql.contains("UNIQUE"), "cheque_number must not be unique: {sql}");
}

#[test]
fn created_at_gets_a_plain_index() {
    let schema = Schema::new(DbBackend::Postgres);
    let indexes = schema.create_index_from_entity(cheque::Entity);
    assert_eq!(indexes.len(), 1);
    let mut idx = indexes.into_iter().next().unwrap();
    idx.if_not_exists();
    let sql = DbBackend::Postgres.build(&idx).to_string();
    assert!(sql.contains("IF NOT EXISTS"), "{sql}");
    assert!(sql.contains("\"created_at\""), "{sql}");
}

#[test]
fn newest_first_ordering_sql() {
    let sql = cheque::Entity::find()
        .order_by_desc(cheque::Column::CreatedAt)
        .order_by_desc(cheque::Column::Id)
        .build(DbBackend::Postgres)
        .to_string();
    assert!(sql.ends_with("ORDER BY \"cheques\".\"created_at\" DESC, \"cheques\".\"id\" DESC"), "{sql}");
}

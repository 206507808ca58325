use daybook::{
    catalog::{self, country, customer},
    stmt::Value,
    Row, RowState, UserContext,
};

use pretty_assertions::assert_eq;
use tests::{country_values, customer_values, scripted_db};

#[tokio::test]
async fn saving_a_new_customer_inserts_and_refreshes() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::new("greg");
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::new(table, &ctx);
    row.apply_mutation(table, &ctx, customer::NAME, Value::from("Vector Industries"))
        .unwrap();
    row.apply_mutation(table, &ctx, customer::ADDRESS_ID, Value::I32(7))
        .unwrap();
    row.apply_mutation(table, &ctx, customer::ACTIVE, Value::Bool(true))
        .unwrap();

    connection.push_exec(1, Some(42));
    connection.push_rows(vec![customer_values(42, "Vector Industries", 7, true)]);

    db.save(&mut row, &ctx).await.unwrap();

    assert_eq!(row.state(), RowState::Unmodified);
    assert_eq!(row.primary_key(table), 42);

    let executed = connection.executed();
    assert_eq!(executed.len(), 2);
    assert_eq!(
        executed[0].sql,
        "INSERT INTO `customer` (`customerName`, `addressId`, `active`, `createDate`, \
         `createdBy`, `lastUpdate`, `lastUpdateBy`) \
         VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    assert_eq!(executed[0].params[..3], [
        Value::from("Vector Industries"),
        Value::I32(7),
        Value::Bool(true),
    ]);
    // A new row carries one stamp: lastUpdate mirrors createDate
    assert_eq!(executed[0].params[3], executed[0].params[5]);
    assert_eq!(executed[0].params[4], Value::from("greg"));
    assert_eq!(executed[0].params[6], Value::from("greg"));

    assert!(executed[1].sql.ends_with("FROM `customer` WHERE `customerId` = ?"));
    assert_eq!(executed[1].params, [Value::I32(42)]);
}

#[tokio::test]
async fn saving_a_modified_row_updates_then_reloads() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::new("greg");
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::from_values(table, customer_values(3, "Vector", 7, true)).unwrap();
    row.apply_mutation(table, &ctx, customer::NAME, Value::from("Vector Industries"))
        .unwrap();
    assert_eq!(row.state(), RowState::Modified);

    connection.push_exec(1, None);
    connection.push_rows(vec![customer_values(3, "Vector Industries", 7, true)]);

    db.save(&mut row, &ctx).await.unwrap();

    assert_eq!(row.state(), RowState::Unmodified);
    assert_eq!(row.value(customer::NAME), &Value::from("Vector Industries"));

    let executed = connection.executed();
    assert_eq!(
        executed[0].sql,
        "UPDATE `customer` SET `customerName` = ?, `addressId` = ?, `active` = ?, \
         `lastUpdate` = ?, `lastUpdateBy` = ? \
         WHERE `customerId` = ?"
    );
    assert_eq!(executed[0].params[0], Value::from("Vector Industries"));
    assert_eq!(executed[0].params[1], Value::I32(7));
    assert_eq!(executed[0].params[2], Value::Bool(true));
    assert_eq!(executed[0].params[4], Value::from("greg"));
    assert_eq!(executed[0].params[5], Value::I32(3));
}

#[tokio::test]
async fn a_deleted_row_cannot_be_saved() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::default();
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::from_values(table, customer_values(3, "Vector", 7, true)).unwrap();
    connection.push_exec(1, None);
    db.delete(&mut row).await.unwrap();

    let err = db.save(&mut row, &ctx).await.unwrap_err();
    assert!(err.is_invalid_row_state());
    assert_eq!(connection.executed().len(), 1);
}

#[tokio::test]
async fn saving_with_an_unassigned_foreign_key_is_rejected() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::default();
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::new(table, &ctx);
    row.apply_mutation(table, &ctx, customer::NAME, Value::from("Vector Industries"))
        .unwrap();

    let err = db.save(&mut row, &ctx).await.unwrap_err();
    assert!(err.is_invalid_row_state());
    assert!(err.to_string().contains("`addressId`"));
    assert!(connection.executed().is_empty());
}

#[tokio::test]
async fn deleting_a_new_row_skips_the_database() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::default();
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::new(table, &ctx);
    db.delete(&mut row).await.unwrap();

    assert_eq!(row.state(), RowState::Deleted);
    assert!(connection.executed().is_empty());
}

#[tokio::test]
async fn deleting_a_persisted_row_issues_the_statement_once() {
    let (mut db, connection) = scripted_db();
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::from_values(table, customer_values(3, "Vector", 7, true)).unwrap();
    connection.push_exec(1, None);
    db.delete(&mut row).await.unwrap();
    assert_eq!(row.state(), RowState::Deleted);

    let executed = connection.executed();
    assert_eq!(executed[0].sql, "DELETE FROM `customer` WHERE `customerId` = ?");
    assert_eq!(executed[0].params, [Value::I32(3)]);

    let err = db.delete(&mut row).await.unwrap_err();
    assert!(err.is_invalid_row_state());
    assert_eq!(connection.executed().len(), 1);
}

#[tokio::test]
async fn deleting_a_missing_row_reports_the_failure() {
    let (mut db, connection) = scripted_db();
    let schema = catalog::schema();
    let table = schema.table(customer::TABLE);

    let mut row = Row::from_values(table, customer_values(3, "Vector", 7, true)).unwrap();
    connection.push_exec(0, None);

    let err = db.delete(&mut row).await.unwrap_err();
    assert!(err.to_string().contains("no row was deleted"));
    assert_eq!(row.state(), RowState::Unmodified);
}

#[tokio::test]
async fn the_insert_column_list_skips_the_generated_key() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::default();
    let schema = catalog::schema();
    let table = schema.table(country::TABLE);

    let mut row = Row::new(table, &ctx);
    row.apply_mutation(table, &ctx, country::COUNTRY, Value::from("US"))
        .unwrap();

    connection.push_exec(1, Some(4));
    connection.push_rows(vec![country_values(4, "US")]);

    db.save(&mut row, &ctx).await.unwrap();

    assert_eq!(row.state(), RowState::Unmodified);
    assert_eq!(row.primary_key(table), 4);
    assert_eq!(
        connection.executed()[0].sql,
        "INSERT INTO `country` (`country`, `createDate`, `createdBy`, \
         `lastUpdate`, `lastUpdateBy`) \
         VALUES (?, ?, ?, ?, ?)"
    );
    assert_eq!(connection.executed()[0].params[0], Value::from("US"));
    assert_eq!(connection.executed()[0].params[2], Value::from("admin"));
}

#[tokio::test]
async fn an_insert_without_a_generated_key_is_an_error() {
    let (mut db, connection) = scripted_db();
    let ctx = UserContext::default();
    let schema = catalog::schema();
    let table = schema.table(country::TABLE);

    let mut row = Row::new(table, &ctx);
    row.apply_mutation(table, &ctx, country::COUNTRY, Value::from("US"))
        .unwrap();
    connection.push_exec(1, None);

    let err = db.save(&mut row, &ctx).await.unwrap_err();
    assert!(err.to_string().contains("did not return a generated key"));
    assert_eq!(row.state(), RowState::New);
}

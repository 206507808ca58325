use daybook::{
    catalog::{city, customer, user},
    stmt::{Expr, Filter, JoinKind, NodeId, OrderByColumn, SelectTable, Value},
    Select,
};

use daybook_sql::Serializer;
use pretty_assertions::assert_eq;
use tests::{customer_values, scripted_db, stamp};

#[tokio::test]
async fn joined_query_renders_and_binds_in_lockstep() {
    let (mut db, connection) = scripted_db();

    let select = {
        let schema = db.schema();
        let mut tables = SelectTable::new(schema, customer::TABLE, "p").unwrap();
        tables
            .join_fk(schema, NodeId::ROOT, JoinKind::Left, customer::ADDRESS_ID, "l")
            .unwrap();

        let mut select = Select::new(tables);
        select.filter = Filter::new(Expr::eq(customer::ACTIVE, true)).and(Expr::or(
            Expr::eq(city::CITY, "Phoenix"),
            Expr::eq(city::CITY, "Denver"),
        ));
        select.order_by = vec![OrderByColumn::asc("customerName")];
        select
    };

    let mut scripted = customer_values(3, "Vector Industries", 7, true);
    scripted.extend([
        Value::String("100 Main St".to_string()),
        Value::String("".to_string()),
        Value::I32(11),
        Value::String("85001".to_string()),
        Value::String("555-0100".to_string()),
    ]);
    connection.push_rows(vec![scripted.clone()]);

    let rows = db.query(&select).await.unwrap();
    assert_eq!(rows, vec![scripted]);

    let executed = connection.executed();
    assert_eq!(executed.len(), 1);
    assert_eq!(
        executed[0].sql,
        "SELECT p.`customerId` AS `customerId`, p.`customerName` AS `customerName`, \
         p.`addressId` AS `addressId`, p.`active` AS `active`, \
         p.`createDate` AS `createDate`, p.`createdBy` AS `createdBy`, \
         p.`lastUpdate` AS `lastUpdate`, p.`lastUpdateBy` AS `lastUpdateBy`, \
         l.`address` AS `address`, l.`address2` AS `address2`, l.`cityId` AS `cityId`, \
         l.`postalCode` AS `postalCode`, l.`phone` AS `phone` \
         FROM `customer` p LEFT JOIN `address` l ON p.`addressId`=l.`addressId` \
         WHERE `active` = ? AND (`city` = ? OR `city` = ?) \
         ORDER BY `customerName`"
    );
    assert_eq!(
        executed[0].params,
        [
            Value::Bool(true),
            Value::from("Phoenix"),
            Value::from("Denver"),
        ]
    );
}

#[tokio::test]
async fn facade_sends_exactly_what_the_serializer_renders() {
    let (mut db, connection) = scripted_db();

    let mut select = Select::new(SelectTable::new(db.schema(), city::TABLE, "c").unwrap());
    select.filter = Filter::new(Expr::begins_with(city::CITY, "Pho", '\\'));
    select.order_by = vec![OrderByColumn::desc("city")];

    let mut expected_params = vec![];
    let expected_sql =
        Serializer::new(db.schema()).serialize(&select.clone().into(), &mut expected_params);

    connection.push_rows(vec![]);
    db.query(&select).await.unwrap();

    let executed = connection.executed();
    assert_eq!(executed[0].sql, expected_sql);
    assert_eq!(executed[0].params, expected_params);
    assert_eq!(expected_sql.matches('?').count(), expected_params.len());
}

#[tokio::test]
async fn load_hydrates_rows_from_a_single_table_select() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![
        customer_values(3, "Vector Industries", 7, true),
        customer_values(4, "Wells and Sons", 9, true),
    ]);

    let rows = db
        .load(
            customer::TABLE,
            Filter::new(Expr::eq(customer::ACTIVE, true)),
            vec![OrderByColumn::asc("customerName")],
        )
        .await
        .unwrap();

    let executed = connection.executed();
    assert_eq!(
        executed[0].sql,
        "SELECT `customerId`, `customerName`, `addressId`, `active`, `createDate`, \
         `createdBy`, `lastUpdate`, `lastUpdateBy` \
         FROM `customer` WHERE `active` = ? ORDER BY `customerName`"
    );
    assert_eq!(executed[0].params, [Value::Bool(true)]);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| !row.is_modified()));
    assert_eq!(rows[0].value(customer::NAME), &Value::from("Vector Industries"));
    assert_eq!(rows[1].value(customer::ID), &Value::I32(4));
    assert_eq!(rows[0].create_date(db.schema().table(customer::TABLE)), stamp());
}

#[tokio::test]
async fn load_first_returns_the_first_match() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![
        customer_values(3, "Vector Industries", 7, true),
        customer_values(4, "Wells and Sons", 9, true),
    ]);

    let row = db
        .load_first(customer::TABLE, Filter::empty(), vec![])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.value(customer::ID), &Value::I32(3));

    connection.push_rows(vec![]);
    let none = db
        .load_first(customer::TABLE, Filter::empty(), vec![])
        .await
        .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn load_by_primary_key_filters_on_the_key() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![customer_values(3, "Vector Industries", 7, true)]);

    let row = db
        .load_by_primary_key(customer::TABLE, 3)
        .await
        .unwrap()
        .unwrap();

    let executed = connection.executed();
    assert!(executed[0].sql.ends_with("FROM `customer` WHERE `customerId` = ?"));
    assert_eq!(executed[0].params, [Value::I32(3)]);
    assert_eq!(row.value(customer::NAME), &Value::from("Vector Industries"));

    connection.push_rows(vec![]);
    let missing = db.load_by_primary_key(customer::TABLE, 404).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn count_reads_the_scalar_result() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![vec![Value::I64(42)]]);

    let count = db
        .count(user::TABLE, Filter::new(Expr::eq(user::ACTIVE, 1)))
        .await
        .unwrap();
    assert_eq!(count, 42);

    let executed = connection.executed();
    assert_eq!(
        executed[0].sql,
        "SELECT COUNT(`userId`) FROM `user` WHERE `active` = ?"
    );
    assert_eq!(executed[0].params, [Value::I32(1)]);
}

#[tokio::test]
async fn empty_filter_renders_no_where_clause() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![vec![Value::I64(0)]]);
    db.count(user::TABLE, Filter::empty()).await.unwrap();

    assert_eq!(
        connection.executed()[0].sql,
        "SELECT COUNT(`userId`) FROM `user`"
    );
}

use daybook_core::catalog::{self, address, appointment, city, country, customer, user};
use daybook_sql::{
    serializer::{Params, Placeholder},
    stmt::{self, Expr, Filter, JoinKind, NodeId, OrderByColumn, SelectTable, Value},
    Serializer, Statement,
};

use pretty_assertions::assert_eq;

struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &Value) -> Placeholder {
        Placeholder(0)
    }
}

fn serialize(statement: impl Into<Statement>) -> (String, Vec<Value>) {
    let schema = catalog::schema();
    let mut params = vec![];
    let sql = Serializer::new(&schema).serialize(&statement.into(), &mut params);
    (sql, params)
}

#[test]
fn customer_join_matches_the_documented_rendering() {
    let schema = catalog::schema();

    let mut tables = SelectTable::new(&schema, customer::TABLE, "p").unwrap();
    tables
        .join_fk(&schema, NodeId::ROOT, JoinKind::Left, customer::ADDRESS_ID, "l")
        .unwrap();

    let filter = Filter::new(Expr::eq(customer::ACTIVE, true)).and(Expr::or(
        Expr::eq(city::CITY, "Phoenix"),
        Expr::eq(city::CITY, "Denver"),
    ));

    let statement = stmt::Select {
        tables,
        filter,
        order_by: vec![OrderByColumn::asc("customerName")],
    };

    let (sql, params) = serialize(statement);

    assert_eq!(
        sql,
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
        params,
        [
            Value::Bool(true),
            Value::from("Phoenix"),
            Value::from("Denver"),
        ]
    );
}

#[test]
fn chained_joins_render_depth_first() {
    let schema = catalog::schema();

    let mut tables = SelectTable::new(&schema, customer::TABLE, "p").unwrap();
    let joined = tables
        .join_fk(&schema, NodeId::ROOT, JoinKind::Inner, customer::ADDRESS_ID, "a")
        .unwrap();
    tables
        .join_fk(&schema, joined, JoinKind::Left, address::CITY_ID, "t")
        .unwrap();

    let (sql, params) = serialize(stmt::Select::new(tables));

    let from = sql.find(" FROM ").unwrap();
    assert_eq!(
        &sql[from..],
        " FROM `customer` p \
         INNER JOIN `address` a ON p.`addressId`=a.`addressId` \
         LEFT JOIN `city` t ON a.`cityId`=t.`cityId`"
    );
    assert!(params.is_empty());
}

#[test]
fn single_table_select_renders_unqualified() {
    let schema = catalog::schema();
    let tables = SelectTable::new(&schema, city::TABLE, "c").unwrap();

    let mut statement = stmt::Select::new(tables);
    statement.filter = Filter::new(Expr::eq(city::COUNTRY_ID, 5));
    statement.order_by = vec![OrderByColumn::asc("city")];

    let (sql, params) = serialize(statement);

    assert_eq!(
        sql,
        "SELECT `cityId`, `city`, `countryId`, `createDate`, `createdBy`, \
         `lastUpdate`, `lastUpdateBy` \
         FROM `city` WHERE `countryId` = ? ORDER BY `city`"
    );
    assert_eq!(params, [Value::I32(5)]);
}

#[test]
fn bare_select_has_no_trailing_clauses() {
    let schema = catalog::schema();
    let tables = SelectTable::new(&schema, country::TABLE, "n").unwrap();

    let (sql, params) = serialize(stmt::Select::new(tables));

    assert_eq!(
        sql,
        "SELECT `countryId`, `country`, `createDate`, `createdBy`, \
         `lastUpdate`, `lastUpdateBy` FROM `country`"
    );
    assert!(params.is_empty());
}

#[test]
fn order_by_skips_blank_terms() {
    let schema = catalog::schema();
    let serializer = Serializer::new(&schema);

    let mut statement = stmt::Select::new(SelectTable::new(&schema, user::TABLE, "u").unwrap());
    statement.order_by = vec![
        OrderByColumn::desc("userName"),
        OrderByColumn::asc(""),
        OrderByColumn::asc("userId"),
    ];

    let sql = serializer.serialize(&statement.clone().into(), &mut NoParams);
    let from = sql.find(" FROM ").unwrap();
    assert_eq!(&sql[from..], " FROM `user` ORDER BY `userName` DESC, `userId`");

    statement.order_by = vec![OrderByColumn::asc(""), OrderByColumn::asc("   ")];
    let sql = serializer.serialize(&statement.into(), &mut NoParams);
    assert!(sql.ends_with("FROM `user`"), "sql={sql}");
}

#[test]
fn count_renders_over_the_primary_key() {
    let mut statement = stmt::Count::new(user::TABLE);
    statement.filter = Filter::new(Expr::eq(user::ACTIVE, 1));

    let (sql, params) = serialize(statement);

    assert_eq!(sql, "SELECT COUNT(`userId`) FROM `user` WHERE `active` = ?");
    assert_eq!(params, [Value::I32(1)]);
}

#[test]
fn insert_binds_every_assignment() {
    let statement = stmt::Insert {
        table: country::TABLE,
        assignments: vec![
            (country::ID, 801.into()),
            (country::COUNTRY, "Canada".into()),
        ],
    };

    let (sql, params) = serialize(statement);

    assert_eq!(sql, "INSERT INTO `country` (`countryId`, `country`) VALUES (?, ?)");
    assert_eq!(params, [Value::I32(801), Value::from("Canada")]);
}

#[test]
fn update_sets_then_filters() {
    let statement = stmt::Update {
        table: customer::TABLE,
        assignments: vec![
            (customer::NAME, "Acme Corp".into()),
            (customer::ACTIVE, false.into()),
        ],
        filter: Filter::new(Expr::eq(customer::ID, 3)),
    };

    let (sql, params) = serialize(statement);

    assert_eq!(
        sql,
        "UPDATE `customer` SET `customerName` = ?, `active` = ? WHERE `customerId` = ?"
    );
    assert_eq!(
        params,
        [Value::from("Acme Corp"), Value::Bool(false), Value::I32(3)]
    );
}

#[test]
fn delete_filters_by_primary_key() {
    let statement = stmt::Delete {
        table: appointment::TABLE,
        filter: Filter::new(Expr::eq(appointment::ID, 7)),
    };

    let (sql, params) = serialize(statement);

    assert_eq!(sql, "DELETE FROM `appointment` WHERE `appointmentId` = ?");
    assert_eq!(params, [Value::I32(7)]);
}

#[test]
fn statements_know_whether_they_return_rows() {
    let schema = catalog::schema();
    let tables = SelectTable::new(&schema, user::TABLE, "u").unwrap();

    assert!(Statement::from(stmt::Select::new(tables)).returns_rows());
    assert!(Statement::from(stmt::Count::new(user::TABLE)).returns_rows());
    assert!(!Statement::from(stmt::Delete {
        table: user::TABLE,
        filter: Filter::empty(),
    })
    .returns_rows());
}

use daybook::{
    build_statement,
    catalog::appointment,
    stmt::{Expr, Filter, OrderByColumn, Value},
};

use pretty_assertions::assert_eq;
use tests::{scripted_db, stamp};

#[tokio::test]
async fn raw_statement_round_trip() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![vec![Value::I32(5), Value::from("greg")]]);

    let mut stmt = db.statement();
    stmt.append_sql("SELECT `userId`, `userName` FROM `user` WHERE `active` = ?")
        .unwrap();
    stmt.finalize_sql().set_int(1).unwrap();

    let rows = stmt.query().await.unwrap();
    assert_eq!(rows, vec![vec![Value::I32(5), Value::from("greg")]]);

    let executed = connection.executed();
    assert_eq!(
        executed[0].sql,
        "SELECT `userId`, `userName` FROM `user` WHERE `active` = ?"
    );
    assert_eq!(executed[0].params, [Value::I32(1)]);
}

#[tokio::test]
async fn execute_reports_the_driver_summary() {
    let (mut db, connection) = scripted_db();

    connection.push_exec(2, None);

    let mut stmt = db.statement();
    stmt.append_sql("UPDATE `user` SET `active` = ?").unwrap();
    stmt.finalize_sql().set_int(0).unwrap();

    let response = stmt.execute().await.unwrap();
    assert_eq!(response.rows_affected, 2);
    assert_eq!(response.last_insert_id, None);

    assert_eq!(connection.executed()[0].params, [Value::I32(0)]);
}

#[tokio::test]
async fn build_statement_appends_filters_and_binds_in_order() {
    let (mut db, connection) = scripted_db();

    connection.push_rows(vec![]);

    let filter = Filter::new(Expr::eq(appointment::USER_ID, 5))
        .and(Expr::ge(appointment::START, stamp()));

    let mut stmt = db.statement();
    build_statement(
        &mut stmt,
        "SELECT `title` FROM `appointment`",
        vec![],
        &filter,
        &[OrderByColumn::desc("start")],
    )
    .unwrap();

    assert!(stmt.query().await.unwrap().is_empty());

    let executed = connection.executed();
    assert_eq!(
        executed[0].sql,
        "SELECT `title` FROM `appointment` WHERE `userId` = ? AND `start` >= ? \
         ORDER BY `start` DESC"
    );
    assert_eq!(
        executed[0].params,
        [Value::I32(5), Value::DateTime(stamp())]
    );
}

#[tokio::test]
async fn statement_level_parameters_bind_before_the_filter() {
    let (mut db, connection) = scripted_db();

    connection.push_exec(1, None);

    let mut stmt = db.statement();
    build_statement(
        &mut stmt,
        "UPDATE `appointment` SET `title` = ?",
        vec![Value::from("Planning")],
        &Filter::new(Expr::eq(appointment::ID, 9)),
        &[],
    )
    .unwrap();

    stmt.execute().await.unwrap();

    let executed = connection.executed();
    assert_eq!(
        executed[0].sql,
        "UPDATE `appointment` SET `title` = ? WHERE `appointmentId` = ?"
    );
    assert_eq!(executed[0].params, [Value::from("Planning"), Value::I32(9)]);
}

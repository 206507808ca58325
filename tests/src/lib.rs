pub mod fake;
pub use fake::{ExecutedStatement, FakeConnection, ScriptedResponse};

use daybook::{catalog, stmt::Value, Db};

use chrono::{NaiveDate, NaiveDateTime};

/// Initializes logging for tests; honors `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A database handle over a scripted connection, plus the script handle.
pub fn scripted_db() -> (Db, FakeConnection) {
    init_logging();
    let connection = FakeConnection::new();
    let db = Db::new(catalog::schema(), Box::new(connection.clone()));
    (db, connection)
}

/// Fixed timestamp for scripted rows.
pub fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// Column values for one customer row, in table order.
pub fn customer_values(pk: i32, name: &str, address_id: i32, active: bool) -> Vec<Value> {
    vec![
        Value::I32(pk),
        Value::String(name.to_string()),
        Value::I32(address_id),
        Value::Bool(active),
        Value::DateTime(stamp()),
        Value::String("admin".to_string()),
        Value::DateTime(stamp()),
        Value::String("admin".to_string()),
    ]
}

/// Column values for one country row, in table order.
pub fn country_values(pk: i32, name: &str) -> Vec<Value> {
    vec![
        Value::I32(pk),
        Value::String(name.to_string()),
        Value::DateTime(stamp()),
        Value::String("admin".to_string()),
        Value::DateTime(stamp()),
        Value::String("admin".to_string()),
    ]
}

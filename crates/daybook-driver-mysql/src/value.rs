use daybook_core::stmt::{self, Type};
use daybook_core::{Error, Result};

use chrono::{Datelike, NaiveDate, Timelike};
use mysql_async::prelude::ToValue;

/// Bridges between statement values and the MySQL wire representation.
#[derive(Debug)]
pub(crate) struct Value(stmt::Value);

impl Value {
    pub(crate) fn into_inner(self) -> stmt::Value {
        self.0
    }

    /// Decodes one result cell. `ty` is the expected column type; without it
    /// the wire type decides.
    pub(crate) fn from_sql(raw: mysql_async::Value, ty: Option<&Type>) -> Result<Value> {
        use mysql_async::Value as SqlValue;

        let value = match (raw, ty) {
            (SqlValue::NULL, _) => stmt::Value::Null,
            (SqlValue::Int(value), Some(Type::Bool)) => stmt::Value::Bool(value != 0),
            (SqlValue::Int(value), Some(Type::Int)) => {
                let value = i32::try_from(value)
                    .map_err(|_| daybook_core::err!("integer column value {value} overflows i32"))?;
                stmt::Value::I32(value)
            }
            (SqlValue::Int(value), _) => stmt::Value::I64(value),
            (SqlValue::UInt(value), Some(Type::Bool)) => stmt::Value::Bool(value != 0),
            (SqlValue::UInt(value), _) => {
                let value = i64::try_from(value)
                    .map_err(|_| daybook_core::err!("unsigned column value {value} overflows i64"))?;
                stmt::Value::I64(value)
            }
            (SqlValue::Bytes(bytes), _) => {
                let value = String::from_utf8(bytes).map_err(Error::driver)?;
                stmt::Value::String(value)
            }
            (SqlValue::Date(year, month, day, hour, minute, second, micros), _) => {
                let ts = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
                    .and_then(|date| date.and_hms_micro_opt(hour.into(), minute.into(), second.into(), micros))
                    .ok_or_else(|| {
                        daybook_core::err!("invalid date-time from driver: {year}-{month}-{day} {hour}:{minute}:{second}")
                    })?;
                stmt::Value::DateTime(ts)
            }
            (raw, ty) => return Err(daybook_core::err!("cannot decode {raw:?} as {ty:?}")),
        };

        Ok(Value(value))
    }
}

impl From<stmt::Value> for Value {
    fn from(value: stmt::Value) -> Self {
        Self(value)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            stmt::Value::Bool(value) => value.to_value(),
            stmt::Value::DateTime(value) => mysql_async::Value::Date(
                value.year() as u16,
                value.month() as u8,
                value.day() as u8,
                value.hour() as u8,
                value.minute() as u8,
                value.second() as u8,
                value.nanosecond() / 1_000,
            ),
            stmt::Value::I32(value) => value.to_value(),
            stmt::Value::I64(value) => value.to_value(),
            stmt::Value::Null => mysql_async::Value::NULL,
            stmt::Value::String(value) => value.to_value(),
        }
    }
}

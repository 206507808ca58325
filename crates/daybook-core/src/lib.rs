mod error;
pub use error::Error;

pub mod catalog;

pub mod driver;
pub use driver::Connection;

pub mod row;
pub use row::Row;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses Daybook's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;

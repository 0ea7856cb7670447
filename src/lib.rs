//! # SparkSQL Dialect
//!
//! Adapts a SparkSQL/Hive-family engine behind a Thrift SQL gateway to a
//! relational toolkit's dialect interface: schema introspection goes through
//! `DESCRIBE` and `SHOW` statements, and the engine's free-text errors are
//! normalized into a typed taxonomy.
//!
//! The wire protocol, pooling, and authentication are not here: the dialect
//! receives an already-connected session through the [`Connection`] trait and
//! only reshapes names, rows, and error strings.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use sparksql_dialect::prelude::*;
//!
//! let dialect = SparkSqlDialect::new();
//!
//! // `conn` is the framework's session handle implementing `Connection`.
//! let tables = dialect.table_names(&mut conn, Some("web")).await?;
//! let exists = dialect.has_table(&mut conn, "logs", Some("web")).await?;
//! let columns = dialect.columns(&mut conn, "logs", Some("web")).await?;
//! ```
//!
//! [`Connection`]: connection::Connection

pub mod classify;
pub mod columns;
pub mod connection;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod row;
pub mod sql;

pub mod prelude {
    pub use crate::columns::{ColumnInfo, SparkType};
    pub use crate::connection::Connection;
    pub use crate::dialect::{Dialect, SparkSqlDialect};
    pub use crate::error::{DialectError, DialectResult};
    pub use crate::row::{Row, Value};
}

pub use columns::{ColumnInfo, SparkType};
pub use connection::Connection;
pub use dialect::{Dialect, SparkSqlDialect};
pub use error::{DialectError, DialectResult};
pub use row::{Row, Value};

//! The caller-supplied session contract.
//!
//! The dialect never opens connections itself: the surrounding framework
//! hands it an already-connected session and the dialect issues textual
//! introspection statements through it. The wire protocol, pooling, and
//! authentication all live behind this trait.

use crate::error::DialectResult;
use crate::row::Row;
use async_trait::async_trait;

/// An execute-SQL-get-rows session handle.
///
/// Implementors should surface engine error text through
/// [`DialectError::Execution`](crate::error::DialectError::Execution) so the
/// dialect can classify not-found conditions from the message.
///
/// # Example
///
/// ```ignore
/// struct ThriftSession { /* wire client */ }
///
/// #[async_trait]
/// impl Connection for ThriftSession {
///     async fn execute(&mut self, sql: &str) -> DialectResult<Vec<Row>> {
///         let resp = self.client.execute_statement(sql).await
///             .map_err(|e| DialectError::execution(e.to_string()))?;
///         Ok(resp.rows())
///     }
/// }
/// ```
#[async_trait]
pub trait Connection: Send {
    /// Execute a SQL statement and return all result rows.
    async fn execute(&mut self, sql: &str) -> DialectResult<Vec<Row>>;
}

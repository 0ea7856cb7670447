//! The toolkit-facing dialect surface.
//!
//! [`Dialect`] is the seam the toolkit calls through; [`SparkSqlDialect`] is
//! the SparkSQL implementation. Every method issues exactly one statement on
//! the supplied [`Connection`] and reshapes the result.

use crate::classify::classify_describe_error;
use crate::columns::{ColumnInfo, parse_describe_rows};
use crate::connection::Connection;
use crate::error::{DialectError, DialectResult};
use crate::ident::{qualify_table, quote_identifier};
use crate::row::Row;
use crate::sql;
use async_trait::async_trait;
use tracing::debug;

/// Maps generic introspection operations onto an engine's specific syntax
/// and error behavior.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// The dialect's name, e.g. `sparksql`.
    fn name(&self) -> &'static str;

    /// Quote an identifier in the engine's quoting style.
    fn quote_identifier(&self, name: &str) -> String;

    /// List table names, optionally scoped to a schema.
    async fn table_names(
        &self,
        conn: &mut dyn Connection,
        schema: Option<&str>,
    ) -> DialectResult<Vec<String>>;

    /// List view names, optionally scoped to a schema.
    async fn view_names(
        &self,
        conn: &mut dyn Connection,
        schema: Option<&str>,
    ) -> DialectResult<Vec<String>>;

    /// List schema names.
    async fn schema_names(&self, conn: &mut dyn Connection) -> DialectResult<Vec<String>>;

    /// Fetch the raw `DESCRIBE` rows for a table.
    async fn table_columns(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<Row>>;

    /// Fetch parsed column metadata for a table.
    async fn columns(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<ColumnInfo>>;

    /// Check whether a table (or view) exists.
    async fn has_table(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<bool>;
}

/// SparkSQL dialect over a Thrift SQL gateway.
///
/// Stateless; one instance can serve any number of connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparkSqlDialect;

impl SparkSqlDialect {
    pub fn new() -> Self {
        Self
    }

    /// Run `SHOW TABLES` and keep the names whose trailing flag matches
    /// `want_view`. The object name is the second column; rows without a
    /// readable flag are skipped.
    async fn show_tables_filtered(
        &self,
        conn: &mut dyn Connection,
        schema: Option<&str>,
        want_view: bool,
    ) -> DialectResult<Vec<String>> {
        let rows = conn.execute(&sql::show_tables(schema)).await?;
        Ok(rows
            .iter()
            .filter(|row| row.trailing_flag() == Some(want_view))
            .filter_map(|row| row.text(1).map(String::from))
            .collect())
    }
}

#[async_trait]
impl Dialect for SparkSqlDialect {
    fn name(&self) -> &'static str {
        "sparksql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_identifier(name)
    }

    async fn table_names(
        &self,
        conn: &mut dyn Connection,
        schema: Option<&str>,
    ) -> DialectResult<Vec<String>> {
        self.show_tables_filtered(conn, schema, false).await
    }

    async fn view_names(
        &self,
        conn: &mut dyn Connection,
        schema: Option<&str>,
    ) -> DialectResult<Vec<String>> {
        self.show_tables_filtered(conn, schema, true).await
    }

    async fn schema_names(&self, conn: &mut dyn Connection) -> DialectResult<Vec<String>> {
        let rows = conn.execute(&sql::show_schemas()).await?;
        Ok(rows
            .iter()
            .filter_map(|row| row.text(0).map(String::from))
            .collect())
    }

    async fn table_columns(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<Row>> {
        let qualified = qualify_table(table, schema);
        debug!(table = %qualified, "describing table");

        match conn.execute(&sql::describe_table(&qualified)).await {
            Ok(rows) => Ok(rows),
            Err(err) => Err(classify_describe_error(err, table, &qualified, schema)),
        }
    }

    async fn columns(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<ColumnInfo>> {
        let rows = self.table_columns(conn, table, schema).await?;
        Ok(parse_describe_rows(&rows))
    }

    async fn has_table(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<bool> {
        match self.table_columns(conn, table, schema).await {
            Ok(_) => Ok(true),
            Err(DialectError::NoSuchTable(_)) | Err(DialectError::Unreflectable(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Value;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Scripted connection: maps statement text to a canned result.
    struct MockConnection {
        responses: HashMap<String, DialectResult<Vec<Row>>>,
        executed: Vec<String>,
    }

    impl MockConnection {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                executed: Vec::new(),
            }
        }

        fn on(mut self, sql: &str, result: DialectResult<Vec<Row>>) -> Self {
            self.responses.insert(sql.to_string(), result);
            self
        }
    }

    #[async_trait]
    impl Connection for MockConnection {
        async fn execute(&mut self, sql: &str) -> DialectResult<Vec<Row>> {
            self.executed.push(sql.to_string());
            match self.responses.remove(sql) {
                Some(result) => result,
                None => panic!("unexpected statement: {sql}"),
            }
        }
    }

    fn show_tables_row(db: &str, name: &str, is_view: bool) -> Row {
        Row::new(vec![db.into(), name.into(), is_view.into()])
    }

    fn describe_row(name: &str, type_name: &str) -> Row {
        Row::new(vec![name.into(), type_name.into(), Value::Null])
    }

    #[tokio::test]
    async fn test_table_names_partition() {
        let mut conn = MockConnection::new().on(
            "SHOW TABLES",
            Ok(vec![
                show_tables_row("default", "logs", false),
                show_tables_row("default", "v_logs", true),
                show_tables_row("default", "users", false),
            ]),
        );

        let dialect = SparkSqlDialect::new();
        let tables = dialect.table_names(&mut conn, None).await.unwrap();
        assert_eq!(tables, vec!["logs".to_string(), "users".to_string()]);
    }

    #[tokio::test]
    async fn test_view_names_partition() {
        let mut conn = MockConnection::new().on(
            "SHOW TABLES IN `web`",
            Ok(vec![
                show_tables_row("web", "logs", false),
                show_tables_row("web", "v_logs", true),
            ]),
        );

        let dialect = SparkSqlDialect::new();
        let views = dialect.view_names(&mut conn, Some("web")).await.unwrap();
        assert_eq!(views, vec!["v_logs".to_string()]);
    }

    #[tokio::test]
    async fn test_text_form_flags() {
        // Older servers return the isTemporary flag as text.
        let mut conn = MockConnection::new().on(
            "SHOW TABLES",
            Ok(vec![
                Row::new(vec!["default".into(), "logs".into(), "false".into()]),
                Row::new(vec!["default".into(), "v_logs".into(), "true".into()]),
            ]),
        );

        let dialect = SparkSqlDialect::new();
        let tables = dialect.table_names(&mut conn, None).await.unwrap();
        assert_eq!(tables, vec!["logs".to_string()]);
    }

    #[tokio::test]
    async fn test_schema_names() {
        let mut conn = MockConnection::new().on(
            "SHOW SCHEMAS",
            Ok(vec![
                Row::new(vec!["default".into()]),
                Row::new(vec!["web".into()]),
            ]),
        );

        let dialect = SparkSqlDialect::new();
        let schemas = dialect.schema_names(&mut conn).await.unwrap();
        assert_eq!(schemas, vec!["default".to_string(), "web".to_string()]);
    }

    #[tokio::test]
    async fn test_table_columns_qualifies_name() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE web.logs",
            Ok(vec![describe_row("id", "bigint")]),
        );

        let dialect = SparkSqlDialect::new();
        let rows = dialect
            .table_columns(&mut conn, "logs", Some("web"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(conn.executed, vec!["DESCRIBE web.logs".to_string()]);
    }

    #[tokio::test]
    async fn test_table_columns_default_schema_unqualified() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE logs",
            Ok(vec![describe_row("id", "bigint")]),
        );

        let dialect = SparkSqlDialect::new();
        dialect
            .table_columns(&mut conn, "logs", Some("default"))
            .await
            .unwrap();
        assert_eq!(conn.executed, vec!["DESCRIBE logs".to_string()]);
    }

    #[tokio::test]
    async fn test_table_columns_not_found() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE logs",
            Err(DialectError::execution(
                "TExecuteStatementResp NoSuchTableException: \
                 Table or view 'logs' not found in database 'default'",
            )),
        );

        let dialect = SparkSqlDialect::new();
        let err = dialect
            .table_columns(&mut conn, "logs", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DialectError::NoSuchTable(t) if t == "logs"));
    }

    #[tokio::test]
    async fn test_columns_parse_describe_output() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE logs",
            Ok(vec![
                describe_row("id", "bigint"),
                describe_row("ds", "string"),
                describe_row("", ""),
                describe_row("# Partition Information", ""),
                describe_row("# col_name", "data_type"),
                describe_row("ds", "string"),
            ]),
        );

        let dialect = SparkSqlDialect::new();
        let columns = dialect.columns(&mut conn, "logs", None).await.unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].name, "id");
        assert_eq!(columns[1].name, "ds");
    }

    #[tokio::test]
    async fn test_has_table_true() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE logs",
            Ok(vec![describe_row("id", "bigint")]),
        );

        let dialect = SparkSqlDialect::new();
        assert!(dialect.has_table(&mut conn, "logs", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_has_table_false_on_not_found() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE missing",
            Err(DialectError::execution(
                "TExecuteStatementResp NoSuchTableException: \
                 Table or view 'missing' not found in database 'default'",
            )),
        );

        let dialect = SparkSqlDialect::new();
        assert!(!dialect.has_table(&mut conn, "missing", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_has_table_false_on_missing_schema() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE nowhere.logs",
            Err(DialectError::execution(
                "TExecuteStatementResp NoSuchDatabaseException: \
                 Database 'nowhere' not found",
            )),
        );

        let dialect = SparkSqlDialect::new();
        assert!(
            !dialect
                .has_table(&mut conn, "logs", Some("nowhere"))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_has_table_false_on_unreflectable() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE legacy",
            Err(DialectError::execution(
                "org.apache.spark.SparkException: Cannot recognize hive type string: \
                 uniontype<int,string>",
            )),
        );

        let dialect = SparkSqlDialect::new();
        assert!(!dialect.has_table(&mut conn, "legacy", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_has_table_propagates_other_errors() {
        let mut conn = MockConnection::new().on(
            "DESCRIBE logs",
            Err(DialectError::execution("permission denied")),
        );

        let dialect = SparkSqlDialect::new();
        let err = dialect.has_table(&mut conn, "logs", None).await.unwrap_err();
        assert!(matches!(err, DialectError::Execution(_)));
    }

    #[test]
    fn test_dialect_name_and_quoting() {
        let dialect = SparkSqlDialect::new();
        assert_eq!(dialect.name(), "sparksql");
        assert_eq!(dialect.quote_identifier("web"), "`web`");
    }
}

//! Statement text for the introspection commands.
//!
//! SparkSQL has no information_schema on the classic Thrift gateway, so
//! introspection goes through `DESCRIBE` and the `SHOW` commands.

use crate::ident::quote_identifier;

/// Build a `DESCRIBE` statement for an already-qualified table name.
///
/// The name is deliberately not backtick-quoted: the engine rejects quoted
/// names in `DESCRIBE`.
pub fn describe_table(qualified: &str) -> String {
    format!("DESCRIBE {}", qualified)
}

/// Build a `SHOW TABLES` statement, optionally scoped to a schema.
///
/// The schema identifier is backtick-quoted.
pub fn show_tables(schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!("SHOW TABLES IN {}", quote_identifier(schema)),
        None => "SHOW TABLES".to_string(),
    }
}

/// Build a `SHOW SCHEMAS` statement.
pub fn show_schemas() -> String {
    "SHOW SCHEMAS".to_string()
}

//! Identifier quoting and table-name qualification.

use tracing::debug;

/// Quote an identifier for use in SQL by wrapping in backticks.
///
/// Any backticks within the identifier are doubled.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Resolve the name `DESCRIBE` should be issued against.
///
/// The engine treats unqualified names specially and double-qualification
/// breaks lookups, so:
///
/// - a literal `default.` prefix on the table name is stripped;
/// - the name is qualified as `schema.table` only when a schema is given
///   and is not (case-insensitively) `default`;
/// - otherwise the table name is returned unchanged.
pub fn qualify_table(table: &str, schema: Option<&str>) -> String {
    debug!(schema = ?schema, table, "resolving qualified table name");

    let parts: Vec<&str> = table.split('.').collect();
    let qualified = if parts.len() == 2 && parts[0] == "default" {
        parts[1].to_string()
    } else if let Some(schema) = schema.filter(|s| !s.eq_ignore_ascii_case("default")) {
        format!("{}.{}", schema, table)
    } else {
        table.to_string()
    };

    debug!(qualified = %qualified, "resolved qualified table name");
    qualified
}

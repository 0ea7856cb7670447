//! Engine error-text classification.
//!
//! The Thrift gateway reports catalog failures as free text inside the
//! statement response, so not-found conditions can only be recognized by
//! pattern-matching the message. Brittle by construction; the patterns track
//! the exception names the engine embeds in `TExecuteStatementResp`.

use crate::error::DialectError;
use regex::Regex;

/// Classify a `DESCRIBE` failure.
///
/// Remaps the error when the engine text matches a known condition:
///
/// - table-not-found → [`DialectError::NoSuchTable`];
/// - schema-not-found (only checked when a schema was given) →
///   [`DialectError::NoSuchTable`] as well, since the lookup target is gone
///   either way;
/// - an unrecognizable hive-only column type (only checked when no schema
///   was given) → [`DialectError::Unreflectable`].
///
/// Anything unmatched is returned unchanged.
pub fn classify_describe_error(
    err: DialectError,
    table: &str,
    qualified: &str,
    schema: Option<&str>,
) -> DialectError {
    let Some(message) = err.engine_message() else {
        return err;
    };

    let table_pattern = format!(
        r"TExecuteStatementResp.*NoSuchTableException.*Table or view '{}' not found",
        regex::escape(table)
    );
    if matches(&table_pattern, message) {
        return DialectError::NoSuchTable(qualified.to_string());
    }

    match schema {
        Some(schema) => {
            let schema_pattern = format!(
                r"TExecuteStatementResp.*NoSuchDatabaseException.*Database '{}' not found",
                regex::escape(schema)
            );
            if matches(&schema_pattern, message) {
                return DialectError::NoSuchTable(qualified.to_string());
            }
        }
        None => {
            // A hive-only column type the engine cannot describe.
            if matches(
                r"org.apache.spark.SparkException: Cannot recognize hive type string",
                message,
            ) {
                return DialectError::Unreflectable(qualified.to_string());
            }
        }
    }

    err
}

fn matches(pattern: &str, text: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

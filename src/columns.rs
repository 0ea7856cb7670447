//! Column metadata from `DESCRIBE` output.
//!
//! `DESCRIBE <table>` returns three text columns: column name, type string,
//! comment. Hive-style output appends a `# Partition Information` section
//! repeating the partition columns, preceded by blank and `# col_name`
//! header rows; only the leading plain section describes the table.

use crate::row::Row;
use serde::{Deserialize, Serialize};

/// Parsed column metadata for one `DESCRIBE` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// The raw engine type string, e.g. `decimal(10,2)`.
    pub type_name: String,
    #[serde(rename = "type")]
    pub spark_type: SparkType,
    pub comment: Option<String>,
}

/// Spark SQL column types, parsed from the engine's type strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparkType {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal { precision: u8, scale: i8 },
    String,
    Varchar,
    Char,
    Binary,
    Date,
    Timestamp,
    Interval,
    /// Complex types (`array<…>`, `map<…>`, `struct<…>`) carry the full
    /// type string; the dialect does not decompose them.
    Array(String),
    Map(String),
    Struct(String),
    /// Anything unrecognized, preserved verbatim.
    Other(String),
}

/// Parse a Spark type string into a [`SparkType`].
///
/// Matching is case-insensitive on the base type (the part before any `(`
/// or `<`). `decimal` defaults to `(38,18)` when parameters are omitted.
pub fn parse_type(type_name: &str) -> SparkType {
    let lower = type_name.to_lowercase();
    let base = lower
        .split(['(', '<'])
        .next()
        .unwrap_or(&lower)
        .trim()
        .to_string();

    match base.as_str() {
        "boolean" | "bool" => SparkType::Boolean,
        "tinyint" | "byte" => SparkType::TinyInt,
        "smallint" | "short" => SparkType::SmallInt,
        "int" | "integer" => SparkType::Int,
        "bigint" | "long" => SparkType::BigInt,
        "float" | "real" => SparkType::Float,
        "double" => SparkType::Double,
        "decimal" | "dec" | "numeric" => {
            let (precision, scale) = parse_decimal_params(&lower);
            SparkType::Decimal { precision, scale }
        }
        "string" | "text" => SparkType::String,
        "varchar" => SparkType::Varchar,
        "char" => SparkType::Char,
        "binary" | "varbinary" => SparkType::Binary,
        "date" => SparkType::Date,
        "timestamp" => SparkType::Timestamp,
        "interval" => SparkType::Interval,
        "array" => SparkType::Array(type_name.to_string()),
        "map" => SparkType::Map(type_name.to_string()),
        "struct" => SparkType::Struct(type_name.to_string()),
        _ => SparkType::Other(type_name.to_string()),
    }
}

/// Parse precision and scale from a `decimal(p,s)` type string.
/// Defaults to `(38,18)` when not specified.
fn parse_decimal_params(type_name: &str) -> (u8, i8) {
    let default_precision = 38u8;
    let default_scale = 18i8;

    let Some(start) = type_name.find('(') else {
        return (default_precision, default_scale);
    };
    let Some(end) = type_name.find(')') else {
        return (default_precision, default_scale);
    };

    let params = &type_name[start + 1..end];
    let parts: Vec<&str> = params.split(',').map(|s| s.trim()).collect();

    let precision = parts
        .first()
        .and_then(|p| p.parse::<u8>().ok())
        .unwrap_or(default_precision);
    let scale = parts
        .get(1)
        .and_then(|s| s.parse::<i8>().ok())
        .unwrap_or(default_scale);

    (precision, scale)
}

/// Parse raw `DESCRIBE` rows into column metadata.
///
/// Cells are trimmed; blank rows and `# col_name` header rows are dropped,
/// and parsing stops at the `# Partition Information` section so partition
/// columns are not reported twice.
pub fn parse_describe_rows(rows: &[Row]) -> Vec<ColumnInfo> {
    let mut columns = Vec::new();

    for row in rows {
        let name = row.text(0).map(str::trim).unwrap_or("");
        if name.is_empty() || name == "# col_name" {
            continue;
        }
        if name == "# Partition Information" {
            break;
        }

        let type_name = row.text(1).map(str::trim).unwrap_or("").to_string();
        let comment = row
            .text(2)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);

        columns.push(ColumnInfo {
            name: name.to_string(),
            spark_type: parse_type(&type_name),
            type_name,
            comment,
        });
    }

    columns
}

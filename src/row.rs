//! Result row shapes.
//!
//! The engine returns tuple-like rows with no stable column metadata across
//! server versions, so rows are positional: a `Row` is a sequence of dynamic
//! `Value` cells with typed accessors.

/// Dynamic value type for engine result cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// View the cell as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the cell as a boolean.
    ///
    /// Accepts a real boolean or its text form (`"true"`, `"false"`, `"t"`,
    /// `"f"`, `"1"`, `"0"`); older servers return flag columns as text.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "t" | "true" | "1" => Some(true),
                "f" | "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Check whether the cell is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// A positional result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<Value>,
}

impl Row {
    pub fn new(cells: Vec<Value>) -> Self {
        Self { cells }
    }

    /// Get a cell by index.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.cells.get(idx)
    }

    /// Get a cell as a string slice.
    pub fn text(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).and_then(Value::as_str)
    }

    /// Get a cell as a boolean (real or text form).
    pub fn boolean(&self, idx: usize) -> Option<bool> {
        self.cells.get(idx).and_then(Value::as_bool)
    }

    /// The last cell interpreted as a boolean flag.
    ///
    /// `SHOW TABLES` marks views with a trailing flag column.
    pub fn trailing_flag(&self) -> Option<bool> {
        self.cells.last().and_then(Value::as_bool)
    }

    /// Get number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(cells: Vec<Value>) -> Self {
        Self::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        let _b: Value = true.into();
        let _i: Value = 42i32.into();
        let _f: Value = 3.15f64.into();
        let _s: Value = "hello".into();
    }

    #[test]
    fn test_as_bool_text_forms() {
        assert_eq!(Value::from("true").as_bool(), Some(true));
        assert_eq!(Value::from("f").as_bool(), Some(false));
        assert_eq!(Value::from("0").as_bool(), Some(false));
        assert_eq!(Value::from("yes").as_bool(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(1).as_bool(), None);
    }

    #[test]
    fn test_trailing_flag() {
        let row = Row::new(vec!["default".into(), "logs".into(), false.into()]);
        assert_eq!(row.trailing_flag(), Some(false));
        assert_eq!(row.text(1), Some("logs"));

        // Text-form flag from an older server
        let row = Row::new(vec!["default".into(), "v_logs".into(), "true".into()]);
        assert_eq!(row.trailing_flag(), Some(true));

        let empty = Row::new(vec![]);
        assert_eq!(empty.trailing_flag(), None);
        assert!(empty.is_empty());
    }
}

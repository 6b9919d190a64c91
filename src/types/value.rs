//! Cell value classification.
//!
//! Cells are classified per value at render time, not from a cached column
//! schema, because columns are allowed to hold heterogeneous types.

use std::cmp::Ordering;

use serde_json::Value;

/// A borrowed, scalar view of one cell's JSON value.
///
/// The host contract only promises strings, numbers, booleans and nulls;
/// anything else (nested objects/arrays) degrades to its JSON string form
/// rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// Absent or JSON null; renders as an empty cell.
    Null,
    Bool(bool),
    Number(&'a serde_json::Number),
    Text(&'a str),
    /// Non-scalar JSON, tolerated but displayed as serialized text.
    Other(&'a Value),
}

impl<'a> CellValue<'a> {
    /// Classify a cell value; `None` (missing key) is treated as null.
    #[must_use]
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(Value::Bool(b)) => Self::Bool(*b),
            Some(Value::Number(n)) => Self::Number(n),
            Some(Value::String(s)) => Self::Text(s),
            Some(other) => Self::Other(other),
        }
    }

    /// Display text for the cell body and its `title` tooltip attribute.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => (*s).to_string(),
            Self::Other(v) => v.to_string(),
        }
    }

    /// Numeric cells right-align; everything else left-aligns.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Total order across value kinds, used by column sorting.
    ///
    /// Kinds rank Null < Bool < Number < Text < Other; within a kind, numbers
    /// compare via `f64::total_cmp` (NaN sorts after every finite value) and
    /// text lexicographically.
    #[must_use]
    pub fn total_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Other(a), Self::Other(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::Other(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_missing_as_null() {
        assert_eq!(CellValue::classify(None), CellValue::Null);
        assert_eq!(CellValue::classify(Some(&Value::Null)), CellValue::Null);
    }

    #[test]
    fn display_forms() {
        assert_eq!(CellValue::classify(None).display(), "");
        assert_eq!(CellValue::classify(Some(&json!(true))).display(), "true");
        assert_eq!(CellValue::classify(Some(&json!(42))).display(), "42");
        assert_eq!(CellValue::classify(Some(&json!(1.5))).display(), "1.5");
        assert_eq!(CellValue::classify(Some(&json!("hi"))).display(), "hi");
    }

    #[test]
    fn only_numbers_are_numeric() {
        assert!(CellValue::classify(Some(&json!(3))).is_numeric());
        assert!(!CellValue::classify(Some(&json!("3"))).is_numeric());
        assert!(!CellValue::classify(Some(&json!(false))).is_numeric());
        assert!(!CellValue::classify(None).is_numeric());
    }

    #[test]
    fn order_within_and_across_kinds() {
        let two = json!(2);
        let ten = json!(10);
        let a = CellValue::classify(Some(&two));
        let b = CellValue::classify(Some(&ten));
        assert_eq!(a.total_order(&b), Ordering::Less);

        // Null sorts before everything
        let s = json!("a");
        let text = CellValue::classify(Some(&s));
        assert_eq!(CellValue::Null.total_order(&text), Ordering::Less);
        assert_eq!(CellValue::Null.total_order(&a), Ordering::Less);
    }
}

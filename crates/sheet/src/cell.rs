use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDateTime),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Check if the value is null or an empty/whitespace-only string.
    ///
    /// Blank cells in this sense delimit sub-tables during scanning and
    /// blank rows are dropped from the record view.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Check if the value is numeric (integer or float)
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Try to get the value as a float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f),
            CellValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get the value as a non-blank string slice
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Get the value as an owned display string. Dates render as ISO-8601.
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
            CellValue::Date(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Date(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_is_blank() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::String(String::new()).is_blank());
        assert!(CellValue::String("   ".to_string()).is_blank());
        assert!(!CellValue::String("x".to_string()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn test_as_float() {
        assert_eq!(CellValue::Int(42).as_float(), Some(42.0));
        assert_eq!(CellValue::Float(1.5).as_float(), Some(1.5));
        assert_eq!(CellValue::String("42".to_string()).as_float(), None);
        assert_eq!(CellValue::Null.as_float(), None);
    }

    #[test]
    fn test_as_text_rejects_blank() {
        assert_eq!(CellValue::String("hi".to_string()).as_text(), Some("hi"));
        assert_eq!(CellValue::String("  ".to_string()).as_text(), None);
        assert_eq!(CellValue::Int(7).as_text(), None);
    }

    #[test]
    fn test_date_display_iso() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::Date(dt).as_str(), "2024-01-02T00:00:00");
    }

    #[test]
    fn test_serde_untagged() {
        assert_eq!(serde_json::to_string(&CellValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&CellValue::Int(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&CellValue::String("a".to_string())).unwrap(),
            "\"a\""
        );
    }
}

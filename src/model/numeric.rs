use serde::Serialize;
use std::fmt;

/// A value that parsed as a float, or the original text when it did not
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Returns the parsed value, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Re-applies float coercion; a no-op for values that already parsed
    pub fn coerce(self) -> Self {
        match self {
            Self::Text(raw) => crate::extract::numeric_or_string(&raw),
            number => number,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A value that parsed as an integer, or the original text when it did not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Count {
    Int(i64),
    Text(String),
}

impl Count {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Numeric::Number(3.5)).unwrap(), "3.5");
        assert_eq!(
            serde_json::to_string(&Numeric::Text("-".to_string())).unwrap(),
            "\"-\""
        );
    }

    #[test]
    fn test_count_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Count::Int(12)).unwrap(), "12");
        assert_eq!(
            serde_json::to_string(&Count::Text("many".to_string())).unwrap(),
            "\"many\""
        );
    }

    #[test]
    fn test_coerce_is_idempotent() {
        let once = Numeric::Text("4.5".to_string()).coerce();
        assert_eq!(once, Numeric::Number(4.5));
        assert_eq!(once.clone().coerce(), once);

        let text = Numeric::Text("N/A".to_string()).coerce();
        assert_eq!(text.clone().coerce(), text);
    }

    #[test]
    fn test_display_round_trips_through_coercion() {
        let value = Numeric::Number(3.58);
        assert_eq!(Numeric::Text(value.to_string()).coerce(), value);
    }
}

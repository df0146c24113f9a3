//! Best-effort numeric coercion
//!
//! Ratings and counts on the site are usually numbers but can be placeholders
//! such as "-". Coercion never fails: unparsable input comes back unchanged.

use crate::model::{Count, Numeric};

/// Parses a float, or returns the original text
///
/// # Examples
///
/// ```
/// use tabelog_harvest::extract::numeric_or_string;
/// use tabelog_harvest::model::Numeric;
///
/// assert_eq!(numeric_or_string("4.5"), Numeric::Number(4.5));
/// assert_eq!(numeric_or_string("N/A"), Numeric::Text("N/A".to_string()));
/// ```
pub fn numeric_or_string(value: &str) -> Numeric {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Numeric::Number(n),
        _ => Numeric::Text(value.to_string()),
    }
}

/// Parses an integer, or returns the original text
pub fn integer_or_string(value: &str) -> Count {
    match value.trim().parse::<i64>() {
        Ok(n) => Count::Int(n),
        Err(_) => Count::Text(value.to_string()),
    }
}

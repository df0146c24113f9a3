//! Entity model for extracted directory records
//!
//! All records are plain values: built once per page (or per review node),
//! never mutated after emission, and serializable on their own.
//!
//! # Components
//!
//! - `Business`, `Review`, `User`, `MenuItem`: the extracted records
//! - `Numeric`, `Count`: coerced values that keep the raw text when unparsable
//! - `Meal`, `Criterion`, `Situation`: closed vocabularies of the review layout

mod entity;
mod numeric;

pub use entity::{Business, Entity, MenuItem, Review, StarBreakdown, User};
pub use numeric::{Count, Numeric};

use serde::Serialize;
use std::fmt;

/// Meal period a price or rating applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Dinner,
    Lunch,
}

impl Meal {
    /// Meals in the order they are extracted
    pub const ALL: [Meal; 2] = [Meal::Dinner, Meal::Lunch];

    /// Returns the modifier used by the site's `--dinner`/`--lunch` classes
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dinner => "dinner",
            Self::Lunch => "lunch",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named sub-criteria of a star breakdown, in page layout order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Taste,
    Service,
    Ambience,
    CostPerformance,
    Drink,
}

impl Criterion {
    /// Layout order of the sub-score list on a rating block
    pub const ALL: [Criterion; 5] = [
        Criterion::Taste,
        Criterion::Service,
        Criterion::Ambience,
        Criterion::CostPerformance,
        Criterion::Drink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Taste => "taste",
            Self::Service => "service",
            Self::Ambience => "ambience",
            Self::CostPerformance => "cp",
            Self::Drink => "drink",
        }
    }
}

/// Visit situations a reviewer can tick, in icon order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Situation {
    Friends,
    Date,
    Settai,
    Party,
    Family,
    Alone,
}

impl Situation {
    pub const ALL: [Situation; 6] = [
        Situation::Friends,
        Situation::Date,
        Situation::Settai,
        Situation::Party,
        Situation::Family,
        Situation::Alone,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_names() {
        assert_eq!(Meal::Dinner.as_str(), "dinner");
        assert_eq!(Meal::Lunch.to_string(), "lunch");
    }

    #[test]
    fn test_criterion_layout_order() {
        let names: Vec<_> = Criterion::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["taste", "service", "ambience", "cp", "drink"]);
    }

    #[test]
    fn test_situation_serializes_lowercase() {
        let json = serde_json::to_string(&Situation::Settai).unwrap();
        assert_eq!(json, "\"settai\"");
    }
}

use super::{Count, Criterion, Meal, Numeric};
use serde::Serialize;

/// A restaurant, built from its detail page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Business {
    /// Numeric id from the last path segment of the business URL
    pub business_id: u64,

    /// Display name, from the first layout that carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Genre labels in page order (may be empty)
    pub categories: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    /// Overall rating
    pub stars: Numeric,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_dinner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_lunch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<Count>,

    /// Region slug from the URL path (e.g. "tokyo")
    pub prefecture: String,

    /// Area code from the URL path (e.g. "A1301")
    pub area: String,

    /// Sub-area code from the URL path (e.g. "A130101")
    pub subarea: String,
}

impl Business {
    /// Returns the budget label for a meal, if the page shows one
    pub fn price(&self, meal: Meal) -> Option<&str> {
        match meal {
            Meal::Dinner => self.price_dinner.as_deref(),
            Meal::Lunch => self.price_lunch.as_deref(),
        }
    }
}

/// Per-meal rating: an overall score and five fixed sub-criteria
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarBreakdown {
    pub total: Numeric,
    pub taste: Numeric,
    pub service: Numeric,
    pub ambience: Numeric,
    pub cp: Numeric,
    pub drink: Numeric,
}

impl StarBreakdown {
    /// Builds a breakdown from sub-scores given in `Criterion::ALL` order
    pub fn new(total: Numeric, scores: [Numeric; 5]) -> Self {
        let [taste, service, ambience, cp, drink] = scores;
        Self {
            total,
            taste,
            service,
            ambience,
            cp,
            drink,
        }
    }

    pub fn get(&self, criterion: Criterion) -> &Numeric {
        match criterion {
            Criterion::Taste => &self.taste,
            Criterion::Service => &self.service,
            Criterion::Ambience => &self.ambience,
            Criterion::CostPerformance => &self.cp,
            Criterion::Drink => &self.drink,
        }
    }
}

/// One review from a business's review list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Only unique together with `business_id`
    pub review_id: u64,

    pub business_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit: Option<String>,

    /// Comment fragments in document order
    pub text: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_dinner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_lunch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars_dinner: Option<StarBreakdown>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars_lunch: Option<StarBreakdown>,
}

impl Review {
    /// Identity of the review across the whole site
    pub fn key(&self) -> (u64, u64) {
        (self.business_id, self.review_id)
    }

    pub fn price(&self, meal: Meal) -> Option<&str> {
        match meal {
            Meal::Dinner => self.price_dinner.as_deref(),
            Meal::Lunch => self.price_lunch.as_deref(),
        }
    }

    pub fn stars(&self, meal: Meal) -> Option<&StarBreakdown> {
        match meal {
            Meal::Dinner => self.stars_dinner.as_ref(),
            Meal::Lunch => self.stars_lunch.as_ref(),
        }
    }
}

/// A reviewer, derived from a review node that links to their profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Profile slug
    pub user_id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Whether the reviewer carries the authentication mark
    pub verified: bool,
}

/// One entry of a business menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Any record a page handler can emit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Business(Business),
    Review(Review),
    User(User),
}

impl Entity {
    /// Short kind name used in logs and statistics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Business(_) => "business",
            Self::Review(_) => "review",
            Self::User(_) => "user",
        }
    }
}

impl From<Business> for Entity {
    fn from(business: Business) -> Self {
        Self::Business(business)
    }
}

impl From<Review> for Entity {
    fn from(review: Review) -> Self {
        Self::Review(review)
    }
}

impl From<User> for Entity {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review() -> Review {
        Review {
            review_id: 77,
            business_id: 13001234,
            user_id: None,
            visit: None,
            text: vec!["Good.".to_string()],
            title: None,
            price_dinner: None,
            price_lunch: Some("￥1,000～￥1,999".to_string()),
            stars_dinner: None,
            stars_lunch: None,
        }
    }

    #[test]
    fn test_star_breakdown_maps_criteria_in_order() {
        let stars = StarBreakdown::new(
            Numeric::Number(3.5),
            [
                Numeric::Number(3.0),
                Numeric::Number(3.1),
                Numeric::Number(3.2),
                Numeric::Number(3.3),
                Numeric::Text("-".to_string()),
            ],
        );

        assert_eq!(stars.get(Criterion::Taste), &Numeric::Number(3.0));
        assert_eq!(stars.get(Criterion::Ambience), &Numeric::Number(3.2));
        assert_eq!(stars.get(Criterion::Drink), &Numeric::Text("-".to_string()));
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let value = serde_json::to_value(Entity::from(sample_review())).unwrap();

        assert_eq!(value["type"], "review");
        assert_eq!(value["review_id"], 77);
        assert!(value.get("user_id").is_none());
        assert!(value.get("stars_dinner").is_none());
        assert!(value.get("stars_lunch").is_none());
        assert_eq!(value["price_lunch"], "￥1,000～￥1,999");
    }

    #[test]
    fn test_review_key_includes_business() {
        assert_eq!(sample_review().key(), (13001234, 77));
    }

    #[test]
    fn test_meal_accessors() {
        let review = sample_review();
        assert_eq!(review.price(Meal::Dinner), None);
        assert!(review.price(Meal::Lunch).is_some());
        assert!(review.stars(Meal::Lunch).is_none());
    }

    #[test]
    fn test_entity_kind() {
        let user = User {
            user_id: "abc123".to_string(),
            name: "Taro".to_string(),
            review_count: Some(10),
            profile: None,
            verified: false,
        };
        assert_eq!(Entity::from(user).kind(), "user");
    }
}

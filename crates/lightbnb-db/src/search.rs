//! Property search: turns sparse [`SearchOptions`] into one parameterized query.
//!
//! Clauses are emitted in a fixed order (city, owner, price bounds, then the
//! rating bound after grouping) so identical options always render identical
//! SQL. The limit is always the last parameter.

use crate::condition::Condition;
use crate::sql::Sql;
use serde::{Deserialize, Serialize};

/// Row cap used when the caller does not pass one.
pub const DEFAULT_LIMIT: i64 = 10;

const SELECT_LISTINGS: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating\n\
     FROM properties\n\
     LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

const AVERAGE_RATING: &str = "avg(property_reviews.rating)::float8";

/// Optional filters for the property search. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Lower bound on `cost_per_night`, inclusive.
    pub minimum_price_per_night: Option<i32>,
    /// Upper bound on `cost_per_night`, inclusive.
    pub maximum_price_per_night: Option<i32>,
    /// Lower bound on the averaged review rating, inclusive.
    pub minimum_rating: Option<f64>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_price_per_night(mut self, price: i32) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    pub fn maximum_price_per_night(mut self, price: i32) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// The price filter these options describe.
    pub fn price_range(&self) -> PriceRange {
        PriceRange::from_bounds(self.minimum_price_per_night, self.maximum_price_per_night)
    }

    /// The city filter, ignoring empty or blank input.
    fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Which nightly-price bounds are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// Both bounds: `>= min AND <= max`.
    Between { min: i32, max: i32 },
    /// Only a lower bound.
    AtLeast(i32),
    /// Only an upper bound.
    AtMost(i32),
    /// No price filter.
    Unbounded,
}

impl PriceRange {
    pub fn from_bounds(min: Option<i32>, max: Option<i32>) -> Self {
        match (min, max) {
            (Some(min), Some(max)) => PriceRange::Between { min, max },
            (Some(min), None) => PriceRange::AtLeast(min),
            (None, Some(max)) => PriceRange::AtMost(max),
            (None, None) => PriceRange::Unbounded,
        }
    }

    /// Conditions for this range, lower bound first.
    pub fn conditions(self) -> Vec<Condition> {
        const COLUMN: &str = "properties.cost_per_night";
        match self {
            PriceRange::Between { min, max } => {
                vec![Condition::gte(COLUMN, min), Condition::lte(COLUMN, max)]
            }
            PriceRange::AtLeast(min) => vec![Condition::gte(COLUMN, min)],
            PriceRange::AtMost(max) => vec![Condition::lte(COLUMN, max)],
            PriceRange::Unbounded => Vec::new(),
        }
    }
}

/// How the `city` option is matched against `properties.city`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CityMatch {
    /// Sentence-case the input and match it as a substring with `LIKE`.
    ///
    /// Only single-word names normalize correctly: "new york" becomes
    /// "New york", which does not match "New York".
    #[default]
    SentenceCaseLike,
    /// Match the input as a substring with `ILIKE`, ignoring case entirely.
    CaseInsensitive,
}

impl CityMatch {
    fn condition(self, city: &str) -> Condition {
        const COLUMN: &str = "properties.city";
        match self {
            CityMatch::SentenceCaseLike => {
                Condition::like(COLUMN, format!("%{}%", sentence_case(city)))
            }
            CityMatch::CaseInsensitive => Condition::ilike(COLUMN, format!("%{}%", city.trim())),
        }
    }
}

/// First character uppercase, the rest lowercase.
pub fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Builder for the property search statement.
#[derive(Debug, Clone)]
pub struct PropertySearch {
    options: SearchOptions,
    limit: i64,
    city_match: CityMatch,
}

impl PropertySearch {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            limit: DEFAULT_LIMIT,
            city_match: CityMatch::default(),
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn city_match(mut self, city_match: CityMatch) -> Self {
        self.city_match = city_match;
        self
    }

    /// Conditions that go into the `WHERE` clause, in emission order.
    fn where_conditions(&self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        if let Some(city) = self.options.city_filter() {
            conditions.push(self.city_match.condition(city));
        }
        if let Some(owner_id) = self.options.owner_id {
            conditions.push(Condition::eq("properties.owner_id", owner_id));
        }
        conditions.extend(self.options.price_range().conditions());
        conditions
    }

    /// Render the statement and its parameters.
    pub fn build(&self) -> Sql {
        let mut q = Sql::new(SELECT_LISTINGS);
        q.tag("properties.search");

        let conditions = self.where_conditions();
        if !conditions.is_empty() {
            q.push("\nWHERE ");
            q.push_conditions_and(&conditions);
        }

        q.push("\nGROUP BY properties.id");

        // The rating bound applies to the per-listing average, so it can only
        // be checked after grouping.
        if let Some(rating) = self.options.minimum_rating {
            q.push("\nHAVING ");
            q.push_condition(&Condition::gte(AVERAGE_RATING, rating));
        }

        q.push("\nORDER BY properties.cost_per_night");
        q.push("\nLIMIT ").push_bind(self.limit);
        q
    }
}

/// Build the property search for `options`, capped at `limit` rows
/// ([`DEFAULT_LIMIT`] when `None`).
pub fn build_property_search(options: &SearchOptions, limit: Option<i64>) -> Sql {
    PropertySearch::new(options.clone())
        .limit(limit.unwrap_or(DEFAULT_LIMIT))
        .build()
}

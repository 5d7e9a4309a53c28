//! Filter predicates for the recipe grid
//!
//! Provides [`FilterState`]: four independent selectors plus a free-text
//! query, combined with logical AND across every non-default value.
//!
//! # Predicates
//! - category equality (`All` = unconstrained)
//! - cuisine equality (`All` = unconstrained)
//! - prep-time bucket membership (`any` = unconstrained)
//! - premium only
//! - case-insensitive substring of title, description or cuisine

use crate::error::CatalogError;
use recipe_model::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Selector value meaning "no constraint"
pub const ALL: &str = "All";

/// Category options offered by the filter bar
pub const CATEGORY_OPTIONS: [&str; 7] = [
    ALL,
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Snacks",
    "Beverages",
];

/// Cuisine options offered by the filter bar
pub const CUISINE_OPTIONS: [&str; 9] = [
    ALL,
    "Italian",
    "Mexican",
    "Chinese",
    "Indian",
    "Japanese",
    "Mediterranean",
    "American",
    "Thai",
];

/// A select box value: everything, or one exact option
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Build from a select box value, mapping `"All"` to [`Choice::All`]
    #[inline]
    #[must_use]
    pub fn from_option(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Exact equality against a recipe field; `All` accepts anything
    #[inline]
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        Self::from_option(value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self::from_option(value)
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::All => ALL.to_string(),
            Choice::Only(value) => value,
        }
    }
}

/// Fixed preparation-time ranges
///
/// Boundaries: `under15` is `< 15`, `15-30` is `15..=30`, `30-60` is
/// `31..=60`, `over60` is `> 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PrepTimeBucket {
    #[default]
    Any,
    Under15,
    From15To30,
    From30To60,
    Over60,
}

impl PrepTimeBucket {
    /// All buckets in filter bar order
    pub const ALL: [Self; 5] = [
        Self::Any,
        Self::Under15,
        Self::From15To30,
        Self::From30To60,
        Self::Over60,
    ];

    /// Check whether `minutes` falls in this bucket
    #[inline]
    #[must_use]
    pub fn contains(self, minutes: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Under15 => minutes < 15,
            Self::From15To30 => (15..=30).contains(&minutes),
            Self::From30To60 => minutes > 30 && minutes <= 60,
            Self::Over60 => minutes > 60,
        }
    }

    /// The bucket a prep time belongs to (never `Any`)
    #[must_use]
    pub fn classify(minutes: u32) -> Self {
        Self::ALL[1..]
            .iter()
            .copied()
            .find(|bucket| bucket.contains(minutes))
            .unwrap_or(Self::Over60)
    }

    /// Select box value
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Under15 => "under15",
            Self::From15To30 => "15-30",
            Self::From30To60 => "30-60",
            Self::Over60 => "over60",
        }
    }

    /// Human label shown in the select box and badges
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Any => "Any time",
            Self::Under15 => "Under 15 minutes",
            Self::From15To30 => "15-30 minutes",
            Self::From30To60 => "30-60 minutes",
            Self::Over60 => "Over 60 minutes",
        }
    }
}

impl Display for PrepTimeBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrepTimeBucket {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownPrepTime(s.to_string()))
    }
}

impl TryFrom<String> for PrepTimeBucket {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PrepTimeBucket> for String {
    fn from(bucket: PrepTimeBucket) -> Self {
        bucket.as_str().to_string()
    }
}

/// Badge shown under the filter bar for each active selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterBadge {
    Category(String),
    Cuisine(String),
    Time(PrepTimeBucket),
    PremiumOnly,
}

impl Display for FilterBadge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "Category: {category}"),
            Self::Cuisine(cuisine) => write!(f, "Cuisine: {cuisine}"),
            Self::Time(bucket) => write!(f, "Time: {}", bucket.label()),
            Self::PremiumOnly => f.write_str("Premium Only"),
        }
    }
}

/// Every filter value the grid is derived from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: Choice,
    pub cuisine: Choice,
    pub prep_time: PrepTimeBucket,
    pub premium_only: bool,
    pub query: String,
}

impl FilterState {
    /// Unconstrained filter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Choice>) -> Self {
        self.category = category.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<Choice>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_prep_time(mut self, bucket: PrepTimeBucket) -> Self {
        self.prep_time = bucket;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_premium_only(mut self, premium_only: bool) -> Self {
        self.premium_only = premium_only;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check if no predicate is active
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Reset every selector and the query
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check a single recipe against every active predicate
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.category.accepts(&recipe.category)
            && self.cuisine.accepts(&recipe.cuisine)
            && self.prep_time.contains(recipe.prep_time)
            && (!self.premium_only || recipe.is_premium)
            && self.matches_query(recipe)
    }

    fn matches_query(&self, recipe: &Recipe) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [&recipe.title, &recipe.description, &recipe.cuisine]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filter `recipes`, preserving source order
    #[must_use]
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }

    /// Badges for the non-default selectors (the query has none)
    #[must_use]
    pub fn active_badges(&self) -> Vec<FilterBadge> {
        let mut badges = Vec::new();
        if let Choice::Only(category) = &self.category {
            badges.push(FilterBadge::Category(category.clone()));
        }
        if let Choice::Only(cuisine) = &self.cuisine {
            badges.push(FilterBadge::Cuisine(cuisine.clone()));
        }
        if self.prep_time != PrepTimeBucket::Any {
            badges.push(FilterBadge::Time(self.prep_time));
        }
        if self.premium_only {
            badges.push(FilterBadge::PremiumOnly);
        }
        badges
    }
}

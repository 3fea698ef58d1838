//! Optional user filters.
//!
//! Every criterion in [`QueryParameters`] is optional; absent criteria impose
//! no constraint. A record is kept when it satisfies all present criteria, so
//! the filters commute and are applied in one pass. Text criteria match
//! case-insensitively as substrings; gender matches exactly.

use super::user::{Gender, UserRecord};

/// Optional filter criteria for listing users.
///
/// # Examples
/// ```
/// use address_book::domain::{Gender, QueryParameters};
///
/// let query = QueryParameters::default()
///     .with_gender(Gender::Male)
///     .with_name("ramon");
/// assert!(!query.is_unconstrained());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParameters {
    /// Exact gender to keep.
    pub gender: Option<Gender>,
    /// Substring of `first + " " + last`.
    pub name: Option<String>,
    /// Substring of the location's country.
    pub country: Option<String>,
    /// Substring of the location's city.
    pub city: Option<String>,
}

impl QueryParameters {
    /// Restrict to one gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Restrict to names containing `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Restrict to countries containing `country`.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict to cities containing `city`.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Whether no criterion is present.
    pub fn is_unconstrained(&self) -> bool {
        self.gender.is_none() && self.name.is_none() && self.country.is_none() && self.city.is_none()
    }

    /// Build a predicate with the text criteria case-folded once.
    pub fn matcher(&self) -> UserMatcher {
        UserMatcher {
            gender: self.gender,
            name: self.name.as_deref().map(str::to_lowercase),
            country: self.country.as_deref().map(str::to_lowercase),
            city: self.city.as_deref().map(str::to_lowercase),
        }
    }

    /// Whether `user` satisfies every present criterion.
    pub fn matches(&self, user: &UserRecord) -> bool {
        self.matcher().matches(user)
    }
}

/// Conjunction of the criteria in a [`QueryParameters`], ready to test records.
#[derive(Debug, Clone)]
pub struct UserMatcher {
    gender: Option<Gender>,
    name: Option<String>,
    country: Option<String>,
    city: Option<String>,
}

impl UserMatcher {
    /// Whether `user` satisfies every present criterion.
    pub fn matches(&self, user: &UserRecord) -> bool {
        self.gender.is_none_or(|gender| user.gender == gender)
            && contains_folded(self.name.as_deref(), &user.name.display())
            && contains_folded(self.country.as_deref(), &user.location.country)
            && contains_folded(self.city.as_deref(), &user.location.city)
    }
}

fn contains_folded(needle: Option<&str>, haystack: &str) -> bool {
    needle.is_none_or(|needle| haystack.to_lowercase().contains(needle))
}

/// Keep the records matching `query`, preserving their order.
///
/// # Examples
/// ```
/// use address_book::domain::{QueryParameters, filter_users};
///
/// assert!(filter_users(Vec::new(), &QueryParameters::default().with_city("Sofia")).is_empty());
/// ```
pub fn filter_users(users: Vec<UserRecord>, query: &QueryParameters) -> Vec<UserRecord> {
    if query.is_unconstrained() {
        return users;
    }
    let matcher = query.matcher();
    users.into_iter().filter(|user| matcher.matches(user)).collect()
}

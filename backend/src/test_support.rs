//! Test utilities for the address book crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{UserBatchRequest, UserSource, UserSourceError};
use crate::domain::{FullName, Gender, Location, UserRecord};

/// Build a user record with the fields the filters look at.
///
/// # Examples
/// ```
/// use address_book::domain::Gender;
/// use address_book::test_support::user;
///
/// let record = user("Todor", "Petrov", Gender::Female, "Sofia", "Bulgaria");
/// assert_eq!(record.name.display(), "Todor Petrov");
/// ```
pub fn user(first: &str, last: &str, gender: Gender, city: &str, country: &str) -> UserRecord {
    let title = match gender {
        Gender::Male => "Mr",
        Gender::Female => "Mrs",
    };
    UserRecord {
        gender,
        name: FullName {
            title: title.to_owned(),
            first: first.to_owned(),
            last: last.to_owned(),
        },
        location: Location {
            city: city.to_owned(),
            country: country.to_owned(),
            ..Location::default()
        },
        email: format!("{}.{}@mail.com", first.to_lowercase(), last.to_lowercase()),
        phone: "1234567890".to_owned(),
        picture: None,
        nat: "BG".to_owned(),
    }
}

/// Three Sofia residents listed in a fixed order.
pub fn sofia_residents() -> Vec<UserRecord> {
    vec![
        user("Todor", "Petrov", Gender::Female, "Sofia", "Bulgaria"),
        user("Ivan", "Petrov", Gender::Female, "Sofia", "Bulgaria"),
        user("Aleksandra", "Ivanova", Gender::Female, "Sofia", "Bulgaria"),
    ]
}

/// Mixed list with exactly one male named Ramon living in Sofia.
pub fn mixed_directory() -> Vec<UserRecord> {
    vec![
        user("Todor", "Petrov", Gender::Female, "Sofia", "Bulgaria"),
        user("Ivan", "Petrov", Gender::Male, "", "Canada"),
        user("Aleksandra", "Ivanova", Gender::Female, "Sofia", "Bulgaria"),
        user("Ramon", "Thompson", Gender::Male, "Sofia", "Bulgaria"),
    ]
}

/// In-memory [`UserSource`] returning a canned outcome and counting calls.
#[derive(Debug, Clone)]
pub struct StubUserSource {
    outcome: Result<Vec<UserRecord>, UserSourceError>,
    calls: Arc<AtomicUsize>,
}

impl StubUserSource {
    /// Source that always returns `users`.
    pub fn returning(users: Vec<UserRecord>) -> Self {
        Self {
            outcome: Ok(users),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source that always fails with `error`.
    pub fn failing(error: UserSourceError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for StubUserSource {
    async fn fetch_users(
        &self,
        _request: &UserBatchRequest,
    ) -> Result<Vec<UserRecord>, UserSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

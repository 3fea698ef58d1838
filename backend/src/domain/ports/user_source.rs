//! Driven port for fetching user batches from the demographic-data source.
//!
//! The domain owns the request shape and the error taxonomy so the directory
//! service stays independent of the HTTP client behind it.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::UserRecord;

/// One batch request sent to the data source.
///
/// The same `seed` always yields the same generated users, so a fixed seed
/// and `results` count make listings stable across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBatchRequest {
    /// Generator seed.
    pub seed: String,
    /// Number of users to generate.
    pub results: u32,
}

define_port_error! {
    /// Errors surfaced while fetching users from the data source.
    pub enum UserSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user source transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "user source timed out: {message}",
        /// The source answered with a non-success status.
        Status { status: u16, message: String } =>
            "user source returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "user source response decode failed: {message}",
    }
}

/// Port for fetching one batch of generated users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the users generated for `request`.
    ///
    /// An absent or empty payload is an empty list, not an error.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use address_book::domain::ports::{UserBatchRequest, UserSource};
    ///
    /// let users = source
    ///     .fetch_users(&UserBatchRequest { seed: "addressbook".into(), results: 100 })
    ///     .await?;
    /// assert!(users.len() <= 100);
    /// # Ok::<(), address_book::domain::ports::UserSourceError>(())
    /// ```
    async fn fetch_users(
        &self,
        request: &UserBatchRequest,
    ) -> Result<Vec<UserRecord>, UserSourceError>;
}

//! Driving port for listing users.
//!
//! Inbound adapters (HTTP handlers) call this port with client paging and
//! filter input and receive one page of matching users.

use async_trait::async_trait;
use pagination::{Page, PagingInfo, PaginationError};

use super::UserSourceError;
use crate::domain::{QueryParameters, UserRecord};

/// Errors surfaced by [`UsersQuery::list_users`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsersQueryError {
    /// Paging input was rejected.
    #[error(transparent)]
    InvalidArgument(#[from] PaginationError),
    /// The data source could not supply users.
    #[error(transparent)]
    DataSource(#[from] UserSourceError),
}

/// Domain use-case port for listing users page by page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the requested page of users matching `query`.
    async fn list_users(
        &self,
        paging: PagingInfo,
        query: &QueryParameters,
    ) -> Result<Page<UserRecord>, UsersQueryError>;
}

//! User directory use-case: fetch a batch, filter it, return one page.
//!
//! Every call fetches afresh; nothing is cached between requests. The fetch
//! runs before paging input is checked, so a failing source wins over invalid
//! paging.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PagingInfo, paginate};
use tracing::debug;

use super::filter::{QueryParameters, filter_users};
use super::ports::{UserBatchRequest, UserSource, UsersQuery, UsersQueryError};
use super::user::UserRecord;

/// [`UsersQuery`] implementation backed by a [`UserSource`].
#[derive(Clone)]
pub struct UserDirectoryService {
    source: Arc<dyn UserSource>,
    batch: UserBatchRequest,
}

impl UserDirectoryService {
    /// Build a service that requests `batch` from `source` on every call.
    ///
    /// # Examples
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// use address_book::domain::UserDirectoryService;
    /// use address_book::domain::ports::UserBatchRequest;
    ///
    /// let service = UserDirectoryService::new(
    ///     Arc::new(source),
    ///     UserBatchRequest { seed: "addressbook".into(), results: 100 },
    /// );
    /// ```
    pub fn new(source: Arc<dyn UserSource>, batch: UserBatchRequest) -> Self {
        Self { source, batch }
    }
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(
        &self,
        paging: PagingInfo,
        query: &QueryParameters,
    ) -> Result<Page<UserRecord>, UsersQueryError> {
        let users = self.source.fetch_users(&self.batch).await?;
        let fetched = users.len();
        let matching = filter_users(users, query);
        debug!(
            fetched,
            matched = matching.len(),
            page = paging.page,
            size = paging.size,
            "filtered user batch"
        );
        Ok(paginate(matching, paging)?)
    }
}

//! Offset pagination primitives shared by address book endpoints.
//!
//! [`paginate`] slices an already materialised, ordered collection into one
//! page described by [`PagingInfo`], returning a [`Page`] envelope carrying the
//! metadata clients need to render navigation controls.
//!
//! ```
//! use pagination::{PagingInfo, paginate};
//!
//! let page = paginate(vec!["a", "b", "c"], PagingInfo::new(1, 2))?;
//! assert_eq!(page.content(), &["c"]);
//! assert_eq!(page.total_pages(), 2);
//! assert_eq!(page.number(), 1);
//! # Ok::<(), pagination::PaginationError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Message carried by [`PaginationError::InvalidArgument`] for negative input.
pub const NEGATIVE_PAGING_MESSAGE: &str = "page and size must not be negative";

/// Errors raised while validating paging input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The page index or page size was rejected.
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable description of the rejected input.
        message: String,
    },
}

impl PaginationError {
    /// Build the error returned for a negative page index or size.
    #[must_use]
    pub fn negative_paging() -> Self {
        Self::InvalidArgument {
            message: NEGATIVE_PAGING_MESSAGE.to_owned(),
        }
    }
}

/// Zero-based page index and page length requested by a client.
///
/// Values are signed so callers can pass client input through unchanged;
/// [`paginate`] rejects negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PagingInfo {
    /// Zero-based page index.
    pub page: i64,
    /// Maximum number of items on the page.
    pub size: i64,
}

impl PagingInfo {
    /// Build paging input from a page index and a page length.
    #[must_use]
    pub const fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Return whether both values are non-negative.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.page >= 0 && self.size >= 0
    }
}

/// One page of an ordered collection plus navigation metadata.
///
/// ## Invariants
/// - `empty` is true exactly when `content` is empty.
/// - `total_pages` is zero whenever `content` is empty.
/// - `content.len() <= size` for pages built by [`paginate`].
///
/// Serialises as `{ content, totalPages, size, number, empty }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    total_pages: i64,
    size: i64,
    number: i64,
    empty: bool,
}

impl<T> Page<T> {
    /// Build the empty page reported when nothing lies at the requested offset.
    ///
    /// The reported `size` is always zero, whatever size was requested.
    ///
    /// ```
    /// use pagination::Page;
    ///
    /// let page = Page::<u8>::empty(3);
    /// assert!(page.is_empty());
    /// assert_eq!(page.size(), 0);
    /// assert_eq!(page.number(), 3);
    /// ```
    #[must_use]
    pub const fn empty(number: i64) -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            size: 0,
            number,
            empty: true,
        }
    }

    fn from_slice(content: Vec<T>, total_elements: usize, paging: PagingInfo, size: usize) -> Self {
        let total_pages = if content.is_empty() || size == 0 {
            0
        } else {
            i64::try_from(total_elements.div_ceil(size)).unwrap_or(i64::MAX)
        };
        let empty = content.is_empty();
        Self {
            content,
            total_pages,
            size: paging.size,
            number: paging.page,
            empty,
        }
    }

    /// Items on this page, in collection order.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Number of pages the whole collection spans at this page size.
    #[must_use]
    pub const fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Requested page length, or zero for the empty page.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Requested zero-based page index.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.number
    }

    /// Whether the page holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// Transform each item while keeping the page metadata.
    ///
    /// ```
    /// use pagination::{PagingInfo, paginate};
    ///
    /// let page = paginate(vec![1, 2, 3], PagingInfo::new(0, 2))?.map(|n| n * 10);
    /// assert_eq!(page.content(), &[10, 20]);
    /// assert_eq!(page.total_pages(), 2);
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
            empty: self.empty,
        }
    }
}

/// Slice one page out of an ordered collection.
///
/// Skips `page * size` items and takes at most `size`. When the collection is
/// empty or the offset lies at or beyond its end, the result is
/// [`Page::empty`]. An offset that overflows is treated as beyond the end.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidArgument`] when `page` or `size` is
/// negative; no partial page is produced.
///
/// # Examples
///
/// ```
/// use pagination::{PaginationError, PagingInfo, paginate};
///
/// let page = paginate(Vec::<u8>::new(), PagingInfo::new(1, 10))?;
/// assert!(page.is_empty());
/// assert_eq!(page.total_pages(), 0);
///
/// let err = paginate(vec![1_u8], PagingInfo::new(-1, -2)).unwrap_err();
/// assert_eq!(err, PaginationError::negative_paging());
/// # Ok::<(), PaginationError>(())
/// ```
pub fn paginate<I>(items: I, paging: PagingInfo) -> Result<Page<I::Item>, PaginationError>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    if !paging.is_valid() {
        return Err(PaginationError::negative_paging());
    }

    let iter = items.into_iter();
    let total_elements = iter.len();
    let (Ok(page), Ok(size)) = (usize::try_from(paging.page), usize::try_from(paging.size)) else {
        return Ok(Page::empty(paging.page));
    };
    let Some(skip) = page.checked_mul(size) else {
        return Ok(Page::empty(paging.page));
    };
    if total_elements == 0 || skip >= total_elements {
        return Ok(Page::empty(paging.page));
    }

    let content = iter.skip(skip).take(size).collect();
    Ok(Page::from_slice(content, total_elements, paging, size))
}

//! Domain model and use-cases for the address book.
//!
//! Purpose: hold the user record types, the filter and paging pipeline, and
//! the ports that keep HTTP concerns at the edges.
//!
//! Public surface:
//! - `UserRecord` and its value types: users as produced by the data source.
//! - `QueryParameters` / `filter_users`: optional conjunctive filters.
//! - `UserDirectoryService`: fetch, filter, paginate.
//! - `Error` / `ErrorCode`: transport-agnostic API errors.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod filter;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::error::{Error, ErrorCode};
pub use self::filter::{QueryParameters, UserMatcher, filter_users};
pub use self::trace_id::TraceId;
pub use self::user::{FullName, Gender, Location, Picture, Street, UnknownGender, UserRecord};
pub use self::user_directory::UserDirectoryService;


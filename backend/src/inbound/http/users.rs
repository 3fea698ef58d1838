//! Users API handlers.
//!
//! ```text
//! GET /api/users?page=0&size=10&gender=female&name=ivan&country=bulgaria&city=sofia
//! ```

use actix_web::{HttpRequest, get, web};
use pagination::{Page, PagingInfo};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::IntoParams;

use crate::domain::ports::UsersQueryError;
use crate::domain::{Error, Gender, QueryParameters, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserPageSchema};
use crate::inbound::http::state::HttpState;

/// Page index used when the client sends none.
pub const DEFAULT_PAGE: i64 = 0;
/// Page length used when the client sends none.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query string accepted by `GET /api/users`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Zero-based page index. Defaults to 0.
    #[param(example = 0)]
    pub page: Option<i64>,
    /// Page length. Defaults to 10.
    #[param(example = 10)]
    pub size: Option<i64>,
    /// Exact gender, `male` or `female`.
    #[param(example = "female")]
    pub gender: Option<String>,
    /// Case-insensitive substring of the full name.
    pub name: Option<String>,
    /// Case-insensitive substring of the country.
    pub country: Option<String>,
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
}

impl ListUsersQuery {
    fn paging(&self) -> PagingInfo {
        PagingInfo::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

impl TryFrom<ListUsersQuery> for QueryParameters {
    type Error = Error;

    fn try_from(value: ListUsersQuery) -> Result<Self, Self::Error> {
        let gender = value
            .gender
            .map(|raw| raw.parse::<Gender>())
            .transpose()
            .map_err(|err| {
                Error::invalid_request(err.to_string())
                    .with_details(json!({ "field": "gender", "code": "unknown_gender" }))
            })?;
        Ok(Self {
            gender,
            name: value.name,
            country: value.country,
            city: value.city,
        })
    }
}

/// Query extractor config turning malformed query strings into the API
/// error envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use address_book::inbound::http::users::{list_users, query_config};
///
/// let app = App::new().app_data(query_config()).service(list_users);
/// ```
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "code": "malformed_query" }))
            .into()
    })
}

/// List one page of users matching the optional filters.
///
/// Filters combine with AND; name, country and city match case-insensitive
/// substrings.
#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "One page of matching users", body = UserPageSchema),
        (status = 400, description = "Negative paging or malformed query", body = ErrorSchema),
        (status = 500, description = "Data source failure", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Page<UserRecord>>> {
    let query = query.into_inner();
    let paging = query.paging();
    let filters = QueryParameters::try_from(query)?;
    let page = state
        .users
        .list_users(paging, &filters)
        .await
        .map_err(map_users_query_error)?;
    Ok(web::Json(page))
}

fn map_users_query_error(err: UsersQueryError) -> Error {
    match err {
        UsersQueryError::InvalidArgument(err) => Error::invalid_request(err.to_string()),
        UsersQueryError::DataSource(err) => {
            error!(error = %err, kind = err.kind(), "user source failed");
            Error::internal(err.to_string())
        }
    }
}

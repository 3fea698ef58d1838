//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the HTTP endpoints from the inbound layer and the
//! schema wrappers that describe domain types without coupling them to
//! utoipa. Swagger UI serves it in debug builds; `openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FullNameSchema, GenderSchema, LocationSchema, PictureSchema,
    StreetSchema, UserPageSchema, UserRecordSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address book API",
        description = "Paged, filterable listing of generated users plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserPageSchema,
        UserRecordSchema,
        FullNameSchema,
        LocationSchema,
        StreetSchema,
        PictureSchema,
        GenderSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

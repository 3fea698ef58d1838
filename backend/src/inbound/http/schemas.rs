//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

#![expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// An unexpected error occurred, including upstream failures.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "page and size must not be negative")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Gender`].
#[derive(ToSchema)]
#[schema(as = Gender)]
pub enum GenderSchema {
    #[schema(rename = "male")]
    Male,
    #[schema(rename = "female")]
    Female,
}

/// OpenAPI schema for [`crate::domain::FullName`].
#[derive(ToSchema)]
#[schema(as = FullName)]
pub struct FullNameSchema {
    #[schema(example = "Mr")]
    title: String,
    #[schema(example = "Ramon")]
    first: String,
    #[schema(example = "Thompson")]
    last: String,
}

/// OpenAPI schema for [`crate::domain::Street`].
#[derive(ToSchema)]
#[schema(as = Street)]
pub struct StreetSchema {
    number: i64,
    name: String,
}

/// OpenAPI schema for [`crate::domain::Location`].
#[derive(ToSchema)]
#[schema(as = Location)]
pub struct LocationSchema {
    street: StreetSchema,
    #[schema(example = "Sofia")]
    city: String,
    state: String,
    #[schema(example = "Bulgaria")]
    country: String,
    /// Always a string, even when the source sent a number.
    #[schema(example = "1000")]
    postcode: String,
}

/// OpenAPI schema for [`crate::domain::Picture`].
#[derive(ToSchema)]
#[schema(as = Picture)]
pub struct PictureSchema {
    large: String,
    medium: String,
    thumbnail: String,
}

/// OpenAPI schema for [`crate::domain::UserRecord`].
#[derive(ToSchema)]
#[schema(as = UserRecord)]
pub struct UserRecordSchema {
    gender: GenderSchema,
    name: FullNameSchema,
    location: LocationSchema,
    email: String,
    phone: String,
    picture: Option<PictureSchema>,
    /// Nationality code.
    #[schema(example = "BG")]
    nat: String,
}

/// OpenAPI schema for `pagination::Page<UserRecord>`.
#[derive(ToSchema)]
#[schema(as = UserPage, rename_all = "camelCase")]
pub struct UserPageSchema {
    /// Users on this page, in source order.
    content: Vec<UserRecordSchema>,
    /// Pages needed for all matches; 0 when this page is empty.
    total_pages: i64,
    /// Requested page length; 0 for an empty result.
    size: i64,
    /// Requested page index.
    number: i64,
    /// True iff `content` is empty.
    empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        assert_eq!(ErrorSchema::name(), "Error");
        let json = schema_to_json::<ErrorSchema>();
        assert!(json.contains("traceId"), "schema should use camelCase: {json}");
        assert!(json.contains("message"));
    }

    #[test]
    fn error_code_schema_lists_every_variant() {
        let json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "internal_error"] {
            assert!(json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn page_schema_uses_wire_field_names() {
        assert_eq!(UserPageSchema::name(), "UserPage");
        let json = schema_to_json::<UserPageSchema>();
        assert!(json.contains("totalPages"), "schema should use camelCase: {json}");
        assert!(json.contains("content"));
    }

    #[test]
    fn gender_schema_is_lowercase() {
        let json = schema_to_json::<GenderSchema>();
        assert!(json.contains("\"male\""));
        assert!(json.contains("\"female\""));
    }
}

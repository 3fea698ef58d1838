//! End-to-end coverage for `GET /api/users` through the assembled app.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use address_book::domain::UserDirectoryService;
use address_book::domain::ports::{UserBatchRequest, UserSource, UserSourceError};
use address_book::inbound::http::health::HealthState;
use address_book::inbound::http::state::HttpState;
use address_book::settings::AppSettings;
use address_book::test_support::{StubUserSource, mixed_directory, sofia_residents};
use httpmock::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};

#[expect(
    dead_code,
    reason = "server module include exposes members unused in this integration test"
)]
#[path = "../src/server/mod.rs"]
mod server;

use server::{AppDependencies, ServerConfig, build_app};

struct Snapshot {
    status: StatusCode,
    trace_id: Option<String>,
    body: Value,
}

fn batch() -> UserBatchRequest {
    UserBatchRequest {
        seed: "addressbook".to_owned(),
        results: 100,
    }
}

fn deps_for(source: impl UserSource + 'static) -> AppDependencies {
    let users = UserDirectoryService::new(Arc::new(source), batch());
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::new(Arc::new(users))),
    }
}

async fn get(deps: AppDependencies, uri: &str) -> Snapshot {
    let app = actix_test::init_service(build_app(deps)).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
        .await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get("trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = actix_test::read_body(res).await;
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    Snapshot {
        status,
        trace_id,
        body,
    }
}

fn first_names(body: &Value) -> Vec<String> {
    body["content"]
        .as_array()
        .expect("content array")
        .iter()
        .map(|user| user["name"]["first"].as_str().expect("first name").to_owned())
        .collect()
}

#[actix_web::test]
async fn first_page_of_unfiltered_listing() {
    let snapshot = get(
        deps_for(StubUserSource::returning(sofia_residents())),
        "/api/users?page=0&size=2",
    )
    .await;

    assert_eq!(snapshot.status, StatusCode::OK);
    assert_eq!(first_names(&snapshot.body), ["Todor", "Ivan"]);
    assert_eq!(snapshot.body["size"], 2);
    assert_eq!(snapshot.body["number"], 0);
    assert_eq!(snapshot.body["totalPages"], 2);
    assert_eq!(snapshot.body["empty"], false);
    assert!(snapshot.trace_id.is_some());
}

#[actix_web::test]
async fn default_paging_returns_ten_per_page() {
    let snapshot = get(
        deps_for(StubUserSource::returning(mixed_directory())),
        "/api/users",
    )
    .await;

    assert_eq!(snapshot.status, StatusCode::OK);
    assert_eq!(snapshot.body["size"], 10);
    assert_eq!(snapshot.body["number"], 0);
    assert_eq!(snapshot.body["totalPages"], 1);
    assert_eq!(first_names(&snapshot.body).len(), 4);
}

#[rstest]
#[case::gender_and_name("/api/users?gender=male&name=Ramon&page=0&size=100", &["Ramon"])]
#[case::city_is_case_insensitive("/api/users?city=SOFIA", &["Todor", "Aleksandra", "Ramon"])]
#[case::country_substring("/api/users?country=can", &["Ivan"])]
#[case::full_name_spans_space("/api/users?name=r%20pet", &["Todor"])]
#[case::no_match("/api/users?gender=female&country=canada", &[])]
#[actix_web::test]
async fn filters_combine_conjunctively(#[case] uri: &str, #[case] expected: &[&str]) {
    let snapshot = get(deps_for(StubUserSource::returning(mixed_directory())), uri).await;

    assert_eq!(snapshot.status, StatusCode::OK);
    assert_eq!(first_names(&snapshot.body), expected);
}

#[actix_web::test]
async fn negative_paging_is_bad_request_with_trace_id() {
    let snapshot = get(
        deps_for(StubUserSource::returning(sofia_residents())),
        "/api/users?page=-1&size=-2",
    )
    .await;

    assert_eq!(snapshot.status, StatusCode::BAD_REQUEST);
    assert_eq!(snapshot.body["code"], "invalid_request");
    assert_eq!(snapshot.body["message"], "page and size must not be negative");
    assert_eq!(
        snapshot.body["traceId"].as_str(),
        snapshot.trace_id.as_deref()
    );
}

#[actix_web::test]
async fn source_failure_is_redacted_internal_error() {
    let snapshot = get(
        deps_for(StubUserSource::failing(UserSourceError::status(
            503_u16,
            "randomuser is down",
        ))),
        "/api/users",
    )
    .await;

    assert_eq!(snapshot.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(snapshot.body["code"], "internal_error");
    assert_eq!(snapshot.body["message"], "Internal server error");
    assert!(!snapshot.body.to_string().contains("randomuser is down"));
}

#[rstest]
#[case::past_the_end("/api/users?page=1&size=10")]
#[case::far_past_the_end("/api/users?page=1000&size=1000")]
#[actix_web::test]
async fn empty_source_yields_empty_page(#[case] uri: &str) {
    let snapshot = get(deps_for(StubUserSource::returning(Vec::new())), uri).await;

    assert_eq!(snapshot.status, StatusCode::OK);
    assert_eq!(snapshot.body["content"], json!([]));
    assert_eq!(snapshot.body["empty"], true);
    assert_eq!(snapshot.body["totalPages"], 0);
    assert_eq!(snapshot.body["size"], 0);
}

#[actix_web::test]
async fn every_request_fetches_afresh() {
    let source = StubUserSource::returning(sofia_residents());
    let deps = deps_for(source.clone());
    let app = actix_test::init_service(build_app(deps)).await;

    for _ in 0..3 {
        let req = actix_test::TestRequest::get().uri("/api/users").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(source.calls(), 3);
}

#[actix_web::test]
async fn health_probes_are_served() {
    let deps = deps_for(StubUserSource::returning(Vec::new()));
    deps.health_state.mark_ready();
    let app = actix_test::init_service(build_app(deps)).await;

    for uri in ["/health/ready", "/health/live"] {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }
}

#[actix_web::test]
async fn settings_wire_the_randomuser_adapter() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/")
                .query_param("seed", "fixed")
                .query_param("results", "2");
            then.status(200).json_body(json!({
                "results": [
                    { "gender": "male", "name": { "first": "Ramon", "last": "Thompson" },
                      "location": { "city": "Sofia", "country": "Bulgaria", "postcode": 1000 } },
                    { "gender": "female", "name": { "first": "Todor", "last": "Petrov" },
                      "location": { "city": "Plovdiv", "country": "Bulgaria", "postcode": "4000" } }
                ]
            }));
        })
        .await;
    let settings = AppSettings {
        base_url: Some(upstream.url("/api/")),
        seed: Some("fixed".to_owned()),
        results: 2,
        timeout_secs: 5,
        bind_addr: Some("127.0.0.1:0".to_owned()),
    };
    let config = ServerConfig::from_settings(&settings).expect("settings are valid");
    let deps = AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::new(config.users.clone())),
    };

    let snapshot = get(deps, "/api/users?gender=female").await;

    mock.assert_async().await;
    assert_eq!(snapshot.status, StatusCode::OK);
    assert_eq!(first_names(&snapshot.body), ["Todor"]);
    assert_eq!(snapshot.body["content"][0]["location"]["postcode"], "4000");
}

//! Query cache driving the API client against a mock backend

use std::time::Duration;

use api_client::{ApiClient, ApiConfig, ApiError};
use query_cache::{QueryClient, QueryError, QueryOptions, QueryStatus, keys};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn create_test_client(server: &MockServer) -> ApiClient {
    ApiClient::in_memory(ApiConfig::for_testing(server.uri())).unwrap()
}

#[tokio::test]
async fn pricing_page_fetches_once_within_stale_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "Starter" }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let queries = QueryClient::new();
    let options = QueryOptions::default();

    for _ in 0..3 {
        let plans: Value = queries
            .fetch_query(&keys::pricing_plans(), &options, || api.pricing().get_plans())
            .await
            .unwrap();
        assert_eq!(plans[0]["name"], "Starter");
    }
}

#[tokio::test]
async fn successful_mutation_triggers_refetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pricing/admin/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/pricing/admin/p1/toggle-popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "isPopular": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let queries = QueryClient::new();
    let options = QueryOptions::default();
    let key = keys::admin_pricing_plans();

    let _: Value = queries
        .fetch_query(&key, &options, || api.pricing().get_all_plans())
        .await
        .unwrap();
    queries
        .mutate(api.pricing().toggle_popular("p1"), &keys::pricing_plans())
        .await
        .unwrap();
    let _: Value = queries
        .fetch_query(&key, &options, || api.pricing().get_all_plans())
        .await
        .unwrap();
}

#[tokio::test]
async fn failed_mutation_keeps_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/portfolio/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/portfolio/admin/x1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let queries = QueryClient::new();
    let options = QueryOptions::default();

    let _: Value = queries
        .fetch_query(&keys::featured_projects(), &options, || {
            api.portfolio().get_featured()
        })
        .await
        .unwrap();
    let err = queries
        .mutate(api.portfolio().delete_project("x1"), &keys::portfolio())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));

    let _: Value = queries
        .fetch_query(&keys::featured_projects(), &options, || {
            api.portfolio().get_featured()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn server_error_sets_error_status_after_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let api = create_test_client(&server);
    let queries = QueryClient::new();
    let options = QueryOptions::default().retry(2, Duration::ZERO);

    let result: Result<Value, QueryError<ApiError>> = queries
        .fetch_query(&keys::admin_stats(), &options, || api.admin().get_stats())
        .await;

    let err = result.unwrap_err().into_fetch_error().unwrap();
    assert_eq!(err.status(), Some(503));
    assert_eq!(queries.status(&keys::admin_stats()), QueryStatus::Error);
}

//! Tests for the service client

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::{AttachmentCollection, Scope};
use crate::options::{
    ListProfileAttachmentsOptions, ListReportEvaluationsOptions, ListReportResourcesOptions,
    ListReportsOptions, ListScopesOptions, ListSubscopesOptions, ListTargetsOptions,
};
use crate::types::Environment;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at a port nothing listens on; any request would fail with a
/// transport error, so a parameter error proves no I/O happened.
fn offline_client() -> ComplianceClient {
    let config = ClientConfig::new("inst-1")
        .with_service_url("http://127.0.0.1:9")
        .without_rate_limit();
    ComplianceClient::new(&config).unwrap()
}

fn client_for(server: &MockServer) -> ComplianceClient {
    let config = ClientConfig::new("inst-1")
        .with_service_url(server.uri())
        .without_rate_limit();
    ComplianceClient::new(&config).unwrap()
}

fn assert_missing(err: Error, expected: &str) {
    match err {
        Error::MissingParameter { name } => assert_eq!(name, expected),
        other => panic!("Expected MissingParameter, got {other:?}"),
    }
}

#[test]
fn test_new_rejects_invalid_config() {
    let err = ComplianceClient::new(&ClientConfig::new("")).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[test]
fn test_list_with_blank_path_id_fails_early() {
    let client = offline_client();

    assert_missing(
        client
            .list_profile_attachments(&ListProfileAttachmentsOptions::new(""))
            .unwrap_err(),
        "profile_id",
    );
    assert_missing(
        client
            .list_subscopes(&ListSubscopesOptions::new("  "))
            .unwrap_err(),
        "scope_id",
    );
    assert_missing(
        client
            .list_report_evaluations(&ListReportEvaluationsOptions::new(""))
            .unwrap_err(),
        "report_id",
    );
    assert_missing(
        client
            .list_report_resources(&ListReportResourcesOptions::new(""))
            .unwrap_err(),
        "report_id",
    );
}

#[test]
fn test_list_with_zero_limit_fails_early() {
    let client = offline_client();
    let err = client
        .list_reports(&ListReportsOptions::new().with_limit(0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "limit"));
}

#[test]
fn test_pager_is_fresh_and_carries_fixed_query() {
    let client = offline_client();
    let pager = client
        .list_subscopes(&ListSubscopesOptions::new("scope-1").with_limit(10).with_name("prod"))
        .unwrap();

    assert!(pager.has_next());
    assert_eq!(pager.pages_fetched(), 0);

    let fetcher = pager.fetcher();
    assert_eq!(fetcher.path(), "/scopes/scope-1/subscopes");
    assert_eq!(fetcher.items_field(), "subscopes");
    assert_eq!(fetcher.query().len(), 2);
    assert_eq!(fetcher.query().get("limit").map(String::as_str), Some("10"));
    assert!(!fetcher.query().contains_key("scope_id"));
}

#[tokio::test]
async fn test_single_resource_blank_ids_fail_early() {
    let client = offline_client();

    assert_missing(client.get_report("").await.unwrap_err(), "report_id");
    assert_missing(client.get_report_summary(" ").await.unwrap_err(), "report_id");
    assert_missing(client.get_scope("").await.unwrap_err(), "scope_id");
    assert_missing(client.delete_rule("").await.unwrap_err(), "rule_id");
    assert_missing(client.create_scan("").await.unwrap_err(), "attachment_id");
    assert_missing(
        client.get_profile_attachment("p1", "").await.unwrap_err(),
        "attachment_id",
    );
    assert_missing(
        client
            .create_profile_attachment("", &AttachmentCollection::default())
            .await
            .unwrap_err(),
        "profile_id",
    );
}

#[tokio::test]
async fn test_list_targets_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/targets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "total_count": 1,
            "first": {"href": "https://example.com/targets"},
            "targets": [{"id": "t1", "name": "aws-prod"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client.list_targets(&ListTargetsOptions::new()).unwrap();
    let targets = pager.get_all().await.unwrap();

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].name.as_deref(), Some("aws-prod"));
    assert_eq!(pager.total_count(), Some(1));
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_list_scopes_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/scopes"))
        .and(query_param("environment", "ibm-cloud"))
        .and(query_param("name", "prod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scopes": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client
        .list_scopes(
            &ListScopesOptions::new()
                .with_environment(Environment::IbmCloud)
                .with_name("prod"),
        )
        .unwrap();

    assert!(pager.get_next().await.unwrap().is_empty());
    assert!(!pager.has_next());
}

#[tokio::test]
async fn test_create_scope_sends_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/instances/inst-1/v3/scopes"))
        .and(body_json(json!({
            "name": "prod",
            "environment": "ibm-cloud",
            "properties": [{"name": "scope_id", "value": "acct-1"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "scope-1",
            "name": "prod",
            "environment": "ibm-cloud"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = Scope::new("prod", Environment::IbmCloud).with_property("scope_id", "acct-1");
    let response = client.create_scope(&scope).await.unwrap();

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.result.id.as_deref(), Some("scope-1"));
}

#[tokio::test]
async fn test_get_latest_reports_sort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/reports/latest"))
        .and(query_param("sort", "profile_name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "home_account_id": "acct-1",
            "score": {"passed": 8, "total_count": 10, "percent": 80},
            "reports": [{"id": "r1"}, {"id": "r2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let latest = client
        .get_latest_reports(Some("profile_name"))
        .await
        .unwrap()
        .into_result();

    assert_eq!(latest.reports.len(), 2);
    assert_eq!(latest.score.map(|s| s.passed), Some(8));
}

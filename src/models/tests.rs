//! Tests for resource models

use super::*;
use crate::types::Environment;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_report_deserialize_keeps_unknown_fields() {
    let body = json!({
        "id": "rep-1",
        "type": "scheduled",
        "group_id": "grp-1",
        "created_on": "2024-03-05T10:00:00Z",
        "attachment": {"id": "att-1", "name": "weekly"},
        "profile": {"id": "prof-1", "name": "CIS", "version": "1.0.0"},
        "account": {"id": "acct-1"}
    });

    let report: Report = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(report.id.as_deref(), Some("rep-1"));
    assert_eq!(report.report_type.as_deref(), Some("scheduled"));
    assert_eq!(report.attachment_id(), Some("att-1"));
    assert_eq!(report.profile_id(), Some("prof-1"));
    assert!(report.extra.contains_key("account"));

    // Serializing back yields the same document.
    assert_eq!(serde_json::to_value(&report).unwrap(), body);
}

#[test]
fn test_rule_type_renamed() {
    let rule: Rule = serde_json::from_value(json!({
        "id": "rule-1",
        "type": "user_defined",
        "labels": ["cos"]
    }))
    .unwrap();
    assert_eq!(rule.rule_type.as_deref(), Some("user_defined"));
    assert_eq!(rule.labels, vec!["cos".to_string()]);
}

#[test]
fn test_scope_builder_serializes_minimal_body() {
    let scope = Scope::new("prod account", Environment::IbmCloud)
        .with_description("production")
        .with_property("scope_id", "acct-1")
        .with_property("scope_type", "account");

    assert_eq!(
        serde_json::to_value(&scope).unwrap(),
        json!({
            "name": "prod account",
            "description": "production",
            "environment": "ibm-cloud",
            "properties": [
                {"name": "scope_id", "value": "acct-1"},
                {"name": "scope_type", "value": "account"}
            ]
        })
    );
}

#[test]
fn test_empty_profile_serializes_to_empty_object() {
    assert_eq!(serde_json::to_value(Profile::default()).unwrap(), json!({}));
}

#[test]
fn test_report_summary_score() {
    let summary: ReportSummary = serde_json::from_value(json!({
        "report_id": "rep-1",
        "isntance_id": "inst-1",
        "score": {"passed": 8, "total_count": 10, "percent": 80.0}
    }))
    .unwrap();

    let score = summary.score.unwrap();
    assert_eq!(score.passed, 8);
    assert_eq!(score.total_count, 10);
    assert!((score.percent - 80.0).abs() < f64::EPSILON);
    assert_eq!(summary.isntance_id.as_deref(), Some("inst-1"));
}

#[test]
fn test_attachment_with_scope() {
    let attachment: Attachment = serde_json::from_value(json!({
        "id": "att-1",
        "profile_id": "prof-1",
        "status": "enabled",
        "schedule": "every_7_days",
        "scope": [{"id": "scope-1"}],
        "notifications": {"enabled": false}
    }))
    .unwrap();

    assert_eq!(attachment.scope.len(), 1);
    assert_eq!(attachment.scope[0].id.as_deref(), Some("scope-1"));
    assert!(attachment.extra.contains_key("notifications"));
}

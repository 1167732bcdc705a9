//! HTTP-level integration tests for the read-only catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, get};
use configurator_core::catalog::sample::sample_catalog;
use configurator_core::catalog::{PropertyDefinition, PropertyKind};

#[tokio::test]
async fn lists_categories() {
    let response = get(build_test_app(), "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    let ids: Vec<_> = data.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["platform", "clamp", "controller"]);
    assert_eq!(data[1]["properties"][0]["key"], "sizeCm");
}

#[tokio::test]
async fn lists_product_summaries() {
    let response = get(build_test_app(), "/api/v1/products").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 6);
    assert_eq!(data[0]["id"], "platform-modern-200");
    assert_eq!(data[0]["categoryId"], "platform");
    assert!(
        data[0].get("properties").is_none(),
        "summaries should not carry properties"
    );
}

#[tokio::test]
async fn product_detail_includes_dependencies() {
    let response = get(build_test_app(), "/api/v1/products/clamp-auto-10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let product = &json["data"];
    assert_eq!(product["name"], "AutoClamp 10");
    assert_eq!(product["properties"]["isAutomatic"], true);
    let dependency = &product["dependencies"][0];
    assert_eq!(dependency["categoryId"], "controller");
    assert_eq!(dependency["minCount"], 1);
    assert_eq!(
        dependency["propertyConstraints"][0]["key"],
        "supportsAutomaticClamps"
    );
}

#[tokio::test]
async fn unknown_product_returns_404() {
    let response = get(build_test_app(), "/api/v1/products/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("does-not-exist"));
}

#[tokio::test]
async fn sample_catalog_report_is_clean() {
    let response = get(build_test_app(), "/api/v1/catalog/report").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["categories"], 3);
    assert_eq!(json["data"]["products"], 6);
    assert!(json["data"]["issues"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn catalog_report_lists_issues() {
    let mut catalog = sample_catalog();
    catalog.categories[2]
        .properties
        .push(PropertyDefinition::new("mode", "Mode", PropertyKind::Enum));

    let response = get(build_test_app_with(catalog), "/api/v1/catalog/report").await;
    let json = body_json(response).await;
    let issues = json["data"]["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["subject"], "category controller");
}

//! Integration tests for the child support calculation engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - Single-child and multi-child guideline scenarios
//! - Income imputation
//! - Adjustment ordering and zero-clamping
//! - Degenerate zero-income requests
//! - Error cases (empty children, negative income, bad adjustments,
//!   malformed JSON)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use support_engine::api::create_router;

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Parses a Decimal out of a JSON value that rust_decimal serialized as a
/// string.
fn decimal_field(value: &Value) -> Decimal {
    decimal(value.as_str().expect("expected decimal string"))
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(custodial: i64, non_custodial: i64, children: Vec<i32>) -> Value {
    json!({
        "custodial_income_krw": custodial,
        "non_custodial_income_krw": non_custodial,
        "children": children
    })
}

// =============================================================================
// Guideline scenarios
// =============================================================================

/// Scenario A: one child age 8, incomes 2,000,000 / 3,000,000.
#[tokio::test]
async fn test_single_child_full_breakdown() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(2_000_000, 3_000_000, vec![8]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["combined_income_krw"], 5_000_000);
    assert_eq!(result["combined_income_mw"], 500);
    assert_eq!(result["income_bracket_index"], 4);
    assert_eq!(result["income_bracket_mw"]["lower_mw"], 500);
    assert_eq!(result["income_bracket_mw"]["upper_mw"], 599);
    assert_eq!(result["children_cells"][0]["age_label"], "6~8");
    assert_eq!(result["children_cells"][0]["avg_krw"], 1_292_000);
    assert_eq!(result["children_cells"][0]["low_krw"], 1_217_000);
    assert_eq!(result["children_cells"][0]["high_krw"], 1_385_000);
    assert_eq!(result["standard_total_krw"], 1_292_000);
    assert_eq!(decimal_field(&result["child_count_multiplier"]), decimal("1.065"));
    assert_eq!(result["adjusted_total_krw"], 1_375_980);
    assert_eq!(decimal_field(&result["non_custodial_share"]), decimal("0.6"));
    assert_eq!(result["non_custodial_payment_krw"], 825_588);
    assert!(result["applied_adjustments"].as_array().unwrap().is_empty());
    assert!(result["calculation_id"].as_str().is_some());
}

/// Scenario B: two children ages 2 and 15, baseline multiplier.
#[tokio::test]
async fn test_two_children_sum_distinct_cells() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(2_000_000, 3_000_000, vec![2, 15]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let cells = result["children_cells"].as_array().unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0]["age_label"], "0~2");
    assert_eq!(cells[1]["age_label"], "15~18");
    // Both cells come from the same income bracket.
    assert_eq!(cells[0]["income_bracket_mw"], cells[1]["income_bracket_mw"]);
    // 1,245,000 + 1,604,000
    assert_eq!(result["standard_total_krw"], 2_849_000);
    assert_eq!(decimal_field(&result["child_count_multiplier"]), decimal("1"));
    assert_eq!(result["non_custodial_payment_krw"], 1_709_400);
}

/// Three or more children share one multiplier.
#[tokio::test]
async fn test_three_plus_children_multiplier() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(2_000_000, 3_000_000, vec![1, 6, 10, 14]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result["child_count_multiplier"]), decimal("0.783"));
}

/// Imputed income substitutes for a zero stated income.
#[tokio::test]
async fn test_imputed_income_is_used_for_zero_stated_income() {
    let body = json!({
        "custodial_income_krw": 0,
        "non_custodial_income_krw": 3_000_000,
        "children": [8],
        "custodial_imputed_income_krw": 2_000_000
    });
    let (status, result) = post_calculate(create_router(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["combined_income_krw"], 5_000_000);
    assert_eq!(decimal_field(&result["non_custodial_share"]), decimal("0.6"));
}

/// Zero combined income is a valid degenerate case, not an error.
#[tokio::test]
async fn test_zero_combined_income_yields_zero_payment() {
    let (status, result) =
        post_calculate(create_router(), create_request(0, 0, vec![3, 7])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["combined_income_krw"], 0);
    assert_eq!(decimal_field(&result["non_custodial_share"]), decimal("0"));
    assert_eq!(result["non_custodial_payment_krw"], 0);
}

/// A raw half-KRW payment rounds up.
#[tokio::test]
async fn test_payment_rounds_half_up() {
    // Equal incomes give share 0.5; 767,000 x 1.065 x 0.5 = 408,427.5.
    let (status, result) = post_calculate(
        create_router(),
        create_request(1_000_000, 1_000_000, vec![8]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["non_custodial_payment_krw"], 408_428);
}

// =============================================================================
// Adjustments
// =============================================================================

/// Adjustments apply in the order supplied and are audited with effects.
#[tokio::test]
async fn test_adjustments_are_ordered_and_audited() {
    let body = json!({
        "custodial_income_krw": 2_000_000,
        "non_custodial_income_krw": 3_000_000,
        "children": [8],
        "adjustments": [
            {"name": "medical", "kind": "add", "value": 100_000},
            {"name": "urban", "kind": "multiplier", "value": 0.05, "is_percent": true}
        ]
    });
    let (status, result) = post_calculate(create_router(), body).await;

    assert_eq!(status, StatusCode::OK);
    // (1,375,980 + 100,000) x 1.05 = 1,549,779
    assert_eq!(result["adjusted_total_krw"], 1_549_779);

    let applied = result["applied_adjustments"].as_array().unwrap();
    assert_eq!(applied.len(), 2);
    assert_eq!(applied[0]["name"], "medical");
    assert_eq!(decimal_field(&applied[0]["effective_add_krw"]), decimal("100000"));
    assert_eq!(applied[1]["name"], "urban");
    assert_eq!(
        decimal_field(&applied[1]["effective_multiplier"]),
        decimal("1.05")
    );
}

/// An oversized subtraction clamps the adjusted total and payment at zero.
#[tokio::test]
async fn test_subtraction_clamps_at_zero() {
    let body = json!({
        "custodial_income_krw": 2_000_000,
        "non_custodial_income_krw": 3_000_000,
        "children": [8],
        "adjustments": [
            {"name": "rehab", "kind": "subtract", "value": 99_000_000}
        ]
    });
    let (status, result) = post_calculate(create_router(), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["adjusted_total_krw"], 0);
    assert_eq!(result["non_custodial_payment_krw"], 0);
}

// =============================================================================
// Error cases
// =============================================================================

/// Scenario C: zero children is rejected.
#[tokio::test]
async fn test_empty_children_is_rejected() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(2_000_000, 3_000_000, vec![]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "EMPTY_CHILDREN");
}

/// Scenario D: negative income with no imputed fallback is rejected.
#[tokio::test]
async fn test_negative_income_is_rejected() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(2_000_000, -1_000_000, vec![8]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "NEGATIVE_INCOME");
    assert!(result["message"].as_str().unwrap().contains("non-custodial"));
}

/// A child age above the table range is rejected.
#[tokio::test]
async fn test_age_out_of_range_is_rejected() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(2_000_000, 3_000_000, vec![8, 19]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "AGE_OUT_OF_RANGE");
}

/// An unknown adjustment kind is rejected with no result.
#[tokio::test]
async fn test_unknown_adjustment_kind_is_rejected() {
    let body = json!({
        "custodial_income_krw": 2_000_000,
        "non_custodial_income_krw": 3_000_000,
        "children": [8],
        "adjustments": [
            {"name": "bogus", "kind": "divide", "value": 2}
        ]
    });
    let (status, result) = post_calculate(create_router(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_ADJUSTMENT");
    assert!(result["message"].as_str().unwrap().contains("divide"));
}

/// Absurdly large incomes are rejected instead of wrapping.
#[tokio::test]
async fn test_income_overflow_is_rejected() {
    let (status, result) = post_calculate(
        create_router(),
        create_request(i64::MAX - 1, i64::MAX - 1, vec![8]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "AMOUNT_OVERFLOW");
    assert!(
        result["message"]
            .as_str()
            .unwrap()
            .contains("combined parental income")
    );
}

/// Malformed JSON never reaches the engine.
#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

/// A missing required field is reported as a validation error.
#[tokio::test]
async fn test_missing_field_is_a_validation_error() {
    let body = json!({
        "custodial_income_krw": 2_000_000,
        "children": [8]
    });
    let (status, result) = post_calculate(create_router(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(
        result["message"]
            .as_str()
            .unwrap()
            .contains("non_custodial_income_krw")
    );
}

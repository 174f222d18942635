//! Diet planner API integration tests
//!
//! Exercises the planner routes end to end through the router, plus
//! property tests for the rule-based plan arithmetic.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use proptest::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use calorix_backend::config::{
    Config, GeminiConfig, InferenceConfig, ServerConfig, StorageConfig,
};
use calorix_backend::services::planner::rule_based_plan;
use calorix_backend::{planner_app, PlannerState};
use shared::UserProfile;

fn test_config(profile_path: String) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            food_port: 0,
            planner_port: 0,
        },
        gemini: GeminiConfig {
            api_url: "http://127.0.0.1:1/generate".to_string(),
            api_key: String::new(),
            timeout_secs: 1,
        },
        inference: InferenceConfig {
            endpoint: String::new(),
            api_key: String::new(),
        },
        storage: StorageConfig { profile_path },
    }
}

fn planner_state(profile_path: String) -> PlannerState {
    PlannerState {
        recommender: None,
        config: Arc::new(test_config(profile_path)),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// ============================================================================
// Route tests
// ============================================================================

#[tokio::test]
async fn test_index_reports_fallback_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json").display().to_string();
    let app = planner_app(planner_state(path));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Calorix Diet Planner API");
    assert_eq!(body["status"], "running");
    assert_eq!(body["ml_model_available"], false);
}

#[tokio::test]
async fn test_profile_submission_returns_full_plan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json").display().to_string();
    let app = planner_app(planner_state(path.clone()));

    let payload = json!({
        "age": 30,
        "sex": "male",
        "weight_kg": 70,
        "height_cm": 175,
        "activity_level": "moderate",
        "goal": "lose_weight",
        "diet_type": "Regular",
        "allergies": ["peanuts"],
        "cuisines": {"thai": 5}
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/profile")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(body["bmr"], 1674);
    assert_eq!(body["tdee"], 2594);
    assert_eq!(body["daily_targets"]["daily_calories"], 2094);
    assert_eq!(body["daily_targets"]["protein_g"], 183);
    assert_eq!(body["daily_targets"]["carbs_g"], 157);
    assert_eq!(body["daily_targets"]["fat_g"], 81);
    assert_eq!(body["daily_targets"]["water_ml"], 2450);
    assert_eq!(body["daily_targets"]["water_glasses"], 10);

    // Four slots, three options each, menu entries verbatim
    for slot in ["breakfast", "lunch", "dinner", "snack"] {
        assert_eq!(body["meals"][slot]["options"].as_array().unwrap().len(), 3);
    }
    assert_eq!(
        body["meals"]["breakfast"]["options"][0]["food_name"],
        "Oatmeal with Berries and Nuts"
    );

    // The submitted profile is echoed back with canonical enum strings
    assert_eq!(body["user_profile"]["sex"], "male");
    assert_eq!(body["user_profile"]["goal"], "lose_weight");
    assert_eq!(body["user_profile"]["allergies"][0], "peanuts");

    // Side effect: the profile was persisted as JSON
    let saved = std::fs::read_to_string(&path).unwrap();
    let saved: Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved["age"], 30);
}

#[tokio::test]
async fn test_profile_submission_with_empty_body_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json").display().to_string();
    let app = planner_app(planner_state(path));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/profile")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    // Missing numeric fields default to zero; nothing errors
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user_profile"]["age"], 0);
    assert_eq!(body["user_profile"]["sex"], "female");
}

#[tokio::test]
async fn test_seasonal_fallback_response() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json").display().to_string();
    let app = planner_app(planner_state(path));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/seasonal?diet_type=vegan&meal_type=lunch&cuisines=thai,indian")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 3);
    assert_eq!(foods[0]["food_name"], "Seasonal lunch Option 1");
    assert_eq!(foods[0]["calories"], 300);
    assert_eq!(foods[0]["protein_g"], 15);
    assert!(["spring", "summer", "autumn", "winter"]
        .contains(&body["season"].as_str().unwrap()));
}

#[tokio::test]
async fn test_planner_health_reports_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json").display().to_string();
    let app = planner_app(planner_state(path));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ml_model"], "using_fallback");
    assert!(body["timestamp"].as_str().is_some());
}

// ============================================================================
// Property tests
// ============================================================================

fn profile(age: u32, weight_kg: f64, height_cm: f64) -> UserProfile {
    UserProfile {
        age,
        weight_kg,
        height_cm,
        ..Default::default()
    }
}

proptest! {
    /// Slot targets are rounded independently, so their sum may drift from
    /// the daily total, but never by more than the four rounding errors.
    #[test]
    fn prop_slot_targets_near_daily_total(
        age in 18u32..80,
        weight in 40.0f64..150.0,
        height in 140.0f64..210.0,
    ) {
        let plan = rule_based_plan(&profile(age, weight, height));
        let total = plan.meals.breakfast.target_calories
            + plan.meals.lunch.target_calories
            + plan.meals.dinner.target_calories
            + plan.meals.snack.target_calories;
        let daily = plan.daily_targets.daily_calories;
        prop_assert!(total.abs_diff(daily) <= 2);
    }

    /// Macro grams always fit within the calorie budget they were split from.
    #[test]
    fn prop_macro_grams_fit_calorie_budget(
        age in 18u32..80,
        weight in 40.0f64..150.0,
        height in 140.0f64..210.0,
    ) {
        let plan = rule_based_plan(&profile(age, weight, height));
        let targets = &plan.daily_targets;
        let kcal_from_macros =
            4 * targets.protein_g + 4 * targets.carbs_g + 9 * targets.fat_g;
        // Each gram figure is rounded, so allow the accumulated error
        prop_assert!(kcal_from_macros.abs_diff(targets.daily_calories) <= 9);
    }

    /// Every slot always carries exactly three candidate meals.
    #[test]
    fn prop_every_slot_has_three_options(
        age in 18u32..80,
        weight in 40.0f64..150.0,
        height in 140.0f64..210.0,
    ) {
        let plan = rule_based_plan(&profile(age, weight, height));
        for slot in [
            &plan.meals.breakfast,
            &plan.meals.lunch,
            &plan.meals.dinner,
            &plan.meals.snack,
        ] {
            prop_assert_eq!(slot.options.len(), 3);
        }
    }
}

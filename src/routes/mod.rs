//! Router assembly: HTTP endpoints, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;

/// Build the application router with:
/// - REST-ish API under `/api/v1/...`
/// - CORS (allow any origin/method/headers); the dashboard is served from another origin
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/objectives", get(http::http_get_objectives))
        .route("/api/v1/levels", get(http::http_get_levels))
        .route("/api/v1/breakdown", post(http::http_post_breakdown))
        .route("/api/v1/study_plan", post(http::http_post_study_plan))
        .route("/api/v1/tier_filter", post(http::http_post_tier_filter))
        .route("/api/v1/progress", post(http::http_post_progress))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::default()))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = send(get_req("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn objectives_and_levels_are_listed() {
        let (status, body) = send(get_req("/api/v1/objectives")).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["objectives"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|o| o["id"].as_str())
            .collect();
        assert!(ids.contains(&"ielts_70"));
        assert!(ids.contains(&"scholarship_domestic_lpdp"));

        let (status, body) = send(get_req("/api/v1/levels")).await;
        assert_eq!(status, StatusCode::OK);
        let levels = body["levels"].as_array().unwrap();
        assert_eq!(levels.len(), 6);
        assert_eq!(levels[0]["level"], "A1");
    }

    #[tokio::test]
    async fn breakdown_weights_sum_to_100() {
        let (status, body) = send(post_json(
            "/api/v1/breakdown",
            json!({
                "subObjectiveId": "ielts_70",
                "duration_months": 6,
                "user_tier": "explorer",
                "current_level": "B1",
                "target_level": "C1"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["objective_family"], "ielts");
        let tasks = body["tasks"].as_array().unwrap();
        let sum: u64 = tasks.iter().map(|t| t["weight"].as_u64().unwrap()).sum();
        assert!((99..=101).contains(&sum), "sum = {sum}");
        assert_eq!(tasks[0]["display_order"], 1);
        assert!(!body["locked"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn breakdown_accepts_dashboard_camel_case_body() {
        let (status, body) = send(post_json(
            "/api/v1/breakdown",
            json!({
                "subObjectiveId": "ielts_70",
                "objectiveLabel": "IELTS 7.0",
                "durationMonths": 12,
                "userTier": "insider",
                "currentLevel": "B1",
                "targetLevel": "C1",
                "currentIELTS": 5.5,
                "targetIELTS": 7.0
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["locked"].as_array().unwrap().is_empty());
        let tasks = body["tasks"].as_array().unwrap();
        assert_eq!(tasks.last().unwrap()["deadline_days"], 364);
    }

    #[tokio::test]
    async fn huge_duration_is_planned_as_five_years() {
        let (status, body) = send(post_json(
            "/api/v1/breakdown",
            json!({ "subObjectiveId": "ielts_70", "durationMonths": u32::MAX }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let tasks = body["tasks"].as_array().unwrap();
        // 60 months -> 260 weeks
        assert_eq!(tasks.last().unwrap()["deadline_days"], 1820);
    }

    #[tokio::test]
    async fn unknown_tier_is_rejected() {
        let (status, _) = send(post_json(
            "/api/v1/breakdown",
            json!({ "sub_objective_id": "ielts_70", "user_tier": "platinum" }),
        ))
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn study_plan_with_zero_days_is_extreme() {
        let (status, body) = send(post_json(
            "/api/v1/study_plan",
            json!({
                "objectiveLabel": "IELTS 7.0",
                "currentScores": { "reading": 6.0, "listening": 6.0, "speaking": 5.5, "writing": 5.5 },
                "targetScore": 7.0,
                "daysRemaining": 0,
                "includeSpeakingClub": true
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difficulty_level"], "extreme");
        assert!(body["daily_minutes_required"].as_u64().unwrap() > 0);
        assert_eq!(body["speaking_club_impact"]["total_sessions"], 1);
    }

    #[tokio::test]
    async fn tier_filter_splits_pro_tasks() {
        let (_, breakdown) = send(post_json(
            "/api/v1/breakdown",
            json!({ "sub_objective_id": "leadership" }),
        ))
        .await;
        let tasks = breakdown["tasks"].clone();
        let pro = tasks
            .as_array()
            .unwrap()
            .iter()
            .filter(|t| t["requires_pro"] == true)
            .count();

        let (status, body) = send(post_json(
            "/api/v1/tier_filter",
            json!({ "tasks": tasks, "tier": "explorer" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locked"].as_array().unwrap().len(), pro);

        let (_, body) = send(post_json(
            "/api/v1/tier_filter",
            json!({ "tasks": breakdown["tasks"].clone(), "tier": "insider" }),
        ))
        .await;
        assert!(body["locked"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn progress_is_weighted() {
        let (status, body) = send(post_json(
            "/api/v1/progress",
            json!({ "items": [
                { "weight": 25, "completed": true },
                { "weight": 75 }
            ]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "percent": 25 }));
    }
}

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::modules::activities::core::seed::seed_activities;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app() -> Router {
    router(AppState::new(Arc::new(InMemoryActivityStore::seeded(
        seed_activities(),
    ))))
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn participants(activities: &serde_json::Value, name: &str) -> Vec<String> {
    serde_json::from_value(activities[name]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn signs_up_and_lists_multiple_students() {
    let app = app();

    for email in ["student1@mergington.edu", "student2@mergington.edu"] {
        let (status, _) = call(
            &app,
            Method::POST,
            &format!("/activities/Tennis%20Club/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, activities) = call(&app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        participants(&activities, "Tennis Club"),
        vec![
            "lily@mergington.edu".to_string(),
            "student1@mergington.edu".to_string(),
            "student2@mergington.edu".to_string(),
        ]
    );
}

#[tokio::test]
async fn duplicate_signup_is_recorded_once() {
    let app = app();
    let (_, before) = call(&app, Method::GET, "/activities").await;
    let before = participants(&before, "Science Club").len();

    let uri = "/activities/Science%20Club/signup?email=newstudent@mergington.edu";
    let (first, body) = call(&app, Method::POST, uri).await;
    assert_eq!(first, StatusCode::OK);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("newstudent@mergington.edu")
    );
    let (second, body) = call(&app, Method::POST, uri).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already signed up"));

    let (_, after) = call(&app, Method::GET, "/activities").await;
    let after = participants(&after, "Science Club");
    assert_eq!(after.len(), before + 1);
    assert_eq!(
        after
            .iter()
            .filter(|p| *p == "newstudent@mergington.edu")
            .count(),
        1
    );
}

#[tokio::test]
async fn unregister_removes_the_participant() {
    let app = app();
    let email = "student4@mergington.edu";

    let (status, _) = call(
        &app,
        Method::POST,
        &format!("/activities/Drama%20Club/signup?email={email}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, activities) = call(&app, Method::GET, "/activities").await;
    assert!(participants(&activities, "Drama Club").contains(&email.to_string()));

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/activities/Drama%20Club/unregister?email={email}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Unregistered"));

    let (_, activities) = call(&app, Method::GET, "/activities").await;
    assert!(!participants(&activities, "Drama Club").contains(&email.to_string()));

    let (status, body) = call(
        &app,
        Method::DELETE,
        &format!("/activities/Drama%20Club/unregister?email={email}"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not registered"));
}

#[tokio::test]
async fn unknown_activities_are_not_found_on_every_mutation() {
    let app = app();

    let (status, _) = call(
        &app,
        Method::POST,
        "/activities/Fake%20Activity/signup?email=student@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        Method::DELETE,
        "/activities/Fake%20Activity/unregister?email=student@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, activities) = call(&app, Method::GET, "/activities").await;
    assert!(activities.get("Fake Activity").is_none());
}

#[tokio::test]
async fn state_does_not_leak_between_app_instances() {
    let first = app();
    let (status, _) = call(
        &first,
        Method::POST,
        "/activities/Art%20Studio/signup?email=teststudent1@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, activities) = call(&app(), Method::GET, "/activities").await;
    assert!(
        !participants(&activities, "Art Studio").contains(&"teststudent1@mergington.edu".to_string())
    );
}

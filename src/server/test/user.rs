use serde_json::json;
use test_utils::factory;

use super::*;

/// Tests the user listing as a regular user and as a superuser.
///
/// Expected: 403, then 200 with every user counted
#[tokio::test]
async fn listing_requires_superuser() {
    let app = TestApp::new().await;
    let user = factory::create_user(app.db()).await.unwrap();
    let admin = factory::create_superuser(app.db()).await.unwrap();

    let (status, _) = app
        .request(Method::GET, "/api/users", Some(&app.token(user.id)), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, page) = app
        .request(
            Method::GET,
            "/api/users?page=0&entries=10",
            Some(&app.token(admin.id)),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
    assert_eq!(page["users"].as_array().unwrap().len(), 2);
}

/// Tests a self update that tries to grant superuser.
///
/// Expected: 200 with the name changed and the flag untouched
#[tokio::test]
async fn self_update_ignores_flags() {
    let app = TestApp::new().await;
    let user = factory::create_user(app.db()).await.unwrap();

    let (status, me) = app
        .request(
            Method::PATCH,
            "/api/users/me",
            Some(&app.token(user.id)),
            Some(json!({ "name": "Renamed", "is_superuser": true })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["name"], "Renamed");
    assert_eq!(me["is_superuser"], false);
}

/// Tests fetching another user's profile.
///
/// Expected: 403 for a regular user, 200 for a superuser
#[tokio::test]
async fn foreign_profile_needs_superuser() {
    let app = TestApp::new().await;
    let user = factory::create_user(app.db()).await.unwrap();
    let other = factory::create_user(app.db()).await.unwrap();
    let admin = factory::create_superuser(app.db()).await.unwrap();
    let uri = format!("/api/users/{}", other.id);

    let (status, _) = app
        .request(Method::GET, &uri, Some(&app.token(user.id)), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(Method::GET, &uri, Some(&app.token(admin.id)), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], other.id);
}

/// Tests a superuser deleting a user.
///
/// Expected: 204, then 404 on fetch
#[tokio::test]
async fn superuser_deletes_user() {
    let app = TestApp::new().await;
    let other = factory::create_user(app.db()).await.unwrap();
    let admin = factory::create_superuser(app.db()).await.unwrap();
    let token = app.token(admin.id);
    let uri = format!("/api/users/{}", other.id);

    let (status, _) = app.request(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.request(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

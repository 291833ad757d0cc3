mod common;

use actix_web::{cookie::Cookie, http::StatusCode, test};
use common::{client::TestClient, test_data::sample_signup, TestContext};
use portal_auth::utils::webutils::SESSION_COOKIE;
use serde_json::Value;

#[actix_web::test]
async fn test_v1_create_without_session() {
    println!("\n\n[+] Running test: test_v1_create_without_session");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.sessions.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(sample_signup("v1@example.com", "secret1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("password").is_none());

    println!("[>] Same validation as registration");
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(sample_signup("weak@example.com", "123"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(sample_signup("v1@example.com", "secret1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_EXISTS");
    println!("[/] Test passed: anonymous create works and is validated.");
}

#[actix_web::test]
async fn test_v1_delete_reaches_handler_without_session() {
    println!("\n\n[+] Running test: test_v1_delete_reaches_handler_without_session");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.sessions.clone());
    let app = test::init_service(client.create_app()).await;
    let (user_id, _token) = client
        .create_test_user("victim@example.com", "secret1")
        .await
        .expect("Failed creating a test user");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    // not a redirect: the gate let it through and the handler refused
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(ctx.db.find_user_by_id(&user_id).await.unwrap().is_some());
    println!("[/] Test passed: anonymous delete refused by the handler.");
}

#[actix_web::test]
async fn test_v1_delete_other_users_account_forbidden() {
    println!("\n\n[+] Running test: test_v1_delete_other_users_account_forbidden");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.sessions.clone());
    let app = test::init_service(client.create_app()).await;
    let (victim_id, _) = client.create_test_user("victim@example.com", "secret1").await.unwrap();
    let (_attacker_id, attacker_token) = client.create_test_user("attacker@example.com", "secret1").await.unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{victim_id}"))
        .cookie(Cookie::new(SESSION_COOKIE, attacker_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(ctx.db.find_user_by_id(&victim_id).await.unwrap().is_some());
    println!("[/] Test passed: cross-account delete forbidden.");
}

#[actix_web::test]
async fn test_v1_delete_own_account_then_again() {
    println!("\n\n[+] Running test: test_v1_delete_own_account_then_again");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.sessions.clone());
    let app = test::init_service(client.create_app()).await;
    let (user_id, token) = client.create_test_user("self@example.com", "secret1").await.unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{user_id}"))
        .cookie(Cookie::new(SESSION_COOKIE, token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains(&user_id));
    assert!(ctx.db.find_user_by_id(&user_id).await.unwrap().is_none());

    println!("[>] Deleting the now missing account with the still-valid token");
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{user_id}"))
        .cookie(Cookie::new(SESSION_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Internal server error");
    println!("[/] Test passed: owner delete works, deleting a missing user is a 500.");
}

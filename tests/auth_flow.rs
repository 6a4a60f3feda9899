mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use common::{client::TestClient, TestContext};
use social_api::utils::token::TokenService;

#[actix_web::test]
async fn test_protected_routes_require_token() {
    println!("\n\n[+] Running test: test_protected_routes_require_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    for uri in ["/users", "/users/1", "/users/1/followers", "/publications"] {
        println!("[>] Sending GET request to {} without credentials", uri);
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
    println!("[/] Test passed: Unauthenticated requests rejected.");
}

#[actix_web::test]
async fn test_malformed_authorization_header() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;
    let (_, token) = client.create_test_user("ada").await.unwrap();

    let headers = [
        token.clone(),
        format!("Bearer {} extra", token),
        "Bearer".to_string(),
        "Bearer not.a.jwt".to_string(),
    ];
    for header in headers {
        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(("Authorization", header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "MALFORMED_TOKEN");
    }
}

#[actix_web::test]
async fn test_expired_and_foreign_tokens() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;
    let (id, _) = client.create_test_user("ada").await.unwrap();

    let expired = ctx.tokens.issue_at(id, Utc::now() - Duration::hours(7)).unwrap();
    let foreign = TokenService::new(b"some-other-deployment-secret").issue(id).unwrap();

    for token in [expired, foreign] {
        let req = test::TestRequest::get()
            .uri(&format!("/users/{}", id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "INVALID_TOKEN");
    }
}

#[actix_web::test]
async fn test_rejected_mutation_leaves_state_intact() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;
    let (id, _) = client.create_test_user("ada").await.unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{}", id))
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(ctx.db.get_user_by_id(id).await.unwrap().handle, "ada");
}

#[actix_web::test]
async fn test_public_routes_need_no_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(common::test_data::sample_user("open"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({ "email": "open@test.com", "password": "password123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

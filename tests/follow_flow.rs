mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use social_api::types::error::AppError;

fn handles(users: &[social_api::types::user::UserView]) -> Vec<&str> {
    users.iter().map(|u| u.handle.as_str()).collect()
}

#[actix_web::test]
async fn test_follow_flow_success() {
    println!("\n\n[+] Running test: test_follow_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let (ada_id, _) = client.create_test_user("ada").await.unwrap();
    let (_, bob_token) = client.create_test_user("bob").await.unwrap();
    let (_, cy_token) = client.create_test_user("cy").await.unwrap();
    println!("[+] Created three users.");

    for token in [&bob_token, &cy_token] {
        println!("[>] Sending follow request for /users/{}/follow", ada_id);
        let req = test::TestRequest::post()
            .uri(&format!("/users/{}/follow", ada_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/followers", ada_id))
        .insert_header(("Authorization", format!("Bearer {}", bob_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["handle"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["bob", "cy"]);
    println!("[/] Test passed: Followers listed.");
}

#[actix_web::test]
async fn test_follow_flow_self_and_missing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let (ada_id, token) = client.create_test_user("ada").await.unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/users/{}/follow", ada_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/users/4242/follow")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(ctx.db.following(ada_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_follow_is_idempotent() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let (a, _) = client.create_test_user("a").await.unwrap();
    let (b, _) = client.create_test_user("b").await.unwrap();

    ctx.db.follow(a, b).await.unwrap();
    ctx.db.follow(a, b).await.unwrap();

    assert_eq!(handles(&ctx.db.followers(a).await.unwrap()), vec!["b"]);
    assert_eq!(handles(&ctx.db.following(b).await.unwrap()), vec!["a"]);
    // the edge is directed
    assert!(ctx.db.followers(b).await.unwrap().is_empty());
    assert!(ctx.db.following(a).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unfollow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let (a, _) = client.create_test_user("a").await.unwrap();
    let (b, _) = client.create_test_user("b").await.unwrap();

    // nothing to remove yet
    ctx.db.unfollow(a, b).await.unwrap();

    ctx.db.follow(a, b).await.unwrap();
    ctx.db.unfollow(a, b).await.unwrap();
    assert!(ctx.db.followers(a).await.unwrap().is_empty());

    ctx.db.unfollow(a, b).await.unwrap();
}

#[tokio::test]
async fn test_follow_rejections_are_typed() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let (a, _) = client.create_test_user("a").await.unwrap();

    assert!(matches!(ctx.db.follow(a, a).await, Err(AppError::Validation(_))));
    assert!(matches!(ctx.db.follow(999, a).await, Err(AppError::NotFound)));
    assert!(ctx.db.followers(a).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_user_has_empty_graph() {
    let ctx = TestContext::new().await;
    assert!(ctx.db.followers(12345).await.unwrap().is_empty());
    assert!(ctx.db.following(12345).await.unwrap().is_empty());
    assert!(ctx.db.timeline(12345).await.unwrap().is_empty());
}

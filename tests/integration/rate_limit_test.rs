use actix_web::{test, web, App, HttpResponse};
use clinic_pay::middleware::RateLimiter;
use serde_json::{json, Value};

async fn test_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

#[actix_web::test]
async fn test_rate_limit_enforced_on_api_paths() {
    let app = test::init_service(
        App::new()
            .wrap(RateLimiter::new(3).unwrap())
            .route("/api/payment/status", web::post().to(test_handler)),
    )
    .await;

    for i in 0..3 {
        let req = test::TestRequest::post().uri("/api/payment/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200, "Request {} should succeed", i + 1);
    }

    let req = test::TestRequest::post().uri("/api/payment/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 429);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"error": true, "message": "Maximum 3 requests per minute"})
    );
}

#[actix_web::test]
async fn test_health_is_not_rate_limited() {
    let app = test::init_service(
        App::new()
            .wrap(RateLimiter::new(1).unwrap())
            .route("/health", web::get().to(test_handler)),
    )
    .await;

    for _ in 0..5 {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
    }
}

#[actix_web::test]
async fn test_clones_share_one_quota() {
    let limiter = RateLimiter::new(2).unwrap();
    let first = test::init_service(
        App::new()
            .wrap(limiter.clone())
            .route("/api/payment/register", web::post().to(test_handler)),
    )
    .await;
    let second = test::init_service(
        App::new()
            .wrap(limiter)
            .route("/api/payment/register", web::post().to(test_handler)),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/payment/register").to_request();
    assert_eq!(test::call_service(&first, req).await.status().as_u16(), 200);
    let req = test::TestRequest::post().uri("/api/payment/register").to_request();
    assert_eq!(test::call_service(&second, req).await.status().as_u16(), 200);
    let req = test::TestRequest::post().uri("/api/payment/register").to_request();
    assert_eq!(test::call_service(&first, req).await.status().as_u16(), 429);
}

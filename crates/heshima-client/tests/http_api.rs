//! HTTP behaviour of `HttpStudioApi` against a local mock server.

use std::time::Duration;

use heshima_client::{
    AdminCredentials, ApiError, CatalogLoader, ClientConfig, HttpStudioApi, InquirySubmission, StudioApi,
};
use heshima_core::catalog::{fallback_products, CATALOG_ERROR_MESSAGE};
use heshima_core::inquiry::INQUIRY_FAILED_MESSAGE;
use heshima_core::{InquiryDraft, InquiryPayload, Money, ProductId, SubmissionStatus};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpStudioApi {
    let config = ClientConfig::new(&server.uri()).unwrap();
    HttpStudioApi::new(&config).unwrap()
}

fn admin_api_for(server: &MockServer) -> HttpStudioApi {
    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_admin(AdminCredentials::new("admin", "s3cret"));
    HttpStudioApi::new(&config).unwrap()
}

fn payload() -> InquiryPayload {
    InquiryPayload {
        product_id: ProductId(2),
        name: "Jaha Knight".into(),
        email: "jaha@example.com".into(),
        message: "logo work".into(),
    }
}

#[tokio::test]
async fn test_products_parse_decimal_prices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Branding", "basePrice": 750.0, "description": "Kit." },
            { "id": 4, "name": "Copy", "basePrice": "199.99" },
            { "id": 5, "name": "Audit", "basePrice": null, "description": "Free." }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = api_for(&server).fetch_products().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].price(), Money::from_cents(75000));
    assert_eq!(products[1].price(), Money::from_cents(19999));
    assert_eq!(products[1].description, "");
    assert_eq!(products[2].base_price, None);
}

#[tokio::test]
async fn test_products_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_products().await.unwrap_err();

    assert_eq!(err, ApiError::Status { status: 500, body: "boom".into() });
}

#[tokio::test]
async fn test_products_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_products().await.unwrap_err();

    assert!(matches!(err, ApiError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn test_products_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let api = HttpStudioApi::new(&config).unwrap();

    assert_eq!(api.fetch_products().await.unwrap_err(), ApiError::Timeout);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let server = MockServer::start().await;
    let api = api_for(&server);
    drop(server);

    let err = api.fetch_products().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_) | ApiError::Timeout), "{err:?}");
}

#[tokio::test]
async fn test_catalog_loader_falls_back_on_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let loader = CatalogLoader::new();
    loader.load(&api).await;
    loader.load(&api).await;

    assert_eq!(loader.error().as_deref(), Some(CATALOG_ERROR_MESSAGE));
    assert_eq!(loader.display_list(), fallback_products());
}

#[tokio::test]
async fn test_submit_posts_payload_and_reads_echo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/inquiries"))
        .and(body_json(json!({
            "productId": 2,
            "name": "Jaha Knight",
            "email": "jaha@example.com",
            "message": "logo work"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "customerName": "Jaha Knight",
            "customerEmail": "jaha@example.com",
            "createdAt": "2025-02-01T14:05:00",
            "notes": "logo work",
            "items": [{ "productId": 2, "productName": "Web Design", "quantity": 1, "finalPrice": 1200 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = api_for(&server).submit_inquiry(&payload()).await.unwrap();

    assert_eq!(record.id, 77);
    assert_eq!(record.items.len(), 1);
    assert_eq!(record.items[0].final_price, Some(Money::from_cents(120000)));
}

#[tokio::test]
async fn test_submit_accepts_200() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/inquiries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3 })))
        .mount(&server)
        .await;

    let record = api_for(&server).submit_inquiry(&payload()).await.unwrap();

    assert_eq!(record.id, 3);
}

#[tokio::test]
async fn test_submit_rejects_other_success_codes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/inquiries"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let err = api_for(&server).submit_inquiry(&payload()).await.unwrap_err();

    assert_eq!(err.status(), Some(202));
}

#[tokio::test]
async fn test_submit_malformed_echo_keeps_draft() {
    let bodies = [
        ResponseTemplate::new(201).set_body_string("created"),
        ResponseTemplate::new(201).set_body_json(json!({ "customerName": "Jaha Knight" })),
    ];

    for body in bodies {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/inquiries"))
            .respond_with(body)
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let draft = InquiryDraft::new(2, "Jaha Knight", "jaha@example.com", "logo work");
        let submission = InquirySubmission::with_draft(draft.clone());

        submission.submit(&api, &fallback_products()).unwrap().await;

        assert_eq!(submission.status(), SubmissionStatus::Failed);
        assert_eq!(submission.message().as_deref(), Some(INQUIRY_FAILED_MESSAGE));
        assert_eq!(submission.draft(), draft);
        assert!(submission.last_receipt().is_none());
    }
}

#[tokio::test]
async fn test_inquiries_send_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/inquiries"))
        .and(header("authorization", "Basic YWRtaW46czNjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "customerName": "B", "items": "not-a-list" },
            { "id": 1, "customerName": "A" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = admin_api_for(&server).fetch_inquiries().await.unwrap();

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    assert!(records[0].items.is_empty());
}

#[tokio::test]
async fn test_inquiries_unauthorized() {
    for status in [401u16, 403] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/inquiries"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let err = admin_api_for(&server).fetch_inquiries().await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized { status });
        assert!(err.is_auth_failure());
        assert!(!err.to_string().contains("s3cret"));
    }
}

#[tokio::test]
async fn test_inquiries_without_credentials_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/inquiries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_inquiries().await.unwrap_err();

    assert_eq!(err, ApiError::MissingCredentials);
}

//! Dispatcher tests against a mock processing API.

use paycek_api_client::endpoints::{OpenPaymentOptions, PaymentData};
use paycek_api_client::{
    ApiError, ApiResponse, CallbackHeaders, CallbackRequest, ClientConfig, Credentials, FixedNonce,
    PaycekClient, Payload,
};
use paycek_crypto::CallbackVerifier;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NONCE: &str = "1700000000000";
const MAC: &str = "a92383ca2f28f9383aab965a73a8c5e379eab2a549f412b1f5e32a7c7e2a5653\
                   2799d7eeb3cf1650225756816ebe2b26990c81cd069ca4416c1ef6e9cac24e46";

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new("k1", "s1").with_host(server.uri())
}

fn fixed_client(server: &MockServer) -> PaycekClient {
    PaycekClient::with_nonce_source(config(server), FixedNonce::new(NONCE)).unwrap()
}

#[tokio::test]
async fn get_payment_sends_signed_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/processing/api/payment/get"))
        .and(header("content-type", "application/json"))
        .and(header("apikeyauth-key", "k1"))
        .and(header("apikeyauth-nonce", NONCE))
        .and(header("apikeyauth-mac", MAC))
        .and(body_string(r#"{"payment_code":"abc"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "payment_code": "abc",
                "status": "created"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payment = fixed_client(&server)
        .payments()
        .get("abc")
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(payment.payment_code.as_deref(), Some("abc"));
    assert_eq!(payment.status.as_deref(), Some("created"));
}

#[tokio::test]
async fn sent_request_verifies_with_shared_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = PaycekClient::with_config(config(&server)).unwrap();
    let options = OpenPaymentOptions::new()
        .with_email("buyer@example.com")
        .with_description("Order #1 čćž");
    client
        .payments()
        .open("profile-1", "12.50", Some(&options))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let request = &received[0];

    let headers = CallbackHeaders::from_pairs(
        request
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_bytes())),
    );
    let body = String::from_utf8(request.body.clone()).unwrap();
    let callback = CallbackRequest::new(request.url.path(), &body)
        .with_method("POST")
        .with_content_type("application/json");

    let verifier = CallbackVerifier::new(Credentials::new("k1", "s1"));
    assert_eq!(verifier.check(&headers, &callback), Ok(()));
    assert!(!verifier.verify(&headers, &CallbackRequest::new(request.url.path(), &body)));
}

#[tokio::test]
async fn open_payment_sends_required_and_optional_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/processing/api/payment/open"))
        .and(body_json(json!({
            "profile_code": "profile-1",
            "dst_amount": "12.50",
            "email": "buyer@example.com",
            "language": "hr"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "payment_code": "p-1",
                "payment_url": "https://paycek.io/payment/p-1"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = OpenPaymentOptions::new()
        .with_email("buyer@example.com")
        .with_language("hr");
    let url = fixed_client(&server)
        .payments()
        .generate_url("profile-1", "12.50", Some(&options))
        .await
        .unwrap();

    assert_eq!(url, "https://paycek.io/payment/p-1");
}

#[tokio::test]
async fn generate_url_without_payment_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"payment_code": "p-1"}})))
        .mount(&server)
        .await;

    let err = fixed_client(&server)
        .payments()
        .generate_url("profile-1", "12.50", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingField("payment_url")));
}

#[tokio::test]
async fn empty_response_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = fixed_client(&server).payments().cancel("abc").await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyResponse { ref endpoint } if endpoint == "payment/cancel"));
}

#[tokio::test]
async fn unparseable_response_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = fixed_client(&server)
        .profiles()
        .info("profile-1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn server_error_page_is_reported_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = fixed_client(&server)
        .reports()
        .get("profile-1", "2024-01-01T00:00:00", "2024-02-01T00:00:00", None)
        .await
        .unwrap_err();
    assert!(err.is_server_error());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn error_payload_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/processing/api/payment/update"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "unsupported currency"
        })))
        .mount(&server)
        .await;

    let response = fixed_client(&server)
        .payments()
        .update("abc", "XYZ", None)
        .await
        .unwrap();
    assert!(!response.is_success());

    let err = response.into_result().unwrap_err();
    assert!(matches!(err, ApiError::Remote { ref message } if message == "unsupported currency"));
}

#[tokio::test]
async fn generic_call_with_custom_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/payment/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"payment_code": "abc"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = PaycekClient::with_nonce_source(
        config(&server).with_prefix("/v2"),
        FixedNonce::new(NONCE),
    )
    .unwrap();
    let payload = Payload::from_required(&json!({"payment_code": "abc"})).unwrap();
    let response: ApiResponse<PaymentData> = client.call("payment/get", &payload).await.unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn colliding_option_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let options = OpenPaymentOptions::new().with_field("dst_amount", "0.01");
    let err = fixed_client(&server)
        .payments()
        .open("profile-1", "12.50", Some(&options))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::FieldCollision { ref key } if key == "dst_amount"));
}

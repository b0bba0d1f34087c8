//! Main API client implementation

use crate::callback::to_callback_headers;
use crate::config::ClientConfig;
use crate::endpoints::{AccountsApi, PaymentsApi, ProfilesApi, ReportsApi};
use crate::error::{ApiError, ApiResult};
use crate::payload::Payload;
use crate::response::ApiResponse;
use paycek_crypto::{
    CallbackHeaders, CallbackRequest, CallbackVerifier, NonceSource, OutboundRequest, SignedEnvelope,
    Signer, SystemClock, DEFAULT_SIGN_CONTENT_TYPE,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn, Span};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Paycek API client
///
/// Every call is a signed `POST` of a JSON body to `{host}{prefix}/{endpoint}`.
/// The client does not retry; a failed call is reported once and the caller
/// decides what to do with it.
#[derive(Clone)]
pub struct PaycekClient {
    inner: Client,
    config: Arc<ClientConfig>,
    signer: Arc<Signer<Arc<dyn NonceSource>>>,
    verifier: Arc<CallbackVerifier>,
}

impl PaycekClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        Self::with_nonce_source(config, SystemClock)
    }

    /// Create a client that takes its nonces from `nonces`
    pub fn with_nonce_source(
        config: ClientConfig,
        nonces: impl NonceSource + 'static,
    ) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, user_agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        let credentials = config.credentials();
        let nonces: Arc<dyn NonceSource> = Arc::new(nonces);

        Ok(Self {
            inner,
            signer: Arc::new(Signer::with_nonce_source(credentials.clone(), nonces)),
            verifier: Arc::new(CallbackVerifier::new(credentials)),
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access payment endpoints
    #[must_use]
    pub fn payments(&self) -> PaymentsApi {
        PaymentsApi::new(self.clone())
    }

    /// Access profile endpoints
    #[must_use]
    pub fn profiles(&self) -> ProfilesApi {
        ProfilesApi::new(self.clone())
    }

    /// Access account endpoints
    #[must_use]
    pub fn accounts(&self) -> AccountsApi {
        AccountsApi::new(self.clone())
    }

    /// Access reporting endpoints
    #[must_use]
    pub fn reports(&self) -> ReportsApi {
        ReportsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Callback verification
    // -------------------------------------------------------------------------

    /// Verify a callback received over HTTP.
    ///
    /// `request` must carry the method and content type the callback actually
    /// used; [`CallbackRequest::new`] defaults to `GET` and an empty content type.
    /// Answer `401 Unauthorized` when this returns `false`.
    #[must_use]
    pub fn check_callback(&self, headers: &HeaderMap, request: &CallbackRequest<'_>) -> bool {
        self.verify_callback(&to_callback_headers(headers), request)
    }

    /// Verify a callback from an already collected header set.
    #[must_use]
    pub fn verify_callback(&self, headers: &CallbackHeaders, request: &CallbackRequest<'_>) -> bool {
        match self.verifier.check(headers, request) {
            Ok(()) => true,
            Err(fault) => {
                debug!(
                    endpoint = %request.endpoint(),
                    method = %request.method(),
                    reason = %fault,
                    "Callback rejected"
                );
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Sign and send `payload` to `endpoint`, decoding the JSON response.
    ///
    /// The body is serialized once; that exact string is both signed and sent.
    #[instrument(skip(self, payload), fields(request_id))]
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &Payload,
    ) -> ApiResult<ApiResponse<T>> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let path = self.config.endpoint_path(endpoint);
        let url = self.config.endpoint_url(endpoint);
        let body = payload.to_body_string()?;
        let envelope = self.sign(&path, &body);

        let mut request = self
            .inner
            .post(&url)
            .header(X_REQUEST_ID, &request_id)
            .header(CONTENT_TYPE, DEFAULT_SIGN_CONTENT_TYPE);
        for (name, value) in envelope.headers() {
            request = request.header(name, value);
        }

        let start = Instant::now();
        let response = match request.body(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    endpoint = %endpoint,
                    error = %e,
                    "Request failed"
                );
                return Err(ApiError::Request(e));
            }
        };

        let status = response.status();
        let text = response.text().await?;
        debug!(
            request_id = %request_id,
            endpoint = %endpoint,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis(),
            "Response received"
        );

        decode_response(endpoint, status, &text)
    }

    fn sign(&self, path: &str, body: &str) -> SignedEnvelope {
        self.signer.sign(&OutboundRequest::new(path, body))
    }
}

/// Decode a response body into the API envelope
fn decode_response<T: DeserializeOwned>(
    endpoint: &str,
    status: StatusCode,
    text: &str,
) -> ApiResult<ApiResponse<T>> {
    if text.trim().is_empty() {
        return if status.is_success() {
            Err(ApiError::EmptyResponse {
                endpoint: endpoint.to_string(),
            })
        } else {
            Err(ApiError::api_response(status.as_u16(), "empty response body"))
        };
    }

    match serde_json::from_str(text) {
        Ok(response) => Ok(response),
        Err(_) if !status.is_success() => Err(ApiError::api_response(status.as_u16(), text)),
        Err(source) => Err(ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }),
    }
}

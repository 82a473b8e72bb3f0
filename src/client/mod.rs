//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod error_log;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    BalanceResponse, MessageIdSet, OriginatorResponse, OutboundMessage, SendSmsResponse, SenderId,
    SmsId, StatusResponse, Token, ValidationError,
};
use crate::transport::{
    decode_balance_response, decode_originator_response, decode_send_response,
    decode_status_response, encode_empty_body, encode_send_body, encode_status_body, unwrap_info,
    unwrap_success_request,
};

pub use error_log::ErrorLog;

const DEFAULT_BASE_URL: &str = "https://im.smsclub.mobi/sms/";

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    fn build_request(
        &self,
        url: &str,
        bearer: &str,
        body: Vec<u8>,
    ) -> reqwest::Result<reqwest::blocking::Request> {
        self.client
            .post(url)
            .bearer_auth(bearer)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .build()
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        bearer: &str,
        body: Vec<u8>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let request = self.build_request(url, bearer, body)?;
        let response = self.client.execute(request)?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMSClub API method, appended to the base URL.
pub enum ApiMethod {
    Send,
    Status,
    Balance,
    Originator,
}

impl ApiMethod {
    /// Path segment under the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Status => "status",
            Self::Balance => "balance",
            Self::Originator => "originator",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClubClient`].
///
/// Every error returned from a public client method is also appended to the client's
/// [`ErrorLog`].
///
/// A non-2xx HTTP response is always reported as [`SmsClubError::HttpStatus`], with the
/// provider's body kept as text. Such bodies never reach the caller as an `Ok` value.
pub enum SmsClubError {
    /// No token was configured; no request was sent.
    #[error("authentication error: credential is required")]
    Authentication,

    /// A required field is missing or malformed.
    #[error("validation error: {0}")]
    Validation(ValidationError),

    /// More than 100 recipients or message ids in one call.
    #[error("limit exceeded: {actual} {field} entries (max {max})")]
    LimitExceeded {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server. `body` is the raw response
    /// text, `None` when blank.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not valid JSON.
    #[error("malformed response body: {0}")]
    Protocol(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<ValidationError> for SmsClubError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::TooMany { field, max, actual } => {
                Self::LimitExceeded { field, max, actual }
            }
            other => Self::Validation(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Credential and default sender of a client.
pub struct ClientConfig {
    token: Option<Token>,
    sender: Option<SenderId>,
}

impl ClientConfig {
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Sender used when an [`OutboundMessage`] does not set its own.
    pub fn sender(&self) -> Option<&SenderId> {
        self.sender.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsClubClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or TLS checks.
pub struct SmsClubClientBuilder {
    config: ClientConfig,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_invalid_certs: bool,
}

impl SmsClubClientBuilder {
    /// Create a builder with the default base URL and no token.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            accept_invalid_certs: false,
        }
    }

    pub fn token(mut self, token: Token) -> Self {
        self.config.token = Some(token);
        self
    }

    /// Default sender (alpha name) for outgoing messages.
    pub fn sender(mut self, sender: SenderId) -> Self {
        self.config.sender = Some(sender);
        self
    }

    /// Override the API base URL (`https://im.smsclub.mobi/sms/`).
    ///
    /// A trailing slash is added when missing; method names are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Only meant for test setups with self-signed certificates. Verification is on
    /// unless this is called with `true`.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build a [`SmsClubClient`].
    pub fn build(self) -> Result<SmsClubClient, SmsClubError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if self.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the SMSClub client");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| SmsClubError::Transport(Box::new(err)))?;

        Ok(SmsClubClient {
            config: self.config,
            base_url,
            pending_ids: MessageIdSet::default(),
            errors: ErrorLog::new(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for SmsClubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// Blocking SMSClub client.
///
/// Holds the token, the default sender, the pending message-id buffer for status lookups
/// and an [`ErrorLog`]. Each call issues one blocking POST to
/// `https://im.smsclub.mobi/sms/<method>` with a bearer token and a JSON body.
///
/// Like any `reqwest` blocking client, it must not be created or used from inside an
/// async runtime.
pub struct SmsClubClient {
    config: ClientConfig,
    base_url: String,
    pending_ids: MessageIdSet,
    errors: ErrorLog,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SmsClubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsClubClient")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .field("pending_ids", &self.pending_ids)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl SmsClubClient {
    /// Create a client with the default base URL.
    ///
    /// For more customization, use [`SmsClubClient::builder`].
    pub fn new(token: Token) -> Self {
        Self {
            config: ClientConfig {
                token: Some(token),
                sender: None,
            },
            base_url: DEFAULT_BASE_URL.to_owned(),
            pending_ids: MessageIdSet::default(),
            errors: ErrorLog::new(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> SmsClubClientBuilder {
        SmsClubClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the account token.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<&mut Self, SmsClubError> {
        let token = self.record(Token::new(token).map_err(SmsClubError::from))?;
        self.config.token = Some(token);
        Ok(self)
    }

    /// Replace the default sender.
    ///
    /// The value is trimmed and must be 1-11 Latin letters, digits or spaces. On failure the
    /// previous sender is kept.
    pub fn set_from(&mut self, from: impl Into<String>) -> Result<&mut Self, SmsClubError> {
        let sender = self.record(SenderId::new(from).map_err(SmsClubError::from))?;
        self.config.sender = Some(sender);
        Ok(self)
    }

    /// Store message ids for the next [`SmsClubClient::get_status`] call without ids.
    pub fn set_sms_ids(&mut self, ids: Vec<SmsId>) -> Result<&mut Self, SmsClubError> {
        let ids = self.record(MessageIdSet::new(ids).map_err(SmsClubError::from))?;
        self.pending_ids = ids;
        Ok(self)
    }

    /// Message ids waiting for the next status lookup.
    pub fn pending_sms_ids(&self) -> &MessageIdSet {
        &self.pending_ids
    }

    /// Every error returned by this client so far.
    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn has_error(&self) -> bool {
        self.errors.has_error()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Send `message` through `sms/send`.
    ///
    /// Uses the client's default sender when the message has none.
    ///
    /// Errors:
    /// - [`SmsClubError::Validation`] when sender, recipients or text are missing,
    /// - [`SmsClubError::LimitExceeded`] for more than 100 recipients,
    /// - [`SmsClubError::Authentication`] when no token is set,
    /// - transport, HTTP status and protocol errors from the request itself.
    pub fn send(&mut self, message: &OutboundMessage) -> Result<SendSmsResponse, SmsClubError> {
        let result = self.send_message(message);
        self.record(result)
    }

    /// Look up delivery statuses through `sms/status`.
    ///
    /// A non-empty `ids` replaces the stored id buffer; an empty one reuses it (see
    /// [`SmsClubClient::set_sms_ids`]). Once the request has been issued the buffer is
    /// cleared, whether it succeeded or not.
    pub fn get_status(&mut self, ids: Vec<SmsId>) -> Result<StatusResponse, SmsClubError> {
        let result = self.check_status(ids);
        self.record(result)
    }

    /// Account balance through `sms/balance`.
    pub fn get_balance(&mut self) -> Result<BalanceResponse, SmsClubError> {
        let result = self
            .invoke_unrecorded(ApiMethod::Balance, &encode_empty_body())
            .map(|raw| decode_balance_response(unwrap_info(raw)));
        self.record(result)
    }

    /// Alpha names registered for the account through `sms/originator`.
    pub fn get_originator(&mut self) -> Result<OriginatorResponse, SmsClubError> {
        let result = self
            .invoke_unrecorded(ApiMethod::Originator, &encode_empty_body())
            .map(|raw| decode_originator_response(unwrap_info(raw)));
        self.record(result)
    }

    /// Issue a raw request and return the decoded JSON with the `success_request` envelope
    /// removed. An empty `params` map is sent as an empty body.
    pub fn invoke(
        &mut self,
        method: ApiMethod,
        params: &Map<String, Value>,
    ) -> Result<Value, SmsClubError> {
        let result = self.invoke_unrecorded(method, params);
        self.record(result)
    }

    fn send_message(&self, message: &OutboundMessage) -> Result<SendSmsResponse, SmsClubError> {
        let body = encode_send_body(message, self.config.sender.as_ref())?;
        let body = json_body(&body)?;
        let raw = self.execute(ApiMethod::Send, body)?;
        Ok(decode_send_response(raw))
    }

    fn check_status(&mut self, ids: Vec<SmsId>) -> Result<StatusResponse, SmsClubError> {
        if !ids.is_empty() {
            self.pending_ids = MessageIdSet::new(ids)?;
        }
        self.require_token()?;

        let result = json_body(&encode_status_body(&self.pending_ids))
            .and_then(|body| self.execute(ApiMethod::Status, body));
        self.pending_ids.clear();

        Ok(decode_status_response(unwrap_info(result?)))
    }

    fn invoke_unrecorded(
        &self,
        method: ApiMethod,
        params: &Map<String, Value>,
    ) -> Result<Value, SmsClubError> {
        self.require_token()?;
        let body = if params.is_empty() {
            Vec::new()
        } else {
            json_body(params)?
        };
        self.execute(method, body)
    }

    fn execute(&self, method: ApiMethod, body: Vec<u8>) -> Result<Value, SmsClubError> {
        let token = self.require_token()?;
        let url = format!("{}{}", self.base_url, method.path());
        debug!(%method, %url, body_len = body.len(), "sending SMSClub request");

        let response = self
            .http
            .post_json(&url, token.as_str(), body)
            .map_err(SmsClubError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsClubError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let decoded: Value = serde_json::from_str(&response.body)
            .map_err(|err| SmsClubError::Protocol(Box::new(err)))?;
        debug!(%method, status = response.status, "SMSClub request completed");

        Ok(unwrap_success_request(decoded))
    }

    fn require_token(&self) -> Result<&Token, SmsClubError> {
        self.config.token.as_ref().ok_or(SmsClubError::Authentication)
    }

    fn record<T>(&mut self, result: Result<T, SmsClubError>) -> Result<T, SmsClubError> {
        if let Err(err) = &result {
            warn!(error = %err, "SMSClub client error");
            self.errors.push(err.to_string());
        }
        result
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, SmsClubError> {
    serde_json::to_vec(body).map_err(|err| SmsClubError::Protocol(Box::new(err)))
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
    };
    let mut url = Url::parse(input.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}

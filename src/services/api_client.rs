use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::FileUpload;
use crate::services::token_store::TokenStore;

/// What to put in the `Authorization` header when no token is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTokenPolicy {
    /// Send `Bearer null`, which is what the catalog API has always received.
    #[default]
    SendNull,
    /// Leave the header off.
    Omit,
}

#[derive(Debug, Clone)]
enum MultipartValue {
    Text(String),
    File(FileUpload),
}

/// Form fields and files for a multipart POST, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MultipartPayload {
    parts: Vec<(String, MultipartValue)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts
            .push((name.to_string(), MultipartValue::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, upload: FileUpload) -> Self {
        self.parts.push((name.to_string(), MultipartValue::File(upload)));
        self
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(field, value)| match value {
            MultipartValue::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }

    fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.parts {
            form = match value {
                MultipartValue::Text(text) => form.text(name, text),
                MultipartValue::File(upload) => {
                    let part = Part::bytes(upload.bytes.to_vec())
                        .file_name(upload.file_name)
                        .mime_str(upload.mime.as_ref())
                        .map_err(|e| {
                            AppError::Validation(format!("Bad MIME type for {}: {}", name, e))
                        })?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartPayload),
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }
}

/// Headers a caller sends alongside a JSON body.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Authenticated client for the catalog API. One attempt per call, no retries.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    missing_token: MissingTokenPolicy,
    client: Client,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("missing_token", &self.missing_token)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into(),
            tokens,
            missing_token: MissingTokenPolicy::default(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config, tokens: Arc<dyn TokenStore>) -> Self {
        Self::new(config.api_url.clone(), tokens).with_missing_token_policy(config.missing_token)
    }

    pub fn with_missing_token_policy(mut self, policy: MissingTokenPolicy) -> Self {
        self.missing_token = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn authorization(&self) -> Result<Option<HeaderValue>> {
        let token = match (self.tokens.get_token(), self.missing_token) {
            (Some(token), _) => token,
            (None, MissingTokenPolicy::SendNull) => "null".to_string(),
            (None, MissingTokenPolicy::Omit) => return Ok(None),
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            AppError::Validation("Auth token contains characters not allowed in a header".to_string())
        })?;
        value.set_sensitive(true);
        Ok(Some(value))
    }

    /// Builds the outgoing request without sending it.
    ///
    /// Caller headers go first and `Authorization` always wins over a
    /// caller-supplied one. JSON bodies carry no implicit content type; a
    /// multipart body gets its boundary header from the transport.
    pub fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: RequestBody,
        mut headers: HeaderMap,
    ) -> Result<Request> {
        let url = self.endpoint_url(endpoint)?;

        headers.remove(AUTHORIZATION);
        if let Some(value) = self.authorization()? {
            headers.insert(AUTHORIZATION, value);
        }

        let builder = self
            .client
            .request(method, url)
            .query(query)
            .headers(headers);
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(payload) => builder.multipart(payload.into_form()?),
        };

        builder.build().map_err(|e| {
            AppError::Validation(format!("Cannot build request for {}: {}", endpoint, e))
        })
    }

    /// A bad base URL is a configuration problem; a bad endpoint is the caller's.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::Config(format!("Invalid API base URL {}: {}", self.base_url, e))
        })?;

        Url::parse(&format!("{}{}", self.base_url, endpoint))
            .map_err(|e| AppError::Validation(format!("Invalid endpoint {}: {}", endpoint, e)))
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<T> {
        let request = self.build_request(method, endpoint, query, body, headers)?;

        tracing::debug!("Catalog API request: {} {}", request.method(), request.url());

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!("Catalog API unreachable at {}: {}", endpoint, e);
            AppError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Catalog API error on {}: {}", endpoint, status);
            return Err(AppError::request_failed(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.get_with_query(endpoint, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, endpoint, query, RequestBody::Empty, HeaderMap::new())
            .await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        self.request(
            Method::POST,
            endpoint,
            &[],
            RequestBody::json(body)?,
            json_headers(),
        )
        .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: MultipartPayload,
    ) -> Result<T> {
        self.request(
            Method::POST,
            endpoint,
            &[],
            RequestBody::Multipart(payload),
            HeaderMap::new(),
        )
        .await
    }
}

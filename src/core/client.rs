//! Intento API client

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::core::config::ClientConfig;
use crate::core::errors::{ApiError, Error, Result};
use crate::core::models::{Language, Provider, SmartRouting, TranslationResult};
use crate::core::options::{ClientOption, ClientOptions, Logger, TranslationOption, TranslationOptions};
use crate::core::transport::{HttpRequest, Method, ReqwestTransport, ResponseBody};

const TRANSLATE_PATH: &str = "/ai/text/translate";
const LANGUAGES_PATH: &str = "/ai/text/translate/languages";
const ROUTING_PATH: &str = "/ai/text/translate/routing";

/// Client for the Intento text translation API.
///
/// Every call is a single request/response round trip: nothing is retried
/// and nothing is cached locally. Dropping a returned future cancels the call.
/// The client can be shared between tasks as long as its transport and
/// logger can.
#[derive(Clone)]
pub struct Client {
    options: ClientOptions,
    api_key: String,
}

impl Client {
    /// Create a client authenticating with `api_key`, with `options` applied in order
    pub fn new(api_key: impl Into<String>, options: impl IntoIterator<Item = ClientOption>) -> Self {
        Self {
            options: ClientOptions::build(options),
            api_key: api_key.into(),
        }
    }

    /// Create a client from a [`ClientConfig`], using a reqwest transport with its timeout
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let transport = match config.timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)
                .map_err(|e| Error::config(format!("build http client: {}", e)))?,
            None => ReqwestTransport::new(),
        };

        Ok(Self::new(
            config.api_key,
            [
                ClientOption::transport(transport),
                ClientOption::server_url(config.server_url),
            ],
        ))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn server_url(&self) -> &str {
        self.options.server_url()
    }

    /// List the translation providers available to the account
    pub async fn list_providers(&self) -> Result<Vec<Provider>> {
        self.get(TRANSLATE_PATH).await
    }

    /// List the languages the API knows about
    pub async fn list_languages(&self) -> Result<Vec<Language>> {
        self.get(LANGUAGES_PATH).await
    }

    /// List the smart routing schemes usable with [`TranslationOption::routing`]
    pub async fn smart_routing_list(&self) -> Result<Vec<SmartRouting>> {
        self.get(ROUTING_PATH).await
    }

    /// Translate `text` from `from` to `to`.
    ///
    /// Pass [`AUTO_DETECT_SOURCE_LANGUAGE`](crate::AUTO_DETECT_SOURCE_LANGUAGE)
    /// as `from` to let the API detect it; the detected language is then
    /// reported in the result metadata.
    pub async fn translate<I, S>(
        &self,
        text: I,
        from: &str,
        to: &str,
        options: impl IntoIterator<Item = TranslationOption>,
    ) -> Result<TranslationResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let text: Vec<String> = text.into_iter().map(Into::into).collect();
        let body = TranslationOptions::build(text, from, to, options);

        self.post(TRANSLATE_PATH, &body).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.options.server_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = HttpRequest::new(Method::GET, self.endpoint(path));
        self.execute(request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let mut request = HttpRequest::new(Method::POST, self.endpoint(path));
        request.body = Some(serde_json::to_vec(body).map_err(Error::Encode)?);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, mut request: HttpRequest) -> Result<T> {
        request.set_header("Content-Type", "application/json");
        request.set_header("apikey", self.api_key.as_str());

        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.options.transport.send(request).await?;

        let mut body = BodyGuard {
            body: response.body,
            logger: self.options.logger.as_ref(),
        };

        if let Err(e) = ApiError::from_status(response.status) {
            debug!(status = response.status, "request rejected: {}", e);
            return Err(e.into());
        }

        let bytes = body.body.read().await?;
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.options)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Closes the response body when dropped; a failed close is only logged
struct BodyGuard<'a> {
    body: Box<dyn ResponseBody>,
    logger: &'a dyn Logger,
}

impl Drop for BodyGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.body.close() {
            self.logger.log(&format!("close response body: {}", e));
        }
    }
}

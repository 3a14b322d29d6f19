//! Client-level and translation-level options
//!
//! Both families follow the same shape: an option wraps a closure that mutates
//! the options structure it is applied to. Options are applied in the order
//! they are given, so a later option overrides an earlier one touching the
//! same field.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::core::transport::{HttpTransport, ReqwestTransport};

/// Production endpoint of the synchronous Intento API wrapper
pub const DEFAULT_SERVER_URL: &str = "https://syncwrapper.inten.to";

/// Pass as the source language to let the API detect it
pub const AUTO_DETECT_SOURCE_LANGUAGE: &str = "";

/// Moderation action that reports findings without touching the translation
const MODERATION_ACTION_INFORM: &str = "inform";

/// Sink for the few diagnostics the client cannot return to the caller
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

impl<F> Logger for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Default logger: emits through `tracing`, silent without a subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::warn!(target: "intento_client", "{}", message);
    }
}

/// Settings shared by every call made through a client
#[derive(Clone)]
pub struct ClientOptions {
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) logger: Arc<dyn Logger>,
    pub(crate) server_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new()),
            logger: Arc::new(TracingLogger),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ClientOptions {
    /// Apply `options` on top of the defaults
    pub fn build(options: impl IntoIterator<Item = ClientOption>) -> Self {
        let mut built = Self::default();
        for option in options {
            option.apply(&mut built);
        }
        built
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("server_url", &self.server_url)
            .finish_non_exhaustive()
    }
}

/// Modifier for [`ClientOptions`]
pub struct ClientOption {
    apply: Box<dyn FnOnce(&mut ClientOptions) + Send>,
}

impl ClientOption {
    fn new(apply: impl FnOnce(&mut ClientOptions) + Send + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    fn apply(self, options: &mut ClientOptions) {
        (self.apply)(options)
    }

    /// Send requests through `transport`
    pub fn transport(transport: impl HttpTransport + 'static) -> Self {
        let transport: Arc<dyn HttpTransport> = Arc::new(transport);
        Self::new(move |o| o.transport = transport)
    }

    /// Send requests through an already shared transport
    pub fn shared_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(move |o| o.transport = transport)
    }

    /// Report diagnostics to `logger`
    pub fn logger(logger: impl Logger + 'static) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(logger);
        Self::new(move |o| o.logger = logger)
    }

    /// Talk to another server, e.g. a staging deployment or a mock
    pub fn server_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(move |o| o.server_url = url)
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientOption")
    }
}

/// Format of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Html,
}

/// Request body of a translation call.
///
/// Every field at its default value is left out of the JSON, since the API
/// treats a missing field differently from an explicit `false` or `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationOptions {
    #[serde(skip_serializing_if = "RequestContext::is_empty")]
    pub context: RequestContext,
    #[serde(skip_serializing_if = "ServiceOptions::is_empty")]
    pub service: ServiceOptions,
}

impl TranslationOptions {
    /// Body for translating `text` from `from` to `to`, with `options` applied in order
    pub fn build(
        text: Vec<String>,
        from: &str,
        to: &str,
        options: impl IntoIterator<Item = TranslationOption>,
    ) -> Self {
        let mut built = Self {
            context: RequestContext {
                from: from.to_string(),
                to: to.to_string(),
                text,
                format: None,
            },
            service: ServiceOptions::default(),
        };

        for option in options {
            option.apply(&mut built);
        }

        built
    }
}

/// What to translate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    /// Empty means auto-detect; it is then omitted from the body
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TextFormat>,
}

impl RequestContext {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// How the API should process the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub trace: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub routing: String,
    #[serde(skip_serializing_if = "CacheOptions::is_empty")]
    pub cache: CacheOptions,
    #[serde(rename = "notranslate", skip_serializing_if = "NoTranslateOptions::is_empty")]
    pub no_translate: NoTranslateOptions,
    #[serde(skip_serializing_if = "ModerationOptions::is_empty")]
    pub moderation: ModerationOptions,
}

impl ServiceOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub apply: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub update: bool,
}

impl CacheOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoTranslateOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub remove_markup: bool,
}

impl NoTranslateOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModerationOptions {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub action: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub used: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,
}

impl ModerationOptions {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Modifier for a single translation call
pub struct TranslationOption {
    apply: Box<dyn FnOnce(&mut TranslationOptions) + Send>,
}

impl TranslationOption {
    fn new(apply: impl FnOnce(&mut TranslationOptions) + Send + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    fn apply(self, options: &mut TranslationOptions) {
        (self.apply)(options)
    }

    /// Format of the source text
    pub fn format(format: TextFormat) -> Self {
        Self::new(move |o| o.context.format = Some(format))
    }

    /// Store the payload on the Intento side so support can investigate.
    ///
    /// By default the API runs in "no trace" mode and keeps nothing, not even
    /// temporary results. Turn this on only to reproduce an error with support.
    pub fn trace() -> Self {
        Self::new(|o| o.service.trace = true)
    }

    /// Translate with a specific provider
    pub fn provider(provider_id: impl Into<String>) -> Self {
        let provider_id = provider_id.into();
        Self::new(move |o| o.service.provider = provider_id)
    }

    /// Let smart routing pick the provider.
    ///
    /// Public schemes (for example `"best"`) choose a model per text and
    /// language pair from benchmarks and usage statistics. Accounts may also
    /// have custom schemes; see [`Client::smart_routing_list`](crate::Client::smart_routing_list).
    pub fn routing(routing: impl Into<String>) -> Self {
        let routing = routing.into();
        Self::new(move |o| o.service.routing = routing)
    }

    /// Use the server-side translation cache.
    ///
    /// `apply` serves previously cached translations; `update` stores the
    /// fresh translation (or refreshes the cached one).
    pub fn cache(apply: bool, update: bool) -> Self {
        Self::new(move |o| {
            o.service.cache.apply = apply;
            o.service.cache.update = update;
        })
    }

    /// Protect fragments wrapped in `prefix`/`suffix` from translation.
    ///
    /// Only effective with [`TextFormat::Html`]. With `remove_markup` the
    /// markers are stripped from the result.
    ///
    /// ```
    /// use intento_client::{TextFormat, TranslationOption};
    ///
    /// let options = vec![
    ///     TranslationOption::format(TextFormat::Html),
    ///     TranslationOption::no_translate(r#"<span class="notranslate">"#, "</span>", true),
    /// ];
    /// # let _ = options;
    /// ```
    pub fn no_translate(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        remove_markup: bool,
    ) -> Self {
        let prefix = prefix.into();
        let suffix = suffix.into();
        Self::new(move |o| {
            o.service.no_translate.prefix = prefix;
            o.service.no_translate.suffix = suffix;
            o.service.no_translate.remove_markup = remove_markup;
        })
    }

    /// Check the translation for unwanted content such as `"profanity"`.
    ///
    /// The check only reports; the translation itself is left unchanged.
    pub fn profanity_detection<I, S>(content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let content: Vec<String> = content.into_iter().map(Into::into).collect();
        Self::new(move |o| {
            o.service.moderation.used = true;
            o.service.moderation.content = content;
            o.service.moderation.action = MODERATION_ACTION_INFORM.to_string();
        })
    }
}

impl fmt::Debug for TranslationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TranslationOption")
    }
}

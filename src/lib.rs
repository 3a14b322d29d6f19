//! Intento Client - async Rust client for the Intento text translation API
//!
//! This library builds authenticated JSON requests, sends them through a
//! pluggable HTTP transport and maps the API status codes to typed errors.
//!
//! ```no_run
//! use intento_client::{Client, TranslationOption, AUTO_DETECT_SOURCE_LANGUAGE};
//!
//! # async fn run() -> intento_client::Result<()> {
//! let client = Client::new("your-api-key", Vec::new());
//! let result = client
//!     .translate(
//!         ["Hello World!"],
//!         AUTO_DETECT_SOURCE_LANGUAGE,
//!         "es",
//!         [TranslationOption::routing("best")],
//!     )
//!     .await?;
//! println!("{}", result.results[0]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::Client,
    config::ClientConfig,
    errors::{ApiError, Error, Result, TransportError},
    models::{Language, LanguagePair, Provider, ProviderInfo, SmartRouting, TranslationResult},
    options::{
        ClientOption, Logger, TextFormat, TracingLogger, TranslationOption,
        AUTO_DETECT_SOURCE_LANGUAGE, DEFAULT_SERVER_URL,
    },
    transport::{BytesBody, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, ResponseBody},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Translate a sentence with the Intento API
//!
//! Reads INTENTO_API_KEY (and optionally INTENTO_SERVER_URL) from the
//! environment or a `.env` file, then prints the provider list and a
//! translation of the command-line arguments.

use dotenvy::dotenv;
use intento_client::{ApiError, Client, TranslationOption, AUTO_DETECT_SOURCE_LANGUAGE};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intento_client=debug,translate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = Client::from_env()?;
    info!("Using {}", client.server_url());

    let providers = client.list_providers().await?;
    info!("{} providers available", providers.len());

    let text: Vec<String> = std::env::args().skip(1).collect();
    let text = if text.is_empty() {
        vec!["Hello World!".to_string()]
    } else {
        text
    };

    match client
        .translate(
            text,
            AUTO_DETECT_SOURCE_LANGUAGE,
            "es",
            [TranslationOption::routing("best")],
        )
        .await
    {
        Ok(result) => {
            for line in &result.results {
                println!("{}", line);
            }
            info!(
                "Served by {} (detected {:?})",
                result.service.provider.name, result.meta.detected_source_language
            );
        }
        Err(e) if e.api_error() == Some(ApiError::AuthKeyMissing) => {
            warn!("Please update your authorization key!");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

//! End-to-end tests of the client over real HTTP
//!
//! These run the default reqwest transport against a local mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use intento_client::{
    ApiError, Client, ClientConfig, ClientOption, Error, ReqwestTransport, TextFormat,
    TranslationOption, AUTO_DETECT_SOURCE_LANGUAGE,
};

// ==================== Test Helpers ====================

fn create_client(server: &MockServer) -> Client {
    Client::new("test-api-key", [ClientOption::server_url(server.uri())])
}

fn create_translation_response(text: &str) -> serde_json::Value {
    json!({
        "id": "c8f1b0d2",
        "results": [text],
        "meta": {"detected_source_language": ["en"]},
        "service": {"provider": {
            "id": "ai.text.translate.tencent.machine_translation_api",
            "name": "Tencent Machine Translation API",
            "vendor": "Tencent Cloud",
            "description": "",
            "logo": ""
        }}
    })
}

// ==================== Translate ====================

#[tokio::test]
async fn test_translate_without_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/text/translate"))
        .and(header("apikey", "test-api-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "context": {"from": "en", "to": "es", "text": ["Hello World!"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_translation_response("Hola, mundo.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let result = client
        .translate(["Hello World!"], "en", "es", Vec::new())
        .await
        .unwrap();

    assert_eq!(result.results[0], "Hola, mundo.");
    assert_eq!(result.service.provider.vendor, "Tencent Cloud");
}

#[tokio::test]
async fn test_translate_with_all_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/text/translate"))
        .and(body_json(json!({
            "context": {"to": "es", "text": ["Hello <span class=\"notranslate\">Old Friend</span>"], "format": "html"},
            "service": {
                "trace": true,
                "provider": "ai.text.translate.tencent.machine_translation_api",
                "routing": "best",
                "cache": {"apply": true, "update": true},
                "notranslate": {"prefix": "<span class=\"notranslate\">", "suffix": "</span>", "remove_markup": true},
                "moderation": {"action": "inform", "used": true, "content": ["profanity"]}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_translation_response("Hola Old Friend")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let result = client
        .translate(
            ["Hello <span class=\"notranslate\">Old Friend</span>"],
            AUTO_DETECT_SOURCE_LANGUAGE,
            "es",
            [
                TranslationOption::format(TextFormat::Html),
                TranslationOption::trace(),
                TranslationOption::provider("ai.text.translate.tencent.machine_translation_api"),
                TranslationOption::routing("best"),
                TranslationOption::cache(true, true),
                TranslationOption::no_translate("<span class=\"notranslate\">", "</span>", true),
                TranslationOption::profanity_detection(["profanity"]),
            ],
        )
        .await
        .unwrap();

    assert_eq!(result.results, vec!["Hola Old Friend".to_string()]);
    assert_eq!(result.meta.detected_source_language, vec!["en".to_string()]);
}

#[tokio::test]
async fn test_translate_auth_key_missing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/text/translate"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "Auth key is missing"}})))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client
        .translate(["Hello World!"], "en", "es", Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status(ApiError::AuthKeyMissing)));
}

// ==================== Listings ====================

#[tokio::test]
async fn test_list_providers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai/text/translate"))
        .and(header("apikey", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "ai.text.translate.deepl.api", "production": true, "pairs": [{"from": "en", "to": "de"}]},
            {}
        ])))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let providers = client.list_providers().await.unwrap();

    assert_eq!(providers.len(), 2);
    assert!(providers[0].supports_pair("en", "de"));
    assert!(providers[1].id.is_empty());
}

#[tokio::test]
async fn test_list_providers_invalid_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai/text/translate"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.list_providers().await.unwrap_err();

    assert_eq!(err.api_error(), Some(ApiError::AuthKeyInvalid));
}

#[tokio::test]
async fn test_list_languages_and_routing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai/text/translate/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"intento_code": "es", "iso_name": "Spanish"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ai/text/translate/routing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "best", "description": "Best quality provider for the language pair"}
        ])))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);

    let languages = client.list_languages().await.unwrap();
    assert_eq!(languages[0].iso_name, "Spanish");

    let routing = client.smart_routing_list().await.unwrap();
    assert_eq!(routing[0].name, "best");
}

// ==================== Transport ====================

#[tokio::test]
async fn test_transport_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::with_timeout(Duration::from_millis(100)).unwrap();
    let client = Client::new(
        "test-api-key",
        [
            ClientOption::transport(transport),
            ClientOption::server_url(mock_server.uri()),
        ],
    );

    let err = client.list_providers().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_client_from_config() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ai/text/translate"))
        .and(header("apikey", "config-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::from_config(ClientConfig {
        server_url: mock_server.uri(),
        ..ClientConfig::new("config-key")
    })
    .unwrap();

    let providers = client.list_providers().await.unwrap();

    assert_eq!(providers.len(), 1);
}

#[tokio::test]
async fn test_invalid_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = create_client(&mock_server);
    let err = client.list_providers().await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
    assert!(err.to_string().starts_with("decode response"));
}

//! Response models of the Intento API
//!
//! Every field falls back to its default when the API leaves it out.

use serde::{Deserialize, Serialize};

/// Result of a translation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationResult {
    pub id: String,
    /// Translations, in the same order as the submitted texts
    pub results: Vec<String>,
    pub meta: TranslationMeta,
    pub service: ServiceInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationMeta {
    /// Filled only when the source language was auto-detected
    pub detected_source_language: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInfo {
    pub provider: ProviderInfo,
}

/// Provider that served a translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub description: String,
    pub logo: String,
}

/// Translation provider and its capabilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub production: bool,
    pub integrated: bool,
    pub billable: bool,
    pub own_auth: bool,
    pub stock_model: bool,
    pub custom_model: bool,
    pub delegated_credentials: bool,
    pub async_only: bool,
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub score: i64,
    pub price: i64,
    pub api_id: String,
    pub picture: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub tone: Vec<String>,
    pub symmetric: Vec<String>,
    pub pairs: Vec<LanguagePair>,
}

impl Provider {
    /// Check if the provider translates `from` into `to`
    pub fn supports_pair(&self, from: &str, to: &str) -> bool {
        self.pairs.iter().any(|p| p.from == from && p.to == to)
            || (self.symmetric.iter().any(|l| l == from) && self.symmetric.iter().any(|l| l == to))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

/// Language known to the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// Code to use in translation requests
    pub intento_code: String,
    pub iso_name: String,
    pub client_code: String,
}

/// Smart routing scheme available to the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartRouting {
    pub name: String,
    pub description: String,
}

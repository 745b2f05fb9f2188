//! Application settings record.
//!
//! `Settings` is the single configuration value of the process. Every field has
//! a default, so the record is always constructible with nothing configured.
//! Fields are private: once loaded, values can be read but never changed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Default path to the Google Cloud credentials JSON file
pub const DEFAULT_CREDENTIALS_PATH: &str = "google_creds.json";

/// Default RPC endpoint (a local Hardhat node)
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Default frontend origin (Vite dev server)
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

const REDACTED: &str = "[REDACTED]";

/// Static description of one settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name on [`Settings`]
    pub name: &'static str,
    /// Environment variable (and env file key) the field is read from
    pub env_var: &'static str,
    /// Human readable description
    pub description: &'static str,
    /// Value used when no source sets the field
    pub default: &'static str,
    /// Whether the value must be masked when displayed
    pub secret: bool,
}

/// Process-wide settings.
///
/// Serde keys are the lowercased environment variable names, which is also the
/// form the loader normalizes every source to before merging.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        rename = "google_application_credentials",
        default = "default_credentials_path"
    )]
    credentials_path: String,

    #[serde(rename = "gemini_api_key", default)]
    ai_api_key: String,

    #[serde(rename = "polygon_rpc_url", default = "default_rpc_url")]
    rpc_url: String,

    #[serde(default)]
    private_key: String,

    #[serde(default)]
    contract_address: String,

    #[serde(default = "default_frontend_url")]
    frontend_url: String,

    /// Keys the schema does not declare; accepted and kept as-is.
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
}

fn default_credentials_path() -> String {
    DEFAULT_CREDENTIALS_PATH.to_string()
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_frontend_url() -> String {
    DEFAULT_FRONTEND_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
            ai_api_key: String::new(),
            rpc_url: default_rpc_url(),
            private_key: String::new(),
            contract_address: String::new(),
            frontend_url: default_frontend_url(),
            extra: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Catalogue of every declared field, in declaration order.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "credentials_path",
            env_var: "GOOGLE_APPLICATION_CREDENTIALS",
            description: "Path to Google Cloud credentials JSON",
            default: DEFAULT_CREDENTIALS_PATH,
            secret: false,
        },
        FieldSpec {
            name: "ai_api_key",
            env_var: "GEMINI_API_KEY",
            description: "Google Gemini API key",
            default: "",
            secret: true,
        },
        FieldSpec {
            name: "rpc_url",
            env_var: "POLYGON_RPC_URL",
            description: "Polygon RPC endpoint (defaults to local Hardhat)",
            default: DEFAULT_RPC_URL,
            secret: false,
        },
        FieldSpec {
            name: "private_key",
            env_var: "PRIVATE_KEY",
            description: "Wallet private key",
            default: "",
            secret: true,
        },
        FieldSpec {
            name: "contract_address",
            env_var: "CONTRACT_ADDRESS",
            description: "Deployed contract address",
            default: "",
            secret: false,
        },
        FieldSpec {
            name: "frontend_url",
            env_var: "FRONTEND_URL",
            description: "Frontend URL for CORS",
            default: DEFAULT_FRONTEND_URL,
            secret: false,
        },
    ];

    /// Returns true if `key` names a declared field's variable (any casing).
    pub fn is_declared_key(key: &str) -> bool {
        Self::FIELDS
            .iter()
            .any(|field| field.env_var.eq_ignore_ascii_case(key))
    }

    /// Path to the cloud credentials JSON file
    pub fn credentials_path(&self) -> &Path {
        Path::new(&self.credentials_path)
    }

    /// AI service API key (empty when unset)
    pub fn ai_api_key(&self) -> &str {
        &self.ai_api_key
    }

    /// Blockchain RPC endpoint
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Wallet private key (empty when unset)
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Deployed contract address (empty when unset)
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// Frontend origin allowed by CORS
    pub fn frontend_url(&self) -> &str {
        &self.frontend_url
    }

    /// Look up an undeclared key. Keys are stored lowercased.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// All undeclared keys with their values
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// Value of a declared field by its field name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        let value = match name {
            "credentials_path" => &self.credentials_path,
            "ai_api_key" => &self.ai_api_key,
            "rpc_url" => &self.rpc_url,
            "private_key" => &self.private_key,
            "contract_address" => &self.contract_address,
            "frontend_url" => &self.frontend_url,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Serializable view with every secret masked.
    pub fn redacted(&self) -> RedactedSettings {
        RedactedSettings {
            credentials_path: self.credentials_path.clone(),
            ai_api_key: mask(&self.ai_api_key),
            rpc_url: self.rpc_url.clone(),
            private_key: mask(&self.private_key),
            contract_address: self.contract_address.clone(),
            frontend_url: self.frontend_url.clone(),
            extra: self
                .extra
                .iter()
                .map(|(key, value)| {
                    let value = if is_sensitive_key(key) {
                        mask(value)
                    } else {
                        value.clone()
                    };
                    (key.clone(), value)
                })
                .collect(),
        }
    }

    /// Full view including secrets in clear text.
    pub fn revealed(&self) -> RedactedSettings {
        RedactedSettings {
            credentials_path: self.credentials_path.clone(),
            ai_api_key: self.ai_api_key.clone(),
            rpc_url: self.rpc_url.clone(),
            private_key: self.private_key.clone(),
            contract_address: self.contract_address.clone(),
            frontend_url: self.frontend_url.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Non-fatal observations about the loaded values.
    ///
    /// Nothing here prevents loading; callers decide whether to surface them.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.ai_api_key.is_empty() {
            warnings.push("GEMINI_API_KEY is not set; AI analysis calls will be rejected".to_string());
        }
        if self.private_key.is_empty() {
            warnings.push("PRIVATE_KEY is not set; transactions cannot be signed".to_string());
        }
        if self.contract_address.is_empty() {
            warnings.push("CONTRACT_ADDRESS is not set; no contract to call".to_string());
        }
        if !is_http_url(&self.rpc_url) {
            warnings.push(format!(
                "POLYGON_RPC_URL '{}' does not start with http:// or https://",
                self.rpc_url
            ));
        }
        if !is_http_url(&self.frontend_url) {
            warnings.push(format!(
                "FRONTEND_URL '{}' does not start with http:// or https://",
                self.frontend_url
            ));
        }

        warnings
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.redacted();
        f.debug_struct("Settings")
            .field("credentials_path", &view.credentials_path)
            .field("ai_api_key", &view.ai_api_key)
            .field("rpc_url", &view.rpc_url)
            .field("private_key", &view.private_key)
            .field("contract_address", &view.contract_address)
            .field("frontend_url", &view.frontend_url)
            .field("extra", &view.extra)
            .finish()
    }
}

/// Display form of [`Settings`], keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactedSettings {
    /// Path to Google Cloud credentials JSON
    pub credentials_path: String,
    /// Gemini API key, masked unless revealed
    pub ai_api_key: String,
    /// Polygon RPC endpoint
    pub rpc_url: String,
    /// Wallet private key, masked unless revealed
    pub private_key: String,
    /// Deployed contract address
    pub contract_address: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Extra env file keys; sensitive-looking ones are masked
    pub extra: BTreeMap<String, String>,
}

impl RedactedSettings {
    /// Value of a declared field by its field name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        let value = match name {
            "credentials_path" => &self.credentials_path,
            "ai_api_key" => &self.ai_api_key,
            "rpc_url" => &self.rpc_url,
            "private_key" => &self.private_key,
            "contract_address" => &self.contract_address,
            "frontend_url" => &self.frontend_url,
            _ => return None,
        };
        Some(value.as_str())
    }
}

fn mask(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

fn is_sensitive_key(key: &str) -> bool {
    const MARKERS: [&str; 5] = ["key", "secret", "token", "password", "mnemonic"];
    let key = key.to_ascii_lowercase();
    MARKERS.iter().any(|marker| key.contains(marker))
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

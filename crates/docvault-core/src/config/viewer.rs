//! Document viewer integration settings.

use serde::{Deserialize, Serialize};

/// Where the external document-rendering service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Document server root URL.
    #[serde(default = "default_document_server_url")]
    pub document_server_url: String,
    /// Callback URL handed to the document server.
    #[serde(default = "default_callback_url")]
    pub callback_url: String,
    /// Editor UI language.
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            document_server_url: default_document_server_url(),
            callback_url: default_callback_url(),
            lang: default_lang(),
        }
    }
}

fn default_document_server_url() -> String {
    "http://localhost:8081/".to_string()
}

fn default_callback_url() -> String {
    "http://localhost:3000/callback".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

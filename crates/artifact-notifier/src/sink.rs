use async_trait::async_trait;
use log::{info, warn};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;

use crate::artifact::{Artifact, APK_MIME};
use crate::error::Result;

/// One `sendDocument` call: built once per invocation, consumed by the sink.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub chat_id: String,
    pub caption: String,
    pub artifact: Artifact,
}

#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Deliver the document and return the decoded response body.
    async fn send_document(&self, request: UploadRequest) -> Result<Value>;
}

pub struct TelegramSink {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

#[derive(Deserialize)]
struct ApiStatus {
    ok: bool,
    description: Option<String>,
}

impl TelegramSink {
    pub fn new(api_base: &str, token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/bot{}/sendDocument", self.api_base, self.token)
    }

    fn form(request: UploadRequest) -> Result<Form> {
        let file_name = request.artifact.file_name();
        let document = Part::bytes(request.artifact.bytes)
            .file_name(file_name)
            .mime_str(APK_MIME)?;
        Ok(Form::new()
            .text("chat_id", request.chat_id)
            .text("caption", request.caption)
            .text("parse_mode", "Markdown")
            .part("document", document))
    }
}

#[async_trait]
impl DocumentSink for TelegramSink {
    async fn send_document(&self, request: UploadRequest) -> Result<Value> {
        info!(
            "Uploading {} ({} bytes) to chat {}",
            request.artifact.path.display(),
            request.artifact.len(),
            request.chat_id
        );

        let resp = self
            .client
            .post(self.endpoint())
            .multipart(Self::form(request)?)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        // The Bot API reports failures in the body, so decode regardless of status.
        let status = resp.status();
        let body: Value = resp.json().await.map_err(reqwest::Error::without_url)?;
        if !status.is_success() {
            let description = serde_json::from_value::<ApiStatus>(body.clone())
                .ok()
                .filter(|s| !s.ok)
                .and_then(|s| s.description)
                .unwrap_or_default();
            warn!("sendDocument returned {status}: {description}");
        }
        Ok(body)
    }
}

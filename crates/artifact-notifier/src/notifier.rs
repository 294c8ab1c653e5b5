use std::path::PathBuf;

use log::debug;
use serde_json::Value;

use crate::artifact::{artifact_path, Artifact};
use crate::caption::render_caption;
use crate::config::Config;
use crate::error::Result;
use crate::sink::{DocumentSink, TelegramSink, UploadRequest};

pub struct Notifier<S> {
    sink: S,
    workdir: Option<PathBuf>,
}

impl Notifier<TelegramSink> {
    pub fn telegram(config: &Config) -> Self {
        Self::new(TelegramSink::new(&config.api_base, &config.token))
    }
}

impl<S: DocumentSink> Notifier<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, workdir: None }
    }

    /// Resolve the artifact against `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn artifact_path(&self, config: &Config) -> PathBuf {
        let relative = artifact_path(&config.version);
        match &self.workdir {
            Some(dir) => dir.join(relative),
            None => relative,
        }
    }

    /// Upload the release APK for `config.version`. The sink is not touched
    /// when the artifact is missing.
    pub async fn send(&self, config: &Config) -> Result<Value> {
        let artifact = Artifact::load(self.artifact_path(config)).await?;

        let caption = render_caption(config, chrono::Local::now().naive_local());
        debug!("caption:\n{caption}");

        self.sink
            .send_document(UploadRequest {
                chat_id: config.chat_id.clone(),
                caption,
                artifact,
            })
            .await
    }
}

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::error::{NotifyError, Result};

const APK_OUTPUT_DIR: &str = "build/app/outputs/flutter-apk";

pub const APK_MIME: &str = "application/vnd.android.package-archive";

/// Release APK produced by `flutter build apk` for the given version,
/// relative to the working directory.
pub fn artifact_path(version: &str) -> PathBuf {
    Path::new(APK_OUTPUT_DIR).join(format!("app-release-{version}.apk"))
}

#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Read the whole file. The handle is closed before this returns, on every path.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut file = match tokio::fs::File::open(&path).await {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(NotifyError::ArtifactNotFound { path });
            }
            Err(source) => return Err(NotifyError::Io { path, source }),
        };

        let mut bytes = Vec::new();
        if let Err(source) = file.read_to_end(&mut bytes).await {
            return Err(NotifyError::Io { path, source });
        }
        Ok(Artifact { path, bytes })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app-release.apk".to_string())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn path_follows_flutter_layout() {
        assert_eq!(
            artifact_path("v1.2.3"),
            PathBuf::from("build/app/outputs/flutter-apk/app-release-v1.2.3.apk")
        );
    }

    #[tokio::test]
    async fn load_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app-release-1.0.0.apk");
        std::fs::write(&path, b"PK\x03\x04apk").unwrap();

        let artifact = Artifact::load(&path).await.unwrap();
        assert_eq!(artifact.bytes, b"PK\x03\x04apk");
        assert_eq!(artifact.file_name(), "app-release-1.0.0.apk");
        assert_eq!(artifact.len(), 7);
    }

    #[tokio::test]
    async fn missing_file_is_artifact_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.apk");

        let err = Artifact::load(&path).await.unwrap_err();
        assert_matches!(err, NotifyError::ArtifactNotFound { path: p } if p == path);
    }

    #[tokio::test]
    async fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::load(dir.path()).await.unwrap_err();
        assert_matches!(err, NotifyError::Io { .. });
    }
}

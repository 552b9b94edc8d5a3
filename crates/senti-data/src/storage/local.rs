//! 로컬 파일시스템 blob 저장소.

use async_trait::async_trait;
use senti_core::BlobStorage;
use std::path::PathBuf;

use crate::error::DataError;

/// 파일시스템 기반 blob 저장소.
///
/// 루트 디렉터리 아래에 키를 상대 경로로 사용합니다.
/// 원본 시스템의 클라우드 버킷 자리에 같은 seam으로 들어가며,
/// 같은 키로 쓰면 기존 파일을 덮어씁니다.
pub struct LocalBlobStorage {
    root: PathBuf,
}

impl LocalBlobStorage {
    /// 루트 디렉터리를 지정해 저장소를 생성합니다.
    ///
    /// 디렉터리는 첫 쓰기 시점에 생성됩니다.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl BlobStorage for LocalBlobStorage {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn get_blob(
        &self,
        key: &str,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let path = self.blob_path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Box::new(DataError::NotFound(key.to_string())))
            }
            Err(e) => Err(Box::new(DataError::from(e))),
        }
    }

    async fn put_blob(
        &self,
        key: &str,
        content: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = self.blob_path(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(DataError::from)?;
        }
        tokio::fs::write(&path, content)
            .await
            .map_err(DataError::from)?;

        tracing::debug!(key = key, bytes = content.len(), "blob 저장 완료");
        Ok(())
    }
}

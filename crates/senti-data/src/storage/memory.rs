//! 인메모리 blob 저장소.
//!
//! 테스트와 저장이 필요 없는 임시 실행에서 실제 저장소를 대체합니다.

use async_trait::async_trait;
use senti_core::BlobStorage;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::error::DataError;

/// 인메모리 blob 저장소.
#[derive(Default)]
pub struct MemoryBlobStorage {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStorage {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 테스트 편의를 위해 blob을 사전 적재합니다.
    pub async fn insert(&self, key: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.blobs.lock().await.insert(key.into(), content.into());
    }

    /// 키에 해당하는 blob 사본을 반환합니다.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().await.get(key).cloned()
    }

    /// 저장된 blob 수.
    pub async fn len(&self) -> usize {
        self.blobs.lock().await.len()
    }

    /// 저장소가 비어 있는지 확인합니다.
    pub async fn is_empty(&self) -> bool {
        self.blobs.lock().await.is_empty()
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStorage {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_blob(
        &self,
        key: &str,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        match self.get(key).await {
            Some(bytes) => Ok(bytes),
            None => Err(Box::new(DataError::NotFound(key.to_string()))),
        }
    }

    async fn put_blob(
        &self,
        key: &str,
        content: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.insert(key.to_string(), content.to_vec()).await;
        Ok(())
    }
}

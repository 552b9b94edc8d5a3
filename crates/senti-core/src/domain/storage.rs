//! Blob 저장소 collaborator trait.

use async_trait::async_trait;

/// Blob 저장소 trait.
///
/// 티커 테이블 읽기와 리포트 쓰기에 사용되는 최소 인터페이스입니다.
/// 같은 키로 다시 쓰면 기존 blob을 덮어씁니다 (같은 날짜 재실행 시
/// 리포트가 중복되지 않고 최신 내용으로 대체됩니다).
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// 저장소 이름 (로그 식별용).
    fn name(&self) -> &'static str;

    /// 키에 해당하는 blob을 읽습니다.
    async fn get_blob(
        &self,
        key: &str,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;

    /// 키 아래에 blob을 저장합니다. 기존 blob은 덮어씁니다.
    async fn put_blob(
        &self,
        key: &str,
        content: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

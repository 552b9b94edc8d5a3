//! 수집 실행 모듈.

pub mod report_upload;
pub mod sentiment_run;

pub use report_upload::{upload_reports, UploadOutcome};
pub use sentiment_run::run_collection;

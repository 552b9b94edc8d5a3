//! Standalone sentiment collector CLI.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use senti_analytics::SentimentScorer;
use senti_collector::{modules, CollectorConfig};
use senti_core::TitleSource;
use senti_data::{LocalBlobStorage, NewsTitleSource, RedditTitleSource, YoutubeTitleSource};

#[derive(Parser)]
#[command(name = "senti-collector")]
#[command(about = "SentiScan Standalone Sentiment Collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// 수집 실행 한 번 (수집 → 스코어링 → 리포트 업로드)
    Run,

    /// 데몬 모드: 주기적으로 수집 실행
    Daemon,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("senti_collector={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("SentiScan Sentiment Collector 시작");

    // 설정 로드 (필수 자격증명 누락 시 여기서 중단)
    let config = CollectorConfig::from_env()?;
    tracing::debug!(storage_root = %config.app.storage.root, "설정 로드 완료");

    // collaborator 구성 (저장소 구성 실패도 치명적)
    let storage = LocalBlobStorage::new(config.app.storage.root.clone());
    let sources = build_sources(&config);
    let scorer = SentimentScorer::new();

    match cli.command {
        Commands::Run => {
            let stats = modules::run_collection(&config, &storage, &sources, &scorer).await?;
            stats.log_summary("감성 수집");
        }
        Commands::Daemon => {
            tracing::info!(
                "=== 데몬 모드 시작 (주기: {}분) ===",
                config.daemon.interval_minutes
            );

            let mut interval = tokio::time::interval(config.daemon.interval());
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("종료 신호 수신, 데몬 종료 중...");
                        break;
                    }
                    _ = interval.tick() => {
                        tracing::info!("=== 수집 실행 시작 ===");

                        match modules::run_collection(&config, &storage, &sources, &scorer).await {
                            Ok(stats) => {
                                stats.log_summary("감성 수집");
                            }
                            Err(e) => {
                                tracing::error!("수집 실행 실패: {}", e);
                            }
                        }

                        tracing::info!(
                            "=== 수집 완료, 다음 실행: {}분 후 ===",
                            config.daemon.interval_minutes
                        );
                    }
                }
            }
        }
    }

    tracing::info!("SentiScan Sentiment Collector 종료");

    Ok(())
}

/// 설정에서 세 콘텐츠 소스를 구성합니다 (Reddit → News → YouTube 순서).
fn build_sources(config: &CollectorConfig) -> Vec<Arc<dyn TitleSource>> {
    let sources = &config.app.sources;
    vec![
        Arc::new(RedditTitleSource::new(
            sources.reddit_subreddit.clone(),
            sources.reddit_user_agent.clone(),
        )),
        Arc::new(NewsTitleSource::new(sources.news_api_key.clone())),
        Arc::new(YoutubeTitleSource::new(sources.youtube_api_key.clone())),
    ]
}

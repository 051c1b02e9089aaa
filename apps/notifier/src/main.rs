//! # Code Tracker Notifier
//!
//! 新規登録ユーザーにログイン情報をメールで送る単発実行の CLI。
//!
//! ## 役割
//!
//! 登録ワークフローが発行した ID とパスワードを、SMTP リレー経由で本人に 1 通だけ送る。
//! 送信失敗時はリトライせず、error ログを出して非 0 で終了する。
//! 再送の判断は呼び出し側（登録ワークフロー、運用者）に委ねる。
//!
//! ## 入力
//!
//! 標準入力から JSON を 1 件読み込む（[`RegistrationInput`] を参照）。
//!
//! ## 環境変数
//!
//! [`config`](codetracker_notifier::config) を参照。加えて:
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,codetracker=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! echo '{"recipient_email":"student@example.com","display_name":"山田太郎","issued_id":"22A91A6182","issued_secret":"..."}' \
//!   | cargo run -p codetracker-notifier
//! ```

use std::io::Read;

use anyhow::Context as _;
use codetracker_notifier::{
    build_sender,
    config::NotifierConfig,
    error::NotifierError,
    input::RegistrationInput,
    usecase::{Notifier, TemplateRenderer},
};
use codetracker_shared::observability::{self, TracingConfig};
use tracing::Instrument as _;

/// Notifier のエントリーポイント
///
/// 1 件の通知を 1 回だけ配信する単発処理のため、シングルスレッドのランタイムで動かす。
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("notifier");
    observability::init_tracing(&tracing_config);

    let span = tracing::info_span!("app", service = %tracing_config.service_name);
    run().instrument(span).await.context("登録通知の配信を完了できませんでした")
}

async fn run() -> Result<(), NotifierError> {
    // 設定不備は送信前に検出して終了する
    let config = NotifierConfig::from_env()?;
    tracing::debug!(backend = %config.notification.kind(), "設定を読み込みました");

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| NotifierError::Input(e.to_string()))?;
    // serde_json のメッセージは入力値を含みうるため、位置情報だけを残す
    let notice = RegistrationInput::from_json(&raw)
        .map_err(|e| {
            NotifierError::Input(format!(
                "JSON {:?} エラー（{} 行 {} 列）",
                e.classify(),
                e.line(),
                e.column()
            ))
        })?
        .into_notice()?;

    let notifier = Notifier::new(build_sender(&config.notification)?, TemplateRenderer::new()?);

    notifier.deliver(notice).await.into_result()?;
    Ok(())
}

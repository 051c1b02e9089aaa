//! # Code Tracker Notifier ライブラリ
//!
//! 新規登録ユーザーへのログイン情報通知メールの配信ロジックを公開する。
//! CLI（`main.rs`）と統合テストから利用する。

pub mod config;
pub mod error;
pub mod input;
pub mod usecase;

use std::sync::Arc;

use codetracker_domain::notification::NotificationError;
use codetracker_infra::notification::{
    NoopNotificationSender,
    NotificationSender,
    SmtpNotificationSender,
};
use config::NotificationConfig;

/// 設定に応じた送信実装を構築する
pub fn build_sender(
    config: &NotificationConfig,
) -> Result<Arc<dyn NotificationSender>, NotificationError> {
    match config {
        NotificationConfig::Smtp(settings) => {
            Ok(Arc::new(SmtpNotificationSender::new(settings)?))
        }
        NotificationConfig::Noop => Ok(Arc::new(NoopNotificationSender)),
    }
}

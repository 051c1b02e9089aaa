//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（リレー経由の実送信）、Noop（送信しない環境用）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択（notifier の設定層）
//! - **1 呼び出し 1 接続**: SMTP 接続は送信ごとに確立・解放する（プールしない）

mod noop;
mod smtp;

use async_trait::async_trait;
use codetracker_domain::notification::{EmailMessage, NotificationError};
pub use lettre::message::Mailbox;
pub use noop::NoopNotificationSender;
pub use smtp::{SmtpNotificationSender, SmtpSettings};

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// 失敗時はリレーの応答テキスト（なければトランスポートのエラーメッセージ）を
/// [`NotificationError::SendFailed`] に詰めて返す。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}

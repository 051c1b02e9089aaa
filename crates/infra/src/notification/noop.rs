//! Noop 通知送信実装
//!
//! SMTP リレーに接続せず、宛先アドレスの検証とログ出力のみ行う。
//! リレーの資格情報を持たない開発環境や、通知を止めたい環境で使用する。

use async_trait::async_trait;
use codetracker_domain::notification::{EmailMessage, NotificationError};
use lettre::Address;

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
///
/// 宛先が SMTP で受理されない形式なら、SMTP 実装と同じく `SendFailed` を返す。
/// 本文（発行パスワードを含む）はログに出さない。
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        email
            .to
            .parse::<Address>()
            .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?;

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}

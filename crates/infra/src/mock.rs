//! # テスト用モック送信
//!
//! ユースケーステストで使用するインメモリの送信モック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! codetracker-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use codetracker_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

// ===== MockNotificationSender =====

/// 送信されたメールを記録するモック
///
/// [`failing`](MockNotificationSender::failing) で作成すると、
/// 指定した理由で常に `SendFailed` を返す（試行は記録される）。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent_emails:    Arc<Mutex<Vec<EmailMessage>>>,
    attempts:       Arc<Mutex<usize>>,
    failure_reason: Option<String>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に失敗するモックを作成する
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// 送信に成功したメール
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent_emails.lock().unwrap().clone()
    }

    /// 送信試行回数（成功・失敗を問わない）
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        *self.attempts.lock().unwrap() += 1;

        if let Some(reason) = &self.failure_reason {
            return Err(NotificationError::SendFailed(reason.clone()));
        }

        self.sent_emails.lock().unwrap().push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            to:        "test@example.com".to_string(),
            subject:   "テスト件名".to_string(),
            html_body: "<p>テスト</p>".to_string(),
            text_body: "テスト".to_string(),
        }
    }

    #[tokio::test]
    async fn 成功モックは送信メールを記録する() {
        let sender = MockNotificationSender::new();

        sender.send_email(&make_email()).await.unwrap();

        assert_eq!(sender.attempts(), 1);
        assert_eq!(sender.sent_emails().len(), 1);
        assert_eq!(sender.sent_emails()[0].to, "test@example.com");
    }

    #[tokio::test]
    async fn 失敗モックは試行のみ記録して理由を返す() {
        let sender = MockNotificationSender::failing("Invalid login");

        let err = sender.send_email(&make_email()).await.unwrap_err();

        assert_eq!(err.reason(), "Invalid login");
        assert_eq!(sender.attempts(), 1);
        assert!(sender.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn クローンは記録を共有する() {
        let sender = MockNotificationSender::new();
        let observer = sender.clone();

        sender.send_email(&make_email()).await.unwrap();

        assert_eq!(observer.attempts(), 1);
    }
}

//! # Code Tracker インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメイン層で定義された型を使い、外部システム（SMTP リレー）との
//! 通信の詳細をカプセル化する。ドメイン層をインフラの変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! notifier → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信（SMTP / Noop）
//! - `mock` - テスト用の送信モック（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use codetracker_infra::notification::{SmtpNotificationSender, SmtpSettings};
//!
//! let sender = SmtpNotificationSender::new(settings)?;
//! sender.send_email(&email).await?;
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

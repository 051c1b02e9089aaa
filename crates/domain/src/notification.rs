//! # 通知
//!
//! 新規登録ユーザーへのログイン情報通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`RegistrationNotice`] | 登録通知 | 新規登録アカウントのログイン情報をメールで送る |
//! | [`IssuedSecret`] | 発行パスワード | 通知メール本文以外に出力してはならない |
//! | [`DeliveryOutcome`] | 配信結果 | 1 通知につき 1 回だけ生成される（Sent / Failed） |
//!
//! ## 設計方針
//!
//! - **1 通知 1 送信**: 自動リトライはしない。再送の判断は呼び出し側に委ねる
//! - **資格情報の秘匿**: `IssuedSecret` は Debug をマスクし、Display / Serialize を実装しない
//! - **テンプレート分離**: 通知内容とメール生成は分離（TemplateRenderer は notifier）

use strum::IntoStaticStr;
use thiserror::Error;

use crate::{
    DomainError,
    user::Email,
    value_objects::{DisplayName, IssuedId},
};

define_uuid_id! {
    /// 登録通知 ID（一意識別子）
    ///
    /// ログの相関に使う。UUID v7 を使用。
    pub struct NoticeId;
}

/// 通知送信エラー
///
/// 送信実装（SMTP / Noop / Mock）とテンプレートレンダラーが返す。
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),

    /// 送信設定が不正（TLS パラメータ等）
    #[error("送信設定が不正: {0}")]
    InvalidSettings(String),
}

impl NotificationError {
    /// 失敗理由（トランスポート等が返したメッセージそのもの）を返す
    pub fn reason(&self) -> &str {
        match self {
            Self::SendFailed(reason)
            | Self::TemplateFailed(reason)
            | Self::InvalidSettings(reason) => reason,
        }
    }
}

/// 発行パスワード
///
/// 登録時に発行された初期パスワードをラップする。
///
/// # セキュリティ
///
/// - Debug 出力では値をマスクする
/// - Display / Serialize を実装しない（ログや永続化への混入を型で防ぐ）
/// - 平文は [`expose`](IssuedSecret::expose) でのみ取り出せる
#[derive(Clone)]
pub struct IssuedSecret(String);

impl std::fmt::Debug for IssuedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IssuedSecret").field(&"[REDACTED]").finish()
    }
}

impl IssuedSecret {
    /// 発行パスワードを作成する
    ///
    /// 空白も値の一部として扱うため trim はしない。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "発行パスワードは必須です".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 平文を取得する
    ///
    /// メール本文の生成以外で呼び出してはならない。
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// 登録通知
///
/// 登録ワークフローが生成し、値渡しで Notifier に渡す。
/// 生成後は変更できない（フィールドは非公開、アクセサのみ提供）。
#[derive(Debug, Clone)]
pub struct RegistrationNotice {
    id:              NoticeId,
    recipient_email: Email,
    display_name:    DisplayName,
    issued_id:       IssuedId,
    issued_secret:   IssuedSecret,
}

impl RegistrationNotice {
    /// 新しい登録通知を作成する
    pub fn new(
        recipient_email: Email,
        display_name: DisplayName,
        issued_id: IssuedId,
        issued_secret: IssuedSecret,
    ) -> Self {
        Self {
            id: NoticeId::new(),
            recipient_email,
            display_name,
            issued_id,
            issued_secret,
        }
    }

    pub fn id(&self) -> &NoticeId {
        &self.id
    }

    pub fn recipient_email(&self) -> &Email {
        &self.recipient_email
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn issued_id(&self) -> &IssuedId {
        &self.issued_id
    }

    pub fn issued_secret(&self) -> &IssuedSecret {
        &self.issued_secret
    }
}

/// 配信結果
///
/// 1 通知につき 1 回だけ生成される終端状態。保存はせず、ログにのみ残す。
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DeliveryOutcome {
    /// 送信成功
    Sent,
    /// 送信失敗（トランスポートが返した理由）
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// 失敗理由を返す（成功時は `None`）
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Sent => None,
            Self::Failed(reason) => Some(reason),
        }
    }

    /// `Result` に変換する
    ///
    /// 再送やアラートなど、失敗に反応したい呼び出し側向け。
    pub fn into_result(self) -> Result<(), DeliveryError> {
        match self {
            Self::Sent => Ok(()),
            Self::Failed(reason) => Err(DeliveryError { reason }),
        }
    }
}

/// 配信エラー
///
/// [`DeliveryOutcome::into_result`] でのみ生成される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("登録通知の配信に失敗: {reason}")]
pub struct DeliveryError {
    pub reason: String,
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
/// 本文には発行パスワードが含まれるため、Debug 出力では本文を省略する。
#[derive(Clone)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}

impl std::fmt::Debug for EmailMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailMessage")
            .field("to", &self.to)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

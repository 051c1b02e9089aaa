//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用して、認証付き SMTP リレー経由でメールを送信する。
//!
//! - `secure = true`: 接続直後から TLS（implicit TLS、通常 465 番）
//! - `secure = false`: 平文で接続し、サーバーが対応していれば STARTTLS に昇格
//!
//! lettre の `pool` feature は有効にしていないため、接続は送信ごとに確立され、
//! 送信完了・失敗のどちらでも解放される。
//!
//! 失敗理由は、リレーがエラーコードで応答した場合はその応答テキスト
//! （`535 Invalid login` なら `Invalid login`）、それ以外は lettre のエラーメッセージ全体。

use std::time::Duration;

use async_trait::async_trait;
use codetracker_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::{
        self,
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};

use super::NotificationSender;

/// SMTP リレーの接続設定
///
/// notifier の設定層が環境変数から組み立てる。
/// Debug 出力ではパスワードをマスクする。
#[derive(Clone)]
pub struct SmtpSettings {
    /// SMTP サーバーのホスト名（例: "smtp.gmail.com"）
    pub host:         String,
    /// SMTP サーバーのポート番号（例: 465, 587）
    pub port:         u16,
    /// implicit TLS を使うか
    pub secure:       bool,
    /// 認証ユーザー名
    pub username:     String,
    /// 認証パスワード
    pub password:     String,
    /// 送信元（設定層で `表示名 <addr>` 形式もパース済み）
    pub from_address: Mailbox,
    /// 接続・コマンドのタイムアウト
    pub timeout:      Duration,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from:      Mailbox,
}

/// lettre のエラーから失敗理由を取り出す
///
/// 応答コード付きのエラーは `source` にリレーの応答テキストを持つ。
fn failure_reason(error: &smtp::Error) -> String {
    match (error.status(), std::error::Error::source(error)) {
        (Some(_), Some(response)) => response.to_string(),
        _ => error.to_string(),
    }
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// TLS パラメータはここで検証する。
    /// この時点ではまだ SMTP サーバーに接続しない。
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotificationError> {
        let tls_parameters = TlsParameters::new(settings.host.clone())
            .map_err(|e| NotificationError::InvalidSettings(format!("TLS 設定不正: {e}")))?;
        let tls = if settings.secure {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Opportunistic(tls_parameters)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            .port(settings.port)
            .tls(tls)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self {
            transport,
            from: settings.from_address.clone(),
        })
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email
                .to
                .parse()
                .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(failure_reason(&e)))?;

        Ok(())
    }
}

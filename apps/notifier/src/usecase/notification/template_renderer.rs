//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで登録通知メールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名固定**: `Your Login Details - Code Tracker`
//! - **HTML は自動エスケープ**: `.html` テンプレートは tera の autoescape 対象

use codetracker_domain::notification::{EmailMessage, NotificationError, RegistrationNotice};
use tera::{Context, Tera};

/// 登録通知メールの件名
pub const REGISTRATION_SUBJECT: &str = "Your Login Details - Code Tracker";

const TEMPLATE_NAME: &str = "registration_credentials";

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`RegistrationNotice` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "registration_credentials.html",
                    include_str!("../../../templates/notifications/registration_credentials.html"),
                ),
                (
                    "registration_credentials.txt",
                    include_str!("../../../templates/notifications/registration_credentials.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 登録通知からメールメッセージを生成する
    ///
    /// 本文には発行パスワードが平文で入る。戻り値をログに出してはならない。
    pub fn render(&self, notice: &RegistrationNotice) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("display_name", notice.display_name().as_str());
        context.insert("issued_id", notice.issued_id().as_str());
        context.insert("issued_secret", notice.issued_secret().expose());

        let html_body = self
            .engine
            .render(&format!("{TEMPLATE_NAME}.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{TEMPLATE_NAME}.txt"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: notice.recipient_email().to_string(),
            subject: REGISTRATION_SUBJECT.to_string(),
            html_body,
            text_body,
        })
    }
}

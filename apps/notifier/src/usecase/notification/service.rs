//! # 登録通知サービス
//!
//! テンプレートレンダリング → メール送信 → ログ出力を統合するサービス。
//!
//! ## 設計方針
//!
//! - **1 通知 1 送信**: `deliver()` は送信を 1 回だけ試み、リトライしない
//! - **失敗を伝播しない**: 送信失敗は `DeliveryOutcome::Failed` に変換して返す
//! - **資格情報をログに出さない**: ログに載せるのは宛先アドレスと失敗理由のみ
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::sync::Arc;

use codetracker_domain::notification::{DeliveryOutcome, RegistrationNotice};
use codetracker_infra::notification::NotificationSender;
use codetracker_shared::{
    event_log::{error, event},
    log_business_event,
};

use super::TemplateRenderer;

/// 登録通知サービス
///
/// 新規登録ユーザーへのログイン情報メール送信の全体フローを統合する。
pub struct Notifier {
    sender:            Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
}

impl Notifier {
    pub fn new(sender: Arc<dyn NotificationSender>, template_renderer: TemplateRenderer) -> Self {
        Self {
            sender,
            template_renderer,
        }
    }

    /// 登録通知を配信する
    ///
    /// テンプレートレンダリング → メール送信を行い、結果を [`DeliveryOutcome`] で返す。
    /// いずれのステップで失敗してもエラーを返さない（error ログを出して `Failed` を返す）。
    pub async fn deliver(&self, notice: RegistrationNotice) -> DeliveryOutcome {
        let notice_id = notice.id().clone();
        let recipient_email = notice.recipient_email().to_string();

        // テンプレートレンダリング
        let email = match self.template_renderer.render(&notice) {
            Ok(email) => email,
            Err(e) => {
                tracing::error!(
                    error.category = error::category::INTERNAL,
                    error.kind = error::kind::TEMPLATE,
                    event.entity_id = %notice_id,
                    notification.recipient = %recipient_email,
                    reason = e.reason(),
                    "通知テンプレートのレンダリングに失敗"
                );
                return DeliveryOutcome::Failed(e.reason().to_string());
            }
        };

        // メール送信（1 回のみ）
        match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.entity_type = event::entity_type::REGISTRATION_NOTICE,
                    event.entity_id = %notice_id,
                    event.result = event::result::SUCCESS,
                    notification.recipient = %recipient_email,
                    "通知メール送信成功"
                );
                DeliveryOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.entity_type = event::entity_type::REGISTRATION_NOTICE,
                    event.entity_id = %notice_id,
                    event.result = event::result::FAILURE,
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::MAIL_TRANSPORT,
                    notification.recipient = %recipient_email,
                    reason = e.reason(),
                    "通知メール送信失敗"
                );
                DeliveryOutcome::Failed(e.reason().to_string())
            }
        }
    }
}

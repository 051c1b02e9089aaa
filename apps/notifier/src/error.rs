//! # Notifier エラー定義
//!
//! CLI の起動から配信完了までに発生するエラーを集約する。
//!
//! | エラー種別 | 発生タイミング | 終了コード |
//! |-----------|---------------|-----------|
//! | `Config` | 起動時（環境変数の不備） | 非 0 |
//! | `Input` / `InvalidNotice` | 標準入力の読み込み時 | 非 0 |
//! | `Setup` | 送信実装・テンプレートの初期化時 | 非 0 |
//! | `Delivery` | 配信失敗（ログ出力済み） | 非 0 |

use codetracker_domain::{
    DomainError,
    notification::{DeliveryError, NotificationError},
};
use thiserror::Error;

use crate::config::ConfigError;

/// Notifier で発生するエラー
#[derive(Debug, Error)]
pub enum NotifierError {
    /// 設定エラー
    #[error("設定エラー: {0}")]
    Config(#[from] ConfigError),

    /// 入力の読み込み・パースに失敗
    #[error("入力を読み込めません: {0}")]
    Input(String),

    /// 入力値がドメインルールに違反
    #[error("登録通知が不正です: {0}")]
    InvalidNotice(#[from] DomainError),

    /// 送信実装・テンプレートの初期化に失敗
    #[error("初期化に失敗: {0}")]
    Setup(#[from] NotificationError),

    /// 配信に失敗
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn 設定エラーは変数名を含むメッセージになる() {
        let err = NotifierError::from(ConfigError::Missing("SMTP_HOST"));
        assert_eq!(err.to_string(), "設定エラー: SMTP_HOST が設定されていません");
    }

    #[test]
    fn 配信エラーはそのままのメッセージになる() {
        let err = NotifierError::from(DeliveryError {
            reason: "Invalid login".to_string(),
        });
        assert_eq!(err.to_string(), "登録通知の配信に失敗: Invalid login");
    }
}

//! # Notifier 設定
//!
//! 環境変数から登録通知の送信設定を読み込む。
//!
//! プロセス全体で共有するグローバル設定は持たない。`NotifierConfig` を起動時に一度だけ
//! 組み立て、送信実装の構築時に明示的に渡す。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `NOTIFICATION_BACKEND` | No | `smtp`（デフォルト）/ `noop` |
//! | `SMTP_HOST` | **Yes**（smtp） | SMTP リレーのホスト |
//! | `SMTP_PORT` | **Yes**（smtp） | SMTP リレーのポート |
//! | `SMTP_SECURE` | **Yes**（smtp） | `true`: implicit TLS / `false`: STARTTLS |
//! | `SMTP_USER` | **Yes**（smtp） | 認証ユーザー名 |
//! | `SMTP_PASSWORD` | **Yes**（smtp） | 認証パスワード |
//! | `NOTIFICATION_FROM_ADDRESS` | No | 送信元。`表示名 <addr>` 形式も可（デフォルト: `SMTP_USER`） |
//! | `SMTP_TIMEOUT_SECS` | No | タイムアウト秒数（デフォルト: 30） |

use std::{env, str::FromStr, time::Duration};

use codetracker_infra::notification::{Mailbox, SmtpSettings};
use thiserror::Error;

/// SMTP タイムアウトのデフォルト値（秒）
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

/// 設定エラー
///
/// 起動時に検出され、致命的エラーとして扱う。
/// メッセージに `SMTP_PASSWORD` の値を含めてはならない。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定（空文字列を含む）
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {reason}")]
    Invalid {
        name:   &'static str,
        reason: String,
    },
}

/// 送信バックエンド種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendKind {
    Smtp,
    Noop,
}

/// 通知機能の設定
#[derive(Debug, Clone)]
pub enum NotificationConfig {
    /// SMTP リレー経由で送信
    Smtp(SmtpSettings),
    /// 送信しない（ログ出力のみ）
    Noop,
}

impl NotificationConfig {
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Smtp(_) => BackendKind::Smtp,
            Self::Noop => BackendKind::Noop,
        }
    }
}

/// Notifier の設定
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// 通知設定
    pub notification: NotificationConfig,
}

impl NotifierConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 値が空文字列の変数は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let backend = match lookup("NOTIFICATION_BACKEND") {
            Some(value) => parse_var::<BackendKind>("NOTIFICATION_BACKEND", &value)?,
            None => BackendKind::Smtp,
        };

        let notification = match backend {
            BackendKind::Noop => NotificationConfig::Noop,
            BackendKind::Smtp => NotificationConfig::Smtp(smtp_settings_from(&lookup)?),
        };

        Ok(Self { notification })
    }
}

/// SMTP 設定を読み込む
///
/// 認証なしで送信してしまわないよう、資格情報を含むすべての必須値を要求する。
fn smtp_settings_from<F>(lookup: &F) -> Result<SmtpSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

    let host = required("SMTP_HOST")?;
    let port = parse_var::<u16>("SMTP_PORT", &required("SMTP_PORT")?)?;
    let secure = parse_var::<bool>("SMTP_SECURE", &required("SMTP_SECURE")?.to_lowercase())?;
    let username = required("SMTP_USER")?;
    let password = required("SMTP_PASSWORD")?;

    // 送信元は既定で SMTP_USER を使う。不正な場合は値の出どころの変数名で報告する
    let from_address = match lookup("NOTIFICATION_FROM_ADDRESS") {
        Some(value) => parse_var::<Mailbox>("NOTIFICATION_FROM_ADDRESS", &value)?,
        None => parse_var::<Mailbox>("SMTP_USER", &username)?,
    };
    let timeout_secs = match lookup("SMTP_TIMEOUT_SECS") {
        Some(value) => parse_var::<u64>("SMTP_TIMEOUT_SECS", &value)?,
        None => DEFAULT_SMTP_TIMEOUT_SECS,
    };
    if timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            name:   "SMTP_TIMEOUT_SECS",
            reason: "1 以上である必要があります".to_string(),
        });
    }

    Ok(SmtpSettings {
        host,
        port,
        secure,
        username,
        password,
        from_address,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn parse_var<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: format!("{value:?}: {e}"),
    })
}

//! # 登録通知の入力
//!
//! CLI が標準入力から受け取る JSON を定義し、ドメインの [`RegistrationNotice`] に変換する。
//!
//! ```json
//! {
//!   "recipient_email": "student@example.com",
//!   "display_name": "山田太郎",
//!   "issued_id": "22A91A6182",
//!   "issued_secret": "..."
//! }
//! ```

use codetracker_domain::{
    DomainError,
    notification::{IssuedSecret, RegistrationNotice},
    user::Email,
    value_objects::{DisplayName, IssuedId},
};
use serde::Deserialize;

/// 登録通知の入力 DTO
///
/// Debug 出力では発行パスワードをマスクする。
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationInput {
    pub recipient_email: String,
    pub display_name:    String,
    pub issued_id:       String,
    pub issued_secret:   String,
}

impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("recipient_email", &self.recipient_email)
            .field("display_name", &self.display_name)
            .field("issued_id", &self.issued_id)
            .field("issued_secret", &"[REDACTED]")
            .finish()
    }
}

impl RegistrationInput {
    /// JSON 文字列からパースする
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// ドメインの登録通知に変換する
    pub fn into_notice(self) -> Result<RegistrationNotice, DomainError> {
        Ok(RegistrationNotice::new(
            Email::new(self.recipient_email)?,
            DisplayName::new(self.display_name)?,
            IssuedId::new(self.issued_id)?,
            IssuedSecret::new(self.issued_secret)?,
        ))
    }
}

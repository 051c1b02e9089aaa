//! # Code Tracker ドメイン層
//!
//! 登録通知（ログイン情報のメール送付）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: Email, IssuedSecret）
//! - **通知イベント**: 新規登録ユーザーへの通知内容（RegistrationNotice）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! notifier → infra → domain
//!     ↘               ↑
//!       ──────────────
//! ```
//!
//! ドメイン層はインフラ層（SMTP、テンプレートエンジン）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - メールアドレス値オブジェクト
//! - [`value_objects`] - 表示名・発行 ID などの文字列値オブジェクト
//! - [`notification`] - 登録通知と配信結果
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use codetracker_domain::{
//!     notification::{IssuedSecret, RegistrationNotice},
//!     user::Email,
//!     value_objects::{DisplayName, IssuedId},
//! };
//!
//! let notice = RegistrationNotice::new(
//!     Email::new("student@example.com")?,
//!     DisplayName::new("山田太郎")?,
//!     IssuedId::new("22A91A6182")?,
//!     IssuedSecret::new("initial-secret")?,
//! );
//!
//! assert_eq!(notice.recipient_email().as_str(), "student@example.com");
//! assert!(!format!("{notice:?}").contains("initial-secret"));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod notification;
pub mod user;
pub mod value_objects;

pub use error::DomainError;

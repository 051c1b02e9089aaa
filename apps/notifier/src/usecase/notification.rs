//! # 通知ユースケース
//!
//! 登録通知メールの生成・送信・ログ出力を統合する。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`service`] - テンプレートレンダリング + 送信 + ログ出力の統合サービス

pub mod service;
pub mod template_renderer;

pub use service::Notifier;
pub use template_renderer::TemplateRenderer;

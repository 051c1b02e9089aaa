//! # ユースケース層
//!
//! - [`notification`] - 登録通知の配信

pub mod notification;

pub use notification::{Notifier, TemplateRenderer};

//! # Code Tracker 共有ユーティリティ
//!
//! 通知サービスと各クレートで共通に使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, notifier）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は feature で必要な分だけ有効にする
//!
//! ## モジュール構成
//!
//! - [`event_log`] - ビジネスイベントログの構造化ヘルパー
//! - [`observability`] - トレーシング初期化とログ出力形式

pub mod event_log;
pub mod observability;

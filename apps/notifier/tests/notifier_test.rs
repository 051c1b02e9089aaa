//! Notifier 統合テスト
//!
//! `deliver()` の配信結果と、出力される構造化ログの内容を検証する。
//! ログは JSON 形式でメモリ上のバッファに取り込み、発行パスワードが
//! 一切出力されないことを確認する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p codetracker-notifier --test notifier_test
//! ```

use std::{
    io,
    sync::{Arc, Mutex},
};

use codetracker_domain::{
    notification::{DeliveryOutcome, IssuedSecret, RegistrationNotice},
    user::Email,
    value_objects::{DisplayName, IssuedId},
};
use codetracker_infra::mock::MockNotificationSender;
use codetracker_notifier::{
    build_sender,
    config::NotificationConfig,
    usecase::{Notifier, TemplateRenderer},
};
use pretty_assertions::assert_eq;
use tracing_subscriber::fmt::MakeWriter;

const RECIPIENT: &str = "dev.pavangollapalli@gmail.com";
const SECRET: &str = "22A91A6182";

/// ログ出力を取り込むバッファ
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// JSON ログを取り込むサブスクライバを現在のスレッドに設定する
fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(buffer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

fn make_notice() -> RegistrationNotice {
    RegistrationNotice::new(
        Email::new(RECIPIENT).unwrap(),
        DisplayName::new("Pavan Gollapalli").unwrap(),
        IssuedId::new("22A91A6182").unwrap(),
        IssuedSecret::new(SECRET).unwrap(),
    )
}

fn make_notifier(sender: MockNotificationSender) -> Notifier {
    Notifier::new(Arc::new(sender), TemplateRenderer::new().unwrap())
}

#[tokio::test]
async fn 送信成功時はsentを返しinfoログに宛先のみを出力する() {
    let (logs, _guard) = capture_logs();
    let notifier = make_notifier(MockNotificationSender::new());

    let outcome = notifier.deliver(make_notice()).await;

    assert_eq!(outcome, DeliveryOutcome::Sent);

    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "{lines:#?}");
    let line = &lines[0];
    assert!(line.contains(r#""level":"INFO""#));
    assert!(line.contains(r#""event.action":"notification.sent""#));
    assert!(line.contains(RECIPIENT));
    assert!(!line.contains(SECRET));
}

#[tokio::test]
async fn 送信失敗時は理由付きのfailedを返しerrorログに宛先と理由のみを出力する() {
    let (logs, _guard) = capture_logs();
    let notifier = make_notifier(MockNotificationSender::failing("Invalid login"));

    let outcome = notifier.deliver(make_notice()).await;

    assert_eq!(outcome, DeliveryOutcome::Failed("Invalid login".to_string()));

    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "{lines:#?}");
    let line = &lines[0];
    assert!(line.contains(r#""level":"ERROR""#));
    assert!(line.contains(r#""event.action":"notification.failed""#));
    assert!(line.contains(r#""reason":"Invalid login""#));
    assert!(line.contains(RECIPIENT));
    assert!(!line.contains(SECRET));
}

#[tokio::test]
async fn 長い表示名と発行idもそのまま本文に載せて送信する() {
    let sender = MockNotificationSender::new();
    let notifier = make_notifier(sender.clone());
    let display_name = format!(" {} ", "Gollapalli ".repeat(20));
    let issued_id = "X".repeat(80);
    let notice = RegistrationNotice::new(
        Email::new(RECIPIENT).unwrap(),
        DisplayName::new(display_name.clone()).unwrap(),
        IssuedId::new(issued_id.clone()).unwrap(),
        IssuedSecret::new(SECRET).unwrap(),
    );

    let outcome = notifier.deliver(notice).await;

    assert_eq!(outcome, DeliveryOutcome::Sent);
    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text_body.contains(&display_name));
    assert!(sent[0].text_body.contains(&issued_id));
}

#[tokio::test]
async fn 常に失敗する送信でも呼び出しごとにfailedを返し続ける() {
    let (logs, _guard) = capture_logs();
    let sender = MockNotificationSender::failing("Connection refused");
    let notifier = make_notifier(sender.clone());

    for _ in 0..3 {
        let outcome = notifier.deliver(make_notice()).await;
        assert!(!outcome.is_sent());
        assert_eq!(outcome.failure_reason(), Some("Connection refused"));
    }

    assert_eq!(sender.attempts(), 3);
    let lines = logs.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| !line.contains(SECRET)));
}

#[tokio::test]
async fn 配信結果はresultに変換して呼び出し側で扱える() {
    let notifier = make_notifier(MockNotificationSender::failing("Invalid login"));

    let err = notifier
        .deliver(make_notice())
        .await
        .into_result()
        .unwrap_err();

    assert_eq!(err.reason, "Invalid login");
}

#[tokio::test]
async fn noopバックエンドは送信せずにsentを返す() {
    let (logs, _guard) = capture_logs();
    let sender = build_sender(&NotificationConfig::Noop).unwrap();
    let notifier = Notifier::new(sender, TemplateRenderer::new().unwrap());

    let outcome = notifier.deliver(make_notice()).await;

    assert_eq!(outcome, DeliveryOutcome::Sent);
    assert!(logs.lines().iter().all(|line| !line.contains(SECRET)));
}

#[test]
fn noopバックエンドはトランスポートが拒否する宛先でfailedを返す() {
    let sender = build_sender(&NotificationConfig::Noop).unwrap();
    let notifier = Notifier::new(sender, TemplateRenderer::new().unwrap());
    let notice = RegistrationNotice::new(
        Email::new("pavan gollapalli@gmail.com").unwrap(),
        DisplayName::new("Pavan Gollapalli").unwrap(),
        IssuedId::new("22A91A6182").unwrap(),
        IssuedSecret::new(SECRET).unwrap(),
    );

    let outcome = tokio_test::block_on(notifier.deliver(notice));

    let reason = outcome.failure_reason().unwrap();
    assert!(reason.starts_with("宛先アドレス不正"), "{reason}");
}

//! Integration tests for operation logging
//!
//! The engine surfaces rejected operations and mutations through `tracing`
//! rather than user-facing errors; these tests pin the log output down.

use orderboard::comment::AddComment;
use orderboard::order::{LoadOrders, MoveOrder};
use orderboard::{BoardContext, Execute, Status};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs(f: impl FnOnce()) -> String {
    let writer = CaptureWriter::default();
    let make_writer = {
        let writer = writer.clone();
        move || writer.clone()
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn test_moves_and_rejections_are_logged() {
    let logs = with_captured_logs(|| {
        let ctx = BoardContext::new();
        LoadOrders::defaults().execute(&ctx).unwrap();

        MoveOrder::new("1", Status::Processing).execute(&ctx).unwrap();
        MoveOrder::new("1", Status::Processing).execute(&ctx).unwrap();
        let _ = AddComment::new("1", "   ", "Current User").execute(&ctx);
    });

    assert!(logs.contains("loading orders"));
    assert!(logs.contains("order moved"));
    assert!(logs.contains("move is a no-op"));
    assert!(logs.contains("rejected empty comment"));
}

#[test]
fn test_missing_order_is_surfaced_to_logs() {
    let logs = with_captured_logs(|| {
        let ctx = BoardContext::new();
        LoadOrders::defaults().execute(&ctx).unwrap();

        let result = MoveOrder::new("nonexistent", Status::Completed).execute(&ctx);
        assert!(result.is_err());
        let result = AddComment::new("nonexistent", "hello", "Current User").execute(&ctx);
        assert!(result.is_err());
    });

    assert!(logs.contains("order not found"));
    assert!(logs.contains("nonexistent"));
}

#[test]
fn test_publish_logs_subscriber_count() {
    let logs = with_captured_logs(|| {
        let ctx = BoardContext::new();
        LoadOrders::defaults().execute(&ctx).unwrap();
        MoveOrder::new("2", Status::Completed).execute(&ctx).unwrap();
    });

    assert!(logs.contains("publish"));
}

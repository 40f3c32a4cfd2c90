//! Framed async decoding through `IrcCodec`.
//!
//! Run with: `cargo test --test codec`

#![cfg(feature = "codec")]

use futures_util::StreamExt;
use slirc_scanner::{IrcCodec, MalformedKind, ScanError, ScannerConfig};
use tokio_util::codec::FramedRead;

#[tokio::test]
async fn test_framed_read_stream() {
    let input: &[u8] =
        b"@time=2023-01-01T00:00:00Z :nick!user@host PRIVMSG #ch :Hello there\r\nPING :srv\r\n";
    let mut framed = FramedRead::new(input, IrcCodec::new());

    let first = framed.next().await.unwrap().unwrap();
    assert_eq!(first.tag("time"), Some("2023-01-01T00:00:00Z"));
    assert_eq!(first.prefix, "nick!user@host");
    assert_eq!(first.params, vec!["#ch", "Hello there"]);

    let second = framed.next().await.unwrap().unwrap();
    assert_eq!(second.command, "PING");
    assert_eq!(second.raw, "PING :srv\r\n");

    assert!(framed.next().await.is_none());
}

#[tokio::test]
async fn test_framed_read_partial_tail() {
    let input: &[u8] = b"PING :srv\r\nPRIVMSG #ch :cut";
    let mut framed = FramedRead::new(input, IrcCodec::new());

    assert!(framed.next().await.unwrap().is_ok());
    assert!(matches!(
        framed.next().await,
        Some(Err(ScanError::UnexpectedEof))
    ));
}

#[tokio::test]
async fn test_framed_read_custom_budget() {
    let config = ScannerConfig::new().with_body_budget(16);
    let input: &[u8] = b"PRIVMSG #channel :this line is too long\r\n";
    let mut framed = FramedRead::new(input, IrcCodec::with_config(config));

    assert!(matches!(
        framed.next().await,
        Some(Err(ScanError::Malformed(MalformedKind::BodyTooLong { limit: 16 })))
    ));
}

//! Benchmarks for IRC message scanning and prefix decomposition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_scanner::{parse_prefix, Scanner};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com\r\n";

/// Message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!\r\n";

/// Message with IRCv3 tags
const TAGGED_MESSAGE: &str = "@time=2023-01-01T00:00:00.000Z;msgid=abc123;+example/tag=value :nick!user@host PRIVMSG #channel :Hello with tags!\r\n";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host\r\n";

fn benchmark_single_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Message");

    for (name, input) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("with_tags", TAGGED_MESSAGE),
        ("numeric_response", NUMERIC_RESPONSE),
    ] {
        group.bench_with_input(BenchmarkId::new("scan", name), input, |b, s| {
            b.iter(|| {
                let msg = Scanner::new(black_box(s).as_bytes()).next_message().unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stream");

    let stream: String = [SIMPLE_MESSAGE, PREFIX_MESSAGE, TAGGED_MESSAGE, NUMERIC_RESPONSE]
        .iter()
        .cycle()
        .take(1000)
        .copied()
        .collect();

    group.bench_function("mixed_1000", |b| {
        b.iter(|| {
            let count = Scanner::new(black_box(stream.as_bytes()))
                .filter(Result::is_ok)
                .count();
            black_box(count)
        })
    });

    group.finish();
}

fn benchmark_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prefix");

    for (name, input) in [
        ("nick", "nick"),
        ("full_user", "nick!user@host.example.com"),
        ("server", "irc.server.net"),
    ] {
        group.bench_with_input(BenchmarkId::new("parse_prefix", name), input, |b, s| {
            b.iter(|| black_box(parse_prefix(black_box(s))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_message,
    benchmark_stream,
    benchmark_prefix,
);

criterion_main!(benches);

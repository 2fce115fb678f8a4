//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from concurrent callers are never lost or interleaved
//! - History order matches emission order under contention
//! - Metrics stay consistent with what was written

use sak::prelude::*;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

fn shared_logger(options: Options) -> (Arc<Logger>, MemoryStreams) {
    let streams = MemoryStreams::new();
    let logger = Logger::builder()
        .options(options)
        .streams(streams.clone())
        .env(MapEnv::new())
        .build();
    (Arc::new(logger), streams)
}

/// Every call from every thread lands on stderr as one whole line
#[test]
fn test_concurrent_lines_are_whole() {
    let (logger, streams) = shared_logger(Options::new().with_debug_level(1));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let tag = Tag::facility(format!("t{}", t));
                for i in 0..PER_THREAD {
                    log_to!(logger, 1, &tag, "msg ", i);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("logging thread panicked");
    }

    let lines = streams.stderr_lines();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    for line in &lines {
        assert!(line.starts_with("1: [t"), "malformed line: {}", line);
        assert!(line.contains("]: msg "), "malformed line: {}", line);
    }

    assert_eq!(logger.metrics().calls(), (THREADS * PER_THREAD) as u64);
    assert_eq!(logger.metrics().printed(), (THREADS * PER_THREAD) as u64);
}

/// Per-thread order survives contention and history mirrors stderr
#[test]
fn test_history_matches_emission_order() {
    let total = THREADS * PER_THREAD;
    let (logger, streams) = shared_logger(
        Options::new()
            .with_debug_level(1)
            .with_max_history(total as i64),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    log_to!(logger, 1, Tag::facility(t.to_string()), i);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("logging thread panicked");
    }

    let history = logger.history();
    let outputs: Vec<String> = history.iter().map(|e| e.output.clone()).collect();
    assert_eq!(outputs, streams.stderr_lines());

    let mut next = vec![0usize; THREADS];
    for entry in &history {
        let t: usize = entry.facility.parse().expect("thread id facility");
        let i: usize = entry.message.parse().expect("numeric message");
        assert_eq!(i, next[t], "thread {} out of order", t);
        next[t] += 1;
    }
    assert!(next.iter().all(|&n| n == PER_THREAD));
}

/// Eviction under contention keeps the bound and counts what it drops
#[test]
fn test_concurrent_eviction_bound() {
    let capacity = 64i64;
    let (logger, _streams) = shared_logger(
        Options::new()
            .with_debug_level(0)
            .with_max_history(capacity)
            .with_shift_buffer(16),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    // suppressed: level above the threshold
                    log_to!(logger, 2, i);
                    assert!(logger.history_len() as i64 <= capacity + 1);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("logging thread panicked");
    }

    let total = (THREADS * PER_THREAD) as u64;
    let metrics = logger.metrics();
    assert_eq!(metrics.suppressed(), total);
    assert_eq!(metrics.printed(), 0);
    assert_eq!(metrics.evicted() + logger.history_len() as u64, total);
}

//! The two output streams
//!
//! Level-0 lines go to stdout, everything printed goes to stderr. `Streams`
//! only exists so that pair can be captured; it is not a routing layer.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub trait Streams: Send {
    fn write_stdout(&mut self, line: &str) -> io::Result<()>;
    fn write_stderr(&mut self, line: &str) -> io::Result<()>;
}

/// Process stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreams;

impl Streams for StdStreams {
    fn write_stdout(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)
    }

    fn write_stderr(&mut self, line: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{}", line)
    }
}

/// Captures lines in memory. Clones share the same buffers.
///
/// ```
/// use sak::{MemoryStreams, Streams};
///
/// let capture = MemoryStreams::new();
/// let mut writer = capture.clone();
/// writer.write_stderr("1: hello").unwrap();
/// assert_eq!(capture.stderr_lines(), vec!["1: hello"]);
/// assert!(capture.stdout_lines().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStreams {
    stdout: Arc<Mutex<Vec<String>>>,
    stderr: Arc<Mutex<Vec<String>>>,
}

impl MemoryStreams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout.lock().clone()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.stderr.lock().clone()
    }

    pub fn clear(&self) {
        self.stdout.lock().clear();
        self.stderr.lock().clear();
    }
}

impl Streams for MemoryStreams {
    fn write_stdout(&mut self, line: &str) -> io::Result<()> {
        self.stdout.lock().push(line.to_string());
        Ok(())
    }

    fn write_stderr(&mut self, line: &str) -> io::Result<()> {
        self.stderr.lock().push(line.to_string());
        Ok(())
    }
}

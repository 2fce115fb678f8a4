//! Basic logger usage example
//!
//! Demonstrates plain output, leveled diagnostics, tags and the history.
//!
//! Run with: cargo run --example basic_usage
//! Try also: SAK_LOG_DLOVERRIDE=3 SAK_LOG_FFILTER='^db$' cargo run --example basic_usage

use sak::prelude::*;

struct Account {
    user: String,
    token: String,
}

impl Logify for Account {
    fn logify(&self) -> String {
        format!("{} (token {} chars, redacted)", self.user, self.token.len())
    }
}

fn main() -> Result<()> {
    // Level 0 is program output on stdout
    log!(0, "=== sak basic usage ===");

    let logger = sak::global();
    logger.set_options(
        Options::new()
            .with_debug_level(2)
            .with_max_history(100)
            .with_print_time(true),
    );

    log!(1, "service starting");
    log!(2, Tag::facility("db").with_severity("info"), "pool size ", 8);
    log!(3, "this one is kept in history but not printed");

    let account = Account {
        user: "ann".into(),
        token: "s3cr3t-t0k3n".into(),
    };
    log!(1, Tag::facility("auth").with_code("A100"), "login: ", LogValue::custom(&account));

    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    log!(1, Tag::facility("net").with_severity("err"), "request failed: ", LogValue::failure(&err));

    log!(0, "history holds ", logger.history_len(), " entries:");
    println!("{}", logger.history_json()?);

    Ok(())
}

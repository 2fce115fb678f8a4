//! # sak
//!
//! Close to the simplest logger that is still useful: call it with a level
//! and some values, get one greppable line.
//!
//! ```text
//! <level>: (<time>: )([facility/severity]: )(<C@code> )message
//! ```
//!
//! ## Features
//!
//! - **No setup**: `log!(1, "hello")` goes through a lazily built global logger
//! - **Level 0 is output**: printed verbatim on stdout; other levels go to stderr
//! - **Env overrides**: `SAK_LOG_DLOVERRIDE` forces the debug level,
//!   `SAK_LOG_FFILTER` filters stderr lines by facility regex
//! - **Optional history**: a bounded in-memory record of every entry,
//!   printed or not
//! - **Custom rendering**: implement `Logify` to control how a value looks
//!
//! ```
//! use sak::{log_to, Logger, MemoryStreams, Tag};
//!
//! let capture = MemoryStreams::new();
//! let logger = Logger::builder()
//!     .debug_level(1)
//!     .max_history(10)
//!     .streams(capture.clone())
//!     .build();
//!
//! log_to!(logger, 1, Tag::facility("testfac").with_code("3919"), "disk at ", 91, "%");
//! log_to!(logger, 2, "too chatty to print");
//!
//! assert_eq!(capture.stderr_lines(), vec!["1: [testfac]: <C@3919> disk at 91%"]);
//! assert_eq!(logger.history().len(), 2);
//! assert!(!logger.history()[1].printed);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        EnvSource, LogEntry, LogValue, Logger, LoggerBuilder, LoggerMetrics, Logify, MapEnv,
        MemoryStreams, Options, Result, SakError, Streams, Tag, TimestampFormat,
    };
    pub use crate::{log, log_to};
}

pub use crate::core::{
    assemble_line, debug_dump, global, log, render, Behavior, EnvSource, FacilityFilter, History,
    LogEntry, LogValue, Logger, LoggerBuilder, LoggerMetrics, Logify, MapEnv, MemoryStreams,
    Options, ProcessEnv, Rendered, Result, SakError, StdStreams, Streams, Tag, TimestampFormat,
    DEFAULT_SHIFT_BUFFER, FACILITY_FILTER_VAR, LEVEL_OVERRIDE_VAR,
};

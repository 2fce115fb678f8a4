//! Core logger types and traits

pub mod env;
pub mod error;
pub mod filter;
pub mod history;
pub mod line;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod render;
pub mod streams;
pub mod tag;
pub mod timestamp;
pub mod value;

pub use env::{EnvSource, MapEnv, ProcessEnv, FACILITY_FILTER_VAR, LEVEL_OVERRIDE_VAR};
pub use error::{Result, SakError};
pub use filter::FacilityFilter;
pub use history::History;
pub use line::assemble_line;
pub use log_entry::LogEntry;
pub use logger::{global, log, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use options::{Behavior, Options, DEFAULT_SHIFT_BUFFER};
pub use render::{debug_dump, render, Rendered};
pub use streams::{MemoryStreams, StdStreams, Streams};
pub use tag::Tag;
pub use timestamp::TimestampFormat;
pub use value::{LogValue, Logify};

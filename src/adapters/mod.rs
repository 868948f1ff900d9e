// Adapters layer: concrete submission sinks.

pub mod sink;

pub use sink::{build_sink, FileSink, LogSink, OutputFormat};

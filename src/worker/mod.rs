//! The processing loop that drives the receive → summarize → emit cycle.

pub mod processor;

pub use processor::{Processor, StdoutSink, SummarySink};

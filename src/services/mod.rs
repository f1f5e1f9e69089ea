//! Services outside the UI
//!
//! - Loading records from the built-in datasets or a data directory
//! - Applying mutations through a sink
//! - Running submissions on background threads

pub mod mutation_sink;
pub mod record_source;
pub mod submission_runner;

pub use mutation_sink::{LoggingSink, MutationRequest, MutationSink, SubmissionError};
pub use record_source::RecordSource;
pub use submission_runner::{Completion, SubmissionRunner, Ticket};

//! Mutation requests and the sink that acknowledges them

use crate::model::ui::ScreenKind;
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

/// A change the user asked for
///
/// Records travel as JSON so one sink can serve every record family.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest {
    Create {
        screen: ScreenKind,
        record: Value,
    },
    Update {
        screen: ScreenKind,
        id: String,
        record: Value,
    },
    Delete {
        screen: ScreenKind,
        ids: Vec<String>,
    },
}

impl MutationRequest {
    pub fn screen(&self) -> ScreenKind {
        match self {
            MutationRequest::Create { screen, .. }
            | MutationRequest::Update { screen, .. }
            | MutationRequest::Delete { screen, .. } => *screen,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            MutationRequest::Create { .. } => "create",
            MutationRequest::Update { .. } => "update",
            MutationRequest::Delete { .. } => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The backend refused the change
    Rejected(String),
    /// The record could not be encoded for the request
    Encode(String),
    /// The worker went away without answering
    Disconnected,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Rejected(reason) => write!(f, "Request rejected: {}", reason),
            SubmissionError::Encode(reason) => write!(f, "Could not encode record: {}", reason),
            SubmissionError::Disconnected => write!(f, "Submission worker stopped unexpectedly"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Backend that applies mutations
///
/// Called from a worker thread, so it may block.
pub trait MutationSink: Send + Sync {
    fn apply(&self, request: &MutationRequest) -> Result<(), SubmissionError>;
}

/// Sink that logs every request and acknowledges it
#[derive(Debug, Default)]
pub struct LoggingSink {
    reject: bool,
}

impl LoggingSink {
    pub fn new(reject: bool) -> Self {
        Self { reject }
    }
}

impl MutationSink for LoggingSink {
    fn apply(&self, request: &MutationRequest) -> Result<(), SubmissionError> {
        if self.reject {
            warn!(screen = request.screen().name(), verb = request.verb(), "mutation rejected");
            return Err(SubmissionError::Rejected(
                "mutations are disabled in this session".to_string(),
            ));
        }

        match request {
            MutationRequest::Create { screen, record } => {
                info!(screen = screen.name(), %record, "create");
            }
            MutationRequest::Update { screen, id, record } => {
                info!(screen = screen.name(), id = %id, %record, "update");
            }
            MutationRequest::Delete { screen, ids } => {
                info!(screen = screen.name(), ?ids, "delete");
            }
        }
        Ok(())
    }
}

//! Background submission runner
//!
//! Each request is applied on its own worker thread. Completions come back
//! over one channel and are collected by `poll` on every tick.

use super::mutation_sink::{MutationRequest, MutationSink, SubmissionError};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::debug;

/// Handle for one submitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

/// Outcome of one request
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub request: MutationRequest,
    pub result: Result<(), SubmissionError>,
}

struct InFlight {
    ticket: Ticket,
    request: MutationRequest,
    started: Instant,
}

pub struct SubmissionRunner {
    sink: Arc<dyn MutationSink>,
    sender: Sender<(Ticket, Result<(), SubmissionError>)>,
    receiver: Receiver<(Ticket, Result<(), SubmissionError>)>,
    in_flight: Vec<InFlight>,
    next_ticket: u64,
}

impl SubmissionRunner {
    pub fn new(sink: Arc<dyn MutationSink>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sink,
            sender,
            receiver,
            in_flight: Vec::new(),
            next_ticket: 1,
        }
    }

    /// Hand a request to a worker thread
    pub fn spawn(&mut self, request: MutationRequest) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let sink = Arc::clone(&self.sink);
        let tx = self.sender.clone();
        let worker_request = request.clone();
        thread::spawn(move || {
            let result = sink.apply(&worker_request);
            let _ = tx.send((ticket, result));
        });

        debug!(ticket = ticket.0, verb = request.verb(), "submission started");
        self.in_flight.push(InFlight {
            ticket,
            request,
            started: Instant::now(),
        });
        ticket
    }

    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Start instant of the oldest outstanding request
    pub fn oldest_start(&self) -> Option<Instant> {
        self.in_flight.iter().map(|f| f.started).min()
    }

    /// Collect every completion that arrived since the last poll
    pub fn poll(&mut self) -> Vec<Completion> {
        let mut done = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok((ticket, result)) => {
                    if let Some(pos) = self.in_flight.iter().position(|f| f.ticket == ticket) {
                        let flight = self.in_flight.remove(pos);
                        debug!(
                            ticket = ticket.0,
                            elapsed_ms = flight.started.elapsed().as_millis() as u64,
                            ok = result.is_ok(),
                            "submission finished"
                        );
                        done.push(Completion {
                            ticket,
                            request: flight.request,
                            result,
                        });
                    }
                }
                Err(TryRecvError::Empty) => break,
                // The runner owns a sender, so this only happens on teardown
                Err(TryRecvError::Disconnected) => {
                    for flight in self.in_flight.drain(..) {
                        done.push(Completion {
                            ticket: flight.ticket,
                            request: flight.request,
                            result: Err(SubmissionError::Disconnected),
                        });
                    }
                    break;
                }
            }
        }
        done
    }
}

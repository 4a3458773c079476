use crate::error::{PaymentError, Result};
use crate::interfaces::http::{InitiatorEvent, StatusEvent};
use serde::Deserialize;
use std::io::BufRead;

/// One handler invocation: which handler to run and the event to hand it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "handler", content = "event", rename_all = "snake_case")]
pub enum Invocation {
    Initiate(InitiatorEvent),
    Status(StatusEvent),
}

/// Reads invocations from a newline-delimited JSON source.
///
/// Each non-blank line must hold one `{"handler": ..., "event": ...}` envelope.
pub struct InvocationReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> InvocationReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and deserializes invocations.
    ///
    /// A malformed line yields an error for that line only; reading continues
    /// with the next one.
    pub fn invocations(self) -> impl Iterator<Item = Result<Invocation>> {
        self.source
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| {
                let line = line?;
                serde_json::from_str(&line).map_err(PaymentError::from)
            })
    }
}

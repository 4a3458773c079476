use crate::error::Result;
use crate::interfaces::http::ApiResponse;
use std::io::Write;

/// Writes handler responses as newline-delimited JSON.
pub struct ResponseWriter<W: Write> {
    sink: W,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes one response per line and flushes, so each result is visible as
    /// soon as its invocation completes.
    pub fn write_response(&mut self, response: &ApiResponse) -> Result<()> {
        serde_json::to_writer(&mut self.sink, response)?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }
}

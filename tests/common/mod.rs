#![allow(dead_code)]

use payflow::application::dispatcher::Dispatcher;
use payflow::infrastructure::in_memory::InMemoryTransactionStore;
use serde_json::Value;
use std::io::{Error, Write};
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn in_memory_dispatcher() -> (InMemoryTransactionStore, Dispatcher) {
    let store = InMemoryTransactionStore::new();
    let dispatcher = Dispatcher::new(Arc::new(store.clone()));
    (store, dispatcher)
}

/// Writes one JSON event to a temporary file for the CLI.
pub fn event_file(event: &Value) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", event)?;
    Ok(file)
}

/// Parses every stdout line as a response and decodes its JSON body.
pub fn response_bodies(stdout: &[u8]) -> Vec<(u64, Value)> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| {
            let response: Value = serde_json::from_str(line).expect("response is not JSON");
            let status = response["statusCode"].as_u64().expect("missing statusCode");
            let body = serde_json::from_str(response["body"].as_str().expect("missing body"))
                .expect("body is not JSON");
            (status, body)
        })
        .collect()
}

pub mod http;
pub mod ndjson;

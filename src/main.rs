use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payflow::application::dispatcher::Dispatcher;
use payflow::config::StoreConfig;
use payflow::infrastructure::open_store;
use payflow::interfaces::http::ApiResponse;
use payflow::interfaces::ndjson::{InvocationReader, ResponseWriter};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    store: StoreConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a pending transaction from an initiator event
    Initiate {
        /// Event JSON file (reads stdin when omitted)
        event: Option<PathBuf>,
    },
    /// Look up a transaction's status from a status event
    Status {
        /// Event JSON file (reads stdin when omitted)
        event: Option<PathBuf>,
    },
    /// Run newline-delimited invocations against a single store
    Replay {
        /// Input file, one `{"handler": ..., "event": ...}` object per line
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries responses only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "payflow=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store = open_store(&cli.store).into_diagnostic()?;
    let dispatcher = Dispatcher::new(store);

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());

    match cli.command {
        Command::Initiate { event } => {
            let event = read_event(event)?;
            let response = dispatcher.initiator().handle(event).await.into_diagnostic()?;
            emit(&mut writer, &response)?;
        }
        Command::Status { event } => {
            let event = read_event(event)?;
            let response = dispatcher
                .status_checker()
                .handle(event)
                .await
                .into_diagnostic()?;
            emit(&mut writer, &response)?;
        }
        Command::Replay { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = InvocationReader::new(BufReader::new(file));
            for invocation in reader.invocations() {
                match invocation {
                    Ok(invocation) => {
                        let response = dispatcher.dispatch(invocation).await.into_diagnostic()?;
                        emit(&mut writer, &response)?;
                    }
                    Err(e) => {
                        error!("Error reading invocation: {}", e);
                    }
                }
            }
        }
    }

    Ok(())
}

fn read_event<T: DeserializeOwned>(path: Option<PathBuf>) -> Result<T> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).into_diagnostic()?,
        None => io::read_to_string(io::stdin()).into_diagnostic()?,
    };
    serde_json::from_str(&raw).into_diagnostic()
}

fn emit<W: io::Write>(writer: &mut ResponseWriter<W>, response: &ApiResponse) -> Result<()> {
    writer.write_response(response).into_diagnostic()
}

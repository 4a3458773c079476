use clap::Args;
use std::path::PathBuf;

/// Environment variable naming the transactions table.
pub const TRANSACTIONS_TABLE_ENV: &str = "TRANSACTIONS_TABLE";
/// Table used when `TRANSACTIONS_TABLE` is not set.
pub const DEFAULT_TRANSACTIONS_TABLE: &str = "LOCAL-TransactionsTable";

/// Where transaction records live.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Name of the transactions table shared by both handlers
    #[arg(
        long = "table",
        env = TRANSACTIONS_TABLE_ENV,
        default_value = DEFAULT_TRANSACTIONS_TABLE,
        global = true
    )]
    pub transactions_table: String,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            transactions_table: DEFAULT_TRANSACTIONS_TABLE.to_string(),
            db_path: None,
        }
    }
}

use clap::{Parser, ValueEnum};

/// Ticket intake service: creates ticket records and queues ticket submissions.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Table ticket records are written to
    #[arg(long, env = "TABLE_NAME")]
    pub table_name: String,

    /// URL of the queue ticket submissions are sent to
    #[arg(long, env = "QUEUE_URL")]
    pub queue_url: String,

    /// Port (Default 8000)
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Where ticket records are stored
    #[arg(long, env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Dynamodb)]
    pub store_backend: StoreBackend,

    /// SQLite database, only used with `--store-backend sqlite`
    #[arg(long, env = "SQLITE_URL", default_value = "sqlite://tickets.db")]
    pub sqlite_url: String,

    /// Override for the AWS endpoint, e.g. a LocalStack URL
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub aws_endpoint_url: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Dynamodb,
    Sqlite,
}

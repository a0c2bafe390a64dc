use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{debug, info};

use super::ticket::TicketRecord;
use super::ticketsystem::RecordStore;

/// SQLite-backed record store for running the service locally.
pub struct SqliteStore {
    conn: Pool<Sqlite>,
    table: String,
}

impl SqliteStore {
    pub async fn new(url: &str, table: &str) -> anyhow::Result<Self> {
        // The table name is interpolated into SQL, so it must be a bare identifier.
        if !is_identifier(table) {
            anyhow::bail!("invalid SQLite table name: {table:?}");
        }

        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid SQLite url {url}"))?
            .create_if_missing(true);
        // In-memory databases are per connection: keep exactly one, forever.
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let conn = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open SQLite database {url}"))?;

        let store = Self {
            conn,
            table: table.to_string(),
        };
        store.create_table().await?;
        info!(table = %store.table, "SQLite record store ready");
        Ok(store)
    }

    async fn create_table(&self) -> anyhow::Result<()> {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                ticket_id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            self.table
        ))
        .execute(&self.conn)
        .await
        .context("failed to create tickets table")?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    fn name(&self) -> &'static str {
        "SQLite"
    }

    async fn put(&self, record: &TicketRecord) -> anyhow::Result<()> {
        sqlx::query(&format!(
            "INSERT INTO {} (ticket_id, title, description, status, created_at)
             VALUES (?, ?, ?, ?, ?)",
            self.table
        ))
        .bind(&record.ticket_id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.status.as_str())
        .bind(&record.created_at)
        .execute(&self.conn)
        .await?;
        debug!(ticket_id = %record.ticket_id, "Inserted ticket record");
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

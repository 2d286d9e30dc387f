use anyhow::{Context, Result};
use rusqlite::Connection;

const SCHEMA: &str = include_str!("schema.sql");

/// Creates missing tables and indexes; existing data is kept
pub fn initialize_database(conn: &Connection) -> Result<()> {
    let statements = schema_statements(SCHEMA);

    for (idx, statement) in statements.iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to apply schema statement {}", idx + 1))?;
    }

    log::info!("Database schema ready ({} statements)", statements.len());
    Ok(())
}

fn schema_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_TABLES: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Create any missing tables and indexes; existing data is kept.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Schema ensured ({} statements)", statements.len());
    Ok(())
}

pub fn reset_database(conn: &Connection) -> Result<()> {
    for statement in split_sql_statements(DROP_TABLES) {
        execute_sql(conn, &statement)?;
    }
    ensure_schema(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

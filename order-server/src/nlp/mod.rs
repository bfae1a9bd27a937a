//! Natural-Language Query Module
//!
//! Turns a free-text question into a SQL statement via an external
//! model, then runs it against the live database. Only SELECT
//! statements are ever executed; generation failures are transport
//! errors, execution failures are data (the `error` field), so the
//! caller always gets the generated SQL back for inspection.

pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};
use validator::Validate;

/// Text-to-SQL backend seam. Production uses [`gemini::GeminiClient`];
/// tests plug in a canned generator.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    async fn generate_sql(&self, schema: &str, question: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(length(min = 1, message = "Query must not be empty"))]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub sql_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Vec<Value>>,
}

/// Render the live schema as one `table (col1, col2, ...)` line per
/// table, the shape the generation prompt expects.
pub async fn schema_summary(pool: &SqlitePool) -> Result<String, AppError> {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name <> '_sqlx_migrations'
         ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::database(format!("Schema introspection failed: {e}")))?;

    let mut lines = Vec::with_capacity(tables.len());
    for (table,) in &tables {
        // Table names come from sqlite_master, not from the client
        let columns: Vec<(i64, String)> =
            sqlx::query_as(&format!("SELECT cid, name FROM pragma_table_info('{table}')"))
                .fetch_all(pool)
                .await
                .map_err(|e| AppError::database(format!("Schema introspection failed: {e}")))?;
        let names: Vec<&str> = columns.iter().map(|(_, name)| name.as_str()).collect();
        lines.push(format!("{table} ({})", names.join(", ")));
    }
    Ok(lines.join("\n"))
}

fn is_select(sql: &str) -> bool {
    sql.trim_start().to_ascii_lowercase().starts_with("select")
}

fn row_to_json(row: &SqliteRow) -> Value {
    let mut object = serde_json::Map::with_capacity(row.len());
    for column in row.columns() {
        let ordinal = column.ordinal();
        let value = match row.try_get_raw(ordinal) {
            Ok(raw) if raw.is_null() => Value::Null,
            Ok(raw) => match raw.type_info().name() {
                "INTEGER" => row
                    .try_get::<i64, _>(ordinal)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                "REAL" => row
                    .try_get::<f64, _>(ordinal)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                _ => row
                    .try_get::<String, _>(ordinal)
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            },
            Err(_) => Value::Null,
        };
        object.insert(column.name().to_string(), value);
    }
    Value::Object(object)
}

/// Generate SQL for `question` and execute it.
///
/// A non-SELECT statement is rejected before touching the database;
/// an execution failure is reported in the response's `error` field
/// alongside the SQL that caused it.
pub async fn generate_and_execute(
    pool: &SqlitePool,
    generator: &dyn SqlGenerator,
    question: &str,
) -> Result<QueryResponse, AppError> {
    if question.trim().is_empty() {
        return Err(AppError::new(ErrorCode::QueryEmpty));
    }

    let schema = schema_summary(pool).await?;
    let sql = generator.generate_sql(&schema, question).await?;

    if !is_select(&sql) {
        return Err(
            AppError::new(ErrorCode::QueryNotReadOnly).with_detail("sql_query", sql.clone()),
        );
    }

    match sqlx::query(&sql).fetch_all(pool).await {
        Ok(rows) => {
            let result = rows.iter().map(row_to_json).collect();
            Ok(QueryResponse {
                sql_query: sql,
                error: None,
                result: Some(result),
            })
        }
        Err(e) => {
            tracing::warn!(sql, error = %e, "Generated query failed to execute");
            Ok(QueryResponse {
                sql_query: sql,
                error: Some(e.to_string()),
                result: None,
            })
        }
    }
}

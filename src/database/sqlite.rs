// ABOUTME: SQLite-backed document store using JSON1 functions over a single documents table
// ABOUTME: Assigns sequential ids through an atomic per-collection counter row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use super::{DocumentStore, Filter, SortOrder};
use async_trait::async_trait;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::Collection;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// Matches nothing; used when an id cannot be represented as an `SQLite` integer
const NO_MATCH: &str = "0 = 1";

/// Document store persisting JSON bodies in `SQLite`
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `database_url` and run migrations
    ///
    /// In-memory URLs get a single long-lived connection so every query sees
    /// the same database.
    pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid DATABASE_URL '{database_url}': {e}")))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let store = Self { pool };
        store.migrate().await?;
        info!(database.url = %database_url, "Document store ready");
        Ok(store)
    }

    /// Create the documents and counters tables
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id INTEGER NOT NULL,
                body TEXT NOT NULL CHECK (json_valid(body)),
                PRIMARY KEY (collection, id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create documents table: {e}")))?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_documents_name
            ON documents(collection, lower(json_extract(body, '$.name')))
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create name index: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS counters (
                collection TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create counters table: {e}")))?;

        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn sql_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn push_id_condition(builder: &mut QueryBuilder<'_, Sqlite>, condition: &str, id: u64) {
    match sql_id(id) {
        Some(id) => {
            builder.push(condition).push_bind(id);
        }
        None => {
            builder.push(NO_MATCH);
        }
    }
}

/// Append the SQL condition for `filter` to `builder`
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &Filter) {
    builder.push("(");
    match filter {
        Filter::All => {
            builder.push("1 = 1");
        }
        Filter::Id(id) => push_id_condition(builder, "id = ", *id),
        Filter::NameIgnoreCase { name, exclude_id } => {
            builder
                .push("lower(json_extract(body, '$.name')) = lower(")
                .push_bind(name.clone())
                .push(")");
            if let Some(excluded) = exclude_id.and_then(sql_id) {
                builder.push(" AND id <> ").push_bind(excluded);
            }
        }
        Filter::CategoryRef(id) => {
            push_id_condition(builder, "json_extract(body, '$.category') = ", *id);
        }
        Filter::IngredientRef(id) => match sql_id(*id) {
            Some(id) => {
                builder
                    .push(
                        "EXISTS (SELECT 1 FROM json_each(body, '$.ingredients') \
                         WHERE json_extract(value, '$.ingredient') = ",
                    )
                    .push_bind(id)
                    .push(
                        ") OR EXISTS (SELECT 1 FROM json_each(body, '$.alternatives') \
                         WHERE json_extract(value, '$.ingredient') = ",
                    )
                    .push_bind(id)
                    .push(")");
            }
            None => {
                builder.push(NO_MATCH);
            }
        },
    }
    builder.push(")");
}

fn row_to_document(row: &SqliteRow) -> AppResult<Value> {
    let body: String = row
        .try_get("body")
        .map_err(|e| AppError::database(format!("Failed to read document body: {e}")))?;
    Ok(serde_json::from_str(&body)?)
}

fn document_id(document: &Value) -> Option<i64> {
    document.get("id").and_then(Value::as_u64).and_then(sql_id)
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn find_all(&self, collection: Collection, sort: SortOrder) -> AppResult<Vec<Value>> {
        let mut builder = QueryBuilder::new("SELECT body FROM documents WHERE collection = ");
        builder.push_bind(collection.as_str());
        builder.push(match sort {
            SortOrder::NameAsc => " ORDER BY json_extract(body, '$.name') COLLATE NOCASE, id",
            SortOrder::IdAsc => " ORDER BY id",
        });

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list {collection}: {e}")))?;

        rows.iter().map(row_to_document).collect()
    }

    async fn find_one(&self, collection: Collection, filter: &Filter) -> AppResult<Option<Value>> {
        let mut builder = QueryBuilder::new("SELECT body FROM documents WHERE collection = ");
        builder.push_bind(collection.as_str()).push(" AND ");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id LIMIT 1");

        let row = builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to query {collection}: {e}")))?;

        row.as_ref().map(row_to_document).transpose()
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> AppResult<u64> {
        let mut builder =
            QueryBuilder::new("SELECT COUNT(*) FROM documents WHERE collection = ");
        builder.push_bind(collection.as_str()).push(" AND ");
        push_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count {collection}: {e}")))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn insert(&self, collection: Collection, document: Value) -> AppResult<Value> {
        let Value::Object(mut body) = document else {
            return Err(AppError::internal(format!(
                "Documents in {collection} must be JSON objects"
            )));
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO counters (collection, value) VALUES ($1, 1)
            ON CONFLICT(collection) DO UPDATE SET value = value + 1
            RETURNING value
            ",
        )
        .bind(collection.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to assign {collection} id: {e}")))?;

        body.insert("id".to_owned(), Value::from(id));
        let document = Value::Object(body);

        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id)
            .bind(document.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert into {collection}: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit insert: {e}")))?;

        debug!(collection = %collection, id, "Document inserted");
        Ok(document)
    }

    async fn update(&self, collection: Collection, document: Value) -> AppResult<bool> {
        let id = document_id(&document).ok_or_else(|| {
            AppError::internal(format!("Updated {collection} document has no valid id"))
        })?;

        let result = sqlx::query("UPDATE documents SET body = $1 WHERE collection = $2 AND id = $3")
            .bind(document.to_string())
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update {collection}: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, collection: Collection, filter: &Filter) -> AppResult<u64> {
        let mut builder = QueryBuilder::new(
            "DELETE FROM documents WHERE rowid IN (SELECT rowid FROM documents WHERE collection = ",
        );
        builder.push_bind(collection.as_str()).push(" AND ");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id LIMIT 1)");

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete from {collection}: {e}")))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

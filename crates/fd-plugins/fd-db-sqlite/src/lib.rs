//! # fd-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite relational model
//! and the `fd-core` domain models.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use fd_core::models::{Food, FOOD_PAGE_SIZE};
use fd_core::traits::FoodRepo;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::Row;
use tracing::{debug, info};
use uuid::Uuid;

const CREATE_FOODS_TABLE: &str = "CREATE TABLE IF NOT EXISTS foods (
    id BLOB PRIMARY KEY NOT NULL,
    created_at TEXT NOT NULL
)";

pub struct SqliteFoodRepo {
    pool: SqlitePool,
}

// Helpers for UUID conversion
fn uuid_to_blob(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

fn blob_to_uuid(blob: &[u8]) -> anyhow::Result<Uuid> {
    Uuid::from_slice(blob).context("stored food id is not a UUID")
}

fn row_to_food(row: &SqliteRow) -> anyhow::Result<Food> {
    let id: Vec<u8> = row.try_get("id")?;
    Ok(Food {
        id: blob_to_uuid(&id)?,
    })
}

impl SqliteFoodRepo {
    /// Connects to `database_url`, creating the database file and the
    /// `foods` table when missing.
    ///
    /// An in-memory database lives only as long as its connection, so the
    /// pool is pinned to a single long-lived connection in that case.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        sqlx::query(CREATE_FOODS_TABLE).execute(&pool).await?;
        info!(max_connections, "sqlite food repository ready");

        Ok(Self { pool })
    }
}

#[async_trait]
impl FoodRepo for SqliteFoodRepo {
    /// Storage order is `rowid`, i.e. insertion order.
    async fn list_all(&self) -> anyhow::Result<Vec<Food>> {
        let rows = sqlx::query("SELECT id FROM foods ORDER BY rowid LIMIT ?")
            .bind(FOOD_PAGE_SIZE as i64)
            .fetch_all(&self.pool)
            .await
            .context("select foods")?;

        rows.iter().map(row_to_food).collect()
    }

    async fn create(&self, mut food: Food) -> anyhow::Result<Option<Food>> {
        if food.id.is_nil() {
            food.id = Uuid::new_v4();
        }

        // Dropping the transaction uncommitted (e.g. when the caller's
        // timeout cancels this future) rolls the insert back.
        let mut tx = self.pool.begin().await.context("begin food transaction")?;
        let stored = insert_and_read_back(&mut tx, &food).await?;
        tx.commit().await.context("commit food")?;
        debug!(id = %food.id, "inserted food");

        Ok(stored)
    }
}

async fn insert_and_read_back(
    conn: &mut SqliteConnection,
    food: &Food,
) -> anyhow::Result<Option<Food>> {
    sqlx::query("INSERT INTO foods (id, created_at) VALUES (?, ?)")
        .bind(uuid_to_blob(food.id))
        .bind(Utc::now())
        .execute(&mut *conn)
        .await
        .with_context(|| format!("insert food {}", food.id))?;

    let row = sqlx::query("SELECT id FROM foods WHERE id = ?")
        .bind(uuid_to_blob(food.id))
        .fetch_optional(&mut *conn)
        .await
        .context("read back food")?;

    row.as_ref().map(row_to_food).transpose()
}

//! Plant store implementation using PostgreSQL.

use crate::domain::plant::{NewPlant, Plant};
use crate::storage::{PlantStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

/// Table DDL, applied idempotently at startup.
pub const CREATE_PLANTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS plants (
    id BIGSERIAL PRIMARY KEY,
    image TEXT,
    price DOUBLE PRECISION,
    name TEXT
)";

// Advisory lock key held while an explicit-id insert resynchronizes the id sequence.
const SEQUENCE_SYNC_LOCK: i64 = 0x706c_616e_7473;

// Postgres SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// A plant store that uses a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresPlantStore {
    pool: PgPool,
}

impl PostgresPlantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`. Does not touch the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the `plants` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_PLANTS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn table_exists(&self) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT to_regclass('public.plants') IS NOT NULL AS present")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("present")?)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM plants")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }

    async fn insert_with_id(&self, id: i64, plant: NewPlant) -> Result<Plant, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO plants (id, image, price, name) VALUES ($1, $2, $3, $4)
             RETURNING id, image, price, name",
        )
        .bind(id)
        .bind(plant.image)
        .bind(plant.price)
        .bind(plant.name)
        .fetch_one(tx.as_mut())
        .await
        .map_err(|e| conflict_or_database(e, id))?;
        let created = plant_from_row(&row)?;

        // Keep the BIGSERIAL sequence ahead of explicit ids so later store-assigned ids don't
        // collide with them. The sequence only ever moves up; the lock orders concurrent
        // explicit-id inserts until commit.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEQUENCE_SYNC_LOCK)
            .execute(tx.as_mut())
            .await?;
        sqlx::query(
            "WITH seq AS (SELECT pg_get_serial_sequence('plants', 'id') AS name)
             SELECT setval(seq.name::regclass, GREATEST(
                 (SELECT MAX(id) FROM plants),
                 pg_sequence_last_value(seq.name::regclass),
                 1))
             FROM seq",
        )
        .execute(tx.as_mut())
        .await?;

        tx.commit().await?;
        Ok(created)
    }
}

#[async_trait]
impl PlantStore for PostgresPlantStore {
    async fn create(&self, plant: NewPlant) -> Result<Plant, StoreError> {
        if let Some(id) = plant.id {
            return self.insert_with_id(id, plant).await;
        }

        let row = sqlx::query(
            "INSERT INTO plants (image, price, name) VALUES ($1, $2, $3)
             RETURNING id, image, price, name",
        )
        .bind(plant.image)
        .bind(plant.price)
        .bind(plant.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(plant_from_row(&row)?)
    }

    async fn list(&self) -> Result<Vec<Plant>, StoreError> {
        let rows = sqlx::query("SELECT id, image, price, name FROM plants ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        let mut plants = Vec::with_capacity(rows.len());
        for row in rows {
            plants.push(plant_from_row(&row)?);
        }
        Ok(plants)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Plant>, StoreError> {
        let row = sqlx::query("SELECT id, image, price, name FROM plants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(plant_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn plant_from_row(row: &PgRow) -> Result<Plant, sqlx::Error> {
    Ok(Plant {
        id: row.try_get("id")?,
        image: row.try_get("image")?,
        price: row.try_get("price")?,
        name: row.try_get("name")?,
    })
}

fn conflict_or_database(err: sqlx::Error, id: i64) -> StoreError {
    let is_unique_violation = err
        .as_database_error()
        .and_then(|db| db.code())
        .map_or(false, |code| code == UNIQUE_VIOLATION);
    if is_unique_violation {
        StoreError::Conflict(id)
    } else {
        StoreError::Database(err)
    }
}

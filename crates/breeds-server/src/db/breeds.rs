//! Record store for dog breeds
//!
//! [`BreedStore`] is opened once at startup, migrated, seeded when empty and
//! then cloned into every request handler. Cloning shares the pool.
//!
//! Lookups return `Option`/`bool` for absent records; only storage failures
//! and name collisions ([`DbError::DuplicateName`]) are errors.

use breeds_common::{Breed, BreedPatch, NewBreed, Range};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePool, FromRow};

use super::{create_pool, seed, DbError, DbResult};
use crate::config::DatabaseConfig;

const BREED_COLUMNS: &str = "id, name, breed_group, temperament, life_span, \
     height_min_cm, height_max_cm, weight_min_kg, weight_max_kg, \
     description, image_url, created_at, updated_at";

/// Flat row shape of the `dog_breeds` table
#[derive(Debug, FromRow)]
struct BreedRow {
    id: i64,
    name: String,
    breed_group: String,
    temperament: String,
    life_span: String,
    height_min_cm: i64,
    height_max_cm: i64,
    weight_min_kg: f64,
    weight_max_kg: f64,
    description: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BreedRow> for Breed {
    fn from(row: BreedRow) -> Self {
        Breed {
            id: row.id,
            name: row.name,
            breed_group: row.breed_group,
            temperament: row.temperament,
            life_span: row.life_span,
            height_cm: Range::new(row.height_min_cm, row.height_max_cm),
            weight_kg: Range::new(row.weight_min_kg, row.weight_max_kg),
            description: row.description,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreedStore {
    pool: SqlitePool,
}

impl BreedStore {
    /// Connect to the database named in `config`, creating the file if needed
    pub async fn open(config: &DatabaseConfig) -> DbResult<Self> {
        Ok(Self::from_pool(create_pool(config).await?))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }

    /// Close every pooled connection; the store is unusable afterwards
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }

    /// Round-trip a trivial statement
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(DbError::from)
    }

    /// One page of breeds ordered by name, plus the total number of breeds.
    ///
    /// `limit` must already be validated (`limit >= 1`) and `offset` must
    /// not be negative. A window past the end comes back empty.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, limit: i64, offset: i64) -> DbResult<(Vec<Breed>, i64)> {
        let rows: Vec<BreedRow> = sqlx::query_as(&format!(
            "SELECT {BREED_COLUMNS} FROM dog_breeds ORDER BY name LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = self.count().await?;

        Ok((rows.into_iter().map(Breed::from).collect(), total))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Breed>> {
        let row: Option<BreedRow> =
            sqlx::query_as(&format!("SELECT {BREED_COLUMNS} FROM dog_breeds WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Breed::from))
    }

    #[tracing::instrument(skip(self, breed), fields(name = %breed.name))]
    pub async fn create(&self, breed: &NewBreed) -> DbResult<Breed> {
        let now = Utc::now();

        let row: BreedRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO dog_breeds (
                name, breed_group, temperament, life_span,
                height_min_cm, height_max_cm, weight_min_kg, weight_max_kg,
                description, image_url, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {BREED_COLUMNS}
            "#
        ))
        .bind(&breed.name)
        .bind(&breed.breed_group)
        .bind(&breed.temperament)
        .bind(&breed.life_span)
        .bind(breed.height_cm.min)
        .bind(breed.height_cm.max)
        .bind(breed.weight_kg.min)
        .bind(breed.weight_kg.max)
        .bind(&breed.description)
        .bind(&breed.image_url)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, &breed.name))?;

        Ok(row.into())
    }

    /// Merge `patch` over the stored breed and refresh `updated_at`.
    ///
    /// Returns `None` when no breed has this id.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: &BreedPatch) -> DbResult<Option<Breed>> {
        let (set_image, image_url) = match &patch.image_url {
            Some(next) => (true, next.clone()),
            None => (false, None),
        };

        let row: Option<BreedRow> = sqlx::query_as(&format!(
            r#"
            UPDATE dog_breeds SET
                name          = COALESCE(?, name),
                breed_group   = COALESCE(?, breed_group),
                temperament   = COALESCE(?, temperament),
                life_span     = COALESCE(?, life_span),
                height_min_cm = COALESCE(?, height_min_cm),
                height_max_cm = COALESCE(?, height_max_cm),
                weight_min_kg = COALESCE(?, weight_min_kg),
                weight_max_kg = COALESCE(?, weight_max_kg),
                description   = COALESCE(?, description),
                image_url     = CASE WHEN ? THEN ? ELSE image_url END,
                updated_at    = ?
            WHERE id = ?
            RETURNING {BREED_COLUMNS}
            "#
        ))
        .bind(&patch.name)
        .bind(&patch.breed_group)
        .bind(&patch.temperament)
        .bind(&patch.life_span)
        .bind(patch.height_cm.min)
        .bind(patch.height_cm.max)
        .bind(patch.weight_kg.min)
        .bind(patch.weight_kg.max)
        .bind(&patch.description)
        .bind(set_image)
        .bind(image_url)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DbError::from_write(e, patch.name.as_deref().unwrap_or_default()))?;

        Ok(row.map(Breed::from))
    }

    /// `true` when a breed with this id existed and was removed
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM dog_breeds WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring match on name, group or temperament.
    ///
    /// `%`, `_` and `\` in `query` match themselves.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> DbResult<Vec<Breed>> {
        let pattern = format!("%{}%", escape_like(query));

        let rows: Vec<BreedRow> = sqlx::query_as(&format!(
            r#"
            SELECT {BREED_COLUMNS} FROM dog_breeds
            WHERE name LIKE ?1 ESCAPE '\'
               OR breed_group LIKE ?1 ESCAPE '\'
               OR temperament LIKE ?1 ESCAPE '\'
            ORDER BY name
            "#
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Breed::from).collect())
    }

    pub async fn count(&self) -> DbResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dog_breeds")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Remove every breed, returning how many were removed.
    ///
    /// The id counter keeps counting; see [`BreedStore::reset_id_sequence`].
    #[tracing::instrument(skip(self))]
    pub async fn clear(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM dog_breeds")
            .execute(&self.pool)
            .await?;

        tracing::info!(removed = result.rows_affected(), "Breed table cleared");
        Ok(result.rows_affected())
    }

    /// Restart id assignment at 1. Only meaningful on an empty table.
    pub async fn reset_id_sequence(&self) -> DbResult<()> {
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'dog_breeds'")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert the starter breeds, skipping names that already exist
    #[tracing::instrument(skip(self))]
    pub async fn seed(&self) -> DbResult<u64> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for breed in seed::starter_breeds() {
            let result = sqlx::query(
                r#"
                INSERT INTO dog_breeds (
                    name, breed_group, temperament, life_span,
                    height_min_cm, height_max_cm, weight_min_kg, weight_max_kg,
                    description, image_url, created_at, updated_at
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(name) DO NOTHING
                "#,
            )
            .bind(&breed.name)
            .bind(&breed.breed_group)
            .bind(&breed.temperament)
            .bind(&breed.life_span)
            .bind(breed.height_cm.min)
            .bind(breed.height_cm.max)
            .bind(breed.weight_kg.min)
            .bind(breed.weight_kg.max)
            .bind(&breed.description)
            .bind(&breed.image_url)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;

        tracing::info!(inserted, "Starter breeds seeded");
        Ok(inserted)
    }

    /// Seed only when the table is empty. Returns whether it seeded.
    pub async fn seed_if_empty(&self) -> DbResult<bool> {
        if self.count().await? > 0 {
            tracing::debug!("Breed table already populated, skipping seed");
            return Ok(false);
        }

        self.seed().await?;
        Ok(true)
    }
}

fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

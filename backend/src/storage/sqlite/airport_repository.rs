use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

use crate::domain::models::airport::Airport;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::AirportStorage;

/// Repository for airport operations
#[derive(Clone)]
pub struct AirportRepository {
    db: DbConnection,
}

impl AirportRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_airport(row: &SqliteRow) -> Result<Airport> {
        let id: String = row.try_get("id")?;
        let date_visited: String = row.try_get("date_visited")?;
        let date_visited = DateTime::parse_from_rfc3339(&date_visited)
            .with_context(|| format!("Stored visit date for airport {} is not RFC 3339", id))?
            .with_timezone(&Utc);

        Ok(Airport {
            city: row.try_get("city")?,
            rating: row.try_get("rating")?,
            date_visited,
            id,
        })
    }
}

#[async_trait]
impl AirportStorage for AirportRepository {
    async fn list_airports(&self) -> Result<Vec<Airport>> {
        let rows = sqlx::query(
            r#"
            SELECT id, city, date_visited, rating
            FROM airports
            ORDER BY ROWID ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_airport).collect()
    }

    async fn get_airport(&self, airport_id: &str) -> Result<Option<Airport>> {
        let row = sqlx::query(
            r#"
            SELECT id, city, date_visited, rating
            FROM airports
            WHERE id = ?
            "#,
        )
        .bind(airport_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_airport).transpose()
    }

    async fn insert_airport(&self, airport: &Airport) -> Result<Airport> {
        sqlx::query(
            r#"
            INSERT INTO airports (id, city, date_visited, rating)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&airport.id)
        .bind(&airport.city)
        .bind(airport.date_visited.to_rfc3339())
        .bind(airport.rating)
        .execute(self.db.pool())
        .await
        .with_context(|| format!("Failed to insert airport {}", airport.id))?;

        debug!("Inserted airport row {}", airport.id);
        Ok(airport.clone())
    }

    async fn update_airport(&self, airport: &Airport) -> Result<Airport> {
        let result = sqlx::query(
            r#"
            UPDATE airports
            SET city = ?, date_visited = ?, rating = ?
            WHERE id = ?
            "#,
        )
        .bind(&airport.city)
        .bind(airport.date_visited.to_rfc3339())
        .bind(airport.rating)
        .bind(&airport.id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            bail!("Airport {} is not stored", airport.id);
        }
        Ok(airport.clone())
    }

    async fn remove_airport(&self, airport_id: &str) -> Result<Option<Airport>> {
        let mut tx = self.db.pool().begin().await?;

        let row = sqlx::query(
            r#"
            SELECT id, city, date_visited, rating
            FROM airports
            WHERE id = ?
            "#,
        )
        .bind(airport_id)
        .fetch_optional(&mut *tx)
        .await?;

        let removed = match row {
            Some(row) => Some(Self::row_to_airport(&row)?),
            None => None,
        };

        if removed.is_some() {
            sqlx::query("DELETE FROM airports WHERE id = ?")
                .bind(airport_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(removed)
    }
}

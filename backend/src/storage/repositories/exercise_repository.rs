use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::Exercise;
use crate::storage::connection::DbConnection;

/// Repository for exercise log entries
#[derive(Clone)]
pub struct ExerciseRepository {
    db: DbConnection,
}

impl ExerciseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Store a new exercise and return its assigned ID
    pub async fn insert_exercise(&self, exercise: &Exercise) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO exercises (date, exercise_type, distance, duration, comments)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(exercise.date)
        .bind(&exercise.exercise_type)
        .bind(&exercise.distance)
        .bind(&exercise.duration)
        .bind(&exercise.comments)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_exercise(&self, id: i64) -> Result<Option<Exercise>> {
        let row = sqlx::query(
            r#"
            SELECT id, date, exercise_type, distance, duration, comments
            FROM exercises
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(exercise_from_row).transpose()
    }

    /// List all exercises, oldest first
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, exercise_type, distance, duration, comments
            FROM exercises
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(exercise_from_row).collect()
    }

    /// Replace a stored exercise. Returns false when the ID is unknown.
    pub async fn update_exercise(&self, exercise: &Exercise) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE exercises
            SET date = ?, exercise_type = ?, distance = ?, duration = ?, comments = ?
            WHERE id = ?
            "#,
        )
        .bind(exercise.date)
        .bind(&exercise.exercise_type)
        .bind(&exercise.distance)
        .bind(&exercise.duration)
        .bind(&exercise.comments)
        .bind(exercise.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_exercise(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn exercise_from_row(row: &SqliteRow) -> Result<Exercise> {
    Ok(Exercise {
        id: row.try_get("id")?,
        date: row.try_get::<DateTime<Utc>, _>("date")?,
        exercise_type: row.try_get("exercise_type")?,
        distance: row.try_get("distance")?,
        duration: row.try_get("duration")?,
        comments: row.try_get("comments")?,
    })
}

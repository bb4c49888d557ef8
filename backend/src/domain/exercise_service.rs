use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Exercise;
use crate::storage::{DbConnection, ExerciseRepository};

/// Service for the exercise log
#[derive(Clone)]
pub struct ExerciseService {
    exercises: ExerciseRepository,
}

impl ExerciseService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            exercises: ExerciseRepository::new(db),
        }
    }

    pub async fn get_exercise(&self, id: i64) -> DomainResult<Exercise> {
        info!("Getting exercise: {}", id);

        self.exercises.get_exercise(id).await?.ok_or_else(|| {
            warn!("Exercise not found: {}", id);
            DomainError::not_found("Exercise", id)
        })
    }

    /// All exercises, oldest first
    pub async fn list_exercises(&self) -> DomainResult<Vec<Exercise>> {
        let exercises = self.exercises.list_exercises().await?;
        info!("Found {} exercises", exercises.len());
        Ok(exercises)
    }

    pub async fn create_exercise(&self, exercise: Exercise) -> DomainResult<Exercise> {
        info!(
            "Creating exercise: {} on {}",
            exercise.exercise_type, exercise.date
        );

        let id = self.exercises.insert_exercise(&exercise).await?;
        let created = self
            .exercises
            .get_exercise(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Exercise", id))?;

        info!("Created exercise with ID {}", id);
        Ok(created)
    }

    /// Replace the stored exercise `id`; the path ID wins over the body
    pub async fn update_exercise(&self, id: i64, mut exercise: Exercise) -> DomainResult<()> {
        info!("Updating exercise: {}", id);
        exercise.id = id;

        if !self.exercises.update_exercise(&exercise).await? {
            warn!("Exercise not found for update: {}", id);
            return Err(DomainError::not_found("Exercise", id));
        }
        Ok(())
    }

    pub async fn delete_exercise(&self, id: i64) -> DomainResult<()> {
        info!("Deleting exercise: {}", id);

        if !self.exercises.delete_exercise(id).await? {
            warn!("Exercise not found for delete: {}", id);
            return Err(DomainError::not_found("Exercise", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    async fn setup_test() -> ExerciseService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ExerciseService::new(db)
    }

    fn exercise(exercise_type: &str, day: u32) -> Exercise {
        Exercise {
            id: 0,
            date: Utc.with_ymd_and_hms(2012, 3, day, 7, 30, 0).unwrap(),
            exercise_type: exercise_type.to_string(),
            distance: "10km".to_string(),
            duration: "50 mins".to_string(),
            comments: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_exercise() {
        let service = setup_test().await;

        let created = service.create_exercise(exercise("run", 1)).await.unwrap();
        assert!(created.id > 0);

        let fetched = service.get_exercise(created.id).await.unwrap();
        assert!(fetched.same_activity(&created));
        assert_eq!(fetched.date, created.date);
    }

    #[tokio::test]
    async fn test_list_exercises_oldest_first() {
        let service = setup_test().await;
        service.create_exercise(exercise("swim", 9)).await.unwrap();
        service.create_exercise(exercise("run", 2)).await.unwrap();

        let types: Vec<String> = service
            .list_exercises()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.exercise_type)
            .collect();
        assert_eq!(types, vec!["run", "swim"]);
    }

    #[tokio::test]
    async fn test_update_exercise() {
        let service = setup_test().await;
        let created = service.create_exercise(exercise("run", 1)).await.unwrap();

        let mut changed = exercise("walk", 3);
        changed.duration = "5 mins".to_string();
        service.update_exercise(created.id, changed.clone()).await.unwrap();

        let stored = service.get_exercise(created.id).await.unwrap();
        assert!(stored.same_activity(&Exercise { id: created.id, ..changed }));
    }

    #[tokio::test]
    async fn test_missing_exercise_is_not_found() {
        let service = setup_test().await;

        assert!(matches!(
            service.get_exercise(3).await.unwrap_err(),
            DomainError::NotFound { entity: "Exercise", id: 3 }
        ));
        assert!(matches!(
            service.update_exercise(3, exercise("run", 1)).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(matches!(
            service.delete_exercise(3).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_exercise() {
        let service = setup_test().await;
        let created = service.create_exercise(exercise("run", 1)).await.unwrap();

        service.delete_exercise(created.id).await.unwrap();
        assert!(service.list_exercises().await.unwrap().is_empty());
    }
}

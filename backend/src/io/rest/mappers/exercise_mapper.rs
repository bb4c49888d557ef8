//! backend/src/io/rest/mappers/exercise_mapper.rs

use shared::{wire_date, Exercise as SharedExercise};

use crate::domain::models::Exercise as DomainExercise;
use crate::domain::{DomainError, DomainResult};

pub struct ExerciseMapper;

impl ExerciseMapper {
    pub fn to_domain(dto: SharedExercise) -> DomainResult<DomainExercise> {
        let date = wire_date::parse_datetime(&dto.date)
            .map_err(|e| DomainError::validation(format!("Invalid date: {}", e)))?;

        Ok(DomainExercise {
            id: dto.id,
            date,
            exercise_type: dto.exercise_type,
            distance: dto.distance,
            duration: dto.duration,
            comments: dto.comments,
        })
    }

    pub fn to_dto(domain: DomainExercise) -> SharedExercise {
        SharedExercise {
            id: domain.id,
            date: wire_date::format_datetime(domain.date),
            exercise_type: domain.exercise_type,
            distance: domain.distance,
            duration: domain.duration,
            comments: domain.comments,
        }
    }
}

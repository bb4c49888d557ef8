pub mod exercise_repository;
pub mod family_repository;
pub mod person_repository;
pub mod seed_repository;

pub use exercise_repository::ExerciseRepository;
pub use family_repository::FamilyRepository;
pub use person_repository::PersonRepository;
pub use seed_repository::SeedRepository;

pub mod exercise_mapper;
pub mod family_mapper;
pub mod node_mapper;
pub mod person_mapper;

pub use exercise_mapper::ExerciseMapper;
pub use family_mapper::FamilyMapper;
pub use node_mapper::NodeMapper;
pub use person_mapper::PersonMapper;

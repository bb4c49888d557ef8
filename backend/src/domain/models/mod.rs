pub mod exercise;
pub mod family;
pub mod person;
pub mod seed;

pub use exercise::Exercise;
pub use family::{Family, FamilyMember};
pub use person::{validate_person, Person, PersonValidationError};
pub use seed::SeedData;

use super::{Family, FamilyMember, Person};

/// A complete set of hierarchy records to load in one go
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub families: Vec<Family>,
    /// Inserted in order with their IDs preserved, so parents must precede children
    pub persons: Vec<Person>,
    pub members: Vec<FamilyMember>,
}

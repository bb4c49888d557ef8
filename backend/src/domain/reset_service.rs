use chrono::NaiveDate;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Family, FamilyMember, Person, SeedData};
use crate::storage::{DbConnection, SeedRepository};

/// Service that puts the person hierarchy back to its demo state
#[derive(Clone)]
pub struct ResetService {
    seeds: SeedRepository,
}

impl ResetService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            seeds: SeedRepository::new(db),
        }
    }

    /// Drop and recreate the hierarchy tables and load [`seed_dataset`].
    /// Calling it repeatedly always yields the same data.
    pub async fn reset(&self) -> DomainResult<()> {
        info!("Resetting people data to the seed dataset");
        self.seeds.reset_people(&seed_dataset()).await?;
        Ok(())
    }
}

fn seed_person(
    id: i64,
    parent: Option<i64>,
    first_name: &str,
    last_name: &str,
    date_of_birth: Option<NaiveDate>,
) -> Person {
    Person {
        id,
        parent,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        has_children: false,
    }
}

/// The fixed demo dataset: a "People" root above two family lines.
pub fn seed_dataset() -> SeedData {
    SeedData {
        families: vec![
            Family { id: 1, name: "Stikova".to_string() },
            Family { id: 2, name: "MacDonald".to_string() },
        ],
        persons: vec![
            seed_person(0, None, "People", "", None),
            seed_person(1, Some(0), "Lenka", "Stikova", NaiveDate::from_ymd_opt(1967, 5, 27)),
            seed_person(2, Some(0), "Gary", "MacDonald", NaiveDate::from_ymd_opt(1967, 5, 27)),
            seed_person(3, Some(1), "Michaela", "MacDonald", NaiveDate::from_ymd_opt(1985, 7, 23)),
            seed_person(4, Some(3), "Arthur", "MacDonald", NaiveDate::from_ymd_opt(2010, 12, 22)),
        ],
        members: vec![
            FamilyMember { family_id: 1, person_id: 1 },
            FamilyMember { family_id: 1, person_id: 3 },
            FamilyMember { family_id: 2, person_id: 2 },
            FamilyMember { family_id: 2, person_id: 3 },
            FamilyMember { family_id: 2, person_id: 4 },
        ],
    }
}

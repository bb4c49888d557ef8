use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Family, Person};
use crate::storage::{DbConnection, FamilyRepository};

/// Read-only view over families and their members
#[derive(Clone)]
pub struct FamilyService {
    families: FamilyRepository,
}

impl FamilyService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            families: FamilyRepository::new(db),
        }
    }

    pub async fn list_families(&self) -> DomainResult<Vec<Family>> {
        let families = self.families.list_families().await?;
        info!("Found {} families", families.len());
        Ok(families)
    }

    /// Members of a family ordered by person ID
    pub async fn members(&self, family_id: i64) -> DomainResult<Vec<Person>> {
        info!("Listing members of family {}", family_id);

        if self.families.get_family(family_id).await?.is_none() {
            warn!("Family not found: {}", family_id);
            return Err(DomainError::not_found("Family", family_id));
        }

        Ok(self.families.list_members(family_id).await?)
    }
}

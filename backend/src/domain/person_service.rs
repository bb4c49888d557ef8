use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{validate_person, Person};
use crate::domain::ServiceOptions;
use crate::storage::{DbConnection, PersonRepository};

/// Service for managing person records
#[derive(Clone)]
pub struct PersonService {
    persons: PersonRepository,
    validate_on_create: bool,
}

impl PersonService {
    pub fn new(db: DbConnection, options: &ServiceOptions) -> Self {
        Self {
            persons: PersonRepository::new(db),
            validate_on_create: options.validate_on_create,
        }
    }

    /// Today's date, used for birthdate validation and age labels
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Get a person by ID
    pub async fn get_person(&self, id: i64) -> DomainResult<Person> {
        info!("Getting person: {}", id);

        match self.persons.get_person(id).await? {
            Some(person) => Ok(person),
            None => {
                warn!("Person not found: {}", id);
                Err(DomainError::not_found("Person", id))
            }
        }
    }

    /// List all persons
    pub async fn list_persons(&self) -> DomainResult<Vec<Person>> {
        let persons = self.persons.list_persons().await?;
        info!("Found {} persons", persons.len());
        Ok(persons)
    }

    /// Create a new person and return it as stored.
    ///
    /// Field rules are only enforced here when `validate_on_create` is set; by default
    /// a person with empty names is accepted and only rejected on a later update.
    /// The parent link is always checked.
    pub async fn create_person(&self, person: Person) -> DomainResult<Person> {
        info!(
            "Creating person: {} (parent {:?})",
            person.full_name(),
            person.parent
        );

        if self.validate_on_create {
            let errors = validate_person(&person, Self::today());
            if !errors.is_empty() {
                return Err(errors.into());
            }
        }
        self.check_parent(None, person.parent).await?;

        let id = self.persons.insert_person(&person).await?;
        let created = self
            .persons
            .get_person(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Person", id))?;

        info!("Created person {} with ID {}", created.full_name(), created.id);
        Ok(created)
    }

    /// Replace the stored record for `id` with `person`.
    /// The ID in the path wins over any ID in the body.
    pub async fn update_person(&self, id: i64, mut person: Person) -> DomainResult<()> {
        info!("Updating person: {}", id);
        person.id = id;

        let errors = validate_person(&person, Self::today());
        if !errors.is_empty() {
            warn!("Rejected update of person {}: {:?}", id, errors);
            return Err(errors.into());
        }

        if !self.persons.person_exists(id).await? {
            return Err(DomainError::not_found("Person", id));
        }
        self.check_parent(Some(id), person.parent).await?;

        if !self.persons.update_person(&person).await? {
            return Err(DomainError::not_found("Person", id));
        }

        info!("Updated person {}", id);
        Ok(())
    }

    /// Delete a person. Persons that are still the parent of someone are kept.
    pub async fn delete_person(&self, id: i64) -> DomainResult<()> {
        info!("Deleting person: {}", id);

        if !self.persons.person_exists(id).await? {
            return Err(DomainError::not_found("Person", id));
        }

        let children = self.persons.count_children(id).await?;
        if children > 0 {
            warn!("Refusing to delete person {} with {} children", id, children);
            return Err(DomainError::Conflict(format!(
                "Person {} still has {} children",
                id, children
            )));
        }

        if !self.persons.delete_person(id).await? {
            return Err(DomainError::not_found("Person", id));
        }

        info!("Deleted person {}", id);
        Ok(())
    }

    /// The parent must exist and must not be the person itself or one of its descendants.
    async fn check_parent(&self, id: Option<i64>, parent: Option<i64>) -> DomainResult<()> {
        let Some(parent_id) = parent else {
            return Ok(());
        };

        if id == Some(parent_id) {
            return Err(DomainError::validation("A person cannot be their own parent"));
        }

        if !self.persons.person_exists(parent_id).await? {
            return Err(DomainError::validation(format!(
                "Parent person {} does not exist",
                parent_id
            )));
        }

        if let Some(id) = id {
            let mut visited = HashSet::new();
            let mut ancestor = Some(parent_id);
            while let Some(current) = ancestor {
                if current == id {
                    return Err(DomainError::validation(format!(
                        "Person {} cannot be placed below its own descendant {}",
                        id, parent_id
                    )));
                }
                if !visited.insert(current) {
                    break;
                }
                ancestor = self.persons.parent_of(current).await?;
            }
        }

        Ok(())
    }
}

use tracing::{debug, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Person;
use crate::domain::ServiceOptions;
use crate::storage::{DbConnection, PersonRepository};

/// Lazy access to the person hierarchy, one level at a time
#[derive(Clone)]
pub struct NodeService {
    persons: PersonRepository,
    link_prefix: String,
}

impl NodeService {
    pub fn new(db: DbConnection, options: &ServiceOptions) -> Self {
        Self {
            persons: PersonRepository::new(db),
            link_prefix: options.node_link_prefix.clone(),
        }
    }

    /// Path prefix used to build each node's link
    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }

    /// Interpret the parent ID sent by a client.
    ///
    /// Missing, empty and whitespace-only values all mean "top level".
    pub fn parse_parent(raw: Option<&str>) -> DomainResult<Option<i64>> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        raw.parse::<i64>()
            .map(Some)
            .map_err(|_| DomainError::validation(format!("Invalid parent id '{}'", raw)))
    }

    /// Direct children of `parent` (top-level persons for `None`), ordered by ID,
    /// each flagged with whether it has children of its own.
    ///
    /// An unknown parent simply has no children.
    pub async fn children(&self, parent: Option<i64>) -> DomainResult<Vec<Person>> {
        let mut children = self.persons.list_children(parent).await?;

        for child in children.iter_mut() {
            child.has_children = self.persons.count_children(child.id).await? > 0;
        }

        debug!(
            "Children of {:?}: {:?}",
            parent,
            children.iter().map(|c| c.id).collect::<Vec<_>>()
        );
        info!("Found {} children for parent {:?}", children.len(), parent);
        Ok(children)
    }

    /// [`parse_parent`](Self::parse_parent) followed by [`children`](Self::children)
    pub async fn children_of(&self, raw: Option<&str>) -> DomainResult<Vec<Person>> {
        let parent = Self::parse_parent(raw)?;
        self.children(parent).await
    }
}

//! backend/src/io/rest/mappers/node_mapper.rs

use shared::{Node, NodesResponse};

use crate::domain::models::Person;

/// Maps persons onto tree nodes. Nodes only exist on the wire.
pub struct NodeMapper;

impl NodeMapper {
    pub fn from_person(person: &Person, link_prefix: &str) -> Node {
        Node {
            id: person.id.to_string(),
            label: person.full_name(),
            link: format!("{}/{}", link_prefix.trim_end_matches('/'), person.id),
            has_children: person.has_children,
        }
    }

    pub fn to_response(persons: &[Person], link_prefix: &str) -> NodesResponse {
        NodesResponse {
            result: persons
                .iter()
                .map(|p| Self::from_person(p, link_prefix))
                .collect(),
        }
    }
}

use serde::{Deserialize, Serialize};

pub mod wire_date;

/// A person record as it travels over the wire.
///
/// Field names are PascalCase so that
/// existing clients keep working. Dates are carried as strings and parsed by the
/// backend mappers with [`wire_date`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    /// Server-assigned identifier; ignored on create
    #[serde(default)]
    pub id: i64,
    /// Identifier of the parent person, `None` for a root
    #[serde(default)]
    pub parent: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// ISO-8601 date (`YYYY-MM-DD`); the legacy `/Date(ms)/` envelope is accepted on input
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Derived at query time, never persisted
    #[serde(rename = "hasChildren", default)]
    pub has_children: bool,
}

/// Response for a single person: the record plus its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonResponse {
    pub person: Person,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonsResponse {
    pub persons: Vec<Person>,
}

/// A lazily-expandable tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "hasChildren", default)]
    pub has_children: bool,
}

/// Body of `POST /nodes`. An empty or missing `Id` selects the root level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodesRequest {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
}

impl NodesRequest {
    pub fn root() -> Self {
        Self { id: Some(String::new()) }
    }

    pub fn for_parent(parent_id: impl Into<String>) -> Self {
        Self { id: Some(parent_id.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodesResponse {
    #[serde(rename = "Result")]
    pub result: Vec<Node>,
}

/// An exercise log entry. Field names are lower-case, as existing exercise
/// clients expect.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, alias = "Id")]
    pub id: i64,
    /// RFC 3339 timestamp; the legacy `/Date(ms)/` envelope is accepted on input
    #[serde(default)]
    pub date: String,
    #[serde(rename = "type", default)]
    pub exercise_type: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Family {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FamiliesResponse {
    pub families: Vec<Family>,
}

/// Empty success object returned by `GET /reset-people`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResetResponse {}

/// Error details returned with every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    pub error_code: String,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub response_status: ResponseStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_request_wire_shape() {
        let json = serde_json::to_string(&NodesRequest::for_parent("3")).unwrap();
        assert_eq!(json, r#"{"Id":"3"}"#);

        let parsed: NodesRequest = serde_json::from_str(r#"{"Id": ""}"#).unwrap();
        assert_eq!(parsed.id.as_deref(), Some(""));

        let missing: NodesRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.id.is_none());
    }

    #[test]
    fn test_nodes_response_uses_result_envelope() {
        let response = NodesResponse {
            result: vec![Node {
                id: "1".to_string(),
                label: "Lenka Stikova".to_string(),
                link: "/person/1".to_string(),
                has_children: true,
            }],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["Result"][0]["Id"], "1");
        assert_eq!(value["Result"][0]["Label"], "Lenka Stikova");
        assert_eq!(value["Result"][0]["hasChildren"], true);
    }

    #[test]
    fn test_person_accepts_partial_body() {
        let person: Person =
            serde_json::from_str(r#"{"FirstName": "Arthur", "LastName": "MacDonald"}"#).unwrap();
        assert_eq!(person.id, 0);
        assert_eq!(person.parent, None);
        assert_eq!(person.first_name, "Arthur");
        assert!(person.date_of_birth.is_none());
        assert!(!person.has_children);
    }

    #[test]
    fn test_exercise_type_field_name() {
        let exercise: Exercise = serde_json::from_str(
            r#"{"Id": 4, "date": "2012-03-01T10:00:00Z", "type": "run", "distance": "10km"}"#,
        )
        .unwrap();
        assert_eq!(exercise.id, 4);
        assert_eq!(exercise.exercise_type, "run");
        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["type"], "run");
        assert_eq!(value["id"], 4);
    }
}

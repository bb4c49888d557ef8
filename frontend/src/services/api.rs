use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, Exercise, NodesRequest, NodesResponse, Person, PersonResponse};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client that talks to the server the page was loaded from
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Children of the node in `request`; the root sentinel asks for the top level
    pub async fn fetch_nodes(&self, request: &NodesRequest) -> Result<NodesResponse, String> {
        let url = self.url("/nodes");

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get a person with its display label
    pub async fn get_person(&self, link: &str) -> Result<PersonResponse, String> {
        let url = self.url(link);

        match Request::get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Failed to fetch person: {}", e)),
        }
    }

    /// Create a person; the server assigns the ID
    pub async fn create_person(&self, person: &Person) -> Result<PersonResponse, String> {
        let url = self.url("/person");

        match Request::post(&url)
            .json(person)
            .map_err(|e| format!("Failed to serialize person: {}", e))?
            .send()
            .await
        {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn update_person(&self, id: i64, person: &Person) -> Result<(), String> {
        let url = self.url(&format!("/person/{}", id));

        match Request::put(&url)
            .json(person)
            .map_err(|e| format!("Failed to serialize person: {}", e))?
            .send()
            .await
        {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn delete_person(&self, id: i64) -> Result<(), String> {
        let url = self.url(&format!("/person/{}", id));

        match Request::delete(&url).send().await {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// The exercise log, oldest first
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>, String> {
        let url = self.url("/exercise");

        match Request::get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Restore the demo dataset
    pub async fn reset_people(&self) -> Result<(), String> {
        let url = self.url("/reset-people");

        match Request::get(&url).send().await {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

async fn expect_success(response: Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Prefer the server's `ResponseStatus` message, fall back to the HTTP status
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => describe_error(&body),
        Err(_) => format!("Request failed with status {}", status),
    }
}

fn describe_error(body: &ErrorResponse) -> String {
    let status = &body.response_status;
    if status.errors.is_empty() {
        status.message.clone()
    } else {
        format!("{}: {}", status.message, status.errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ResponseStatus;

    fn body(message: &str, errors: &[&str]) -> ErrorResponse {
        ErrorResponse {
            response_status: ResponseStatus {
                error_code: "ValidationException".to_string(),
                message: message.to_string(),
                errors: errors.iter().map(|e| e.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_urls_are_relative_by_default() {
        assert_eq!(ApiClient::new().url("/nodes"), "/nodes");
        assert_eq!(
            ApiClient { base_url: "http://localhost:3000/".to_string() }.url("/person/3"),
            "http://localhost:3000/person/3"
        );
    }

    #[test]
    fn test_describe_error() {
        assert_eq!(describe_error(&body("Person 9 not found", &[])), "Person 9 not found");
        assert_eq!(
            describe_error(&body("Validation failed", &["Invalid parent id 'x'"])),
            "Validation failed: Invalid parent id 'x'"
        );
    }
}

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_types::{ApiConfig, AppError, Queue, User, UserListResponse};

use super::ReferenceDataClient;

pub const QUEUES_PATH: &str = "/queue";
pub const USERS_PATH: &str = "/users";

/// `ReferenceDataClient` backed by the REST API.
#[derive(Clone)]
pub struct HttpReferenceDataClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpReferenceDataClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[tracing::instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::unavailable(format!("Request to {path} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_status(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "Backend rejected request");
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::unavailable(format!("Malformed response from {path}: {e}")))
    }
}

#[async_trait(?Send)]
impl ReferenceDataClient for HttpReferenceDataClient {
    async fn list_queues(&self) -> Result<Vec<Queue>, AppError> {
        self.get_json(QUEUES_PATH).await
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let body: UserListResponse = self.get_json(USERS_PATH).await?;
        Ok(body.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str, token: Option<&str>) -> HttpReferenceDataClient {
        HttpReferenceDataClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            token: token.map(str::to_string),
        })
    }

    #[test]
    fn url_joins_without_double_slash() {
        let c = client("http://api.local/", None);
        assert_eq!(c.url(QUEUES_PATH), "http://api.local/queue");
        assert_eq!(c.url("users"), "http://api.local/users");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let c = client("https://host/backend/v1", None);
        assert_eq!(c.url(USERS_PATH), "https://host/backend/v1/users");
    }

    #[test]
    fn empty_token_is_dropped() {
        assert!(client("http://x", Some("")).token.is_none());
        assert_eq!(client("http://x", Some("abc")).token.as_deref(), Some("abc"));
    }
}

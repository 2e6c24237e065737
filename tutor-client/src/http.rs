//! HTTP client for network-based API calls
//!
//! Authentication is session-cookie based: the login endpoint sets the
//! session and CSRF cookies, the cookie store replays them, and every
//! mutating request carries the CSRF token back in the `X-CSRFToken`
//! header. The token is cached from the most recent response that set it.

use std::sync::{Arc, RwLock};

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    csrf_token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            csrf_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Absolute URL for an API path
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Cache the CSRF token whenever the server rotates it
    fn remember_csrf(&self, response: &Response) {
        for cookie in response.cookies() {
            if cookie.name() == CSRF_COOKIE {
                if let Ok(mut token) = self.csrf_token.write() {
                    *token = Some(cookie.value().to_string());
                }
            }
        }
    }

    fn csrf_header(&self) -> Option<String> {
        self.csrf_token.read().ok()?.clone()
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        self.remember_csrf(&response);
        Self::handle_response(response).await
    }

    /// Attach the CSRF header to a mutating request
    fn with_csrf(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.csrf_header() {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.client.get(self.endpoint_url(path))).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        self.execute(self.client.get(self.endpoint_url(path)).query(query))
            .await
    }

    /// Make a GET request for a binary body (PDF download)
    pub async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let response = self.client.get(self.endpoint_url(path)).send().await?;
        self.remember_csrf(&response);

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.with_csrf(self.client.post(self.endpoint_url(path)).json(body));
        self.execute(request).await
    }

    /// Make a POST request with JSON body, returning the raw response
    /// bytes (PDF preview)
    pub async fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Vec<u8>> {
        let request = self.with_csrf(self.client.post(self.endpoint_url(path)).json(body));
        let response = request.send().await?;
        self.remember_csrf(&response);

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.with_csrf(self.client.post(self.endpoint_url(path)));
        self.execute(request).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.with_csrf(self.client.put(self.endpoint_url(path)).json(body));
        self.execute(request).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.with_csrf(self.client.patch(self.endpoint_url(path)).json(body));
        self.execute(request).await
    }

    /// Make a DELETE request (204 on success)
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.with_csrf(self.client.delete(self.endpoint_url(path)));
        let response = request.send().await?;
        self.remember_csrf(&response);

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(Self::error_for(status, text));
        }

        response.json().await.map_err(Into::into)
    }

    fn error_for(status: StatusCode, text: String) -> ClientError {
        tracing::warn!(%status, body = %text, "request failed");
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_normalizes_slashes() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8000/"));
        assert_eq!(
            client.endpoint_url("/api/students/"),
            "http://localhost:8000/api/students/"
        );
        assert_eq!(
            client.endpoint_url("api/todos/"),
            "http://localhost:8000/api/todos/"
        );
    }

    #[test]
    fn error_mapping_covers_api_statuses() {
        assert!(matches!(
            HttpClient::error_for(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            HttpClient::error_for(StatusCode::BAD_REQUEST, String::new()),
            ClientError::Validation(_)
        ));
        assert!(matches!(
            HttpClient::error_for(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ClientError::Internal(_)
        ));
    }
}

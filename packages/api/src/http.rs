//! # HTTP implementation of [`UserService`]
//!
//! [`HttpUserService`] talks JSON to a JSONPlaceholder-compatible endpoint using a
//! shared `reqwest::Client`. It is cheap to clone and is what the UI puts in context.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list_users`](UserService::list_users) | `GET {base}/users` |
//! | [`create_user`](UserService::create_user) | `POST {base}/users` with the user as body, response body ignored |
//! | [`update_user`](UserService::update_user) | `PUT {base}/users/{id}` with the user as body, response body ignored |
//! | [`delete_user`](UserService::delete_user) | `DELETE {base}/users/{id}`, response body ignored |
//!
//! Any non-2xx status becomes [`ApiError::Status`].

use reqwest::{Client, RequestBuilder, Response};
use store::config::ApiConfig;
use store::User;

use crate::{ApiError, UserService};

#[derive(Clone, Debug)]
pub struct HttpUserService {
    client: Client,
    base_url: String,
}

/// Services targeting the same base URL are interchangeable. The timeout is not
/// compared.
impl PartialEq for HttpUserService {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpUserService {
    /// Build a client for the configured service.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let builder = Client::builder();
        // The browser fetch backend has no client-wide timeout.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    async fn send(
        &self,
        method: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!("{method} {url}");
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                method,
                url,
                status: status.as_u16(),
            })
        }
    }
}

impl UserService for HttpUserService {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        let request = self.client.get(&url);
        Ok(self.send("GET", url, request).await?.json().await?)
    }

    async fn create_user(&self, user: &User) -> Result<(), ApiError> {
        let url = self.users_url();
        let request = self.client.post(&url).json(user);
        self.send("POST", url, request).await?;
        Ok(())
    }

    async fn update_user(&self, id: i64, user: &User) -> Result<(), ApiError> {
        let url = self.user_url(id);
        let request = self.client.put(&url).json(user);
        self.send("PUT", url, request).await?;
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let url = self.user_url(id);
        let request = self.client.delete(&url);
        self.send("DELETE", url, request).await?;
        Ok(())
    }
}

//! HTTP client for the rideshare backend
//!
//! Registration talks to the backend through [`RegistrationBackend`], so the
//! pipeline can run against the browser `fetch` transport, the server-side
//! `reqwest` transport, or a recording fake in tests.

use serde::{Deserialize, Serialize};

use super::config::Config;
use super::payload::{AddressPayload, PaymentPayload, UserPayload};

pub const USER_CREATE_PATH: &str = "user/create";
pub const ADDRESS_CREATE_PATH: &str = "address/create/";
pub const PAYMENT_CREATE_PATH: &str = "payment/create/";

/// Header carrying the session token on authenticated calls
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Backend call failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with an `{error}` body
    #[error("{0}")]
    Rejected(String),
    /// Non-success status without a readable error body
    #[error("Request failed with status {0}")]
    Status(u16),
    /// The request never got a response
    #[error("Network error: {0}")]
    Transport(String),
    /// The response body had an unexpected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// User created by `user/create`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: String,
    pub token: String,
}

/// Address created by `address/create/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAddress {
    pub id: String,
}

/// Raw status and body of a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserResponse {
    Rejected {
        error: String,
    },
    Created {
        token: String,
        #[serde(rename = "_id")]
        id: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AddressResponse {
    Rejected {
        error: String,
    },
    Created {
        #[serde(rename = "_id")]
        id: String,
    },
}

/// Interpret the response of `user/create`
pub fn parse_user_response(response: &RawResponse) -> Result<CreatedUser, ApiError> {
    match serde_json::from_str::<UserResponse>(&response.body) {
        Ok(UserResponse::Rejected { error }) => Err(ApiError::Rejected(error)),
        Ok(UserResponse::Created { token, id }) if response.is_success() => {
            Ok(CreatedUser { id, token })
        }
        Ok(UserResponse::Created { .. }) => Err(ApiError::Status(response.status)),
        Err(_) if !response.is_success() => Err(ApiError::Status(response.status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Interpret the response of `address/create/`
pub fn parse_address_response(response: &RawResponse) -> Result<CreatedAddress, ApiError> {
    match serde_json::from_str::<AddressResponse>(&response.body) {
        Ok(AddressResponse::Rejected { error }) => Err(ApiError::Rejected(error)),
        Ok(AddressResponse::Created { id }) if response.is_success() => Ok(CreatedAddress { id }),
        Ok(AddressResponse::Created { .. }) => Err(ApiError::Status(response.status)),
        Err(_) if !response.is_success() => Err(ApiError::Status(response.status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Interpret the response of `payment/create/`; the body is not inspected
pub fn check_payment_response(response: &RawResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status))
    }
}

/// Backend operations used by registration
#[allow(async_fn_in_trait)]
pub trait RegistrationBackend {
    async fn create_user(&self, user: &UserPayload) -> Result<CreatedUser, ApiError>;

    async fn create_address(
        &self,
        token: &str,
        address: &AddressPayload,
    ) -> Result<CreatedAddress, ApiError>;

    async fn create_payment(&self, token: &str, payment: &PaymentPayload) -> Result<(), ApiError>;
}

/// JSON-over-HTTP backend client
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Config,
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// POST a JSON body through the browser `fetch` API
    #[cfg(not(feature = "ssr"))]
    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;

        let mut request =
            Request::post(&self.config.endpoint(path)).header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = request
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(RawResponse { status, body })
    }

    /// POST a JSON body from the server
    #[cfg(feature = "ssr")]
    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<RawResponse, ApiError> {
        let mut request = self.client.post(self.config.endpoint(path)).json(body);
        if let Some(token) = token {
            request = request.header(ACCESS_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!("POST {} -> {}", path, status);

        Ok(RawResponse { status, body })
    }
}

impl RegistrationBackend for HttpBackend {
    async fn create_user(&self, user: &UserPayload) -> Result<CreatedUser, ApiError> {
        let response = self.post_json(USER_CREATE_PATH, None, user).await?;
        parse_user_response(&response)
    }

    async fn create_address(
        &self,
        token: &str,
        address: &AddressPayload,
    ) -> Result<CreatedAddress, ApiError> {
        let response = self
            .post_json(ADDRESS_CREATE_PATH, Some(token), address)
            .await?;
        parse_address_response(&response)
    }

    async fn create_payment(&self, token: &str, payment: &PaymentPayload) -> Result<(), ApiError> {
        let response = self
            .post_json(PAYMENT_CREATE_PATH, Some(token), payment)
            .await?;
        check_payment_response(&response)
    }
}

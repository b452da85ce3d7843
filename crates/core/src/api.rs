//! HTTP client for the storefront API

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::bundle::Bundle;
use crate::catalog::{CatalogItem, CatalogSource};
use crate::config::StorefrontConfig;
use crate::content::{ContentSource, ContentView};
use crate::entitlement::EntitlementSource;
use crate::error::{FetchError, SubmitError};
use crate::session::{AuthResponse, Session, User};

/// Client for every storefront endpoint.
///
/// One instance per process, cheap to share behind an `Arc`. Every call
/// carries the configured timeout and maps non-success statuses onto
/// [`FetchError`] (401 → `AuthExpired`).
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    id_token: &'a str,
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Body for `POST /metaphor-suggestions`.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub email: String,
    pub suggestion: String,
    pub reason: String,
}

/// Result of a first-party purchase: the ids now granted to the user.
///
/// Granted ids are informational only; ownership is re-read from the server
/// through a full entitlement refresh, never patched in from here.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseReceipt {
    #[serde(default)]
    pub granted_items: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ApiClient {
    pub fn new(config: &StorefrontConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&Session>,
    ) -> Result<T, FetchError> {
        let mut request = self.http.get(self.url(path));
        if let Some(session) = session {
            request = request.bearer_auth(&session.token);
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::from_status(resp.status().as_u16()));
        }
        resp.json().await.map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// `GET /catalog`
    pub async fn catalog(&self) -> Result<Vec<CatalogItem>, FetchError> {
        self.get_json("/catalog", None).await
    }

    /// `GET /bundles`
    pub async fn bundles(&self) -> Result<Vec<Bundle>, FetchError> {
        self.get_json("/bundles", None).await
    }

    /// `GET /user/purchases`
    pub async fn purchases(&self, session: &Session) -> Result<Vec<String>, FetchError> {
        self.get_json("/user/purchases", Some(session)).await
    }

    /// `GET /catalog/{id}/content`
    pub async fn content(
        &self,
        id: &str,
        session: Option<&Session>,
    ) -> Result<ContentView, FetchError> {
        self.get_json(&format!("/catalog/{id}/content"), session).await
    }

    /// `POST /auth/{provider}` — exchanges a provider identity token for a
    /// session.
    pub async fn sign_in(&self, provider: &str, id_token: &str) -> Result<AuthResponse, FetchError> {
        let resp = self
            .http
            .post(self.url(&format!("/auth/{provider}")))
            .json(&SignInRequest { id_token })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(FetchError::from_status(resp.status().as_u16()));
        }
        resp.json().await.map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// `GET /auth/me`
    pub async fn me(&self, session: &Session) -> Result<User, FetchError> {
        self.get_json("/auth/me", Some(session)).await
    }

    /// `POST /auth/logout` — best-effort; callers ignore the result.
    pub async fn logout(&self, session: &Session) -> Result<(), FetchError> {
        let resp = self
            .http
            .post(self.url("/auth/logout"))
            .bearer_auth(&session.token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(FetchError::from_status(resp.status().as_u16()));
        }
        Ok(())
    }

    /// `POST /purchase/{id}`
    pub async fn purchase_item(
        &self,
        id: &str,
        session: &Session,
    ) -> Result<PurchaseReceipt, SubmitError> {
        self.post_purchase(&format!("/purchase/{id}"), session).await
    }

    /// `POST /purchase/bundle/{id}`
    pub async fn purchase_bundle(
        &self,
        id: &str,
        session: &Session,
    ) -> Result<PurchaseReceipt, SubmitError> {
        self.post_purchase(&format!("/purchase/bundle/{id}"), session).await
    }

    async fn post_purchase(
        &self,
        path: &str,
        session: &Session,
    ) -> Result<PurchaseReceipt, SubmitError> {
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(&session.token)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = resp.status();
        if status.is_success() {
            return resp
                .json()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()).into());
        }
        if status.as_u16() == 401 {
            return Err(FetchError::AuthExpired.into());
        }

        // Rejection payloads carry `{error}`; surface the message verbatim.
        match resp.json::<ErrorResponse>().await {
            Ok(body) => Err(SubmitError::Rejected(body.error)),
            Err(_) => Err(FetchError::Status(status.as_u16()).into()),
        }
    }

    /// `POST /metaphor-suggestions`
    pub async fn suggest(&self, suggestion: &Suggestion) -> Result<(), SubmitError> {
        self.post_submit("/metaphor-suggestions", suggestion).await
    }

    /// `POST /subscribe` — newsletter signup.
    pub async fn subscribe(&self, email: &str) -> Result<(), SubmitError> {
        self.post_submit("/subscribe", &SubscribeRequest { email }).await
    }

    async fn post_submit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), SubmitError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        match resp.json::<ErrorResponse>().await {
            Ok(body) => Err(SubmitError::Rejected(body.error)),
            Err(_) => Err(FetchError::Status(status.as_u16()).into()),
        }
    }
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, FetchError> {
        self.catalog().await
    }
}

#[async_trait]
impl EntitlementSource for ApiClient {
    async fn fetch_owned(&self, session: &Session) -> Result<Vec<String>, FetchError> {
        self.purchases(session).await
    }
}

#[async_trait]
impl ContentSource for ApiClient {
    async fn fetch_content(
        &self,
        id: &str,
        session: Option<&Session>,
    ) -> Result<ContentView, FetchError> {
        self.content(id, session).await
    }
}

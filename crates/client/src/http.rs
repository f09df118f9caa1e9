//! `reqwest`-backed implementation of the backend contracts.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use solobill_catalog::{CatalogItem, ItemCreated, ItemDraft};
use solobill_core::{ItemId, SaleId};
use solobill_sales::{CommittedSale, SaleCreated, SaleDetails, SalePayload};

use crate::api::{ItemCatalogApi, SalesApi};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for `/api/items` and `/api/sales`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        tracing::debug!(status = status.as_u16(), url = %resp.url(), "response received");

        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        tracing::warn!(status = status.as_u16(), %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.send(self.request(Method::GET, path)).await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Prefer the server's `{"error": ...}` body, then any raw body, then the
/// status reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[async_trait]
impl ItemCatalogApi for HttpBackend {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, ClientError> {
        self.get_json("/api/items").await
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<ItemCreated, ClientError> {
        let resp = self
            .send(self.request(Method::POST, "/api/items").json(draft))
            .await?;
        read_json(resp).await
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> Result<(), ClientError> {
        self.send(
            self.request(Method::PUT, &format!("/api/items/{id}"))
                .json(draft),
        )
        .await?;
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, &format!("/api/items/{id}")))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SalesApi for HttpBackend {
    async fn list_sales(&self) -> Result<Vec<CommittedSale>, ClientError> {
        self.get_json("/api/sales").await
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError> {
        let resp = self
            .send(self.request(Method::POST, "/api/sales").json(payload))
            .await?;
        read_json(resp).await
    }

    async fn sale_details(&self, id: SaleId) -> Result<SaleDetails, ClientError> {
        self.get_json(&format!("/api/sales/{id}")).await
    }

    async fn delete_sale(&self, id: SaleId) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, &format!("/api/sales/{id}")))
            .await?;
        Ok(())
    }
}

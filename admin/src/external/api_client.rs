//! HTTP client for the inventory backend
//!
//! Thin request shaping over reqwest: no retries, no caching. Non-success
//! statuses become `ClientError::Http` with the response body attached.

use std::time::Duration;

use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

/// Inventory backend API client
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    pub(crate) products_path: String,
    pub(crate) suppliers_path: String,
}

impl ApiClient {
    /// Create a client with default endpoint paths
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::from_config(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Create a client from the API configuration
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            products_path: config.products_path.clone(),
            suppliers_path: config.suppliers_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.client.get(self.url(path)), Method::GET, path).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send `body` as JSON, ignoring whatever the backend answers
    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let request = self.client.request(method.clone(), self.url(path)).json(body);
        self.send(request, method, path).await?;
        Ok(())
    }

    /// DELETE `path`
    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(self.client.delete(self.url(path)), Method::DELETE, path)
            .await?;
        Ok(())
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        method: Method,
        path: &str,
    ) -> ClientResult<Response> {
        tracing::debug!(%method, path, "backend request");

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, path, status = status.as_u16(), "backend request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

fn normalize_base_url(base_url: &str) -> ClientResult<String> {
    let parsed =
        Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(base_url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(
            client.url("/admin/ofertas/3"),
            "http://localhost:8080/api/admin/ofertas/3"
        );
    }

    #[test]
    fn test_rejects_invalid_base_urls() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("ftp://files.example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_from_config_keeps_catalog_paths() {
        let config = ApiConfig {
            base_url: "https://inventario.example.com".to_string(),
            timeout_secs: Some(5),
            products_path: "/v2/productos".to_string(),
            suppliers_path: "/v2/proveedores".to_string(),
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.products_path, "/v2/productos");
        assert_eq!(client.suppliers_path, "/v2/proveedores");
    }
}

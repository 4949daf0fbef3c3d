mod error;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::models::Product;

pub use error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the views get their products from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError>;

    async fn fetch_product(&self, slug: &str) -> Result<Product, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        missing: impl FnOnce() -> ClientError,
    ) -> Result<T, ClientError> {
        tracing::debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(missing());
        }

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProductSource for ApiClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.endpoint(&["products"])?;
        self.get_json(url, || ClientError::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            url: self.base_url.to_string(),
        })
        .await
    }

    async fn fetch_product(&self, slug: &str) -> Result<Product, ClientError> {
        let url = self.endpoint(&["products", "slug", slug])?;
        self.get_json(url, || ClientError::NotFound(slug.to_string()))
            .await
    }
}
